//! # Option Merging
//!
//! Every chart and styling component exposes two forms: a *partial* options
//! struct whose leaves are `Option<T>` (`None` = unset, usable from Rust and
//! JSON alike) and a *resolved* struct with concrete fields. Merging overlays
//! the partial onto a fully-populated default:
//!
//! - an unset leaf takes the default's value;
//! - a set leaf keeps the caller's value;
//! - a nested options struct is merged recursively through its own
//!   [`MergeDefaults`] impl;
//! - lists and nullable leaves are replaced wholesale, never merged.
//!
//! Defaults are borrowed and never mutated, so the same default instance is
//! safely shared across any number of chart constructions.

/// Overlay a partial options value onto a resolved default.
pub trait MergeDefaults: Default {
    /// The fully-populated form produced by the merge.
    type Resolved: Clone;

    /// Consume the partial value and fill every unset field from `defaults`.
    fn merge_defaults(self, defaults: &Self::Resolved) -> Self::Resolved;
}

/// Resolve an optional partial: `None` yields a deep copy of the defaults.
pub fn resolve_or_default<P: MergeDefaults>(
    partial: Option<P>,
    defaults: &P::Resolved,
) -> P::Resolved {
    match partial {
        Some(partial) => partial.merge_defaults(defaults),
        None => defaults.clone(),
    }
}
