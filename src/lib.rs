//! Byte-scale suffix lookup.
//!
//! Resolves a free-form suffix string ("K", "kb", "Gigabytes") to the
//! metric unit it names. Only the first character of the input is
//! significant, and matching is case-insensitive.

pub mod units;

pub use units::{error::InvalidSuffix, scale::Scale, unit::Unit};
