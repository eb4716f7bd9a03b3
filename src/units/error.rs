use once_cell::sync::Lazy;
use thiserror::Error;

use crate::units::Unit;

/// Every canonical suffix, space-separated, ascending by power.
pub static VALID_SUFFIXES: Lazy<String> = Lazy::new(|| {
    Unit::ALL
        .iter()
        .map(|u| u.suffix())
        .collect::<Vec<_>>()
        .join(" ")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid suffix '{input}'. Valid suffixes are: {}", VALID_SUFFIXES.as_str())]
pub struct InvalidSuffix {
    pub input: String,
}

impl InvalidSuffix {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
