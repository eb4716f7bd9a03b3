pub mod error;
pub mod scale;
pub mod unit;

pub use error::InvalidSuffix;
pub use scale::Scale;
pub use unit::Unit;

pub const B: &str = "B";
pub const KB: &str = "KB";
pub const MB: &str = "MB";
pub const GB: &str = "GB";
pub const TB: &str = "TB";
pub const PB: &str = "PB";
pub const EB: &str = "EB";
pub const ZB: &str = "ZB";
