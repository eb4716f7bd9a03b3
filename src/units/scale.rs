/// One step on the byte scale: the exponent applied to the base
/// multiplier (1024 or 1000, the caller's choice) and the canonical
/// display suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    pub power: u32,
    pub suffix: &'static str,
}

impl Scale {
    pub const fn new(power: u32, suffix: &'static str) -> Self {
        Self { power, suffix }
    }
}
