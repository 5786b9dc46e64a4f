use alloc::string::String;

/// Rejected snap configuration.
///
/// Setters that return this error leave the previous configuration untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gravity code {0}, expected 0..=4 (start | top | end | bottom | center)")]
    InvalidGravity(u8),
    #[error("unknown gravity {0:?}, expected start | top | end | bottom | center")]
    UnknownGravity(String),
    #[error("max fling size fraction must be finite and positive, got {0}")]
    InvalidFlingSizeFraction(f32),
    #[error("scroll ms per inch must be finite and positive, got {0}")]
    InvalidScrollMsPerInch(f32),
}
