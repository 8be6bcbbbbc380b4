use thiserror::Error;

pub type AnyError = anyhow::Error;

/// A foreground or background color index outside the 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not in [0, 255]")]
pub struct BadColor(pub i64);

impl BadColor {
    pub const CLASS: &'static str = "BadColor";

    /// The rejected value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Checks that `value` is a valid palette index.
#[inline]
pub fn validate_color(value: i64) -> Result<u8, BadColor> {
    u8::try_from(value).map_err(|_| BadColor(value))
}

/// If this error wraps one of the crate's typed errors, return its class
/// name. In all other cases this function returns `None`.
pub fn get_error_class(error: &AnyError) -> Option<&'static str> {
    error.downcast_ref::<BadColor>().map(|_| BadColor::CLASS)
}
