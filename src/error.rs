use thiserror::Error;

/// Errors raised while building element styling from user-supplied values.
///
/// Rendering itself is infallible: every fallible conversion (color strings,
/// alignment keywords, font weights) happens when a value is parsed, never
/// inside `render_to_svg`.
#[derive(Debug, Error)]
pub enum FretmarkError {
    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid text anchor `{0}`, valid values: start, middle, end")]
    InvalidTextAnchor(String),

    #[error("invalid font weight `{0}`, valid values: normal, bold")]
    InvalidFontWeight(String),
}
