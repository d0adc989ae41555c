use color::DynamicColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::FretmarkError;

/// Wrapper around the `DynamicColor` type from the color crate.
/// This provides convenience methods for working with colors in fretmark.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, FretmarkError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(FretmarkError::InvalidColor {
                value: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Returns the alpha component in the `0.0..=1.0` range.
    pub fn alpha(self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("valid color")
    }
}

impl FromStr for Color {
    type Err = FretmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// For compatibility with code that handles colors as strings
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

/// Serialized as the CSS string form, so styling definitions stay readable
/// in configuration files.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::new(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_round_trips() {
        let color = Color::new("white").unwrap();
        assert_eq!(color.to_string(), "white");
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_opaque_alpha() {
        let color = Color::new("black").unwrap();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = Color::new("not-a-color");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid color `not-a-color`")
        );
    }

    #[test]
    fn test_serde_string_form() {
        let color = Color::new("white").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"white\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_serde_rejects_invalid_color() {
        let result: Result<Color, _> = serde_json::from_str("\"no-such-color\"");
        assert!(result.is_err());
    }
}
