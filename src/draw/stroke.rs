//! Stroke definitions for shape outlines.
//!
//! Every shape-bearing element (notes, barres, fingers) outlines its shape
//! with the same two properties, bundled here so definitions can share them.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"black"`, `1.0` |
//! | `width` | `stroke-width` | `3.0` |

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A stroke definition for shape outlines.
///
/// # Default Values
///
/// - Color: black
/// - Width: 3.0
///
/// # Examples
///
/// ```
/// use fretmark::color::Color;
/// use fretmark::draw::StrokeDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let stroke = StrokeDefinition::new(Color::new("gray")?, 1.5);
/// assert_eq!(stroke.width(), 1.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 3.0,
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// This applies the complete stroke definition, including color, opacity and
/// width, to any SVG element.
///
/// # Examples
///
/// ```
/// use fretmark::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = fretmark::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
