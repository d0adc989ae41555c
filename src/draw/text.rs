//! Text label rendering for fretboard diagrams.
//!
//! This module provides types for configuring label appearance and rendering
//! free-standing labels (tuning names, fret numbers, open-string markers).
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable label style configuration
//! - [`Text`] - A renderable label combining content with a [`TextDefinition`]
//! - [`TextAnchor`] / [`FontWeight`] - Closed keyword vocabularies mapped to
//!   the `text-anchor` and `font-weight` SVG attributes
//!
//! The other elements (notes, barres, fingers) compose [`Text`] internally
//! for their centered labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svg::{self, node::element as svg_element};

use crate::{color::Color, draw::Drawable, error::FretmarkError, geometry::Point};

/// Vertical baseline shift applied to every label.
///
/// SVG anchors text at its baseline; shifting the baseline down by 0.3 em
/// places the glyphs optically centered on the anchor point.
const BASELINE_SHIFT: &str = "0.3em";

/// Horizontal anchoring of a label relative to its insertion point.
///
/// Maps directly to SVG `text-anchor` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Anchor at the start of the text (left, for left-to-right scripts)
    Start,
    /// Anchor at the center of the text (default)
    #[default]
    Middle,
    /// Anchor at the end of the text (right, for left-to-right scripts)
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl FromStr for TextAnchor {
    type Err = FretmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "middle" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(FretmarkError::InvalidTextAnchor(s.to_string())),
        }
    }
}

/// Weight of the label font.
///
/// Maps directly to SVG `font-weight` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight (the CSS default)
    #[default]
    Normal,
    /// Bold weight; every built-in definition uses this
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

impl FromStr for FontWeight {
    type Err = FretmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            _ => Err(FretmarkError::InvalidFontWeight(s.to_string())),
        }
    }
}

/// Defines the visual style for labels.
///
/// `TextDefinition` configures the color, size and weight of label glyphs.
/// The defaults fit a free-standing [`Text`] element; the shaped elements
/// build their own 20 pt variants in their definitions.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Color | `black` |
/// | Font size | `30` |
/// | Weight | `bold` |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefinition {
    color: Color,
    font_size: u16,
    weight: FontWeight,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Sets the label color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            font_size: 30,
            weight: FontWeight::Bold,
        }
    }
}

/// A free-standing text label.
///
/// Used for open-string markers, fret numbers and tuning labels, and
/// composed internally by the shaped elements for their centered labels.
/// Renders as a single SVG `<text>` primitive anchored at `position`.
///
/// # Examples
///
/// ```
/// use fretmark::draw::{Drawable, Text, TextAnchor};
/// use fretmark::geometry::Point;
///
/// let mut label = Text::new("E", Point::new(10.0, 10.0));
/// label.set_anchor(TextAnchor::Start);
/// let fragment = label.render_to_svg();
/// assert!(fragment.to_string().contains("text-anchor=\"start\""));
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
    anchor: TextAnchor,
}

impl Text {
    /// Creates a label with default styling, anchored at its middle.
    pub fn new(content: impl Into<String>, position: Point) -> Self {
        Self::with_definition(content, position, TextDefinition::default())
    }

    /// Creates a label with an explicit styling definition.
    pub fn with_definition(
        content: impl Into<String>,
        position: Point,
        definition: TextDefinition,
    ) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
            anchor: TextAnchor::default(),
        }
    }

    /// Returns the label content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the anchor position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the horizontal anchoring.
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Returns the styling definition.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Sets the horizontal anchoring.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }
}

impl Drawable for Text {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let text = svg_element::Text::new(self.content.clone())
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("dy", BASELINE_SHIFT)
            .set("text-anchor", self.anchor.to_svg_value())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.weight().to_svg_value())
            .set("fill", self.definition.color().to_string())
            .set("fill-opacity", self.definition.color().alpha());

        text.into()
    }
}
