//! Finger span markers.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
};

/// Styling for finger span markers.
///
/// Like [`BarreDefinition`](crate::draw::BarreDefinition) but with a larger
/// corner radius (23), so short spans render closer to a circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerDefinition {
    corner_radius: f32,
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl FingerDefinition {
    /// Creates a new definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the corner radius of the rounded rectangle.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Returns the fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Returns the stroke definition.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the label text definition.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Sets the corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    /// Sets the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Sets the stroke definition.
    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    /// Sets the label text definition.
    pub fn set_text_definition(&mut self, text: TextDefinition) {
        self.text = text;
    }
}

impl Default for FingerDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(20);
        text.set_color(Color::new("white").expect("valid color"));

        Self {
            corner_radius: 23.0,
            fill_color: Color::default(),
            stroke: StrokeDefinition::default(),
            text,
        }
    }
}

/// A finger span marker: a rounded rectangle covering the frets one finger
/// holds down, with the finger number centered inside it.
///
/// `position` is the top-left corner; the label is centered at
/// `position + size/2`. Degenerate sizes pass through uninterpreted, the
/// same as [`Barre`](crate::draw::Barre).
#[derive(Debug, Clone)]
pub struct Finger {
    definition: FingerDefinition,
    label: String,
    position: Point,
    size: Size,
}

impl Finger {
    /// Creates a finger span with default styling.
    pub fn new(position: Point, size: Size, label: impl Into<String>) -> Self {
        Self::with_definition(position, size, label, FingerDefinition::default())
    }

    /// Creates a finger span with an explicit styling definition.
    pub fn with_definition(
        position: Point,
        size: Size,
        label: impl Into<String>,
        definition: FingerDefinition,
    ) -> Self {
        Self {
            definition,
            label: label.into(),
            position,
            size,
        }
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the span size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the styling definition.
    pub fn definition(&self) -> &FingerDefinition {
        &self.definition
    }
}

impl Drawable for Finger {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        trace!(
            x = self.position.x(),
            y = self.position.y(),
            width = self.size.width(),
            height = self.size.height();
            "rendering finger span",
        );
        if self.size.is_empty() {
            debug!(
                width = self.size.width(),
                height = self.size.height();
                "finger span has a degenerate size and will render empty",
            );
        }

        let rect = svg_element::Rectangle::new()
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.definition.corner_radius())
            .set("ry", self.definition.corner_radius())
            .set("fill", self.definition.fill_color().to_string())
            .set("fill-opacity", self.definition.fill_color().alpha());
        let rect = crate::apply_stroke!(rect, self.definition.stroke());

        let label_position = self.position.add_point(Point::new(
            self.size.width() / 2.0,
            self.size.height() / 2.0,
        ));
        let label = Text::with_definition(
            self.label.clone(),
            label_position,
            self.definition.text().clone(),
        );

        let group = svg_element::Group::new()
            .add(rect)
            .add(label.render_to_svg());

        group.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_defaults() {
        let definition = FingerDefinition::new();
        assert_eq!(definition.corner_radius(), 23.0);
        assert_eq!(definition.fill_color().to_string(), "black");
        assert_eq!(definition.text().color().to_string(), "white");
        assert_eq!(definition.text().font_size(), 20);
    }

    #[test]
    fn test_render_label_centered_in_span() {
        let finger = Finger::new(Point::new(30.0, 60.0), Size::new(40.0, 40.0), "4");
        let rendered = finger.render_to_svg().to_string();

        assert!(rendered.contains("rx=\"23\""));

        let label = &rendered[rendered.find("<text").expect("label present")..];
        assert!(label.contains("x=\"50\""));
        assert!(label.contains("y=\"80\""));

        let compact: String = label.split_whitespace().collect();
        assert!(compact.contains(">4</text>"));
    }

    #[test]
    fn test_render_rect_before_label() {
        let finger = Finger::new(Point::new(0.0, 0.0), Size::new(40.0, 40.0), "1");
        let rendered = finger.render_to_svg().to_string();

        let rect_at = rendered.find("<rect").expect("rect present");
        let text_at = rendered.find("<text").expect("label present");
        assert!(rect_at < text_at);
    }
}
