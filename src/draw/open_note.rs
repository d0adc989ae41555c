//! Open-string note markers.
//!
//! An open note marks a string played without fretting. It renders as a
//! circle sitting above the nut with the note name centered inside it.

use serde::{Deserialize, Serialize};
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
};

/// Styling for open-string note markers.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Radius | `20` |
/// | Fill | `white` |
/// | Stroke | `black`, 3px |
/// | Label | `black`, 20pt, bold |
///
/// # Examples
///
/// ```
/// # use fretmark::color::Color;
/// # use fretmark::draw::OpenNoteDefinition;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut definition = OpenNoteDefinition::new();
/// definition.set_fill_color(Color::new("#e8f4f8")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenNoteDefinition {
    radius: f32,
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl OpenNoteDefinition {
    /// Creates a new definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the circle radius.
    pub fn radius(&self) -> f32 {
        self.radius
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

    /// Sets the circle radius.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
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

impl Default for OpenNoteDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(20);

        Self {
            radius: 20.0,
            fill_color: Color::new("white").expect("valid color"),
            stroke: StrokeDefinition::default(),
            text,
        }
    }
}

/// An open-string note marker.
///
/// Renders as a filled circle centered at `position` with the note name
/// centered inside it. The fragment contains the circle first and the label
/// second, so the label is never occluded.
#[derive(Debug, Clone)]
pub struct OpenNote {
    definition: OpenNoteDefinition,
    name: String,
    position: Point,
}

impl OpenNote {
    /// Creates an open note with default styling.
    ///
    /// # Arguments
    ///
    /// * `name` - The note name shown inside the circle (e.g. "E", "A#")
    /// * `position` - The circle center
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self::with_definition(name, position, OpenNoteDefinition::default())
    }

    /// Creates an open note with an explicit styling definition.
    pub fn with_definition(
        name: impl Into<String>,
        position: Point,
        definition: OpenNoteDefinition,
    ) -> Self {
        Self {
            definition,
            name: name.into(),
            position,
        }
    }

    /// Returns the note name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the circle center.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the styling definition.
    pub fn definition(&self) -> &OpenNoteDefinition {
        &self.definition
    }
}

impl Drawable for OpenNote {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let circle = svg_element::Circle::new()
            .set("cx", self.position.x())
            .set("cy", self.position.y())
            .set("r", self.definition.radius())
            .set("fill", self.definition.fill_color().to_string())
            .set("fill-opacity", self.definition.fill_color().alpha());
        let circle = crate::apply_stroke!(circle, self.definition.stroke());

        let label =
            Text::with_definition(self.name.clone(), self.position, self.definition.text().clone());

        let group = svg_element::Group::new()
            .add(circle)
            .add(label.render_to_svg());

        group.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FontWeight;

    #[test]
    fn test_definition_defaults() {
        let definition = OpenNoteDefinition::new();
        assert_eq!(definition.radius(), 20.0);
        assert_eq!(definition.fill_color().to_string(), "white");
        assert_eq!(definition.stroke().color().to_string(), "black");
        assert_eq!(definition.stroke().width(), 3.0);
        assert_eq!(definition.text().color().to_string(), "black");
        assert_eq!(definition.text().font_size(), 20);
        assert_eq!(definition.text().weight(), FontWeight::Bold);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let mut definition = OpenNoteDefinition::new();
        let mut stroke = StrokeDefinition::default();
        stroke.set_width(5.0);
        definition.set_stroke(stroke);

        assert_eq!(definition.stroke().width(), 5.0);
        assert_eq!(definition.radius(), 20.0);
        assert_eq!(definition.fill_color().to_string(), "white");
    }

    #[test]
    fn test_partial_override_from_json() {
        let definition: OpenNoteDefinition =
            serde_json::from_str(r#"{"stroke": {"width": 5.0}}"#).unwrap();

        assert_eq!(definition.stroke().width(), 5.0);
        assert_eq!(definition.stroke().color().to_string(), "black");
        assert_eq!(definition.radius(), 20.0);
        assert_eq!(definition.fill_color().to_string(), "white");
    }

    #[test]
    fn test_render_circle_before_label() {
        let note = OpenNote::new("E", Point::new(40.0, 25.0));
        let rendered = note.render_to_svg().to_string();

        let circle_at = rendered.find("<circle").expect("circle present");
        let text_at = rendered.find("<text").expect("label present");
        assert!(circle_at < text_at);
    }

    #[test]
    fn test_render_circle_centered_on_position() {
        let note = OpenNote::new("A", Point::new(40.0, 25.0));
        let rendered = note.render_to_svg().to_string();

        assert!(rendered.contains("cx=\"40\""));
        assert!(rendered.contains("cy=\"25\""));
        assert!(rendered.contains("r=\"20\""));

        // The label shares the circle center
        let label = &rendered[rendered.find("<text").expect("label present")..];
        assert!(label.contains("x=\"40\""));
        assert!(label.contains("y=\"25\""));
        assert!(label.contains("dy=\"0.3em\""));
    }

    #[test]
    fn test_render_with_custom_definition() {
        let mut definition = OpenNoteDefinition::new();
        definition.set_radius(12.0);
        definition.set_fill_color(Color::new("lightgray").unwrap());

        let note = OpenNote::with_definition("D", Point::new(0.0, 0.0), definition);
        let rendered = note.render_to_svg().to_string();

        assert!(rendered.contains("r=\"12\""));
        assert!(rendered.contains("fill=\"lightgray\""));
    }
}
