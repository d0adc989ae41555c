//! Fretted note markers.

use serde::{Deserialize, Serialize};
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
};

/// Styling for fretted note markers.
///
/// Shares the open-note defaults: radius 20, white fill, 3px black stroke,
/// black 20pt bold label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrettedNoteDefinition {
    radius: f32,
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl FrettedNoteDefinition {
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

impl Default for FrettedNoteDefinition {
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

/// A fretted note marker: a circle on the fretboard at a string/fret
/// intersection, with the note name (or interval, or fingering) inside it.
#[derive(Debug, Clone)]
pub struct FrettedNote {
    definition: FrettedNoteDefinition,
    name: String,
    position: Point,
}

impl FrettedNote {
    /// Creates a fretted note with default styling, centered at `position`.
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self::with_definition(name, position, FrettedNoteDefinition::default())
    }

    /// Creates a fretted note with an explicit styling definition.
    pub fn with_definition(
        name: impl Into<String>,
        position: Point,
        definition: FrettedNoteDefinition,
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
    pub fn definition(&self) -> &FrettedNoteDefinition {
        &self.definition
    }
}

impl Drawable for FrettedNote {
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
