//! Barre chord markers.
//!
//! A barre marks one finger laid flat across several strings at one fret.
//! It renders as a rounded rectangle spanning the barred strings with the
//! fret (or finger) number centered inside it.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
};

/// Styling for barre markers.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Corner radius | `20` |
/// | Fill | `black` |
/// | Stroke | `black`, 3px |
/// | Label | `white`, 20pt, bold |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarreDefinition {
    corner_radius: f32,
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl BarreDefinition {
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

impl Default for BarreDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(20);
        text.set_color(Color::new("white").expect("valid color"));

        Self {
            corner_radius: 20.0,
            fill_color: Color::default(),
            stroke: StrokeDefinition::default(),
            text,
        }
    }
}

/// A barre marker.
///
/// Renders as a rounded rectangle with its top-left corner at `position`,
/// spanning `size`, with the label centered at `position + size/2`.
///
/// Degenerate sizes (zero or negative in either dimension) are passed
/// through to the SVG output uninterpreted; the shape renders empty. A
/// `debug`-level log event is emitted when that happens.
#[derive(Debug, Clone)]
pub struct Barre {
    definition: BarreDefinition,
    label: String,
    position: Point,
    size: Size,
}

impl Barre {
    /// Creates a barre with default styling.
    ///
    /// # Arguments
    ///
    /// * `position` - Top-left corner of the rounded rectangle
    /// * `size` - Width and height of the span
    /// * `label` - The fret or finger number shown inside the span
    pub fn new(position: Point, size: Size, label: impl Into<String>) -> Self {
        Self::with_definition(position, size, label, BarreDefinition::default())
    }

    /// Creates a barre with an explicit styling definition.
    pub fn with_definition(
        position: Point,
        size: Size,
        label: impl Into<String>,
        definition: BarreDefinition,
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
    pub fn definition(&self) -> &BarreDefinition {
        &self.definition
    }
}

impl Drawable for Barre {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        trace!(
            x = self.position.x(),
            y = self.position.y(),
            width = self.size.width(),
            height = self.size.height();
            "rendering barre",
        );
        if self.size.is_empty() {
            debug!(
                width = self.size.width(),
                height = self.size.height();
                "barre has a degenerate size and will render empty",
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
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (-100.0f32..1000.0, -100.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    proptest! {
        /// The rectangle always precedes the label, whatever the geometry.
        #[test]
        fn rect_always_precedes_label(position in point_strategy(), size in size_strategy()) {
            let barre = Barre::new(position, size, "1");
            let rendered = barre.render_to_svg().to_string();

            let rect_at = rendered.find("<rect").expect("rect present");
            let text_at = rendered.find("<text").expect("label present");
            prop_assert!(rect_at < text_at);
        }

        /// The label anchor is the rectangle center, exactly.
        #[test]
        fn label_anchored_at_center(position in point_strategy(), size in size_strategy()) {
            let barre = Barre::new(position, size, "1");
            let rendered = barre.render_to_svg().to_string();

            let label = &rendered[rendered.find("<text").expect("label present")..];
            let expected_x = position.x() + size.width() / 2.0;
            let expected_y = position.y() + size.height() / 2.0;
            let expected_x_attr = format!("x=\"{}\"", expected_x);
            let expected_y_attr = format!("y=\"{}\"", expected_y);
            prop_assert!(label.contains(&expected_x_attr));
            prop_assert!(label.contains(&expected_y_attr));
        }
    }
}
