//! Drawable Elements for Fretboard Diagrams
//!
//! This module provides the drawable elements that make up a fretboard
//! diagram: note markers, finger and barre spans, and free-standing labels.
//! All elements implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to SVG.
//!
//! Each element owns a styling definition (e.g. [`OpenNoteDefinition`])
//! alongside its instance data (label, position, size). Definitions carry
//! documented defaults and are selectively overridable through their
//! setters or through serde with missing fields defaulted.

mod barre;
mod finger;
mod fretted_note;
mod open_note;
mod stroke;
mod text;

pub use barre::{Barre, BarreDefinition};
pub use finger::{Finger, FingerDefinition};
pub use fretted_note::{FrettedNote, FrettedNoteDefinition};
pub use open_note::{OpenNote, OpenNoteDefinition};
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};

pub trait Drawable: std::fmt::Debug {
    /// Renders this element into a composable SVG fragment.
    ///
    /// Rendering is a pure read of the element's fields: it cannot fail and
    /// calling it repeatedly yields equivalent fragments.
    fn render_to_svg(&self) -> Box<dyn svg::Node>;
}
