//! Fretmark Core Types and Drawables
//!
//! This crate provides the drawable building blocks for guitar fretboard
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Fretboard diagram elements and their styling definitions
//!   ([`draw`] module)
//! - **Errors**: The crate error type ([`error::FretmarkError`])
//!
//! Every element pairs a styling definition (defaults, selectively
//! overridable) with its own position and label, and renders itself into a
//! composable SVG fragment via the [`draw::Drawable`] trait. Composing the
//! fragments into a full diagram document is left to the caller.

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
