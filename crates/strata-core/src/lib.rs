//! Core types and utilities for the Strata design-token engine.
//!
//! This crate provides the foundational pieces used by the token codec:
//! - The Foundation Model (colors, typography, spacing, grid)
//! - Color math (hex/RGB/HSL conversion, WCAG contrast, shade ramps)
//! - Typographic modular scales and spacing scales
//! - Default foundation presets
//! - Error types

pub mod color;
pub mod errors;
pub mod foundation;
pub mod length;
pub mod presets;
pub mod spacing;
pub mod typography;

pub use color::{ContrastRating, ContrastReport, Hsl, Rgb, Shade};
pub use errors::*;
pub use foundation::*;
pub use length::{parse_length, Length, LengthUnit};
