//! Typographic modular scales and line-height heuristics.

use crate::color::round_half_up;
use crate::foundation::TypeScale;
use crate::length::leading_integer;

pub const MINOR_SECOND: f64 = 1.067;
pub const MAJOR_SECOND: f64 = 1.125;
pub const MINOR_THIRD: f64 = 1.2;
pub const MAJOR_THIRD: f64 = 1.25;
pub const PERFECT_FOURTH: f64 = 1.333;
pub const AUGMENTED_FOURTH: f64 = 1.414;
pub const PERFECT_FIFTH: f64 = 1.5;
pub const GOLDEN_RATIO: f64 = 1.618;

/// Longest scale [`generate_modular_scale`] will build.
pub const MAX_SCALE_STEPS: u32 = 32;

/// Parameters for a modular (geometric) type scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularScale {
    /// Body size in pixels.
    pub base_size: f64,
    pub ratio: f64,
    /// Total number of steps, two of which sit below the base.
    pub steps: u32,
}

impl Default for ModularScale {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            ratio: MAJOR_THIRD,
            steps: 8,
        }
    }
}

impl ModularScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base_size: f64) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn generate(&self) -> Vec<TypeScale> {
        generate_modular_scale(self.base_size, self.ratio, self.steps)
    }
}

/// Generate `steps` sizes as `base * ratio^i` for `i` from -2 upward.
///
/// Steps below the base are named `xs2`, `xs1`; the base is `base`; steps
/// above are `1xl`, `2xl`, ... Line height is 1.5x the size. Steps more than
/// two above the base get tightened letter spacing. `steps` is capped at
/// [`MAX_SCALE_STEPS`].
pub fn generate_modular_scale(base_size: f64, ratio: f64, steps: u32) -> Vec<TypeScale> {
    let end = i32::try_from(steps.min(MAX_SCALE_STEPS)).unwrap_or(0) - 2;
    (-2..end)
        .map(|i| {
            let size = round_half_up(base_size * ratio.powi(i));
            let name = match i {
                i if i < 0 => format!("xs{}", i.abs()),
                0 => "base".to_string(),
                i => format!("{}xl", i),
            };
            TypeScale {
                name,
                font_size: format!("{}px", size),
                line_height: format!("{}px", round_half_up(size * 1.5)),
                letter_spacing: if i > 2 { "-0.025em" } else { "0" }.to_string(),
            }
        })
        .collect()
}

/// Suggested line height in pixels for a font size such as `"16px"`.
///
/// Only the leading integer of the size is used. Smaller text gets more
/// generous leading.
pub fn calculate_line_height(font_size: &str) -> Option<u32> {
    let size = f64::from(u32::try_from(leading_integer(font_size)?).ok()?);
    let factor = if size <= 14.0 {
        1.6
    } else if size <= 18.0 {
        1.5
    } else if size <= 24.0 {
        1.4
    } else {
        1.3
    };
    Some(round_half_up(size * factor) as u32)
}
