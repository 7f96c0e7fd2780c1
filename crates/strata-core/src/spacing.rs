//! Linear spacing scales and the named semantic spacing preset.

use crate::color::round_half_up;
use crate::foundation::{SemanticSpacing, SpacingStep};

/// Highest step index [`generate_scale`] will build.
pub const MAX_SPACING_STEPS: u32 = 256;

/// Parameters for a linear spacing scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    /// Pixel distance between consecutive steps.
    pub base_unit: f64,
    /// Highest step index; the scale has `steps + 1` entries starting at 0.
    pub steps: u32,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            base_unit: 4.0,
            steps: 20,
        }
    }
}

impl SpacingScale {
    pub fn new(base_unit: f64, steps: u32) -> Self {
        Self { base_unit, steps }
    }

    pub fn generate(&self) -> Vec<SpacingStep> {
        generate_scale(self.base_unit, self.steps)
    }
}

/// Generate `0, base, 2*base, ... steps*base` pixel steps named by index.
///
/// Each step carries its rem equivalent (16px root) to three decimals.
/// `steps` is capped at [`MAX_SPACING_STEPS`].
pub fn generate_scale(base_unit: f64, steps: u32) -> Vec<SpacingStep> {
    (0..=steps.min(MAX_SPACING_STEPS))
        .map(|i| {
            let value = i as f64 * base_unit;
            SpacingStep {
                name: i.to_string(),
                value: format!("{}px", value),
                rem: Some(format!("{}rem", to_fixed3(value / 16.0))),
            }
        })
        .collect()
}

/// The fixed semantic spacing table: `xs` through `3xl`.
pub fn semantic_preset() -> Vec<SemanticSpacing> {
    [
        ("xs", "4px", "Tiny gaps, fine details"),
        ("sm", "8px", "Small gaps, compact layouts"),
        ("md", "16px", "Standard spacing, common gaps"),
        ("lg", "24px", "Large gaps, section spacing"),
        ("xl", "32px", "Extra large gaps, major sections"),
        ("2xl", "48px", "Component separation"),
        ("3xl", "64px", "Page section spacing"),
    ]
    .into_iter()
    .map(|(name, value, usage)| SemanticSpacing {
        name: name.to_string(),
        value: value.to_string(),
        usage: Some(usage.to_string()),
    })
    .collect()
}

// Ties round up, so 0.0625 prints as 0.063.
fn to_fixed3(x: f64) -> String {
    format!("{:.3}", round_half_up(x * 1000.0) / 1000.0)
}
