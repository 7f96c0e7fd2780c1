//! Color math: hex/RGB/HSL conversion, WCAG contrast, and shade ramps.
//!
//! Everything here is pure. Malformed hex input never panics; it yields
//! `None`, and callers skip whatever enhancement needed the color.

use std::fmt;

use crate::foundation::{Color, ColorFoundation, ColorGroup, GroupKind};

/// Number of shades produced by default (100 through 900).
pub const DEFAULT_SHADE_STEPS: u32 = 9;

/// Longest ramp [`generate_shades`] will build. Past step 1000 every
/// shade is already clamped to the darkest lightness.
pub const MAX_SHADE_STEPS: u32 = 100;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// One step of a generated shade ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shade {
    /// Step label, e.g. "500".
    pub name: String,
    pub value: String,
    pub step: u32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Parse a 6-digit hex color with optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Convert RGB to HSL, rounding every component to the nearest integer.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let exact = rgb_to_hsl_exact(rgb);
    Hsl {
        h: round_half_up(exact.h),
        s: round_half_up(exact.s),
        l: round_half_up(exact.l),
    }
}

/// Convert RGB to HSL without rounding.
///
/// `hsl_to_hex(rgb_to_hsl_exact(c))` reproduces `c` within one unit per channel.
pub fn rgb_to_hsl_exact(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// Convert HSL back to a lowercase `#rrggbb` string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let l = hsl.l / 100.0;
    let a = hsl.s * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| -> u8 {
        let k = (n + hsl.h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        round_half_up(255.0 * value).clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(0.0), channel(8.0), channel(4.0)).to_hex()
}

/// WCAG relative luminance of an sRGB color, in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// WCAG contrast ratio between two hex colors, in [1, 21].
///
/// Symmetric in its arguments. Returns `None` if either color is malformed.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(hex_to_rgb(a)?);
    let lb = relative_luminance(hex_to_rgb(b)?);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}

/// WCAG conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastRating {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl ContrastRating {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ContrastRating::Aaa
        } else if ratio >= 4.5 {
            ContrastRating::Aa
        } else if ratio >= 3.0 {
            ContrastRating::AaLarge
        } else {
            ContrastRating::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContrastRating::Aaa => "AAA",
            ContrastRating::Aa => "AA",
            ContrastRating::AaLarge => "AA Large",
            ContrastRating::Fail => "Fail",
        }
    }

    /// Whether normal-size body text passes at this level.
    pub fn passes_body_text(&self) -> bool {
        matches!(self, ContrastRating::Aaa | ContrastRating::Aa)
    }
}

impl fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate a lightness ramp around a base color's hue and saturation.
///
/// Steps are labelled 100, 200, ... and the ramp is centered on step 500,
/// which keeps the base lightness. Lightness never increases along the ramp
/// and is clamped to [5, 95]. Returns `None` for a malformed base color.
pub fn generate_shades(base_hex: &str, steps: u32) -> Option<Vec<Shade>> {
    let hsl = rgb_to_hsl(hex_to_rgb(base_hex)?);

    let shades = (0..steps.min(MAX_SHADE_STEPS))
        .map(|i| {
            let step = (i + 1) * 100;
            let offset = (50.0 - step as f64 / 10.0) * 0.8;
            let lightness = (hsl.l + offset).clamp(5.0, 95.0);
            Shade {
                name: step.to_string(),
                value: hsl_to_hex(Hsl::new(hsl.h, hsl.s, lightness)),
                step,
            }
        })
        .collect();

    Some(shades)
}

/// Build an exportable color group from a shade ramp.
///
/// Colors are named `<id>-<step>`, which is the naming the Tailwind and
/// Style Dictionary encoders split back into shade keys.
pub fn shade_group(
    id: &str,
    name: &str,
    base_hex: &str,
    steps: u32,
) -> Option<ColorGroup> {
    let shades = generate_shades(base_hex, steps)?;
    let mut group = ColorGroup::new(id, name, GroupKind::Semantic);
    group.colors = shades
        .into_iter()
        .map(|shade| Color::new(format!("{}-{}", id, shade.name), shade.value))
        .collect();
    Some(group)
}

/// Contrast of one palette color against white and black text backgrounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    pub group: String,
    pub name: String,
    pub value: String,
    pub on_white: Option<f64>,
    pub on_black: Option<f64>,
}

impl ContrastReport {
    pub fn white_rating(&self) -> Option<ContrastRating> {
        self.on_white.map(ContrastRating::from_ratio)
    }

    pub fn black_rating(&self) -> Option<ContrastRating> {
        self.on_black.map(ContrastRating::from_ratio)
    }
}

/// Contrast report for every color in a foundation, in palette order.
pub fn audit_contrast(colors: &ColorFoundation) -> Vec<ContrastReport> {
    let white = Rgb::WHITE.to_hex();
    let black = Rgb::BLACK.to_hex();
    colors
        .groups
        .iter()
        .flat_map(|group| {
            group.colors.iter().map(|color| ContrastReport {
                group: group.id.clone(),
                name: color.name.clone(),
                value: color.value.clone(),
                on_white: contrast_ratio(&color.value, &white),
                on_black: contrast_ratio(&color.value, &black),
            })
        })
        .collect()
}

/// Round half toward positive infinity, matching how colors are quantized
/// everywhere else in the toolchain.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#3b82f6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(hex_to_rgb("3B82F6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#3b82f6ff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        assert_eq!(hex_to_rgb("#+12345"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_rgb_to_hsl_rounds() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0.0, 0.0, 100.0));
        // #3b82f6 is hsl(217.2, 91.2%, 59.8%)
        assert_eq!(rgb_to_hsl(Rgb::new(0x3b, 0x82, 0xf6)), Hsl::new(217.0, 91.0, 60.0));
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 100.0, 50.0)), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl::new(120.0, 100.0, 50.0)), "#00ff00");
        assert_eq!(hsl_to_hex(Hsl::new(240.0, 100.0, 50.0)), "#0000ff");
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 0.0)), "#000000");
        assert_eq!(hsl_to_hex(Hsl::new(360.0, 0.0, 100.0)), "#ffffff");
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio("#000000", "#FFFFFF").unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_contrast_malformed() {
        assert_eq!(contrast_ratio("#000000", "white"), None);
        assert_eq!(contrast_ratio("nope", "#ffffff"), None);
    }

    #[test]
    fn test_contrast_rating_thresholds() {
        assert_eq!(ContrastRating::from_ratio(21.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(7.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(6.99), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(4.5), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(3.0), ContrastRating::AaLarge);
        assert_eq!(ContrastRating::from_ratio(2.99), ContrastRating::Fail);
        assert_eq!(ContrastRating::AaLarge.to_string(), "AA Large");
        assert_eq!(ContrastRating::Fail.to_string(), "Fail");
    }

    #[test]
    fn test_generate_shades_monotonic() {
        let shades = generate_shades("#3b82f6", DEFAULT_SHADE_STEPS).unwrap();
        assert_eq!(shades.len(), 9);
        assert_eq!(shades[0].name, "100");
        assert_eq!(shades[8].step, 900);

        let lightness: Vec<f64> = shades
            .iter()
            .map(|s| rgb_to_hsl_exact(hex_to_rgb(&s.value).unwrap()).l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] >= pair[1] - 1.0, "ramp zigzags: {:?}", lightness);
        }
        assert!(lightness[0] > lightness[8]);
    }

    #[test]
    fn test_generate_shades_keeps_base_at_500() {
        let shades = generate_shades("#3b82f6", DEFAULT_SHADE_STEPS).unwrap();
        let base = rgb_to_hsl(hex_to_rgb("#3b82f6").unwrap());
        assert_eq!(shades[4].value, hsl_to_hex(base));
    }

    #[test]
    fn test_generate_shades_malformed() {
        assert_eq!(generate_shades("blue", 9), None);
        assert_eq!(generate_shades("#3b82f6", 0), Some(vec![]));
    }

    #[test]
    fn test_generate_shades_caps_huge_step_counts() {
        let shades = generate_shades("#3b82f6", u32::MAX).unwrap();
        assert_eq!(shades.len(), MAX_SHADE_STEPS as usize);
        assert_eq!(shades.last().unwrap().step, MAX_SHADE_STEPS * 100);
        assert_eq!(generate_shades("#3b82f6", 42_949_673).unwrap().len(), 100);
    }

    #[test]
    fn test_shade_group_names() {
        let group = shade_group("brand", "Brand", "#3b82f6", 3).unwrap();
        let names: Vec<&str> = group.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["brand-100", "brand-200", "brand-300"]);
    }

    #[test]
    fn test_audit_contrast() {
        let colors = ColorFoundation::new(vec![ColorGroup::new("ink", "Ink", GroupKind::Functional)
            .with_color(Color::new("ink-900", "#000000"))
            .with_color(Color::new("ink-bad", "oops"))]);
        let report = audit_contrast(&colors);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].white_rating(), Some(ContrastRating::Aaa));
        assert_eq!(report[0].black_rating(), Some(ContrastRating::Fail));
        assert_eq!(report[1].on_white, None);
    }

    fn arb_rgb() -> impl Strategy<Value = Rgb> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #[test]
        fn prop_exact_round_trip(rgb in arb_rgb()) {
            let back = hex_to_rgb(&hsl_to_hex(rgb_to_hsl_exact(rgb))).unwrap();
            prop_assert!((back.r as i32 - rgb.r as i32).abs() <= 1);
            prop_assert!((back.g as i32 - rgb.g as i32).abs() <= 1);
            prop_assert!((back.b as i32 - rgb.b as i32).abs() <= 1);
        }

        #[test]
        fn prop_rounded_round_trip_is_close(rgb in arb_rgb()) {
            let back = hex_to_rgb(&hsl_to_hex(rgb_to_hsl(rgb))).unwrap();
            prop_assert!((back.r as i32 - rgb.r as i32).abs() <= 5);
            prop_assert!((back.g as i32 - rgb.g as i32).abs() <= 5);
            prop_assert!((back.b as i32 - rgb.b as i32).abs() <= 5);
        }

        #[test]
        fn prop_contrast_symmetric(a in arb_rgb(), b in arb_rgb()) {
            let (a, b) = (a.to_hex(), b.to_hex());
            prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        }

        #[test]
        fn prop_contrast_self_is_one(c in arb_rgb()) {
            let hex = c.to_hex();
            prop_assert_eq!(contrast_ratio(&hex, &hex), Some(1.0));
        }

        #[test]
        fn prop_contrast_bounds(a in arb_rgb(), b in arb_rgb()) {
            let ratio = contrast_ratio(&a.to_hex(), &b.to_hex()).unwrap();
            prop_assert!(ratio >= 1.0 && ratio <= 21.0 + 1e-9);
        }
    }
}
