//! Default foundation templates for a new design system.

use crate::foundation::*;
use crate::spacing::semantic_preset;

impl FoundationBundle {
    /// A complete bundle built from the default templates.
    pub fn defaults() -> Self {
        FoundationBundle {
            colors: Some(default_colors()),
            typography: Some(default_typography()),
            spacing: Some(default_spacing()),
            grid: Some(default_grid()),
        }
    }
}

fn ramp(id: &str, name: &str, kind: GroupKind, alias_root: &str, values: [&str; 10]) -> ColorGroup {
    const STEPS: [&str; 10] = ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"];
    const ALIASES: [&str; 10] = [
        "lightest",
        "lighter",
        "light",
        "medium-light",
        "medium",
        "base",
        "medium-dark",
        "dark",
        "darker",
        "darkest",
    ];

    let mut group = ColorGroup::new(id, name, kind);
    for ((step, alias), value) in STEPS.iter().zip(ALIASES).zip(values) {
        group.colors.push(
            Color::new(format!("{}-{}", id, step), value)
                .with_alias(format!("{}.{}", alias_root, alias)),
        );
    }
    group
}

/// Primary and neutral ramps plus feedback colors.
pub fn default_colors() -> ColorFoundation {
    let primary = ramp(
        "primary",
        "Primary",
        GroupKind::Semantic,
        "brand",
        [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
            "#1e40af", "#1e3a8a",
        ],
    );
    let neutral = ramp(
        "neutral",
        "Neutral",
        GroupKind::Functional,
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
            "#1f2937", "#111827",
        ],
    );
    let feedback = ColorGroup::new("semantic", "Semantic", GroupKind::Semantic)
        .with_color(Color::new("success-500", "#22c55e").with_alias("feedback.success"))
        .with_color(Color::new("warning-500", "#f59e0b").with_alias("feedback.warning"))
        .with_color(Color::new("error-500", "#ef4444").with_alias("feedback.error"))
        .with_color(Color::new("info-500", "#3b82f6").with_alias("feedback.info"));

    ColorFoundation::new(vec![primary, neutral, feedback])
}

/// Sans, serif and mono stacks, a ten-step type scale and eight weights.
pub fn default_typography() -> TypographyFoundation {
    let family = |name: &str, value: &str, fallback: &str| FontFamily {
        name: name.to_string(),
        value: value.to_string(),
        fallback: fallback.to_string(),
    };
    let scale = |name: &str, size: &str, height: &str, tracking: &str| TypeScale {
        name: name.to_string(),
        font_size: size.to_string(),
        line_height: height.to_string(),
        letter_spacing: tracking.to_string(),
    };
    let weight = |name: &str, value: &str| FontWeight {
        name: name.to_string(),
        value: value.to_string(),
    };

    TypographyFoundation {
        font_families: vec![
            family(
                "sans",
                r#"Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#,
                "system-ui, sans-serif",
            ),
            family("serif", r#"Georgia, "Times New Roman", serif"#, "serif"),
            family("mono", r#"Menlo, Monaco, "Cascadia Code", monospace"#, "monospace"),
        ],
        scales: vec![
            scale("xs", "12px", "16px", "0.025em"),
            scale("sm", "14px", "20px", "0.025em"),
            scale("base", "16px", "24px", "0"),
            scale("lg", "18px", "28px", "0"),
            scale("xl", "20px", "28px", "0"),
            scale("2xl", "24px", "32px", "-0.025em"),
            scale("3xl", "30px", "36px", "-0.025em"),
            scale("4xl", "36px", "40px", "-0.025em"),
            scale("5xl", "48px", "1", "-0.025em"),
            scale("6xl", "60px", "1", "-0.025em"),
        ],
        weights: vec![
            weight("thin", "100"),
            weight("light", "300"),
            weight("normal", "400"),
            weight("medium", "500"),
            weight("semibold", "600"),
            weight("bold", "700"),
            weight("extrabold", "800"),
            weight("black", "900"),
        ],
    }
}

/// The 1px to 128px spacing scale and the semantic preset.
pub fn default_spacing() -> SpacingFoundation {
    const SCALE: [(&str, &str, &str); 23] = [
        ("px", "1px", "0.0625rem"),
        ("0.5", "2px", "0.125rem"),
        ("1", "4px", "0.25rem"),
        ("1.5", "6px", "0.375rem"),
        ("2", "8px", "0.5rem"),
        ("2.5", "10px", "0.625rem"),
        ("3", "12px", "0.75rem"),
        ("3.5", "14px", "0.875rem"),
        ("4", "16px", "1rem"),
        ("5", "20px", "1.25rem"),
        ("6", "24px", "1.5rem"),
        ("7", "28px", "1.75rem"),
        ("8", "32px", "2rem"),
        ("9", "36px", "2.25rem"),
        ("10", "40px", "2.5rem"),
        ("11", "44px", "2.75rem"),
        ("12", "48px", "3rem"),
        ("14", "56px", "3.5rem"),
        ("16", "64px", "4rem"),
        ("20", "80px", "5rem"),
        ("24", "96px", "6rem"),
        ("28", "112px", "7rem"),
        ("32", "128px", "8rem"),
    ];

    SpacingFoundation {
        scale: SCALE
            .iter()
            .map(|(name, value, rem)| SpacingStep {
                name: name.to_string(),
                value: value.to_string(),
                rem: Some(rem.to_string()),
            })
            .collect(),
        semantic: semantic_preset(),
    }
}

/// Five containers, a 12-column grid and four breakpoints.
pub fn default_grid() -> GridFoundation {
    let container = |name: &str, width: &str| Container {
        name: name.to_string(),
        max_width: width.to_string(),
        breakpoint: width.to_string(),
    };
    let breakpoint = |name: &str, min: &str, max: &str, columns: u32| Breakpoint {
        name: name.to_string(),
        min: min.to_string(),
        max: max.to_string(),
        columns,
    };

    GridFoundation {
        containers: vec![
            container("sm", "640px"),
            container("md", "768px"),
            container("lg", "1024px"),
            container("xl", "1280px"),
            container("2xl", "1536px"),
        ],
        columns: GridColumns {
            count: 12,
            gap: "24px".to_string(),
            margin: "24px".to_string(),
        },
        breakpoints: vec![
            breakpoint("mobile", "0px", "639px", 4),
            breakpoint("tablet", "640px", "1023px", 8),
            breakpoint("desktop", "1024px", "1279px", 12),
            breakpoint("wide", "1280px", "9999px", 12),
        ],
    }
}
