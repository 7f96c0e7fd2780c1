//! CSS custom properties on `:root`.

use strata_core::FoundationBundle;

use crate::flat::{self, FlatValue};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> String {
    let tokens = flat::collect(bundle);
    let mut css = String::new();

    if options.minify {
        css.push_str(":root{");
        for (key, entry) in tokens.iter() {
            css.push_str(&format!("--{}:{};", key, value(&entry.value)));
        }
        css.push('}');
        return css;
    }

    css.push_str(":root {\n");
    for (i, (category, entries)) in tokens.sections().into_iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        if options.comments {
            css.push_str(&format!("  /* {} Tokens */\n", flat::section_title(category)));
        }
        for (key, entry) in entries {
            css.push_str(&format!("  --{}: {};\n", key, value(&entry.value)));
        }
    }
    css.push_str("}\n");
    css
}

fn value(value: &FlatValue) -> String {
    match value {
        FlatValue::Literal(v) => v.clone(),
        FlatValue::Reference(key) => format!("var(--{})", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{Color, ColorFoundation, ColorGroup, GroupKind, SpacingFoundation, SpacingStep};

    fn bundle() -> FoundationBundle {
        FoundationBundle::new()
            .with_colors(ColorFoundation::new(vec![ColorGroup::new(
                "primary",
                "Primary",
                GroupKind::Semantic,
            )
            .with_color(Color::new("primary-500", "#3b82f6").with_alias("brand.base"))]))
            .with_spacing(SpacingFoundation {
                scale: vec![SpacingStep {
                    name: "4".to_string(),
                    value: "16px".to_string(),
                    rem: None,
                }],
                semantic: vec![],
            })
    }

    #[test]
    fn test_encode_css() {
        let css = encode(&bundle(), &EncodeOptions::default());
        assert_eq!(
            css,
            ":root {\n  --color-primary-500: #3b82f6;\n  --color-brand-base: var(--color-primary-500);\n\n  --spacing-4: 16px;\n}\n"
        );
    }

    #[test]
    fn test_encode_css_comments() {
        let css = encode(&bundle(), &EncodeOptions::default().with_comments());
        assert!(css.contains("  /* Color Tokens */\n  --color-primary-500"));
        assert!(css.contains("\n\n  /* Spacing Tokens */\n  --spacing-4: 16px;\n"));
    }

    #[test]
    fn test_encode_css_minified() {
        let css = encode(&bundle(), &EncodeOptions::default().minified());
        assert_eq!(
            css,
            ":root{--color-primary-500:#3b82f6;--color-brand-base:var(--color-primary-500);--spacing-4:16px;}"
        );
    }

    #[test]
    fn test_encode_css_empty() {
        assert_eq!(encode(&FoundationBundle::new(), &EncodeOptions::default()), ":root {\n}\n");
    }
}
