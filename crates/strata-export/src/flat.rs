//! Flat `key -> value` token listing used by the CSS and SCSS encoders.

use indexmap::IndexMap;
use strata_core::{Category, FoundationBundle};

/// A flat token value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatValue {
    Literal(String),
    /// Points at another flat key, e.g. an alias of a palette color.
    Reference(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub category: Category,
    /// Display name of the color group the token came from.
    pub group: Option<String>,
    pub value: FlatValue,
}

/// Ordered flat tokens. Keys are unique; the last write wins.
#[derive(Debug, Clone, Default)]
pub struct FlatTokens {
    entries: IndexMap<String, FlatEntry>,
}

impl FlatTokens {
    fn push(&mut self, key: String, category: Category, group: Option<&str>, value: FlatValue) {
        if self.entries.contains_key(&key) {
            tracing::debug!(key = %key, "duplicate token key, keeping the later value");
        }
        self.entries.insert(
            key,
            FlatEntry {
                category,
                group: group.map(str::to_string),
                value,
            },
        );
    }

    fn literal(&mut self, key: String, category: Category, value: &str) {
        self.push(key, category, None, FlatValue::Literal(value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&FlatEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FlatEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs of consecutive entries sharing a category.
    pub fn sections(&self) -> Vec<(Category, Vec<(&String, &FlatEntry)>)> {
        let mut sections: Vec<(Category, Vec<(&String, &FlatEntry)>)> = Vec::new();
        for (key, entry) in &self.entries {
            match sections.last_mut() {
                Some((category, items)) if *category == entry.category => items.push((key, entry)),
                _ => sections.push((entry.category, vec![(key, entry)])),
            }
        }
        sections
    }
}

/// Join non-empty key segments with `-`.
pub fn token_key(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
}

/// Heading used for a category's section comment.
pub fn section_title(category: Category) -> &'static str {
    match category {
        Category::Colors => "Color",
        Category::Typography => "Typography",
        Category::Spacing => "Spacing",
        Category::Grid => "Grid",
    }
}

/// Flatten every present category of `bundle`, in category order.
pub fn collect(bundle: &FoundationBundle) -> FlatTokens {
    let mut tokens = FlatTokens::default();

    if let Some(colors) = &bundle.colors {
        for group in &colors.groups {
            for color in &group.colors {
                let key = token_key(&["color", &color.name]);
                tokens.push(
                    key.clone(),
                    Category::Colors,
                    Some(&group.name),
                    FlatValue::Literal(color.value.clone()),
                );
                if let Some(alias) = &color.alias {
                    let alias_key = token_key(&["color", &alias.replace('.', "-")]);
                    tokens.push(
                        alias_key,
                        Category::Colors,
                        Some(&group.name),
                        FlatValue::Reference(key),
                    );
                }
            }
        }
    }

    if let Some(typography) = &bundle.typography {
        let cat = Category::Typography;
        for family in &typography.font_families {
            tokens.literal(token_key(&["font", &family.name]), cat, &family.value);
        }
        for weight in &typography.weights {
            tokens.literal(token_key(&["font-weight", &weight.name]), cat, &weight.value);
        }
        for scale in &typography.scales {
            tokens.literal(token_key(&["text", &scale.name, "size"]), cat, &scale.font_size);
            tokens.literal(token_key(&["text", &scale.name, "height"]), cat, &scale.line_height);
            tokens.literal(
                token_key(&["text", &scale.name, "spacing"]),
                cat,
                &scale.letter_spacing,
            );
        }
    }

    if let Some(spacing) = &bundle.spacing {
        let steps = spacing.scale.iter().map(|s| (&s.name, &s.value));
        let semantic = spacing.semantic.iter().map(|s| (&s.name, &s.value));
        for (name, value) in steps.chain(semantic) {
            tokens.literal(token_key(&["spacing", name]), Category::Spacing, value);
        }
    }

    if let Some(grid) = &bundle.grid {
        let cat = Category::Grid;
        for bp in &grid.breakpoints {
            tokens.literal(token_key(&["breakpoint", &bp.name]), cat, &bp.min);
        }
        for container in &grid.containers {
            tokens.literal(token_key(&["container", &container.name]), cat, &container.max_width);
        }
        tokens.literal("grid-columns".to_string(), cat, &grid.columns.count.to_string());
        tokens.literal("grid-gap".to_string(), cat, &grid.columns.gap);
        tokens.literal("grid-margin".to_string(), cat, &grid.columns.margin);
    }

    tokens
}
