//! The Foundation Model: the single in-memory shape every encoder reads.
//!
//! A [`FoundationBundle`] holds up to four foundation categories. A category
//! that is `None` is absent, which encoders treat as "nothing to emit" rather
//! than as an error.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// A bundle of design foundations, any subset of which may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FoundationBundle {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub colors: Option<ColorFoundation>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub typography: Option<TypographyFoundation>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub spacing: Option<SpacingFoundation>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub grid: Option<GridFoundation>,
}

/// Ordered color groups.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorFoundation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<ColorGroup>,
}

/// A named group of colors, e.g. a primary ramp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGroup {
    /// Unique within the color foundation; used as an object key by the
    /// nested formats.
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "type"))]
    pub kind: GroupKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: Vec<Color>,
}

/// Whether a color group carries meaning (brand, feedback) or utility (neutrals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupKind {
    Semantic,
    Functional,
}

/// A single color token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Token key, used verbatim in generated names.
    pub name: String,
    /// Hex color, normally `#RRGGBB`. Not validated.
    pub value: String,
    /// Dotted alias path such as `brand.primary`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alias: Option<String>,
}

/// Font stacks, type scale and weights.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypographyFoundation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_families: Vec<FontFamily>,
    /// `scales[0]` is conventionally the base size. Order is preserved, never enforced.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scales: Vec<TypeScale>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: Vec<FontWeight>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontFamily {
    pub name: String,
    /// CSS font-family stack.
    pub value: String,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypeScale {
    pub name: String,
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight {
    pub name: String,
    /// Numeric weight as text, "100" through "900".
    pub value: String,
}

/// Spacing scale plus named semantic spacing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacingFoundation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale: Vec<SpacingStep>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub semantic: Vec<SemanticSpacing>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacingStep {
    pub name: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rem: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticSpacing {
    pub name: String,
    pub value: String,
    /// Human-readable description of where the spacing applies.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub usage: Option<String>,
}

/// Containers, column grid and breakpoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridFoundation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub containers: Vec<Container>,
    pub columns: GridColumns,
    #[cfg_attr(feature = "serde", serde(default))]
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Container {
    pub name: String,
    pub max_width: String,
    pub breakpoint: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridColumns {
    pub count: u32,
    pub gap: String,
    pub margin: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub name: String,
    pub min: String,
    pub max: String,
    pub columns: u32,
}

/// One of the four foundation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Grid,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Grid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Grid => "grid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "colors" => Ok(Category::Colors),
            "typography" => Ok(Category::Typography),
            "spacing" => Ok(Category::Spacing),
            "grid" => Ok(Category::Grid),
            other => Err(ModelError::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }
}

impl FoundationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: ColorFoundation) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_typography(mut self, typography: TypographyFoundation) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingFoundation) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_grid(mut self, grid: GridFoundation) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Parse a bundle from its JSON representation.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Malformed(e.to_string()))
    }

    /// Categories present in this bundle, in canonical order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.has(*c))
            .collect()
    }

    /// Check whether a category is present.
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Colors => self.colors.is_some(),
            Category::Typography => self.typography.is_some(),
            Category::Spacing => self.spacing.is_some(),
            Category::Grid => self.grid.is_some(),
        }
    }

    /// Copy of this bundle keeping only the selected categories.
    pub fn filtered(&self, keep: &[Category]) -> FoundationBundle {
        let keeps = |c: Category| keep.contains(&c);
        FoundationBundle {
            colors: self.colors.clone().filter(|_| keeps(Category::Colors)),
            typography: self.typography.clone().filter(|_| keeps(Category::Typography)),
            spacing: self.spacing.clone().filter(|_| keeps(Category::Spacing)),
            grid: self.grid.clone().filter(|_| keeps(Category::Grid)),
        }
    }

    /// Number of exportable tokens, as shown in an export summary.
    pub fn token_count(&self) -> usize {
        let mut count = 0;
        if let Some(colors) = &self.colors {
            count += colors.groups.iter().map(|g| g.colors.len()).sum::<usize>();
        }
        if let Some(typography) = &self.typography {
            count += typography.scales.len() + typography.font_families.len();
        }
        if let Some(spacing) = &self.spacing {
            count += spacing.scale.len() + spacing.semantic.len();
        }
        if let Some(grid) = &self.grid {
            count += grid.breakpoints.len();
        }
        count
    }

    /// Validate the structure encoders depend on.
    ///
    /// Duplicate color names inside one group are allowed; encoders resolve
    /// them last-write-wins.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(colors) = &self.colors {
            colors.validate()?;
        }
        if let Some(typography) = &self.typography {
            check_names("typography.fontFamilies", typography.font_families.iter().map(|f| &f.name))?;
            check_names("typography.scales", typography.scales.iter().map(|s| &s.name))?;
            check_names("typography.weights", typography.weights.iter().map(|w| &w.name))?;
        }
        if let Some(spacing) = &self.spacing {
            check_names("spacing.scale", spacing.scale.iter().map(|s| &s.name))?;
            check_names("spacing.semantic", spacing.semantic.iter().map(|s| &s.name))?;
        }
        if let Some(grid) = &self.grid {
            grid.validate()?;
        }
        Ok(())
    }
}

impl ColorFoundation {
    pub fn new(groups: Vec<ColorGroup>) -> Self {
        Self { groups }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        check_names("colors.groups", self.groups.iter().map(|g| &g.id))?;
        for group in &self.groups {
            if !seen.insert(group.id.as_str()) {
                return Err(ModelError::DuplicateGroupId {
                    id: group.id.clone(),
                });
            }
            let context = format!("colors.groups.{}", group.id);
            check_names(&context, group.colors.iter().map(|c| &c.name))?;
        }
        Ok(())
    }
}

impl ColorGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            colors: Vec::new(),
        }
    }

    /// Append a color, builder style.
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }
}

impl Color {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl GridFoundation {
    fn validate(&self) -> Result<(), ModelError> {
        if self.columns.count == 0 {
            return Err(ModelError::InvalidColumnCount {
                context: "grid.columns".to_string(),
                count: 0,
            });
        }
        check_names("grid.containers", self.containers.iter().map(|c| &c.name))?;
        check_names("grid.breakpoints", self.breakpoints.iter().map(|b| &b.name))?;
        for bp in &self.breakpoints {
            if bp.columns == 0 {
                return Err(ModelError::InvalidColumnCount {
                    context: format!("grid.breakpoints.{}", bp.name),
                    count: 0,
                });
            }
        }
        Ok(())
    }
}

fn check_names<'a>(
    category: &str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), ModelError> {
    for (index, name) in names.enumerate() {
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                category: category.to_string(),
                index,
            });
        }
    }
    Ok(())
}
