//! Design-token encoders for Strata foundation bundles.
//!
//! Supported formats:
//! - CSS custom properties
//! - SCSS variables
//! - JavaScript and TypeScript modules
//! - Tailwind `theme.extend` configuration
//! - Versioned JSON
//! - Style Dictionary source
//!
//! Every encoder is a pure function of the bundle and [`EncodeOptions`].
//! Output is deterministic: identical input always yields identical bytes.

pub mod css;
pub mod flat;
pub mod js;
pub mod json;
pub mod scss;
pub mod style_dictionary;
pub mod tailwind;
pub mod tree;
pub mod ts;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strata_core::{Category, ExportError, FoundationBundle};

/// An export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Css,
    Scss,
    Js,
    Ts,
    Tailwind,
    Json,
    StyleDictionary,
}

impl Format {
    pub const ALL: [Format; 7] = [
        Format::Css,
        Format::Scss,
        Format::Js,
        Format::Ts,
        Format::Tailwind,
        Format::Json,
        Format::StyleDictionary,
    ];

    /// The selector string accepted by [`Format::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Scss => "scss",
            Format::Js => "js",
            Format::Ts => "ts",
            Format::Tailwind => "tailwind",
            Format::Json => "json",
            Format::StyleDictionary => "styleDictionary",
        }
    }

    /// File extension for artifacts in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Scss => "scss",
            Format::Js | Format::Tailwind => "js",
            Format::Ts => "ts",
            Format::Json | Format::StyleDictionary => "json",
        }
    }

    /// Artifact file name for a design system, e.g. `acme-ui-tokens.css`.
    ///
    /// Formats that share an extension with another format carry a qualifier
    /// so that a full export never overwrites itself.
    pub fn file_name(&self, system: &str) -> String {
        let slug = system
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        match self {
            Format::Tailwind => format!("{}-tokens.tailwind.{}", slug, self.extension()),
            Format::StyleDictionary => {
                format!("{}-tokens.style-dictionary.{}", slug, self.extension())
            }
            _ => format!("{}-tokens.{}", slug, self.extension()),
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Format::Css => "text/css",
            Format::Scss => "text/x-scss",
            Format::Js | Format::Tailwind => "text/javascript",
            Format::Ts => "application/typescript",
            Format::Json | Format::StyleDictionary => "application/json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(Format::Css),
            "scss" => Ok(Format::Scss),
            "js" => Ok(Format::Js),
            "ts" => Ok(Format::Ts),
            "tailwind" => Ok(Format::Tailwind),
            "json" => Ok(Format::Json),
            "styleDictionary" | "style-dictionary" => Ok(Format::StyleDictionary),
            other => Err(ExportError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Options shared by every encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Emit section header comments. Ignored by JSON formats and when minifying.
    pub comments: bool,
    /// Compact CSS, SCSS and JSON output. The JS-family formats ignore it.
    pub minify: bool,
    /// Restrict output to these categories; `None` keeps everything present.
    pub categories: Option<Vec<Category>>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(mut self) -> Self {
        self.comments = true;
        self
    }

    pub fn minified(mut self) -> Self {
        self.minify = true;
        self
    }

    pub fn only(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }
}

/// Encode a bundle into one format.
///
/// The bundle is validated before anything is rendered, so an error never
/// comes with partial output.
pub fn encode(
    bundle: &FoundationBundle,
    format: Format,
    options: &EncodeOptions,
) -> Result<String, ExportError> {
    bundle.validate()?;
    encode_valid(bundle, format, options)
}

/// Encode a bundle into the format named by `selector`, e.g. `"tailwind"`.
pub fn encode_named(
    bundle: &FoundationBundle,
    selector: &str,
    options: &EncodeOptions,
) -> Result<String, ExportError> {
    encode(bundle, selector.parse()?, options)
}

/// Encode a bundle into every format, in [`Format::ALL`] order.
pub fn encode_all(
    bundle: &FoundationBundle,
    options: &EncodeOptions,
) -> Result<IndexMap<Format, String>, ExportError> {
    bundle.validate()?;
    Format::ALL
        .iter()
        .map(|&format| Ok((format, encode_valid(bundle, format, options)?)))
        .collect()
}

fn encode_valid(
    bundle: &FoundationBundle,
    format: Format,
    options: &EncodeOptions,
) -> Result<String, ExportError> {
    let filtered;
    let bundle = match &options.categories {
        Some(keep) => {
            filtered = bundle.filtered(keep);
            &filtered
        }
        None => bundle,
    };

    tracing::debug!(
        format = %format,
        categories = ?bundle.categories(),
        comments = options.comments,
        minify = options.minify,
        "encoding foundation bundle"
    );

    let output = match format {
        Format::Css => css::encode(bundle, options),
        Format::Scss => scss::encode(bundle, options),
        Format::Js => js::encode(bundle, options),
        Format::Ts => ts::encode(bundle, options),
        Format::Tailwind => tailwind::encode(bundle, options),
        Format::Json => json::encode(bundle, options)?,
        Format::StyleDictionary => style_dictionary::encode(bundle, options)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{ColorFoundation, ColorGroup, GroupKind, ModelError};

    #[test]
    fn test_format_selectors() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert_eq!(
            "style-dictionary".parse::<Format>().unwrap(),
            Format::StyleDictionary
        );
        assert_eq!(Format::Tailwind.extension(), "js");
        assert_eq!(Format::StyleDictionary.extension(), "json");
    }

    #[test]
    fn test_file_names_are_distinct() {
        assert_eq!(Format::Css.file_name("Acme UI"), "acme-ui-tokens.css");
        assert_eq!(Format::Tailwind.file_name("Acme UI"), "acme-ui-tokens.tailwind.js");
        assert_eq!(
            Format::StyleDictionary.file_name("acme"),
            "acme-tokens.style-dictionary.json"
        );
        let mut names: Vec<String> = Format::ALL.iter().map(|f| f.file_name("x")).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Format::ALL.len());
    }

    #[test]
    fn test_unknown_format_fails_closed() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported export format: yaml");
        assert!("CSS".parse::<Format>().is_err());

        let result = encode_named(&FoundationBundle::defaults(), "xml", &EncodeOptions::default());
        assert!(matches!(result, Err(ExportError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_invalid_bundle_is_rejected() {
        let bundle = FoundationBundle::new().with_colors(ColorFoundation::new(vec![
            ColorGroup::new("dup", "One", GroupKind::Semantic),
            ColorGroup::new("dup", "Two", GroupKind::Semantic),
        ]));
        for format in Format::ALL {
            let result = encode(&bundle, format, &EncodeOptions::default());
            assert!(matches!(
                result,
                Err(ExportError::InvalidBundle(ModelError::DuplicateGroupId { .. }))
            ));
        }
        assert!(encode_all(&bundle, &EncodeOptions::default()).is_err());
    }

    #[test]
    fn test_category_filter() {
        let options = EncodeOptions::new().only([Category::Grid]);
        let css = encode(&FoundationBundle::defaults(), Format::Css, &options).unwrap();
        assert!(css.contains("--grid-columns: 12;"));
        assert!(!css.contains("--color-"));
        assert!(!css.contains("--spacing-"));
    }

    #[test]
    fn test_encode_all_covers_every_format() {
        let all = encode_all(&FoundationBundle::defaults(), &EncodeOptions::default()).unwrap();
        let formats: Vec<Format> = all.keys().copied().collect();
        assert_eq!(formats, Format::ALL.to_vec());
        assert!(all.values().all(|out| !out.is_empty()));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: EncodeOptions = serde_json::from_str(r#"{"minify": true}"#).unwrap();
        assert_eq!(options, EncodeOptions::new().minified());
    }
}
