//! Style Dictionary source document.
//!
//! Tokens are `{ "value": ..., "type": ... }` leaves under the conventional
//! `color`, `size` and `asset` roots.

use strata_core::{ExportError, FoundationBundle};

use crate::tree::{Branch, Node};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> Result<String, ExportError> {
    let document = token_tree(bundle).to_json();
    let result = if options.minify {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document).map(|mut json| {
            json.push('\n');
            json
        })
    };
    result.map_err(|e| ExportError::Serialize {
        reason: e.to_string(),
    })
}

fn token(value: &str, kind: &str) -> Node {
    Node::Map(
        Branch::record()
            .with("value", Node::text(value))
            .with("type", Node::text(kind)),
    )
}

fn token_tree(bundle: &FoundationBundle) -> Branch {
    let mut root = Branch::new();

    if let Some(colors) = &bundle.colors {
        let node = root.branch("color");
        for group in &colors.groups {
            let entries = node.branch(&group.id);
            for color in &group.colors {
                let (base, shade) = split_shade(&color.name);
                entries
                    .branch(base)
                    .insert(shade, token(&color.value, "color"));
            }
        }
    }

    if let Some(typography) = &bundle.typography {
        let sizes = root.branch_path(&["size", "font"]);
        for scale in &typography.scales {
            sizes.insert(scale.name.as_str(), token(&scale.font_size, "dimension"));
        }
        let fonts = root.branch_path(&["asset", "font"]);
        for family in &typography.font_families {
            fonts.insert(family.name.as_str(), token(&family.value, "fontFamily"));
        }
    }

    if let Some(spacing) = &bundle.spacing {
        let node = root.branch_path(&["size", "spacing"]);
        for step in &spacing.scale {
            node.insert(step.name.as_str(), token(&step.value, "dimension"));
        }
    }

    if let Some(grid) = &bundle.grid {
        let node = root.branch_path(&["size", "breakpoint"]);
        for bp in &grid.breakpoints {
            node.insert(bp.name.as_str(), token(&bp.min, "dimension"));
        }
    }

    root
}

/// Split `primary-500` into `("primary", "500")`.
///
/// A name without a usable base keeps the whole name as its base.
fn split_shade(name: &str) -> (&str, &str) {
    match name.rsplit_once('-') {
        Some((base, shade)) if !base.is_empty() => (base, shade),
        Some((_, shade)) => (name, shade),
        None => (name, name),
    }
}
