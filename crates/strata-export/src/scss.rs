//! SCSS variables.

use strata_core::{Category, FoundationBundle};

use crate::flat::{self, FlatValue};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> String {
    let tokens = flat::collect(bundle);
    let comments = options.comments && !options.minify;
    let mut scss = String::new();

    if comments {
        scss.push_str("// Design System Tokens\n\n");
    }

    for (i, (category, entries)) in tokens.sections().into_iter().enumerate() {
        if i > 0 && !options.minify {
            scss.push('\n');
        }
        if comments {
            scss.push_str(&format!("// {} Variables\n", flat::section_title(category)));
        }
        let mut group: Option<&str> = None;
        for (key, entry) in entries {
            if comments && category == Category::Colors && entry.group.as_deref() != group {
                group = entry.group.as_deref();
                if let Some(name) = group {
                    scss.push_str(&format!("// {} Colors\n", name));
                }
            }
            let value = match &entry.value {
                FlatValue::Literal(v) => v.clone(),
                FlatValue::Reference(target) => format!("${}", target),
            };
            scss.push_str(&format!("${}: {};\n", key, value));
        }
    }

    scss
}
