//! JavaScript module export, plus the object-literal writer shared with the
//! TypeScript and Tailwind encoders.

use strata_core::FoundationBundle;

use crate::tree::{Branch, Node};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> String {
    let mut js = String::new();
    if options.comments {
        js.push_str("// Design System Tokens\n");
    }
    js.push_str("export const tokens = ");
    ObjectWriter::new(&mut js).write_branch(&token_tree(bundle));
    js.push_str(";\n");
    js
}

/// The nested token object exported by the JS and TS encoders.
pub(crate) fn token_tree(bundle: &FoundationBundle) -> Branch {
    let mut root = Branch::new();

    if let Some(colors) = &bundle.colors {
        let node = root.branch("colors");
        for group in &colors.groups {
            let entries = node.branch(&group.id);
            for color in &group.colors {
                entries.insert(color.name.as_str(), Node::text(&color.value));
            }
        }
    }

    if let Some(typography) = &bundle.typography {
        let node = root.branch("typography");
        let families = node.branch("fontFamilies");
        for family in &typography.font_families {
            families.insert(family.name.as_str(), Node::text(&family.value));
        }
        let weights = node.branch("weights");
        for weight in &typography.weights {
            weights.insert(weight.name.as_str(), Node::text(&weight.value));
        }
        let scales = node.branch("scales");
        for scale in &typography.scales {
            let entry = Branch::record()
                .with("fontSize", Node::text(&scale.font_size))
                .with("lineHeight", Node::text(&scale.line_height))
                .with("letterSpacing", Node::text(&scale.letter_spacing));
            scales.insert(scale.name.as_str(), Node::Map(entry));
        }
    }

    if let Some(spacing) = &bundle.spacing {
        let node = root.branch("spacing");
        for step in &spacing.scale {
            node.insert(step.name.as_str(), Node::text(&step.value));
        }
        for step in &spacing.semantic {
            node.insert(step.name.as_str(), Node::text(&step.value));
        }
    }

    if let Some(grid) = &bundle.grid {
        let node = root.branch("grid");
        node.insert(
            "columns",
            Node::Map(
                Branch::record()
                    .with("count", Node::Integer(grid.columns.count))
                    .with("gap", Node::text(&grid.columns.gap))
                    .with("margin", Node::text(&grid.columns.margin)),
            ),
        );
        let breakpoints = node.branch("breakpoints");
        for bp in &grid.breakpoints {
            let entry = Branch::record()
                .with("min", Node::text(&bp.min))
                .with("max", Node::text(&bp.max))
                .with("columns", Node::Integer(bp.columns));
            breakpoints.insert(bp.name.as_str(), Node::Map(entry));
        }
        let containers = node.branch("containers");
        for container in &grid.containers {
            let entry = Branch::record()
                .with("maxWidth", Node::text(&container.max_width))
                .with("breakpoint", Node::text(&container.breakpoint));
            containers.insert(container.name.as_str(), Node::Map(entry));
        }
    }

    root
}

/// Writes a [`Branch`] as a multi-line JS object literal with two-space
/// indentation and trailing commas.
pub(crate) struct ObjectWriter<'a> {
    out: &'a mut String,
    indent: usize,
}

impl<'a> ObjectWriter<'a> {
    pub(crate) fn new(out: &'a mut String) -> Self {
        Self { out, indent: 0 }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    pub(crate) fn write_branch(&mut self, branch: &Branch) {
        if branch.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.indent += 1;
        for (key, node) in branch.iter() {
            self.write_indent();
            self.out.push_str(&object_key(key, node.is_map() || branch.is_record()));
            self.out.push_str(": ");
            self.write_node(node);
            self.out.push_str(",\n");
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Map(branch) => self.write_branch(branch),
            other => self.out.push_str(&inline_value(other)),
        }
    }
}

/// Single-line rendering, used for list elements and scalars.
fn inline_value(node: &Node) -> String {
    match node {
        Node::Text(s) => quote(s),
        Node::Integer(n) => n.to_string(),
        Node::List(items) => {
            let items: Vec<String> = items.iter().map(inline_value).collect();
            format!("[{}]", items.join(", "))
        }
        Node::Map(branch) if branch.is_empty() => "{}".to_string(),
        Node::Map(branch) => {
            let fields: Vec<String> = branch
                .iter()
                .map(|(k, v)| format!("{}: {}", identifier_or_quoted(k), inline_value(v)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
    }
}

/// Token names are always quoted. Group keys and record fields stay bare
/// when they are valid identifiers.
pub(crate) fn object_key(key: &str, structural: bool) -> String {
    if structural {
        identifier_or_quoted(key)
    } else {
        quote(key)
    }
}

fn identifier_or_quoted(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted JS string literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
