//! Tailwind `theme.extend` configuration.

use strata_core::{ColorGroup, FoundationBundle};

use crate::js::ObjectWriter;
use crate::tree::{Branch, Node};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> String {
    let mut root = Branch::new();
    *root.branch_path(&["theme", "extend"]) = extend(bundle);

    let mut config = String::new();
    if options.comments {
        config.push_str("// Design System Tokens\n");
    }
    config.push_str("module.exports = ");
    ObjectWriter::new(&mut config).write_branch(&root);
    config.push_str(";\n");
    config
}

fn extend(bundle: &FoundationBundle) -> Branch {
    let mut extend = Branch::new();

    if let Some(colors) = &bundle.colors {
        let node = extend.branch("colors");
        for group in &colors.groups {
            add_color_group(node, group);
        }
    }

    if let Some(typography) = &bundle.typography {
        if !typography.font_families.is_empty() {
            let node = extend.branch("fontFamily");
            for family in &typography.font_families {
                let stack = family
                    .value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(Node::text)
                    .collect();
                node.insert(family.name.as_str(), Node::List(stack));
            }
        }
        if !typography.scales.is_empty() {
            let node = extend.branch("fontSize");
            for scale in &typography.scales {
                let metrics = Branch::record()
                    .with("lineHeight", Node::text(&scale.line_height))
                    .with("letterSpacing", Node::text(&scale.letter_spacing));
                node.insert(
                    scale.name.as_str(),
                    Node::List(vec![Node::text(&scale.font_size), Node::Map(metrics)]),
                );
            }
        }
        if !typography.weights.is_empty() {
            let node = extend.branch("fontWeight");
            for weight in &typography.weights {
                node.insert(weight.name.as_str(), Node::text(&weight.value));
            }
        }
    }

    if let Some(spacing) = &bundle.spacing {
        let node = extend.branch("spacing");
        let steps = spacing.scale.iter().map(|s| (&s.name, &s.value));
        let semantic = spacing.semantic.iter().map(|s| (&s.name, &s.value));
        for (name, value) in steps.chain(semantic) {
            node.insert(name.as_str(), Node::text(value));
        }
    }

    if let Some(grid) = &bundle.grid {
        if !grid.breakpoints.is_empty() {
            let node = extend.branch("screens");
            for bp in &grid.breakpoints {
                node.insert(bp.name.as_str(), Node::text(&bp.min));
            }
        }
        if !grid.containers.is_empty() {
            let node = extend.branch("maxWidth");
            for container in &grid.containers {
                node.insert(container.name.as_str(), Node::text(&container.max_width));
            }
        }
    }

    extend
}

// A single color collapses to `id: value`; a ramp nests under the group id,
// keyed by the part of each name after its last hyphen.
fn add_color_group(colors: &mut Branch, group: &ColorGroup) {
    match group.colors.as_slice() {
        [] => {}
        [only] => colors.insert(group.id.as_str(), Node::text(&only.value)),
        ramp => {
            let node = colors.branch(&group.id);
            for color in ramp {
                node.insert(shade_key(&color.name), Node::text(&color.value));
            }
        }
    }
}

fn shade_key(name: &str) -> &str {
    name.rsplit('-').next().unwrap_or(name)
}
