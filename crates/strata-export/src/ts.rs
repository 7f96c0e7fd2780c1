//! TypeScript module export: a `DesignTokens` interface describing the token
//! object, then the object itself.

use strata_core::FoundationBundle;

use crate::js::{object_key, token_tree, ObjectWriter};
use crate::tree::{Branch, Node};
use crate::EncodeOptions;

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> String {
    let tree = token_tree(bundle);
    let mut ts = String::new();

    if options.comments {
        ts.push_str("// Design System Tokens\n");
    }
    ts.push_str("export interface DesignTokens ");
    write_interface(&mut ts, &tree, 0);
    ts.push_str("\n\nexport const tokens: DesignTokens = ");
    ObjectWriter::new(&mut ts).write_branch(&tree);
    ts.push_str(";\n");
    ts
}

fn write_interface(out: &mut String, branch: &Branch, indent: usize) {
    if branch.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for (key, node) in branch.iter() {
        out.push_str(&"  ".repeat(indent + 1));
        out.push_str(&object_key(key, node.is_map() || branch.is_record()));
        out.push_str(": ");
        match node {
            Node::Map(child) if !child.is_empty() => write_interface(out, child, indent + 1),
            other => out.push_str(&type_of(other)),
        }
        out.push_str(";\n");
    }
    out.push_str(&"  ".repeat(indent));
    out.push('}');
}

fn type_of(node: &Node) -> String {
    match node {
        Node::Text(_) => "string".to_string(),
        Node::Integer(_) => "number".to_string(),
        Node::List(items) => {
            let items: Vec<String> = items.iter().map(type_of).collect();
            format!("[{}]", items.join(", "))
        }
        Node::Map(branch) if branch.is_empty() => "Record<string, never>".to_string(),
        Node::Map(branch) => {
            let fields: Vec<String> = branch
                .iter()
                .map(|(k, v)| format!("{}: {}", object_key(k, true), type_of(v)))
                .collect();
            format!("{{ {} }}", fields.join("; "))
        }
    }
}
