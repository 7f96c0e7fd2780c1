//! Ordered token trees shared by the nested encoders.
//!
//! The JS, TS, Tailwind and Style Dictionary encoders each build a [`Branch`]
//! from a bundle and then render it. Keys keep insertion order.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A value in a token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Integer(u32),
    List(Vec<Node>),
    Map(Branch),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::Text(s) => Value::String(s.clone()),
            Node::Integer(n) => Value::from(*n),
            Node::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Map(branch) => branch.to_json(),
        }
    }
}

/// An ordered map of child nodes.
///
/// A record branch holds fixed field names such as `fontSize` or `min`
/// rather than token names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    entries: IndexMap<String, Node>,
    record: bool,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record() -> Self {
        Self {
            record: true,
            ..Self::default()
        }
    }

    pub fn is_record(&self) -> bool {
        self.record
    }

    /// Insert a child. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            tracing::debug!(key = %key, "duplicate token key, keeping the later value");
        }
        self.entries.insert(key, node);
    }

    /// Builder form of [`Branch::insert`].
    pub fn with(mut self, key: impl Into<String>, node: Node) -> Self {
        self.insert(key, node);
        self
    }

    /// The child branch at `key`, created empty if missing.
    ///
    /// A leaf already stored at `key` is replaced by the branch.
    pub fn branch(&mut self, key: &str) -> &mut Branch {
        let slot = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Node::Map(Branch::new()));
        if !slot.is_map() {
            tracing::debug!(key, "duplicate token key, replacing leaf with group");
            *slot = Node::Map(Branch::new());
        }
        match slot {
            Node::Map(branch) => branch,
            _ => unreachable!("slot holds a map"),
        }
    }

    /// Walk `path`, creating branches as needed.
    pub fn branch_path(&mut self, path: &[&str]) -> &mut Branch {
        path.iter().fold(self, |branch, key| branch.branch(key))
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        Value::Object(map)
    }
}
