//! The export structure: a tree mirroring the directory hierarchy.
//!
//! Branches are directories, leaves are import aliases. Keys live in a
//! `BTreeMap`, so every traversal sees them in sorted order no matter the
//! insertion order.

use std::collections::BTreeMap;

use barrelgen_codegen::Diagnostic;
use barrelgen_core::{export_name, is_identifier};

use crate::imports::ROOT_SEGMENT;

const STAGE: &str = "structure";

/// A node of the export structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    /// Alias of an imported module.
    Leaf(String),
    /// A directory and its entries.
    Branch(BTreeMap<String, StructureNode>),
}

impl StructureNode {
    fn branch() -> Self {
        StructureNode::Branch(BTreeMap::new())
    }

    /// The alias if this is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            StructureNode::Leaf(alias) => Some(alias),
            StructureNode::Branch(_) => None,
        }
    }

    /// The children if this is a branch.
    pub fn as_branch(&self) -> Option<&BTreeMap<String, StructureNode>> {
        match self {
            StructureNode::Leaf(_) => None,
            StructureNode::Branch(children) => Some(children),
        }
    }
}

/// Root of the export structure plus the collisions found while building it.
#[derive(Debug, Clone, Default)]
pub struct ExportStructure {
    root: BTreeMap<String, StructureNode>,
    diagnostics: Vec<Diagnostic>,
}

impl ExportStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `alias` at `segments` / `name`, creating branches as needed.
    ///
    /// A `"."` segment stays at the current level. On a collision the later
    /// entry wins and a warning is recorded.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], name: &str, alias: impl Into<String>) {
        let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        let location = describe(&segments, name);
        insert_at(
            &mut self.root,
            &segments,
            name,
            alias.into(),
            &location,
            &mut self.diagnostics,
        );
    }

    /// Top-level entries in sorted order.
    pub fn root(&self) -> &BTreeMap<String, StructureNode> {
        &self.root
    }

    /// Look up a node by its key path.
    pub fn get(&self, path: &[&str]) -> Option<&StructureNode> {
        let (last, parents) = path.split_last()?;
        let mut children = &self.root;
        for key in parents {
            children = children.get(*key)?.as_branch()?;
        }
        children.get(*last)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Overwrites recorded during insertion, plus sibling keys that render
    /// to the same export name and names that cannot be rendered as written.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.clone();
        check_names(&self.root, &mut Vec::new(), &mut diagnostics);
        diagnostics
    }
}

fn describe(segments: &[&str], name: &str) -> String {
    segments
        .iter()
        .filter(|segment| **segment != ROOT_SEGMENT)
        .chain(std::iter::once(&name))
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

fn insert_at(
    children: &mut BTreeMap<String, StructureNode>,
    segments: &[&str],
    name: &str,
    alias: String,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some((segment, rest)) = segments.split_first() else {
        set_leaf(children, name, alias, location, diagnostics);
        return;
    };

    if *segment == ROOT_SEGMENT {
        insert_at(children, rest, name, alias, location, diagnostics);
        return;
    }

    let mut nested = match children.remove(*segment) {
        Some(StructureNode::Branch(nested)) => nested,
        Some(StructureNode::Leaf(previous)) => {
            diagnostics.push(
                Diagnostic::warning(
                    STAGE,
                    format!(
                        "directory '{}' replaces the export '{}' ({})",
                        segment, segment, previous
                    ),
                )
                .at(location),
            );
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    };
    insert_at(&mut nested, rest, name, alias, location, diagnostics);
    children.insert(segment.to_string(), StructureNode::Branch(nested));
}

fn set_leaf(
    children: &mut BTreeMap<String, StructureNode>,
    name: &str,
    alias: String,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let message = match children.insert(name.to_string(), StructureNode::Leaf(alias.clone())) {
        None => return,
        Some(StructureNode::Leaf(previous)) => format!(
            "duplicate export '{}': {} replaces {}",
            name, alias, previous
        ),
        Some(StructureNode::Branch(_)) => format!(
            "module '{}' ({}) replaces the directory of the same name",
            name, alias
        ),
    };
    diagnostics.push(Diagnostic::warning(STAGE, message).at(location));
}

fn check_names<'a>(
    children: &'a BTreeMap<String, StructureNode>,
    trail: &mut Vec<&'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for key in children.keys() {
        by_name.entry(export_name(key)).or_default().push(key);
    }

    for key in children.keys() {
        let name = export_name(key);
        // Top-level names become bindings; nested ones are quoted property keys.
        let renderable = if trail.is_empty() {
            is_identifier(name)
        } else {
            !name.is_empty()
        };
        if !renderable {
            let mut location = trail.clone();
            location.push(key);
            diagnostics.push(
                Diagnostic::warning(
                    STAGE,
                    format!("'{}' exports as '{}', which is not a valid name", key, name),
                )
                .at(location.join("/")),
            );
        }
    }

    for (name, keys) in by_name {
        if keys.len() > 1 {
            let quoted: Vec<String> = keys.iter().map(|k| format!("'{}'", k)).collect();
            let mut location = trail.clone();
            location.push(name);
            diagnostics.push(
                Diagnostic::warning(
                    STAGE,
                    format!(
                        "{} all export as '{}'; only the last is reachable",
                        quoted.join(", "),
                        name
                    ),
                )
                .at(location.join("/")),
            );
        }
    }

    for (key, node) in children {
        if let StructureNode::Branch(nested) = node {
            trail.push(key);
            check_names(nested, trail, diagnostics);
            trail.pop();
        }
    }
}
