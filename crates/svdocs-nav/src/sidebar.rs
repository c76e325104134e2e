//! Sidebar trees and longest-prefix resolution.
//!
//! A [`SidebarMap`] registers one [`SidebarEntry`] per path prefix. Prefixes
//! must be mutually disjoint: a prefix may not equal or contain another one.
//! This is checked on insert, so lookup never needs a tie-break.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Locale, NavError};

/// Sidebar node: either a link or a labeled group of nodes.
///
/// Serializes in the shape site generators expect: `{ text, link }` for
/// leaves and `{ text, items, collapsed? }` for groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Terminal link.
    Leaf {
        #[serde(rename = "text")]
        label: String,
        #[serde(rename = "link")]
        target: String,
    },
    /// Labeled container. Order of `children` is render order.
    Group {
        #[serde(rename = "text")]
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
        #[serde(rename = "items")]
        children: Vec<SidebarNode>,
    },
}

impl SidebarNode {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Link target for leaves, `None` for groups.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Leaf { target, .. } => Some(target),
            Self::Group { .. } => None,
        }
    }

    /// Child nodes (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[SidebarNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// Find the direct child with the given label.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&SidebarNode> {
        self.children().iter().find(|node| node.label() == label)
    }

    /// Path from this node down to the leaf linking to `target`, inclusive.
    fn trail_to<'a>(&'a self, target: &str, trail: &mut Vec<&'a SidebarNode>) -> bool {
        trail.push(self);
        let found = match self {
            Self::Leaf { target: t, .. } => t == target,
            Self::Group { children, .. } => {
                children.iter().any(|child| child.trail_to(target, trail))
            }
        };
        if !found {
            trail.pop();
        }
        found
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SidebarNode>) {
        match self {
            Self::Leaf { .. } => out.push(self),
            Self::Group { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// Sidebar tree registered under a path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// Section root path. Item targets are already absolute and do not
    /// need to be joined with it.
    #[serde(rename = "base")]
    pub base_path: String,
    /// Top-level nodes in render order.
    pub items: Vec<SidebarNode>,
}

impl SidebarEntry {
    /// Top-level node with the given label.
    #[must_use]
    pub fn item(&self, label: &str) -> Option<&SidebarNode> {
        self.items.iter().find(|node| node.label() == label)
    }

    /// All leaves in depth-first render order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&SidebarNode> {
        let mut out = Vec::new();
        for node in &self.items {
            node.collect_leaves(&mut out);
        }
        out
    }

    /// Chain of groups leading to the leaf that links to `target`, ending
    /// with that leaf. `None` if no leaf links there.
    #[must_use]
    pub fn trail(&self, target: &str) -> Option<Vec<&SidebarNode>> {
        let mut trail = Vec::new();
        self.items
            .iter()
            .any(|node| node.trail_to(target, &mut trail))
            .then_some(trail)
    }

    /// Previous and next leaves around `target` in render order.
    ///
    /// Used for the doc footer links. Returns `(None, None)` when `target`
    /// is not in this tree.
    #[must_use]
    pub fn neighbors(&self, target: &str) -> (Option<&SidebarNode>, Option<&SidebarNode>) {
        let leaves = self.leaves();
        let Some(idx) = leaves.iter().position(|leaf| leaf.target() == Some(target)) else {
            return (None, None);
        };
        let prev = idx.checked_sub(1).map(|i| leaves[i]);
        let next = leaves.get(idx + 1).copied();
        (prev, next)
    }
}

/// Sidebar trees keyed by path prefix.
///
/// Iteration is in prefix order, so serialized output never depends on
/// insertion history or hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarMap {
    entries: BTreeMap<String, SidebarEntry>,
}

impl SidebarMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sidebar tree.
    ///
    /// # Errors
    ///
    /// Returns `NavError::AmbiguousSidebarPrefix` if `prefix` equals an
    /// existing prefix or either one is a prefix of the other.
    pub fn insert(
        &mut self,
        locale: Locale,
        prefix: String,
        entry: SidebarEntry,
    ) -> Result<(), NavError> {
        if let Some(existing) = self
            .entries
            .keys()
            .find(|existing| existing.starts_with(&prefix) || prefix.starts_with(existing.as_str()))
        {
            return Err(NavError::AmbiguousSidebarPrefix {
                locale: locale.code().to_owned(),
                prefix,
                existing: existing.clone(),
            });
        }
        self.entries.insert(prefix, entry);
        Ok(())
    }

    /// Select the entry whose prefix is the longest prefix of `path`.
    ///
    /// Returns the matched prefix together with its entry, or `None` when
    /// the page has no sidebar.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&str, &SidebarEntry)> {
        self.entries
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, entry)| (prefix.as_str(), entry))
    }

    /// Entry registered under exactly `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&SidebarEntry> {
        self.entries.get(prefix)
    }

    /// Iterate over `(prefix, entry)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarEntry)> {
        self.entries
            .iter()
            .map(|(prefix, entry)| (prefix.as_str(), entry))
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
