//! Menu declaration types

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Identifier of a menu node. Unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MenuKey(String);

impl MenuKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MenuKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for MenuKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Decoration shown next to a label. Has no effect on resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    PieChart,
    Desktop,
    User,
    Team,
    File,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::PieChart => "◔",
            Icon::Desktop => "▭",
            Icon::User => "◉",
            Icon::Team => "◎",
            Icon::File => "▤",
        }
    }
}

/// Shape of a node, derived from whether it has a path and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Has a path and no children
    Leaf,
    /// Has no path; only expands/collapses
    Group,
    /// Has a path and children; clicking navigates, expanding is separate
    NavigableGroup,
}

impl NodeKind {
    pub fn classify(has_path: bool, has_children: bool) -> Self {
        match (has_path, has_children) {
            (true, false) => NodeKind::Leaf,
            (true, true) => NodeKind::NavigableGroup,
            (false, _) => NodeKind::Group,
        }
    }
}

/// One entry of a nested menu declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: MenuKey,
    pub label: String,
    pub icon: Option<Icon>,
    pub path: Option<String>,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// A navigable item
    pub fn item(key: impl Into<MenuKey>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// A group header without a path
    pub fn group(
        key: impl Into<MenuKey>,
        label: impl Into<String>,
        children: impl IntoIterator<Item = MenuNode>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            path: None,
            children: children.into_iter().collect(),
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::classify(self.path.is_some(), !self.children.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_path_and_children() {
        let leaf = MenuNode::item("a", "A", "/a");
        assert_eq!(leaf.kind(), NodeKind::Leaf);

        let group = MenuNode::group("g", "G", [MenuNode::item("b", "B", "/b")]);
        assert_eq!(group.kind(), NodeKind::Group);

        let both = group.clone().with_path("/g");
        assert_eq!(both.kind(), NodeKind::NavigableGroup);

        // An empty header is still a group, not a leaf
        let empty = MenuNode::group("e", "E", Vec::new());
        assert_eq!(empty.kind(), NodeKind::Group);
    }

    #[test]
    fn menu_key_borrows_as_str() {
        let mut keys = std::collections::HashSet::new();
        keys.insert(MenuKey::from("sub1"));
        assert!(keys.contains("sub1"));
        assert_eq!(MenuKey::new("x").to_string(), "x");
    }
}
