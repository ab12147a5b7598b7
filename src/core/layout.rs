//! Layout state: side panel, active node, breadcrumb, open groups and cursor.
//!
//! State is a plain value. Every change goes through [`LayoutState::update`],
//! which takes the old state and an event and returns the new state; nothing
//! here talks to the router or the terminal.

use std::collections::BTreeSet;

use serde::Serialize;

use super::action::CursorMove;
use crate::menu::{route, Icon, MenuKey, MenuTree, NodeKind};

/// Side panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelState {
    #[default]
    Expanded,
    Collapsed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Collapsed,
            PanelState::Collapsed => PanelState::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == PanelState::Collapsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    /// Collapse trigger pressed
    ToggleCollapsed,
    /// Panel collapsed or expanded by the user to a specific state
    SetCollapsed(bool),
    /// The router reports a new location
    LocationChanged(String),
    ToggleGroup(MenuKey),
    OpenGroup(MenuKey),
    CloseGroup(MenuKey),
    MoveCursor(CursorMove),
    /// Put the cursor on a key's row, if visible
    Focus(MenuKey),
}

/// What the location maps to in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveRoute {
    /// Every node whose path equals the location, in pre-order
    pub keys: Vec<MenuKey>,
    /// Labels from the top-level ancestor down to the first active node.
    /// Empty when nothing matches: the trail is root-only.
    pub breadcrumb: Vec<String>,
    /// Ancestors of the first active node, excluding the node itself
    pub ancestors: Vec<MenuKey>,
}

impl ActiveRoute {
    pub fn derive(tree: &MenuTree, location: &str) -> Self {
        let ids = tree.nodes_at(location);
        let Some(&primary) = ids.first() else {
            return Self::default();
        };

        let lineage = tree.lineage(primary);
        let breadcrumb = lineage
            .iter()
            .map(|id| tree.get(*id).label.clone())
            .collect();
        let ancestors = lineage[..lineage.len() - 1]
            .iter()
            .map(|id| tree.get(*id).key.clone())
            .collect();

        Self {
            keys: ids.iter().map(|id| tree.get(*id).key.clone()).collect(),
            breadcrumb,
            ancestors,
        }
    }

    pub fn primary(&self) -> Option<&MenuKey> {
        self.keys.first()
    }

    pub fn is_root_only(&self) -> bool {
        self.breadcrumb.is_empty()
    }
}

/// A visible menu row, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuRow {
    pub key: MenuKey,
    pub label: String,
    pub icon: Option<Icon>,
    pub depth: usize,
    pub kind: NodeKind,
    /// Group rows only: children are shown
    pub open: bool,
    /// The row's path is the current location
    pub active: bool,
    /// An active node sits below this row
    pub contains_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub panel: PanelState,
    /// Normalized current location
    pub location: String,
    pub active: ActiveRoute,
    pub open: BTreeSet<MenuKey>,
    /// Index into the visible rows
    pub cursor: usize,
}

impl LayoutState {
    /// Initial state at shell mount: panel expanded, ancestors of the active
    /// node opened, cursor on the active row.
    pub fn mount(tree: &MenuTree, location: &str) -> Self {
        Self::default().with_location(tree, location)
    }

    pub fn update(self, tree: &MenuTree, event: LayoutEvent) -> Self {
        // Panel and group changes reshape the visible rows; the cursor stays
        // on its node, or the nearest ancestor still shown.
        let anchor = match &event {
            LayoutEvent::ToggleCollapsed
            | LayoutEvent::SetCollapsed(_)
            | LayoutEvent::ToggleGroup(_)
            | LayoutEvent::OpenGroup(_)
            | LayoutEvent::CloseGroup(_) => self.cursor_key(tree),
            _ => None,
        };

        let next = match event {
            LayoutEvent::ToggleCollapsed => Self {
                panel: self.panel.toggled(),
                ..self
            },
            LayoutEvent::SetCollapsed(collapsed) => Self {
                panel: if collapsed {
                    PanelState::Collapsed
                } else {
                    PanelState::Expanded
                },
                ..self
            },
            LayoutEvent::LocationChanged(location) => self.with_location(tree, &location),
            LayoutEvent::ToggleGroup(key) => {
                if self.open.contains(&key) {
                    self.close_group(key)
                } else {
                    self.open_group(tree, key)
                }
            }
            LayoutEvent::OpenGroup(key) => self.open_group(tree, key),
            LayoutEvent::CloseGroup(key) => self.close_group(key),
            LayoutEvent::MoveCursor(movement) => self.move_cursor(tree, movement),
            LayoutEvent::Focus(key) => self.focus(tree, &key),
        };
        let next = match anchor {
            Some(key) => next.anchor_cursor(tree, &key),
            None => next,
        };
        next.clamp_cursor(tree)
    }

    pub fn active_key(&self) -> Option<&MenuKey> {
        self.active.primary()
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.active.breadcrumb
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    /// Rows shown in the side panel, in declared order.
    ///
    /// A collapsed panel shows top-level rows only.
    pub fn rows(&self, tree: &MenuTree) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<_> = tree.roots().iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            let entry = tree.get(id);
            let open = entry.has_children() && self.open.contains(&entry.key);
            rows.push(MenuRow {
                key: entry.key.clone(),
                label: entry.label.clone(),
                icon: entry.icon,
                depth: entry.depth,
                kind: entry.kind(),
                open,
                active: self.active.keys.contains(&entry.key),
                contains_active: self.active.ancestors.contains(&entry.key),
            });
            if open && !self.panel.is_collapsed() {
                stack.extend(entry.children.iter().rev().copied());
            }
        }
        rows
    }

    /// The key of the row under the cursor
    pub fn cursor_key(&self, tree: &MenuTree) -> Option<MenuKey> {
        self.rows(tree).into_iter().nth(self.cursor).map(|row| row.key)
    }

    fn with_location(self, tree: &MenuTree, location: &str) -> Self {
        let active = ActiveRoute::derive(tree, location);
        let mut open = self.open;
        // Opened, never closed, by navigation
        open.extend(active.ancestors.iter().cloned());

        let next = Self {
            location: route::normalize(location),
            active,
            open,
            ..self
        };
        match next.active.primary().cloned() {
            Some(key) => next.focus(tree, &key),
            None => next,
        }
    }

    fn open_group(mut self, tree: &MenuTree, key: MenuKey) -> Self {
        if tree.find(key.as_str()).is_some_and(|entry| entry.has_children()) {
            self.open.insert(key);
        }
        self
    }

    fn close_group(mut self, key: MenuKey) -> Self {
        self.open.remove(&key);
        self
    }

    fn move_cursor(mut self, tree: &MenuTree, movement: CursorMove) -> Self {
        let len = self.rows(tree).len();
        self.cursor = match movement {
            CursorMove::Up => self.cursor.saturating_sub(1),
            CursorMove::Down if self.cursor + 1 < len => self.cursor + 1,
            CursorMove::Down => self.cursor,
            CursorMove::First => 0,
            CursorMove::Last => len.saturating_sub(1),
        };
        self
    }

    fn focus(mut self, tree: &MenuTree, key: &MenuKey) -> Self {
        if let Some(index) = self.rows(tree).iter().position(|row| &row.key == key) {
            self.cursor = index;
        }
        self
    }

    fn anchor_cursor(mut self, tree: &MenuTree, key: &MenuKey) -> Self {
        let Some(id) = tree.id_of(key.as_str()) else {
            return self;
        };
        let rows = self.rows(tree);
        let index = tree.lineage(id).iter().rev().find_map(|id| {
            let key = &tree.get(*id).key;
            rows.iter().position(|row| &row.key == key)
        });
        if let Some(index) = index {
            self.cursor = index;
        }
        self
    }

    fn clamp_cursor(mut self, tree: &MenuTree) -> Self {
        let len = self.rows(tree).len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
        self
    }
}
