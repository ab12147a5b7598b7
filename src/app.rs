use serde::Serialize;
use tracing::debug;

use crate::core::{
    dispatch, Action, LayoutEvent, LayoutState, MemoryRouter, MenuRow, NavigateTarget,
    PanelState, Router,
};
use crate::error::ResolveError;
use crate::menu::{route, MenuKey, MenuTree};
use crate::modules::ContentView;

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub title: String,
    pub footer: String,
    pub location: String,
    pub panel: PanelState,
    pub rows: Vec<MenuRow>,
    pub cursor: usize,
    pub active_keys: Vec<MenuKey>,
    pub breadcrumb: Vec<String>,
}

impl ShellView {
    /// Breadcrumb with the shell title as its root
    pub fn trail(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.breadcrumb.iter().map(String::as_str))
            .collect()
    }
}

#[derive(Debug)]
pub struct App<R: Router = MemoryRouter> {
    pub tree: MenuTree,
    pub router: R,
    pub layout: LayoutState,
    pub title: String,
    pub footer: String,
    pub should_quit: bool,
}

impl<R: Router> App<R> {
    /// Mount the shell on the router's current location
    pub fn new(tree: MenuTree, router: R, title: impl Into<String>, footer: impl Into<String>) -> Self {
        let layout = LayoutState::mount(&tree, router.current_location());
        Self {
            tree,
            router,
            layout,
            title: title.into(),
            footer: footer.into(),
            should_quit: false,
        }
    }

    fn update_layout(&mut self, event: LayoutEvent) {
        let state = std::mem::take(&mut self.layout);
        self.layout = state.update(&self.tree, event);
    }

    /// Re-derive layout state if the router moved
    pub fn sync_location(&mut self) {
        let location = self.router.current_location();
        if route::normalize(location) != self.layout.location {
            let location = location.to_string();
            self.update_layout(LayoutEvent::LocationChanged(location));
        }
    }

    /// Handle a click on a menu row.
    ///
    /// A navigable node goes to the router. A pure group header toggles its
    /// children instead. Unknown keys change nothing.
    pub fn click(&mut self, key: &str) -> Result<(), ResolveError> {
        let result = dispatch(&self.tree, &mut self.router, key);
        match &result {
            Ok(()) => self.sync_location(),
            Err(ResolveError::NodeNotNavigable(key)) => {
                self.update_layout(LayoutEvent::ToggleGroup(key.clone()));
            }
            Err(ResolveError::KeyNotFound(_)) => {}
        }
        if let Some(key) = self.tree.find(key).map(|entry| entry.key.clone()) {
            self.update_layout(LayoutEvent::Focus(key));
        }
        result
    }

    /// Apply an action from input handling
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Click(key) => {
                // Failures are a silent no-op; dispatch already logged them
                let _ = self.click(key.as_str());
            }
            Action::Activate => {
                if let Some(key) = self.layout.cursor_key(&self.tree) {
                    let _ = self.click(key.as_str());
                }
            }
            Action::Navigate(target) => self.navigate(target),
            Action::Cursor(movement) => self.update_layout(LayoutEvent::MoveCursor(movement)),
            Action::ExpandGroup => {
                if let Some(key) = self.layout.cursor_key(&self.tree) {
                    self.update_layout(LayoutEvent::OpenGroup(key));
                }
            }
            Action::CollapseGroup => {
                if let Some(key) = self.layout.cursor_key(&self.tree) {
                    self.update_layout(LayoutEvent::CloseGroup(key));
                }
            }
            Action::ToggleSider => self.update_layout(LayoutEvent::ToggleCollapsed),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn view(&self) -> ShellView {
        ShellView {
            title: self.title.clone(),
            footer: self.footer.clone(),
            location: self.layout.location.clone(),
            panel: self.layout.panel,
            rows: self.layout.rows(&self.tree),
            cursor: self.layout.cursor,
            active_keys: self.layout.active.keys.clone(),
            breadcrumb: self.layout.breadcrumb().to_vec(),
        }
    }

    pub fn content(&self) -> ContentView {
        ContentView::for_location(&self.tree, &self.layout.location, &self.title)
    }

    fn navigate(&mut self, target: NavigateTarget) {
        match target {
            NavigateTarget::Back => {
                if !self.router.back() {
                    debug!("history is at its first entry");
                }
            }
            NavigateTarget::Path(path) => self.router.navigate(&path),
        }
        self.sync_location();
    }
}
