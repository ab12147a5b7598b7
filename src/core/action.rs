//! Actions produced by input handling and applied by the app

use crate::menu::MenuKey;

/// Actions the shell can apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// A menu row was clicked
    Click(MenuKey),

    /// Click the row under the cursor
    Activate,

    /// Navigate outside of the menu (history, deep links)
    Navigate(NavigateTarget),

    /// Move the menu cursor
    Cursor(CursorMove),

    /// Open the group under the cursor
    ExpandGroup,

    /// Close the group under the cursor
    CollapseGroup,

    /// Collapse or expand the side panel
    ToggleSider,

    /// Request quit
    Quit,
}

/// Navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
    /// Go back to the previous location
    Back,
    /// Go to a route directly
    Path(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    First,
    Last,
}
