pub mod action;
pub mod dispatch;
pub mod layout;
pub mod router;

pub use action::{Action, CursorMove, NavigateTarget};
pub use dispatch::dispatch;
pub use layout::{ActiveRoute, LayoutEvent, LayoutState, MenuRow, PanelState};
pub use router::{MemoryRouter, Router};
