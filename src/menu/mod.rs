//! Menu model
//!
//! - `node` - declaration types (MenuKey, MenuNode, Icon)
//! - `tree` - validated, indexed, immutable MenuTree
//! - `resolve` - key -> path resolution
//! - `route` - location normalization shared by the tree and the router
//! - `builtin` - the SmartFin side menu

pub mod builtin;
mod node;
mod resolve;
pub mod route;
mod tree;

pub use node::{Icon, MenuKey, MenuNode, NodeKind};
pub use tree::{MenuEntry, MenuTree, NodeId, Nodes};
