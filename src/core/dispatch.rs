//! Menu click dispatch

use tracing::{debug, info};

use super::router::Router;
use crate::error::ResolveError;
use crate::menu::MenuTree;

/// Resolve `key` and ask the router to navigate there.
///
/// The router is called exactly once on success and never on failure.
pub fn dispatch<R>(tree: &MenuTree, router: &mut R, key: &str) -> Result<(), ResolveError>
where
    R: Router + ?Sized,
{
    match tree.resolve(key) {
        Ok(path) => {
            info!(key, path, "menu navigation");
            router.navigate(path);
            Ok(())
        }
        Err(err) => {
            debug!(key, error = %err, "menu click ignored");
            Err(err)
        }
    }
}
