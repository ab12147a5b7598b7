//! Menu key resolution

use super::tree::MenuTree;
use crate::error::ResolveError;

impl MenuTree {
    /// Map a clicked key to its navigation target.
    ///
    /// Nodes with both a path and children resolve to the path; expanding
    /// them is a separate action. Group headers without a path yield
    /// [`ResolveError::NodeNotNavigable`].
    pub fn resolve(&self, key: &str) -> Result<&str, ResolveError> {
        let entry = self
            .find(key)
            .ok_or_else(|| ResolveError::KeyNotFound(key.into()))?;
        entry
            .path
            .as_deref()
            .ok_or_else(|| ResolveError::NodeNotNavigable(entry.key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ResolveError;
    use crate::menu::{MenuNode, MenuTree};

    fn tree() -> MenuTree {
        MenuTree::new([
            MenuNode::item("Dashboard", "Dashboard", "/"),
            MenuNode::item("TradeCenter", "TradeCenter", "/trade"),
            MenuNode::group(
                "AssetAnalysis",
                "AssetAnalysis",
                [
                    MenuNode::item("Holdings", "Holdings", "/assets"),
                    MenuNode::item("Transactions", "Transactions", "/transactions"),
                ],
            ),
            MenuNode::group(
                "Research",
                "Research",
                [MenuNode::item("Reports", "Reports", "/research/reports")],
            )
            .with_path("/research"),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_top_level_and_nested_keys() {
        let tree = tree();
        assert_eq!(tree.resolve("TradeCenter"), Ok("/trade"));
        assert_eq!(tree.resolve("Dashboard"), Ok("/"));
        assert_eq!(tree.resolve("Transactions"), Ok("/transactions"));
    }

    #[test]
    fn group_header_is_not_navigable() {
        assert_eq!(
            tree().resolve("AssetAnalysis"),
            Err(ResolveError::NodeNotNavigable("AssetAnalysis".into()))
        );
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert_eq!(
            tree().resolve("unknown"),
            Err(ResolveError::KeyNotFound("unknown".into()))
        );
    }

    #[test]
    fn navigation_wins_over_expansion() {
        let tree = tree();
        assert_eq!(tree.resolve("Research"), Ok("/research"));
        assert_eq!(tree.resolve("Reports"), Ok("/research/reports"));
    }

    #[test]
    fn indexed_lookup_matches_depth_first_search() {
        let tree = tree();
        for entry in tree.iter() {
            let searched = tree
                .iter()
                .find(|candidate| candidate.key == entry.key)
                .and_then(|candidate| candidate.path.as_deref());
            assert_eq!(tree.resolve(entry.key.as_str()).ok(), searched);
        }
    }
}
