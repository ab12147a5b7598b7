//! Router boundary

use crate::menu::route;

/// The external router the shell drives.
pub trait Router {
    /// Request a transition to `path`.
    fn navigate(&mut self, path: &str);

    /// The current location.
    fn current_location(&self) -> &str;

    /// Step back in history. Routers without history report `false`.
    fn back(&mut self) -> bool {
        false
    }
}

/// In-process router with a history stack.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new(start: impl AsRef<str>) -> Self {
        Self {
            history: vec![route::normalize(start.as_ref())],
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn navigate(&mut self, path: &str) {
        let path = route::normalize(path);
        if self.history.last() != Some(&path) {
            self.history.push(path);
        }
    }

    fn current_location(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    /// No-op at the first entry.
    fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_pushes_history() {
        let mut router = MemoryRouter::default();
        router.navigate("/trade");
        router.navigate("/assets");
        assert_eq!(router.current_location(), "/assets");
        assert_eq!(router.history(), ["/", "/trade", "/assets"]);
    }

    #[test]
    fn repeated_navigation_is_not_pushed_twice() {
        let mut router = MemoryRouter::default();
        router.navigate("/trade");
        router.navigate("/trade/");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn back_stops_at_first_entry() {
        let mut router = MemoryRouter::new("/trade");
        router.navigate("/assets");
        assert!(router.back());
        assert_eq!(router.current_location(), "/trade");
        assert!(!router.back());
        assert_eq!(router.current_location(), "/trade");
    }
}
