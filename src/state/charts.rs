//! Chart Instance Registry
//!
//! Owns the live chart handles, keyed by canvas id. Views conditionally
//! remove and recreate canvas elements, so every re-render must dispose the
//! previous handle for a canvas before a new one goes live.

use std::collections::HashMap;

/// A live chart bound to one canvas element.
///
/// Dropping a handle must release everything the chart holds onto, in
/// particular any running animation ticker.
pub trait ChartHandle {
    /// Id of the canvas element this chart draws on.
    fn canvas_id(&self) -> &str;
}

/// Registry of live charts, at most one per canvas id.
#[derive(Default)]
pub struct ChartRegistry {
    live: HashMap<String, Box<dyn ChartHandle>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the chart currently bound to `canvas_id`, if any.
    pub fn dispose(&mut self, canvas_id: &str) {
        self.live.remove(canvas_id);
    }

    /// Install a new handle. Any previous handle for the same canvas id is
    /// dropped before the new one is stored.
    pub fn install(&mut self, handle: Box<dyn ChartHandle>) {
        let canvas_id = handle.canvas_id().to_string();
        self.live.remove(&canvas_id);
        self.live.insert(canvas_id, handle);
    }

    pub fn is_live(&self, canvas_id: &str) -> bool {
        self.live.contains_key(canvas_id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test handle that records its own drop in a shared event log.
    struct ProbeHandle {
        canvas_id: String,
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ProbeHandle {
        fn new(canvas_id: &str, tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
            log.borrow_mut().push(format!("create:{}", tag));
            Box::new(Self {
                canvas_id: canvas_id.to_string(),
                tag,
                log: Rc::clone(log),
            })
        }
    }

    impl ChartHandle for ProbeHandle {
        fn canvas_id(&self) -> &str {
            &self.canvas_id
        }
    }

    impl Drop for ProbeHandle {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("drop:{}", self.tag));
        }
    }

    #[test]
    fn install_replaces_previous_handle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::new();

        registry.install(ProbeHandle::new("mileage-trend-chart", "a", &log));
        registry.install(ProbeHandle::new("mileage-trend-chart", "b", &log));

        assert_eq!(registry.len(), 1);
        assert!(registry.is_live("mileage-trend-chart"));
        // "a" must be gone before "b" went live
        assert!(log.borrow().contains(&"drop:a".to_string()));
    }

    #[test]
    fn old_handle_dropped_before_replacement_is_stored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::new();

        registry.install(ProbeHandle::new("c1", "a", &log));
        registry.dispose("c1");
        let events = log.borrow().clone();
        assert_eq!(events, vec!["create:a", "drop:a"]);
        assert!(registry.is_empty());

        registry.install(ProbeHandle::new("c1", "b", &log));
        let events = log.borrow().clone();
        // dispose of "a" happened strictly before "b" was created
        assert_eq!(events, vec!["create:a", "drop:a", "create:b"]);
    }

    #[test]
    fn handles_for_distinct_canvases_coexist() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::new();

        registry.install(ProbeHandle::new("c1", "a", &log));
        registry.install(ProbeHandle::new("c2", "b", &log));

        assert_eq!(registry.len(), 2);
        assert!(registry.is_live("c1"));
        assert!(registry.is_live("c2"));
        assert!(!log.borrow().iter().any(|e| e.starts_with("drop")));
    }

    #[test]
    fn dispose_unknown_canvas_is_a_noop() {
        let mut registry = ChartRegistry::new();
        registry.dispose("never-rendered");
        assert!(registry.is_empty());
    }
}
