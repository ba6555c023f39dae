use super::history::History;
use super::path::{Route, normalize};

/// Options for an explicit navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateOptions {
    /// Raise the transient loading indicator for this navigation.
    pub show_loader: bool,
}

impl NavigateOptions {
    pub fn with_loader() -> Self {
        Self { show_loader: true }
    }
}

/// What a call to [`NavigationStore::navigate`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Whether the current route changed (false means the call was a no-op).
    pub changed: bool,
    /// Generation token of the loading indicator raised by this
    /// navigation, when one was requested. The caller schedules the
    /// delayed [`NavigationStore::clear_loading`] with it.
    pub loader: Option<u64>,
}

impl NavigationOutcome {
    fn unchanged() -> Self {
        Self {
            changed: false,
            loader: None,
        }
    }
}

type Listener = Box<dyn FnMut(&Route)>;

/// Owns the current route and the loading flag, synchronized with the
/// in-process [`History`]. All mutation goes through [`navigate`] or the
/// pop signals; listeners registered with [`subscribe`] hear about every
/// route change, whichever way it happened.
///
/// [`navigate`]: NavigationStore::navigate
/// [`subscribe`]: NavigationStore::subscribe
pub struct NavigationStore {
    history: History,
    current: Route,
    loading: bool,
    loader_generation: u64,
    listeners: Vec<Listener>,
}

impl NavigationStore {
    pub fn new(initial: &str) -> Self {
        let route = normalize(initial);
        Self {
            history: History::new(route.clone()),
            current: route,
            loading: false,
            loader_generation: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Register a listener called with the new route on every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Route) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Navigate to `target`. The input is coerced through [`normalize`],
    /// so any string is acceptable. Navigating to the route the history
    /// already points at is a no-op: no entry is pushed, the loading
    /// flag is untouched and listeners stay quiet.
    pub fn navigate(&mut self, target: &str, options: NavigateOptions) -> NavigationOutcome {
        let route = normalize(target);
        if route == *self.history.current() {
            return NavigationOutcome::unchanged();
        }

        self.history.push(route.clone());
        self.current = route;

        let loader = if options.show_loader {
            self.loading = true;
            self.loader_generation += 1;
            Some(self.loader_generation)
        } else {
            None
        };

        self.notify();
        NavigationOutcome {
            changed: true,
            loader,
        }
    }

    /// Lower the loading flag, but only if `generation` still names the
    /// most recent loader-bearing navigation. A delayed clear scheduled
    /// by a navigation that has since been superseded matches a stale
    /// generation and leaves the flag alone. Returns whether the flag
    /// was actually cleared.
    pub fn clear_loading(&mut self, generation: u64) -> bool {
        if self.loading && generation == self.loader_generation {
            self.loading = false;
            true
        } else {
            false
        }
    }

    /// External back signal (the desktop stand-in for a browser
    /// popstate). Updates the current route from history without
    /// pushing. Returns false when there is nothing to go back to.
    pub fn pop_back(&mut self) -> bool {
        let route = match self.history.back() {
            Some(route) => route.clone(),
            None => return false,
        };
        self.current = route;
        self.notify();
        true
    }

    /// External forward signal; mirror of [`pop_back`](Self::pop_back).
    pub fn pop_forward(&mut self) -> bool {
        let route = match self.history.forward() {
            Some(route) => route.clone(),
            None => return false,
        };
        self.current = route;
        self.notify();
        true
    }

    fn notify(&mut self) {
        let route = self.current.clone();
        for listener in &mut self.listeners {
            listener(&route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_route_is_normalized() {
        let store = NavigationStore::new("about");
        assert_eq!(store.current_route().as_str(), "/about");
        assert!(!store.is_loading());
    }

    #[test]
    fn test_navigate_normalizes_and_pushes() {
        let mut store = NavigationStore::new("/");
        let outcome = store.navigate("about", NavigateOptions::default());
        assert!(outcome.changed);
        assert_eq!(store.current_route().as_str(), "/about");
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut store = NavigationStore::new("/about");
        let outcome = store.navigate("about", NavigateOptions::with_loader());
        assert!(!outcome.changed);
        assert!(outcome.loader.is_none());
        assert!(!store.is_loading());
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn test_loader_raised_and_cleared() {
        let mut store = NavigationStore::new("/");
        let outcome = store.navigate("/about", NavigateOptions::with_loader());
        let generation = outcome.loader.unwrap();
        assert!(store.is_loading());
        assert!(store.clear_loading(generation));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_stale_loader_clear_ignored() {
        let mut store = NavigationStore::new("/");
        let first = store.navigate("/about", NavigateOptions::with_loader());
        let second = store.navigate("/media", NavigateOptions::with_loader());
        let stale = first.loader.unwrap();
        let fresh = second.loader.unwrap();

        // The first navigation's delayed clear fires after the second
        // navigation raised the indicator again: it must not clear.
        assert!(!store.clear_loading(stale));
        assert!(store.is_loading());
        assert!(store.clear_loading(fresh));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_navigate_without_loader() {
        let mut store = NavigationStore::new("/");
        let outcome = store.navigate("/privacy", NavigateOptions::default());
        assert!(outcome.changed);
        assert!(outcome.loader.is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_pop_back_updates_without_push() {
        let mut store = NavigationStore::new("/");
        store.navigate("/about", NavigateOptions::default());
        assert!(store.pop_back());
        assert_eq!(store.current_route().as_str(), "/");
        assert_eq!(store.history_len(), 2);
        assert!(store.pop_forward());
        assert_eq!(store.current_route().as_str(), "/about");
    }

    #[test]
    fn test_pop_back_at_oldest() {
        let mut store = NavigationStore::new("/");
        assert!(!store.pop_back());
        assert!(!store.pop_forward());
    }

    #[test]
    fn test_listeners_hear_changes_not_noops() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = NavigationStore::new("/");
        let sink = seen.clone();
        store.subscribe(move |route| sink.borrow_mut().push(route.as_str().to_string()));

        store.navigate("/about", NavigateOptions::default());
        store.navigate("/about", NavigateOptions::default());
        store.pop_back();

        assert_eq!(*seen.borrow(), vec!["/about".to_string(), "/".to_string()]);
    }
}
