//! Route name -> view bindings with eager or lazy construction

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::OnceCell;

use super::{ResolvedRoute, RouteName, Router, ViewLoading};

type ViewFactory<V> = Box<dyn Fn() -> V + Send + Sync>;

enum Slot<V> {
    Eager(V),
    Lazy { factory: ViewFactory<V>, view: OnceCell<V> },
}

impl<V> Slot<V> {
    fn get(&self) -> &V {
        match self {
            Slot::Eager(view) => view,
            Slot::Lazy { factory, view } => view.get_or_init(|| factory()),
        }
    }

    fn is_loaded(&self) -> bool {
        match self {
            Slot::Eager(_) => true,
            Slot::Lazy { view, .. } => view.get().is_some(),
        }
    }
}

/// Views of the application, keyed by route
///
/// Eager views are built when registered; lazy ones the first time they are
/// looked up, then reused. Which one a route uses comes from its
/// [`ViewLoading`] in the route table.
pub struct ViewRegistry<V> {
    router: Router,
    slots: HashMap<RouteName, Slot<V>>,
}

impl<V> ViewRegistry<V> {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            slots: HashMap::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Bind a view factory to a route. Replaces any earlier binding.
    pub fn register<F>(&mut self, name: RouteName, factory: F) -> &mut Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        let loading = self
            .router
            .record(name)
            .map_or(ViewLoading::Eager, |r| r.loading);

        let slot = match loading {
            ViewLoading::Eager => Slot::Eager(factory()),
            ViewLoading::Lazy => Slot::Lazy {
                factory: Box::new(factory),
                view: OnceCell::new(),
            },
        };
        self.slots.insert(name, slot);
        self
    }

    /// View bound to `name`, building it first if it is lazy and not loaded yet
    pub fn view_for(&self, name: RouteName) -> Option<&V> {
        self.slots.get(&name).map(Slot::get)
    }

    pub fn is_loaded(&self, name: RouteName) -> bool {
        self.slots.get(&name).is_some_and(Slot::is_loaded)
    }

    /// Resolve `location` and return the route with its view
    pub fn navigate(&self, location: &str) -> Option<(ResolvedRoute, &V)> {
        let route = self.router.resolve(location)?;
        let view = self.view_for(route.name)?;
        tracing::debug!(route = %route.name, path = %route.path, "Navigated");
        Some((route, view))
    }
}

impl<V> fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut loaded: Vec<_> = self
            .slots
            .iter()
            .map(|(name, slot)| (*name, slot.is_loaded()))
            .collect();
        loaded.sort();
        f.debug_struct("ViewRegistry").field("views", &loaded).finish()
    }
}
