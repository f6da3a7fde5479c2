// SPDX-License-Identifier: MPL-2.0
//! Route stack used when a lightbox is presented through navigation.

use super::geometry::OriginRect;

/// Identifies a lightbox inside its host.
pub type LightboxId = usize;

/// Stack entry pushed while a navigator-driven lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub lightbox: LightboxId,
    pub origin: OriginRect,
}

/// A host-owned navigation stack.
pub trait Navigator {
    /// Snapshot of the current stack, bottom first.
    fn current_routes(&self) -> Vec<Route>;

    /// Replaces the whole stack without transition.
    fn reset_route_stack(&mut self, routes: Vec<Route>);
}

/// Plain vector-backed [`Navigator`].
#[derive(Debug, Clone, Default)]
pub struct RouteStack {
    routes: Vec<Route>,
}

impl RouteStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Route> {
        self.routes.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Navigator for RouteStack {
    fn current_routes(&self) -> Vec<Route> {
        self.routes.clone()
    }

    fn reset_route_stack(&mut self, routes: Vec<Route>) {
        self.routes = routes;
    }
}

/// Pushes a route for `lightbox`.
pub fn push(navigator: &mut dyn Navigator, route: Route) {
    let mut routes = navigator.current_routes();
    routes.push(route);
    navigator.reset_route_stack(routes);
}

/// Removes the topmost route belonging to `lightbox`, if any.
pub fn pop(navigator: &mut dyn Navigator, lightbox: LightboxId) -> Option<Route> {
    let mut routes = navigator.current_routes();
    let index = routes.iter().rposition(|r| r.lightbox == lightbox)?;
    let route = routes.remove(index);
    navigator.reset_route_stack(routes);
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(lightbox: LightboxId) -> Route {
        Route {
            lightbox,
            origin: OriginRect::default(),
        }
    }

    #[test]
    fn push_then_pop_restores_stack() {
        let mut stack = RouteStack::new();
        push(&mut stack, route(3));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top().map(|r| r.lightbox), Some(3));

        assert_eq!(pop(&mut stack, 3).map(|r| r.lightbox), Some(3));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_only_removes_matching_route() {
        let mut stack = RouteStack::new();
        push(&mut stack, route(1));
        push(&mut stack, route(2));

        assert!(pop(&mut stack, 7).is_none());
        assert_eq!(stack.len(), 2);

        pop(&mut stack, 1);
        assert_eq!(stack.current_routes(), vec![route(2)]);
    }
}
