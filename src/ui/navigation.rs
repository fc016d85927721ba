//! Route stack between the two views.

use std::collections::BTreeMap;

/// Route parameter carrying the selected meal's identifier.
pub const MEAL_ID_PARAM: &str = "idMeal";

/// String parameters attached to a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Root route.
    MealList,
    MealDetail { params: RouteParams },
}

impl Route {
    pub fn meal_detail(id: &str) -> Self {
        Route::MealDetail {
            params: RouteParams::new().with(MEAL_ID_PARAM, id),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::MealList => "/",
            Route::MealDetail { .. } => "/details",
        }
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match self {
            Route::MealList => None,
            Route::MealDetail { params } => Some(params),
        }
    }
}

/// Navigation stack. The root route can never be popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::MealList],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(path = route.path(), params = ?route.params(), "push route");
        self.stack.push(route);
    }

    /// Swap the top route, keeping depth. Replacing the root is a push.
    pub fn replace(&mut self, route: Route) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.push(route);
    }

    /// Pop the top route. Returns the popped route, or `None` at the root.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        if let Some(route) = &popped {
            tracing::debug!(path = route.path(), "pop route");
        }
        popped
    }
}
