//! Static route table mapping exact paths to page views.

use std::collections::HashMap;

use crate::core::error::{ConfigurationError, RouteNotFound};

/// Page views the site can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    About,
    Components,
    Contact,
    Help,
    Pricing,
    SignUp,
    SignIn,
}

impl ViewId {
    /// All views, in navigation order.
    pub const ALL: [ViewId; 8] = [
        ViewId::Home,
        ViewId::About,
        ViewId::Components,
        ViewId::Pricing,
        ViewId::Contact,
        ViewId::Help,
        ViewId::SignIn,
        ViewId::SignUp,
    ];

    /// Views listed in the main navigation, before the auth links.
    pub const NAV: [ViewId; 6] = [
        ViewId::Home,
        ViewId::About,
        ViewId::Components,
        ViewId::Pricing,
        ViewId::Contact,
        ViewId::Help,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ViewId::Home => "/",
            ViewId::About => "/about",
            ViewId::Components => "/components",
            ViewId::Contact => "/contact",
            ViewId::Help => "/help",
            ViewId::Pricing => "/pricing",
            ViewId::SignUp => "/signup",
            ViewId::SignIn => "/signin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::About => "About",
            ViewId::Components => "Components",
            ViewId::Contact => "Contact",
            ViewId::Help => "Help",
            ViewId::Pricing => "Pricing",
            ViewId::SignUp => "Sign Up",
            ViewId::SignIn => "Sign In",
        }
    }

    /// Document title shown while the view is mounted.
    pub fn title(&self) -> String {
        match self {
            ViewId::Home => "Componix UI - Animated Tailwind Components".to_string(),
            other => format!("{} | Componix UI", other.label()),
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: ViewId,
}

impl Route {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// Immutable exact-match table built once at startup.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<String, ViewId>,
}

impl RouteTable {
    /// Build a table, rejecting any path registered twice.
    pub fn new(routes: Vec<Route>) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(routes.len());
        for route in &routes {
            if index.insert(route.path.clone(), route.view).is_some() {
                return Err(ConfigurationError::DuplicateRoute {
                    path: route.path.clone(),
                });
            }
        }
        Ok(Self { routes, index })
    }

    /// The site's routes: one per view, at the view's canonical path.
    pub fn site() -> Self {
        let routes: Vec<Route> = ViewId::ALL
            .iter()
            .map(|view| Route::new(view.path(), *view))
            .collect();
        let index = routes
            .iter()
            .map(|route| (route.path.clone(), route.view))
            .collect();
        Self { routes, index }
    }

    /// View registered at exactly `path`.
    pub fn resolve(&self, path: &str) -> Result<ViewId, RouteNotFound> {
        self.index.get(path).copied().ok_or_else(|| RouteNotFound {
            path: path.to_string(),
        })
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_table_resolves_every_view() {
        let table = RouteTable::site();
        assert_eq!(table.len(), ViewId::ALL.len());

        for view in ViewId::ALL {
            assert_eq!(table.resolve(view.path()), Ok(view));
        }
        assert_eq!(table.resolve("/"), Ok(ViewId::Home));
        assert_eq!(table.resolve("/about"), Ok(ViewId::About));
        assert_eq!(table.resolve("/pricing"), Ok(ViewId::Pricing));
    }

    #[test]
    fn test_unregistered_paths_are_not_found() {
        let table = RouteTable::site();

        for path in ["/unknown", "/about/", "/About", "", "/components/alert", "/help?x=1"] {
            assert_eq!(
                table.resolve(path),
                Err(RouteNotFound {
                    path: path.to_string()
                })
            );
        }
    }

    #[test]
    fn test_custom_table_matches_exactly() {
        let table = RouteTable::new(vec![
            Route::new("/", ViewId::Home),
            Route::new("/docs", ViewId::Help),
        ])
        .unwrap();

        assert_eq!(table.resolve("/docs"), Ok(ViewId::Help));
        assert!(table.resolve("/about").is_err());
        assert_eq!(table.routes()[1].path, "/docs");
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let result = RouteTable::new(vec![
            Route::new("/about", ViewId::About),
            Route::new("/about", ViewId::Help),
        ]);

        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateRoute { path }) if path == "/about"
        ));
    }

    #[test]
    fn test_titles_and_labels() {
        assert_eq!(ViewId::Pricing.title(), "Pricing | Componix UI");
        assert_eq!(ViewId::SignUp.label(), "Sign Up");
        assert!(ViewId::Home.title().starts_with("Componix UI"));
        assert!(!ViewId::NAV.contains(&ViewId::SignIn));
    }
}
