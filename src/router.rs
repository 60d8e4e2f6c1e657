use crate::observable::Observable;
use crate::ui::log;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Concerts,
    Setlist(i64),
}

impl Route {
    /// Map a URL path to a route. The empty path and anything unknown
    /// redirect to the concert list.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["concerts"] => Route::Concerts,
            ["concerts", id, "setlist"] => match id.parse::<i64>() {
                Ok(id) if id > 0 => Route::Setlist(id),
                _ => Route::Concerts,
            },
            _ => Route::Concerts,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Concerts => "/concerts".to_string(),
            Route::Setlist(id) => format!("/concerts/{}/setlist", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Current location. Views navigate through it; a front end subscribes to
/// follow along.
pub struct Router {
    current: Observable<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::at("")
    }

    pub fn at(url: &str) -> Self {
        Self {
            current: Observable::new(Route::parse(url)),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn state(&self) -> &Observable<Route> {
        &self.current
    }

    pub fn navigate(&self, route: Route) {
        log::verbose(format!("navigate {}", route));
        self.current.set(route);
    }

    pub fn navigate_by_url(&self, url: &str) -> Route {
        let route = Route::parse(url);
        self.navigate(route);
        route
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
