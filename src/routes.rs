//! Routes
//!
//! Path routing over the History API plus query-parameter deep links.
//! The route signal is installed once at the app root; `navigate`
//! pushes a history entry and updates it, and a popstate listener
//! keeps it in sync with back/forward navigation.

use std::cell::Cell;

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    Auth,
    Threads,
    ThreadDetail(u64),
    HiddenThreads,
    Faqs,
    PendingFaqs,
    HiddenFaqs,
    Agencies,
    PendingAgencies,
    Profile(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["auth"] => Self::Auth,
            ["threads"] => Self::Threads,
            ["threads", "hidden"] => Self::HiddenThreads,
            ["threads", id] => id
                .parse()
                .map(Self::ThreadDetail)
                .unwrap_or(Self::NotFound),
            ["faqs"] => Self::Faqs,
            ["faqs", "pending"] => Self::PendingFaqs,
            ["faqs", "hidden"] => Self::HiddenFaqs,
            ["agencies"] => Self::Agencies,
            ["agencies", "pending"] => Self::PendingAgencies,
            ["users", username] => Self::Profile(
                percent_decode_str(username)
                    .decode_utf8_lossy()
                    .into_owned(),
            ),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Auth => "/auth".to_string(),
            Self::Threads => "/threads".to_string(),
            Self::ThreadDetail(id) => format!("/threads/{id}"),
            Self::HiddenThreads => "/threads/hidden".to_string(),
            Self::Faqs => "/faqs".to_string(),
            Self::PendingFaqs => "/faqs/pending".to_string(),
            Self::HiddenFaqs => "/faqs/hidden".to_string(),
            Self::Agencies => "/agencies".to_string(),
            Self::PendingAgencies => "/agencies/pending".to_string(),
            Self::Profile(username) => {
                format!("/users/{}", utf8_percent_encode(username, NON_ALPHANUMERIC))
            }
            Self::NotFound => "/404".to_string(),
        }
    }
}

/// Current-route signal wrapper provided via context
#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
}

impl Router {
    pub fn route(&self) -> ReadSignal<Route> {
        self.route.read_only()
    }
}

thread_local! {
    static ROUTER: Cell<Option<Router>> = const { Cell::new(None) };
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Install the route signal and the popstate listener. Call once from
/// the app root.
pub fn init_router() -> Router {
    let router = Router {
        route: RwSignal::new(Route::parse(&current_path())),
    };
    ROUTER.set(Some(router));

    let on_popstate = Closure::<dyn FnMut()>::new(move || {
        router.route.set(Route::parse(&current_path()));
    });
    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();

    router
}

/// Get the router from context
pub fn use_router() -> Router {
    expect_context::<Router>()
}

/// Push a new location and update the route signal.
pub fn navigate(to: &Route) {
    navigate_with_query(to, None);
}

pub fn navigate_with_query(to: &Route, query: Option<&str>) {
    let url = match query {
        Some(q) if !q.is_empty() => format!("{}?{q}", to.path()),
        _ => to.path(),
    };
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
    if let Some(router) = ROUTER.get() {
        router.route.set(to.clone());
    }
}

/// Read one query parameter from the current location.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// `true` when `name=true` is present in the query string.
pub fn query_flag(name: &str) -> bool {
    query_param(name).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/auth"), Route::Auth);
        assert_eq!(Route::parse("/threads"), Route::Threads);
        assert_eq!(Route::parse("/threads/hidden"), Route::HiddenThreads);
        assert_eq!(Route::parse("/faqs/pending"), Route::PendingFaqs);
        assert_eq!(Route::parse("/agencies/pending"), Route::PendingAgencies);
    }

    #[test]
    fn parses_parameterized_routes() {
        assert_eq!(Route::parse("/threads/42"), Route::ThreadDetail(42));
        assert_eq!(
            Route::parse("/users/casey"),
            Route::Profile("casey".to_string())
        );
        assert_eq!(
            Route::parse("/users/mx%2Ejones"),
            Route::Profile("mx.jones".to_string())
        );
    }

    #[test]
    fn bad_paths_fall_back_to_not_found() {
        assert_eq!(Route::parse("/threads/not-a-number"), Route::NotFound);
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/users/casey/extra"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Auth,
            Route::Threads,
            Route::ThreadDetail(7),
            Route::HiddenThreads,
            Route::Faqs,
            Route::PendingFaqs,
            Route::HiddenFaqs,
            Route::Agencies,
            Route::PendingAgencies,
            Route::Profile("casey".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
