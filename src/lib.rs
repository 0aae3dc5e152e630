//! An ordered HTTP request router.
//!
//! Routes are `(method, pattern, handler)` entries scanned in registration
//! order; the first one whose method and pattern match wins. Patterns are
//! literal segments plus whole-segment `{name}` placeholders. Routes may be
//! named and turned back into paths with [`Router::url_with`], and grouped
//! under a common prefix with [`Router::group`].
//!
//! ```
//! use trail_router::{Params, Router};
//!
//! let mut router: Router<String> = Router::new();
//! router.get_named(
//!     "/users/{id}",
//!     |p: Params| Ok(format!("user {}", p.get("id").unwrap_or_default())),
//!     "profile",
//! );
//! router.group("/admin", |admin| {
//!     admin.get("/list", |_: Params| Ok("list".to_owned()));
//! });
//!
//! assert_eq!(router.dispatch("GET", "/users/42").unwrap(), "user 42");
//! assert_eq!(router.dispatch("get", "/admin/list/").unwrap(), "list");
//! assert_eq!(router.url_with("profile", [("id", "7")]).unwrap(), "/users/7");
//! ```

#![forbid(unsafe_code)]

pub mod path;
pub mod pattern;

mod router;
mod router_macro;

pub use crate::router::{
    action, handler_fn, Action, BoxError, BoxHandler, Controller, Controllers, GroupAttributes,
    Handler, HandlerFn, IntoRouteHandler, Match, Params, PrefixMode, Route, RouteHandler, Router, RouterError,
};

#[cfg(feature = "http")]
pub use http::Method;
