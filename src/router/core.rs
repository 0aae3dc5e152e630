use super::error::RouterError;
use super::handler::{Handler, IntoRouteHandler, RouteHandler};
use super::params::Params;
use super::{Route, Router};

use crate::path;
use crate::pattern::{CaptureBuf, Pattern};

use tracing::{debug, trace};

const OPEN: char = '{';
const CLOSE: char = '}';

impl<R: 'static> Router<R> {
    pub(super) fn insert_route(
        &mut self,
        method: &str,
        uri: &str,
        handler: impl IntoRouteHandler<R>,
        name: Option<&str>,
    ) -> Result<(), RouterError> {
        let prefix = self.groups.current_prefix();
        let pattern = Pattern::compile(&path::join(&prefix, uri))?;
        let method: Box<str> = method.to_ascii_uppercase().into();

        debug!(
            method = %method,
            pattern = %pattern,
            name = ?name,
            group_depth = self.groups.depth(),
            "Route registered"
        );

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            let prev = self.names.insert(name.into(), pattern.as_str().into());
            if let Some(prev) = prev {
                debug!(name = %name, previous = %prev, "Named route replaced");
            }
        }

        self.routes.push(Route {
            method,
            pattern,
            handler: handler.into_route_handler(),
        });

        Ok(())
    }

    pub(super) fn find_route<'s, 'p>(
        &'s self,
        method: &str,
        path: &'p str,
        buf: &mut CaptureBuf<'p>,
    ) -> Option<&'s Route<R>>
    where
        's: 'p,
    {
        for route in &self.routes {
            if *route.method != *method {
                continue;
            }
            trace!(pattern = %route.pattern, path = %path, "Route match attempt");
            if route.pattern.match_path(path, buf) {
                debug!(
                    method = %method,
                    path = %path,
                    pattern = %route.pattern,
                    params = ?&buf[..],
                    "Route matched"
                );
                return Some(route);
            }
        }
        debug!(method = %method, path = %path, "No route matched");
        None
    }

    pub(super) fn invoke(&self, route: &Route<R>, params: Params) -> Result<R, RouterError> {
        match route.handler {
            RouteHandler::Direct(ref h) => Handler::call(&**h, params).map_err(RouterError::Handler),
            RouteHandler::Action(ref a) => self.controllers.invoke(a, params),
        }
    }
}

/// Replaces every `{key}` in `pattern` with its value, in iteration order.
pub(super) fn expand<I, K, V>(pattern: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut uri = pattern.to_owned();
    let mut placeholder = String::new();
    for (key, value) in params {
        placeholder.clear();
        placeholder.push(OPEN);
        placeholder.push_str(key.as_ref());
        placeholder.push(CLOSE);
        uri = uri.replace(&placeholder, value.as_ref());
    }
    uri.insert(0, '/');
    uri
}

#[test]
fn expand_placeholders() {
    assert_eq!(expand("users/{id}", [("id", "7")]), "/users/7");
    assert_eq!(
        expand("u/{uid}/p/{pid}", [("pid", "2"), ("uid", "1")]),
        "/u/1/p/2"
    );
    assert_eq!(expand("u/{uid}/p/{pid}", [("uid", "1")]), "/u/1/p/{pid}");
    assert_eq!(expand("", Vec::<(&str, &str)>::new()), "/");
    assert_eq!(expand("a/{x}", [("x", "a b/c")]), "/a/a b/c");
}
