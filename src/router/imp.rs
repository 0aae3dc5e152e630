use super::error::RouterError;
use super::group::{GroupAttributes, GroupGuard, GroupStack, PrefixMode};
use super::handler::{Controller, Controllers, IntoRouteHandler};
use super::params::Params;
use super::{core, Match, Route, Router};

use crate::path;
use crate::pattern::CaptureBuf;

use std::collections::HashMap;
use std::iter;

impl<R: 'static> Router<R> {
    pub fn new() -> Self {
        Self::with_prefix_mode(PrefixMode::default())
    }

    pub fn with_prefix_mode(mode: PrefixMode) -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
            groups: GroupStack::new(mode),
            controllers: Controllers::new(),
        }
    }

    pub fn prefix_mode(&self) -> PrefixMode {
        self.groups.mode()
    }

    /// Removes every route and route name. Controllers are kept.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.iter()
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Registers the factory used to resolve `"name@action"` handlers.
    pub fn register_controller<C, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        C: Controller<R> + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.controllers.register(name, factory);
        self
    }

    pub fn controllers(&self) -> &Controllers<R> {
        &self.controllers
    }

    /// Registers a route under the active group prefix.
    ///
    /// # Panics
    /// Panics if the pattern repeats a placeholder name.
    pub fn add_route(
        &mut self,
        method: impl AsRef<str>,
        uri: &str,
        handler: impl IntoRouteHandler<R>,
        name: Option<&str>,
    ) -> &mut Self {
        if let Err(e) = self.insert_route(method.as_ref(), uri, handler, name) {
            panic!("{}: pattern = {:?}", e, uri);
        }
        self
    }

    pub fn try_add_route(
        &mut self,
        method: impl AsRef<str>,
        uri: &str,
        handler: impl IntoRouteHandler<R>,
        name: Option<&str>,
    ) -> Result<&mut Self, RouterError> {
        self.insert_route(method.as_ref(), uri, handler, name)?;
        Ok(self)
    }

    /// Runs `body` with `attributes` pushed onto the group stack.
    ///
    /// The frame is popped when `body` returns or unwinds.
    pub fn group(
        &mut self,
        attributes: impl Into<GroupAttributes>,
        body: impl FnOnce(&mut Router<R>),
    ) -> &mut Self {
        {
            let mut guard = GroupGuard::enter(self, attributes.into());
            body(&mut *guard);
        }
        self
    }

    pub fn try_group<E>(
        &mut self,
        attributes: impl Into<GroupAttributes>,
        body: impl FnOnce(&mut Router<R>) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        {
            let mut guard = GroupGuard::enter(self, attributes.into());
            body(&mut *guard)?;
        }
        Ok(self)
    }

    /// Finds the first route matching `method` and `uri` without invoking it.
    pub fn find(&self, method: impl AsRef<str>, uri: &str) -> Option<Match<'_, R>> {
        let method = method.as_ref().to_ascii_uppercase();
        let path = path::normalize(uri);
        let mut buf = CaptureBuf::new();
        let route = self.find_route(&method, &path, &mut buf)?;
        let params = Params::from_captures(&buf);
        Some(Match { route, params })
    }

    /// Invokes the handler of the first route matching `method` and `uri`.
    pub fn dispatch(&self, method: impl AsRef<str>, uri: &str) -> Result<R, RouterError> {
        let method = method.as_ref().to_ascii_uppercase();
        let path = path::normalize(uri);
        let mut buf = CaptureBuf::new();

        let route = match self.find_route(&method, &path, &mut buf) {
            Some(r) => r,
            None => {
                return Err(RouterError::RouteNotFound {
                    method: method.into(),
                    path: path.as_str().into(),
                })
            }
        };

        let params = Params::from_captures(&buf);
        self.invoke(route, params)
    }

    /// Builds the path of a named route that has no placeholders to fill.
    pub fn url(&self, name: &str) -> Result<String, RouterError> {
        self.url_with(name, iter::empty::<(&str, &str)>())
    }

    /// Builds the path of a named route, replacing each `{key}` with its value.
    ///
    /// Values are inserted verbatim, without percent-encoding. Placeholders
    /// missing from `params` are left in place.
    pub fn url_with<I, K, V>(&self, name: &str, params: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pattern = self
            .names
            .get(name)
            .ok_or_else(|| RouterError::NamedRouteNotFound { name: name.into() })?;
        Ok(core::expand(pattern, params))
    }
}

impl<R: 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! define_method {
    ($name:ident, $named:ident, $method:literal) => {
        #[doc = concat!("Registers a `", $method, "` route.")]
        pub fn $name(&mut self, uri: &str, handler: impl IntoRouteHandler<R>) -> &mut Self {
            self.add_route($method, uri, handler, None)
        }

        #[doc = concat!("Registers a named `", $method, "` route.")]
        pub fn $named(
            &mut self,
            uri: &str,
            handler: impl IntoRouteHandler<R>,
            name: &str,
        ) -> &mut Self {
            self.add_route($method, uri, handler, Some(name))
        }
    };
}

impl<R: 'static> Router<R> {
    define_method!(get, get_named, "GET");
    define_method!(post, post_named, "POST");
    define_method!(put, put_named, "PUT");
    define_method!(delete, delete_named, "DELETE");
    define_method!(patch, patch_named, "PATCH");
    define_method!(head, head_named, "HEAD");
    define_method!(options, options_named, "OPTIONS");
    define_method!(connect, connect_named, "CONNECT");
    define_method!(trace, trace_named, "TRACE");
}
