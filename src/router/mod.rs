mod core;
mod error;
mod group;
mod handler;
mod imp;
mod params;

pub use self::error::RouterError;
pub use self::group::{GroupAttributes, PrefixMode};
pub use self::handler::{
    action, handler_fn, Action, BoxError, BoxHandler, Controller, Controllers, Handler, HandlerFn,
    IntoRouteHandler, RouteHandler,
};
pub use self::params::Params;

use self::group::GroupStack;
use crate::pattern::Pattern;

use std::collections::HashMap;

/// An ordered route table. The first registered route that matches wins.
#[derive(Debug)]
pub struct Router<R> {
    routes: Vec<Route<R>>,
    names: HashMap<Box<str>, Box<str>>,
    groups: GroupStack,
    controllers: Controllers<R>,
}

#[derive(Debug)]
pub struct Route<R> {
    method: Box<str>,
    pattern: Pattern,
    handler: RouteHandler<R>,
}

impl<R> Route<R> {
    /// Uppercase method, e.g. `GET`.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn handler(&self) -> &RouteHandler<R> {
        &self.handler
    }
}

/// A matched route and its captured parameters.
#[derive(Debug)]
pub struct Match<'r, R> {
    route: &'r Route<R>,
    params: Params,
}

impl<'r, R> Match<'r, R> {
    pub fn route(&self) -> &'r Route<R> {
        self.route
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}
