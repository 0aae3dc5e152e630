use super::error::RouterError;
use super::params::Params;

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub trait Handler<R> {
    fn call(&self, params: Params) -> Result<R, BoxError>;
}

pub type BoxHandler<R> = Box<dyn Handler<R> + Send + Sync>;

impl<R> Handler<R> for BoxHandler<R> {
    fn call(&self, params: Params) -> Result<R, BoxError> {
        Handler::call(&**self, params)
    }
}

impl<F, R> Handler<R> for F
where
    F: Fn(Params) -> Result<R, BoxError>,
{
    fn call(&self, params: Params) -> Result<R, BoxError> {
        (self)(params)
    }
}

/// Adapts a closure returning its own error type into a handler.
///
/// Closures returning `Result<R, BoxError>` can be registered directly.
pub struct HandlerFn<F> {
    f: F,
}

/// Wraps `f`, boxing its errors on the way out.
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

impl<F, R, E> Handler<R> for HandlerFn<F>
where
    F: Fn(Params) -> Result<R, E>,
    E: StdError + Send + Sync + 'static,
{
    fn call(&self, params: Params) -> Result<R, BoxError> {
        match (self.f)(params) {
            Ok(r) => Ok(r),
            Err(e) => Err(Box::new(e) as BoxError),
        }
    }
}

/// A `"Type@method"` descriptor, resolved through the router's controller
/// table when the route is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    descriptor: Box<str>,
}

impl Action {
    pub fn new(descriptor: impl Into<Box<str>>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.descriptor
    }

    /// Splits the descriptor into `(controller, action)`.
    pub fn resolve(&self) -> Result<(&str, &str), RouterError> {
        let invalid = || RouterError::InvalidHandler {
            descriptor: self.descriptor.clone(),
        };
        if self.descriptor.trim().is_empty() {
            return Err(invalid());
        }
        let (controller, action) =
            self.descriptor
                .split_once('@')
                .ok_or_else(|| RouterError::MalformedDescriptor {
                    descriptor: self.descriptor.clone(),
                })?;
        if controller.is_empty() || action.is_empty() {
            return Err(invalid());
        }
        Ok((controller, action))
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

/// Shorthand for [`Action::new`].
pub fn action(descriptor: impl Into<Box<str>>) -> Action {
    Action::new(descriptor)
}

pub enum RouteHandler<R> {
    Direct(BoxHandler<R>),
    Action(Action),
}

impl<R> fmt::Debug for RouteHandler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(..)"),
            Self::Action(a) => f.debug_tuple("Action").field(&a.as_str()).finish(),
        }
    }
}

pub trait IntoRouteHandler<R> {
    fn into_route_handler(self) -> RouteHandler<R>;
}

impl<R> IntoRouteHandler<R> for RouteHandler<R> {
    fn into_route_handler(self) -> RouteHandler<R> {
        self
    }
}

impl<R> IntoRouteHandler<R> for Action {
    fn into_route_handler(self) -> RouteHandler<R> {
        RouteHandler::Action(self)
    }
}

impl<F, R> IntoRouteHandler<R> for F
where
    F: Fn(Params) -> Result<R, BoxError> + Send + Sync + 'static,
{
    fn into_route_handler(self) -> RouteHandler<R> {
        RouteHandler::Direct(Box::new(self))
    }
}

impl<F, R, E> IntoRouteHandler<R> for HandlerFn<F>
where
    F: Fn(Params) -> Result<R, E> + Send + Sync + 'static,
    E: StdError + Send + Sync + 'static,
{
    fn into_route_handler(self) -> RouteHandler<R> {
        RouteHandler::Direct(Box::new(self))
    }
}

/// A handler type constructed per dispatch by its registered factory.
///
/// `call` returns `None` when the controller has no such action.
pub trait Controller<R> {
    fn call(&self, action: &str, params: Params) -> Option<Result<R, BoxError>>;
}

type Factory<R> = Box<dyn Fn() -> Box<dyn Controller<R>> + Send + Sync>;

pub struct Controllers<R> {
    factories: HashMap<Box<str>, Factory<R>>,
}

impl<R: 'static> Controllers<R> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register<C, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        C: Controller<R> + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        let factory: Factory<R> = Box::new(move || Box::new(factory()) as Box<dyn Controller<R>>);
        self.factories.insert(name.into(), factory);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub(super) fn invoke(&self, action: &Action, params: Params) -> Result<R, RouterError> {
        let (controller, method) = action.resolve()?;
        let factory = self
            .factories
            .get(controller)
            .ok_or_else(|| RouterError::UnknownController {
                controller: controller.into(),
            })?;

        let instance = factory();
        match Controller::call(&*instance, method, params) {
            Some(ret) => ret.map_err(RouterError::Handler),
            None => Err(RouterError::UnknownAction {
                controller: controller.into(),
                action: method.into(),
            }),
        }
    }
}

impl<R: 'static> Default for Controllers<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Controllers<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

#[test]
fn action_resolve() {
    assert_eq!(action("Users@show").resolve().unwrap(), ("Users", "show"));

    assert!(matches!(
        action("Users").resolve(),
        Err(RouterError::MalformedDescriptor { .. })
    ));
    for bad in ["", "  ", "@show", "Users@"].iter() {
        assert!(
            matches!(action(*bad).resolve(), Err(RouterError::InvalidHandler { .. })),
            "descriptor = {:?}",
            bad
        );
    }
}
