use super::handler::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("route not found: {method} /{path}")]
    RouteNotFound { method: Box<str>, path: Box<str> },

    #[error("named route not found: {name}")]
    NamedRouteNotFound { name: Box<str> },

    #[error("invalid route handler: {descriptor:?}")]
    InvalidHandler { descriptor: Box<str> },

    #[error("malformed handler descriptor {descriptor:?}, expected \"Type@method\"")]
    MalformedDescriptor { descriptor: Box<str> },

    #[error("unknown controller: {controller}")]
    UnknownController { controller: Box<str> },

    #[error("controller {controller} has no action {action:?}")]
    UnknownAction { controller: Box<str>, action: Box<str> },

    #[error("duplicate capture name {name:?} in pattern {pattern:?}")]
    DuplicateCapture { name: Box<str>, pattern: Box<str> },

    /// An error returned by the handler itself.
    #[error(transparent)]
    Handler(BoxError),
}

impl RouterError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RouteNotFound { .. } | Self::NamedRouteNotFound { .. }
        )
    }

    /// 404 for the not-found kinds, 500 for everything else.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else {
            500
        }
    }

    #[cfg(feature = "http")]
    pub fn status(&self) -> http::StatusCode {
        if self.is_not_found() {
            http::StatusCode::NOT_FOUND
        } else {
            http::StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Unwraps the handler's own error.
    pub fn into_handler_error(self) -> Result<BoxError, Self> {
        match self {
            Self::Handler(e) => Ok(e),
            other => Err(other),
        }
    }
}
