/// Builds a [`Router`](crate::Router) from a list of routes.
///
/// ```
/// use trail_router::{router, Params, Router};
///
/// let router: Router<String> = router! {
///     GET "/users/{id}" => |p: Params| Ok(p.get("id").unwrap_or_default().to_owned()),
///     @ "/admin" => |r| {
///         r.get("/stats", |_: Params| Ok("stats".to_owned()));
///     }
/// };
///
/// assert_eq!(router.dispatch("GET", "/users/7").unwrap(), "7");
/// assert_eq!(router.dispatch("GET", "/admin/stats").unwrap(), "stats");
/// ```
#[macro_export]
macro_rules! router {
    {@entry $router:expr, @, $prefix:expr, $body:expr} => {
        $router.group($prefix, $body)
    };
    {@entry $router:expr, $method:ident, $pattern:expr, $handler:expr} => {
        $router.add_route(stringify!($method), $pattern, $handler, None)
    };

    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $handler);)+
        __router
    }};
}
