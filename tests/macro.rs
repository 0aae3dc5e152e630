use trail_router::{action, router, BoxError, Controller, Params, Router};

struct Pages;

impl Controller<i32> for Pages {
    fn call(&self, action: &str, _: Params) -> Option<Result<i32, BoxError>> {
        match action {
            "index" => Some(Ok(8)),
            _ => None,
        }
    }
}

#[test]
fn router_macro() {
    let mut router: Router<i32> = router! {
        GET "/u/{uid}/p/{pid}" => |_: Params| Ok(1),
        POST "/u/{uid}/p" => |_: Params| Ok(2),
        @ "/v1" => |v1| {
            v1.get("/info", |_: Params| Ok(3))
                .post("/info", |_: Params| Ok(4));
            v1.group("/u/{uid}", |u| {
                u.get("/p/{pid}", |p: Params| Ok(p.parse::<i32>("pid").unwrap()?));
            });
        },
        HEAD "/" => |_: Params| Ok(5),
        GET "/pages" => action("Pages@index"),
    };
    router.register_controller("Pages", || Pages);

    assert_eq!(router.dispatch("GET", "/u/asd/p/qwe").unwrap(), 1);
    assert_eq!(router.dispatch("POST", "/u/asd/p").unwrap(), 2);
    assert_eq!(router.dispatch("GET", "/v1/info").unwrap(), 3);
    assert_eq!(router.dispatch("POST", "/v1/info").unwrap(), 4);
    assert_eq!(router.dispatch("HEAD", "/").unwrap(), 5);
    assert_eq!(router.dispatch("GET", "/v1/u/asd/p/6").unwrap(), 6);
    assert_eq!(router.dispatch("GET", "/pages").unwrap(), 8);
    assert!(router.dispatch("GET", "/v1/u/asd/p/x").is_err());
}
