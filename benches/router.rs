use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use trail_router::{BoxError, Params, Router};

fn handler(_: Params) -> Result<usize, BoxError> {
    Ok(1)
}

fn sample_router() -> Router<usize> {
    let mut router: Router<usize> = Router::new();
    for i in 0..32 {
        router.get(&format!("/static/{}", i), handler);
    }
    router.group("/api/v1", |api| {
        api.get("/users/{id}", handler)
            .post("/users", handler)
            .get("/users/{id}/posts/{post_id}", handler);
    });
    router
}

fn router_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-dispatch");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.get("/hello/{name}", handler);
        b.iter(|| router.dispatch("GET", "/hello/world"))
    });

    group.bench_function("last-of-many", |b| {
        let router = sample_router();
        b.iter(|| router.dispatch("GET", "/api/v1/users/42/posts/7"))
    });

    group.bench_function("not-found", |b| {
        let router = sample_router();
        b.iter(|| router.dispatch("GET", "/missing/path"))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.get("/hello/{name}", handler);
            },
            BatchSize::SmallInput,
        )
    });
}

fn router_url(c: &mut Criterion) {
    let mut router: Router<usize> = Router::new();
    router.get_named("/users/{id}/posts/{post_id}", handler, "post");

    c.bench_function("router-url", |b| {
        b.iter(|| router.url_with("post", [("id", "42"), ("post_id", "7")]))
    });
}

criterion_group!(benches, router_dispatch, router_insert, router_url);
criterion_main!(benches);
