use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn health_routes_builds_without_state() {
    let _router: Router = health_routes();
}
