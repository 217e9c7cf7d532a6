use std::sync::Arc;

use axum_test::TestServer;
use shiftsync_api::{ApiState, app};
use shiftsync_core::locale;

// Builds an in-process server against the default (Japanese) locale.
pub fn test_server() -> TestServer {
    test_server_with_locale("ja")
}

pub fn test_server_with_locale(tag: &str) -> TestServer {
    let state = Arc::new(ApiState {
        weekday_names: locale::from_tag(tag),
    });

    TestServer::new(app(state)).expect("failed to build test server")
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
