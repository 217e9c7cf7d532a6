use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/time-register", get(handlers::register::show_time_register))
        .route(
            "/time-register/submit",
            post(handlers::register::submit_time_register),
        )
}
