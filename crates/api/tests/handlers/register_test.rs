use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shiftsync_core::models::register::TimeRegisterView;

use crate::test_utils::{test_server, test_server_with_locale};

#[tokio::test]
async fn test_time_register_builds_the_sorted_schedule() {
    let server = test_server_with_locale("en");

    let response = server
        .get("/time-register")
        .add_query_param("dates", "2025-11-15")
        .add_query_param("dates", "2025-11-10")
        .add_query_param("startTimes", "10:00")
        .add_query_param("startTimes", "08:00")
        .add_query_param("endTimes", "19:00")
        .add_query_param("endTimes", "17:00")
        .add_query_param("modifiedDates", "2025-11-10")
        .await;

    response.assert_status_ok();
    let view: TimeRegisterView = response.json();

    assert_eq!(view.total_days, 2);

    let first = &view.date_info_list[0];
    assert_eq!(first.date, "2025-11-10");
    assert_eq!(first.display_date, "11/10(Mon)");
    assert_eq!(first.weekday_number, 1);
    assert_eq!(first.start_time, "08:00");
    assert_eq!(first.end_time, "17:00");
    assert!(first.modified);

    let second = &view.date_info_list[1];
    assert_eq!(second.date, "2025-11-15");
    assert_eq!(second.display_date, "11/15(Sat)");
    assert_eq!(second.weekday_number, 6);
    assert_eq!(second.start_time, "10:00");
    assert_eq!(second.end_time, "19:00");
    assert!(!second.modified);

    // Two nine-hour shifts: 540 worked and 60 break each.
    assert_eq!(view.work_summary.total_work_minutes, 1080);
    assert_eq!(view.work_summary.total_break_minutes, 120);
    assert_eq!(view.work_summary.total_actual_minutes, 960);
}

#[tokio::test]
async fn test_time_register_uses_japanese_weekdays_by_default() {
    let server = test_server();

    let response = server
        .get("/time-register")
        .add_query_param("dates", "2025-11-15")
        .await;

    response.assert_status_ok();
    let view: TimeRegisterView = response.json();

    assert_eq!(view.date_info_list[0].display_date, "11/15(土)");
}

#[tokio::test]
async fn test_time_register_defaults_windows_on_length_mismatch() {
    let server = test_server();

    let response = server
        .get("/time-register")
        .add_query_param("dates", "2025-11-15")
        .add_query_param("endTimes", "19:00")
        .await;

    response.assert_status_ok();
    let view: TimeRegisterView = response.json();

    assert_eq!(view.date_info_list[0].start_time, "09:00");
    assert_eq!(view.date_info_list[0].end_time, "18:00");
}

#[tokio::test]
async fn test_time_register_excludes_removed_dates_from_the_count() {
    let server = test_server();

    let response = server
        .get("/time-register")
        .add_query_param("dates", "2025-11-15")
        .add_query_param("dates", "2025-11-10")
        .add_query_param("removedDates", "2025-11-10")
        .await;

    response.assert_status_ok();
    let view: TimeRegisterView = response.json();

    assert_eq!(view.total_days, 1);
    assert_eq!(view.date_info_list[0].date, "2025-11-15");
}

#[tokio::test]
async fn test_time_register_rejects_malformed_dates() {
    let server = test_server();

    let response = server
        .get("/time-register")
        .add_query_param("dates", "2025-13-40")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Malformed date: 2025-13-40");
}

#[tokio::test]
async fn test_time_register_requires_dates() {
    let server = test_server();

    let response = server.get("/time-register").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_redirects_back_to_the_calendar_with_state() {
    let server = test_server();

    let response = server
        .post("/time-register/submit")
        .text(
            "dates=2025-11-15&dates=2025-11-10\
             &startTimes=10%3A00&startTimes=08%3A00\
             &endTimes=19%3A00&endTimes=17%3A00\
             &removedDates=2025-11-01",
        )
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/?dates=2025-11-15&dates=2025-11-10&removedDates=2025-11-01"
    );
}

#[tokio::test]
async fn test_submit_omits_an_empty_removed_spec_from_the_redirect() {
    let server = test_server();

    let response = server
        .post("/time-register/submit")
        .text("dates=2025-11-15&startTimes=10%3A00&endTimes=19%3A00&removedDates=")
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?dates=2025-11-15");
}

#[tokio::test]
async fn test_submit_requires_the_time_lists() {
    let server = test_server();

    let response = server
        .post("/time-register/submit")
        .text("dates=2025-11-15")
        .content_type("application/x-www-form-urlencoded")
        .await;

    assert!(response.status_code().is_client_error());
}
