use actix_web::{http::StatusCode, test, web::Data, App};
use serde_json::json;

use linear_tel_relay::{client::telegram::Telegram, config::Config, configure};

fn test_config() -> Config {
    Config {
        bot_token: "test-token".to_string(),
        chat_id: "-100".to_string(),
        webhook_secret: String::new(),
        sheet_url: "https://sheets.example/content".to_string(),
        issue_base_url: "https://linear.app/acme/issue/".to_string(),
        drive_url: "https://drive.example/folder".to_string(),
        // Unroutable sink: sends fail immediately instead of reaching out.
        telegram_api_base: "http://127.0.0.1:9".to_string(),
    }
}

macro_rules! relay_app {
    () => {{
        let config = test_config();
        test::init_service(
            App::new()
                .app_data(Data::new(config.clone()))
                .app_data(Data::new(Telegram::new(&config)))
                .configure(configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn liveness_endpoint_reports_running() {
    let app = relay_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Linear Telegram relay is running!");
}

#[actix_web::test]
async fn irrelevant_events_are_accepted() {
    let app = relay_app!();

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(json!({"type": "Comment", "action": "create"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "success"}));
}

#[actix_web::test]
async fn unparseable_bodies_are_accepted() {
    let app = relay_app!();

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_payload("definitely not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "success"}));
}

#[actix_web::test]
async fn non_post_methods_are_rejected() {
    let app = relay_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/webhook").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn noop_state_updates_are_accepted() {
    let app = relay_app!();

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(json!({
            "type": "Issue",
            "action": "update",
            "data": {
                "title": "Fix banner",
                "identifier": "TDX-42",
                "state": {"id": "s2", "name": "In Approval"}
            },
            "updatedFrom": {"stateId": "s2"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn delivery_failure_does_not_leak_to_the_caller() {
    let app = relay_app!();

    // A real transition fires the rule, but the sink address is unroutable;
    // the webhook answer must still be a plain success.
    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(json!({
            "type": "Issue",
            "action": "update",
            "data": {
                "title": "Fix banner",
                "identifier": "TDX-42",
                "assignee": {"name": "Mina"},
                "state": {"id": "s2", "name": "In Approval"}
            },
            "updatedFrom": {"stateId": "s1"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "success"}));
}
