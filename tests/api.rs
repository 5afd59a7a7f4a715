//! API integration tests
//!
//! Exercises the full router in mock Maestra mode, where chat replies and
//! manifests are deterministic.

use axum_test::TestServer;
use base64::Engine;
use serde_json::{json, Value};

use smart_pdf_server::app;
use smart_pdf_server::config::Config;
use smart_pdf_server::state::AppState;

fn test_server() -> TestServer {
    let state = AppState::new(Config::default());
    TestServer::new(app(state)).expect("failed to start test server")
}

fn pdf_payload(file_name: &str) -> Value {
    let data = base64::engine::general_purpose::STANDARD.encode(b"%PDF-1.4 test content");
    json!({ "fileName": file_name, "fileData": data })
}

async fn import(server: &TestServer, file_name: &str) -> Value {
    let response = server.post("/api/pdf/import").json(&pdf_payload(file_name)).await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_import_creates_fresh_sessions() {
    let server = test_server();

    let first = import(&server, "report.pdf").await;
    let second = import(&server, "report.pdf").await;

    assert_ne!(first["id"], second["id"]);
    for session in [&first, &second] {
        assert_eq!(session["fileName"], "report.pdf");
        assert_eq!(session["isSmartPdf"], false);
        assert_eq!(session["currentPage"], 1);
        assert_eq!(session["totalPages"], 0);
        assert_eq!(session["zoom"], 100);
        assert_eq!(session["messages"], json!([]));
        assert!(session.get("manifest").is_none());
    }
}

#[tokio::test]
async fn test_import_smart_pdf_carries_manifest() {
    let server = test_server();

    let session = import(&server, "invoice_smart.pdf").await;

    assert_eq!(session["isSmartPdf"], true);
    let manifest = &session["manifest"];
    assert_eq!(manifest["templateName"], "Invoice smart");
    assert_eq!(manifest["templateType"], "Document");
    assert_eq!(manifest["versionHistory"].as_array().unwrap().len(), 3);
    assert_eq!(manifest["version"], manifest["versionHistory"][0]["version"]);
    assert_eq!(manifest["permissions"]["canExport"], true);
}

#[tokio::test]
async fn test_import_rejects_malformed_requests() {
    let server = test_server();

    let missing_field = server
        .post("/api/pdf/import")
        .json(&json!({ "fileName": "report.pdf" }))
        .await;
    missing_field.assert_status_bad_request();

    let empty_name = server
        .post("/api/pdf/import")
        .json(&pdf_payload(""))
        .await;
    empty_name.assert_status_bad_request();

    let bad_base64 = server
        .post("/api/pdf/import")
        .json(&json!({ "fileName": "report.pdf", "fileData": "not%%base64" }))
        .await;
    bad_base64.assert_status_bad_request();

    let body = bad_base64.json::<Value>();
    assert_eq!(body["error"], "bad_request");
    assert!(body["details"].as_str().unwrap().contains("base64"));
}

#[tokio::test]
async fn test_get_unknown_session_is_not_found() {
    let server = test_server();

    let response = server
        .get("/api/pdf/session/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status_not_found();

    // A malformed id can never name a session either
    let response = server.get("/api/pdf/session/not-a-uuid").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_patch_merges_only_present_fields() {
    let server = test_server();
    let session = import(&server, "report.pdf").await;
    let id = session["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/pdf/session/{}", id))
        .json(&json!({ "totalPages": 10, "currentPage": 3 }))
        .await;
    response.assert_status_ok();

    let updated = response.json::<Value>();
    assert_eq!(updated["currentPage"], 3);
    assert_eq!(updated["totalPages"], 10);
    assert_eq!(updated["zoom"], 100);
    assert_eq!(updated["fileName"], "report.pdf");
}

#[tokio::test]
async fn test_patch_clamps_zoom_and_page() {
    let server = test_server();
    let session = import(&server, "report.pdf").await;
    let id = session["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/pdf/session/{}", id))
        .json(&json!({ "totalPages": 5, "currentPage": 99, "zoom": 300 }))
        .await;
    let updated = response.json::<Value>();
    assert_eq!(updated["currentPage"], 5);
    assert_eq!(updated["zoom"], 200);

    let response = server
        .patch(&format!("/api/pdf/session/{}", id))
        .json(&json!({ "zoom": 10 }))
        .await;
    assert_eq!(response.json::<Value>()["zoom"], 50);
}

#[tokio::test]
async fn test_patch_rejects_id_changes() {
    let server = test_server();
    let session = import(&server, "report.pdf").await;
    let id = session["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/pdf/session/{}", id))
        .json(&json!({ "id": "11111111-1111-1111-1111-111111111111", "zoom": 150 }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_session() {
    let server = test_server();
    let session = import(&server, "report.pdf").await;
    let id = session["id"].as_str().unwrap();
    let path = format!("/api/pdf/session/{}", id);

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), 204);

    server.get(&path).await.assert_status_not_found();
    server.delete(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_chat_turn_appends_both_messages() {
    let server = test_server();
    let session = import(&server, "report.pdf").await;
    let id = session["id"].as_str().unwrap();

    let response = server
        .post("/api/maestra/chat")
        .json(&json!({ "sessionId": id, "message": "hello" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(!body["reply"].as_str().unwrap().is_empty());
    assert!(body.get("suggestions").is_none());

    let transcript = server
        .get(&format!("/api/pdf/session/{}", id))
        .await
        .json::<Value>();
    let messages = transcript["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "hello");
    assert_eq!(messages[1]["role"], "assistant");
}

#[tokio::test]
async fn test_chat_with_selection_and_suggestion_apply() {
    let server = test_server();
    let session = import(&server, "invoice_smart.pdf").await;
    let id = session["id"].as_str().unwrap();

    let response = server
        .post("/api/maestra/chat")
        .json(&json!({
            "sessionId": id,
            "message": "make this formal",
            "context": "Pay by Friday."
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(!body["reply"].as_str().unwrap().is_empty());
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s["applied"] == false));

    // Apply the first suggestion, then apply it again
    let sug_id = suggestions[0]["id"].as_str().unwrap();
    let apply_path = format!("/api/pdf/session/{}/suggestions/{}/apply", id, sug_id);

    let applied_once = server.post(&apply_path).await;
    applied_once.assert_status_ok();
    let once = applied_once.json::<Value>();

    let applied_twice = server.post(&apply_path).await;
    applied_twice.assert_status_ok();
    let twice = applied_twice.json::<Value>();

    let applied_flag = |session: &Value| -> bool {
        session["messages"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|m| m["suggestions"].as_array())
            .flatten()
            .find(|s| s["id"] == sug_id)
            .map(|s| s["applied"] == true)
            .unwrap()
    };
    assert!(applied_flag(&once));
    assert!(applied_flag(&twice));
    assert_eq!(
        once["messages"].as_array().unwrap().len(),
        twice["messages"].as_array().unwrap().len()
    );

    // The other suggestion is untouched
    let other = &twice["messages"].as_array().unwrap()[1]["suggestions"][1];
    assert_eq!(other["applied"], false);

    let unknown = server
        .post(&format!(
            "/api/pdf/session/{}/suggestions/sug-missing/apply",
            id
        ))
        .await;
    unknown.assert_status_not_found();
}

#[tokio::test]
async fn test_chat_validation_and_unknown_session() {
    let server = test_server();

    let unknown = server
        .post("/api/maestra/chat")
        .json(&json!({
            "sessionId": "00000000-0000-0000-0000-000000000000",
            "message": "hello"
        }))
        .await;
    unknown.assert_status_not_found();

    let session = import(&server, "report.pdf").await;
    let empty = server
        .post("/api/maestra/chat")
        .json(&json!({ "sessionId": session["id"], "message": "" }))
        .await;
    empty.assert_status_bad_request();
}

#[tokio::test]
async fn test_export_degrades_without_backend() {
    let server = test_server();

    let response = server
        .post("/api/maestra/export")
        .json(&json!({
            "templateData": { "name": "Invoice" },
            "outputFilename": "invoice_smart.pdf"
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
    assert!(body.get("downloadUrl").is_none());
}

#[tokio::test]
async fn test_health_reports_maestra_state() {
    let server = test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["maestra"], "connected");
    assert!(body["timestamp"].as_str().is_some());
}
