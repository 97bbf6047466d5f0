//! End-to-end tests for the contract API against an embedded store
//! Run: cargo test -p portal-server --test contratos_api

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use portal_server::core::{Config, ServerState};
use portal_server::routes::build_app;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

/// App over a fresh store; keep the `TempDir` alive for the test's duration
async fn test_app() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("portal.db");
    let config = Config::default().with_database_path(path.to_string_lossy().into_owned());
    let state = ServerState::initialize(&config).await.unwrap();
    (build_app().with_state(state), tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:5173");
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn aluguel_sede() -> Value {
    json!({
        "nomeAmigavel": "Aluguel Sede",
        "filial": "SP",
        "tipo": "Locação",
        "centroCusto": "CC01",
        "valorTotal": 1000.0,
        "duracao": 12,
        "valorMensal": "83.33",
        "fornecedor1": "ACME",
        "cnpj1": "00.000.000/0001-00"
    })
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/api/contratos", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

async fn create(app: &Router, payload: Value) -> String {
    let (status, body) = send(app, Method::POST, "/api/contratos", Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

fn find<'a>(rows: &'a [Value], id: &str) -> Option<&'a Value> {
    rows.iter().find(|row| row["id"] == id)
}

#[tokio::test]
async fn create_then_list_applies_default_status() {
    let (app, _tmp) = test_app().await;

    let id = create(&app, aluguel_sede()).await;
    assert!(!id.is_empty());

    let rows = list(&app).await;
    assert_eq!(rows.len(), 1);
    let row = find(&rows, &id).unwrap();
    assert_eq!(row["nomeAmigavel"], "Aluguel Sede");
    assert_eq!(row["tipo"], "Locação");
    assert_eq!(row["valorTotal"], 1000.0);
    assert_eq!(row["duracao"], 12);
    assert_eq!(row["valorMensal"], "83.33");
    assert_eq!(row["cnpj1"], "00.000.000/0001-00");
    assert_eq!(row["status"], "Ativo");
    assert_eq!(row["isRateado"], false);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let (app, _tmp) = test_app().await;

    let first = create(&app, aluguel_sede()).await;
    let second = create(&app, aluguel_sede()).await;
    assert_ne!(first, second);
    assert_eq!(list(&app).await.len(), 2);
}

#[tokio::test]
async fn create_accepts_front_end_form_payload() {
    let (app, _tmp) = test_app().await;

    let payload = json!({
        "nomeAmigavel": "Link Filial",
        "filial": "RJ",
        "tipo": "Internet",
        "centroCusto": "CC07",
        "valorTotal": "2400.50",
        "duracao": "24",
        "valorMensal": "R$ 100,02",
        "fornecedor1": "Telecom X",
        "cnpj1": "11.111.111/0001-11",
        "status": "Ativo",
        "dataInicio": "2024-01-01",
        "diaVencimento": "10",
        "circ1": "CIRC-001",
        "tags": "link,backup",
        "info": "",
        "fornecedor2": { "razao": "Telecom Y", "cnpj": "22.222.222/0001-22", "circ": "CIRC-002" },
        "isRateado": true
    });
    let id = create(&app, payload).await;

    let rows = list(&app).await;
    let row = find(&rows, &id).unwrap();
    assert_eq!(row["valorTotal"], 2400.5);
    assert_eq!(row["duracao"], 24);
    assert_eq!(row["diaVencimento"], "10");
    assert_eq!(row["fornecedor2"]["razao"], "Telecom Y");
    assert_eq!(row["isRateado"], true);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (app, _tmp) = test_app().await;

    let mut original = aluguel_sede();
    original["info"] = json!("renegociar em 2025");
    original["status"] = json!("Suspenso");
    let id = create(&app, original).await;

    let mut replacement = aluguel_sede();
    replacement["nomeAmigavel"] = json!("Aluguel Galpão");
    replacement["valorTotal"] = json!(1500.0);
    // The front-end echoes the id back on edit
    replacement["id"] = json!(id);

    let uri = format!("/api/contratos/{id}");
    let (status, body) = send(&app, Method::PUT, &uri, Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    let rows = list(&app).await;
    assert_eq!(rows.len(), 1);
    let row = find(&rows, &id).unwrap();
    assert_eq!(row["nomeAmigavel"], "Aluguel Galpão");
    assert_eq!(row["valorTotal"], 1500.0);
    assert_eq!(row["status"], "Ativo");
    assert_eq!(row["info"], Value::Null);
}

#[tokio::test]
async fn update_of_unknown_id_acknowledges_without_creating() {
    let (app, _tmp) = test_app().await;

    let uri = "/api/contratos/zzzzzzzzzzzzzzzzzzzz";
    let (status, body) = send(&app, Method::PUT, uri, Some(aluguel_sede())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (app, _tmp) = test_app().await;

    let keep = create(&app, aluguel_sede()).await;
    let id = create(&app, aluguel_sede()).await;
    let uri = format!("/api/contratos/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let rows = list(&app).await;
    assert!(find(&rows, &id).is_none());
    assert!(find(&rows, &keep).is_some());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));
}

#[tokio::test]
async fn malformed_id_is_a_client_error() {
    let (app, _tmp) = test_app().await;
    let uri = "/api/contratos/not-a-valid-id";

    let (status, body) = send(&app, Method::PUT, uri, Some(aluguel_sede())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    let (status, body) = send(&app, Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
    assert_eq!(body["details"]["id"], "not-a-valid-id");
}

#[tokio::test]
async fn create_with_missing_field_inserts_nothing() {
    let (app, _tmp) = test_app().await;

    let mut payload = aluguel_sede();
    payload.as_object_mut().unwrap().remove("nomeAmigavel");

    let (status, body) = send(&app, Method::POST, "/api/contratos", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["message"].as_str().unwrap().contains("nomeAmigavel"));

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_with_blank_or_malformed_body_is_rejected() {
    let (app, _tmp) = test_app().await;

    let mut blank = aluguel_sede();
    blank["filial"] = json!("  ");
    let (status, body) = send(&app, Method::POST, "/api/contratos", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "filial");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contratos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn update_with_invalid_payload_leaves_record_untouched() {
    let (app, _tmp) = test_app().await;

    let id = create(&app, aluguel_sede()).await;
    let uri = format!("/api/contratos/{id}");
    let before = list(&app).await;

    // Wrong type
    let mut wrong_type = aluguel_sede();
    wrong_type["filial"] = json!(10);
    let (status, body) = send(&app, Method::PUT, &uri, Some(wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    // Missing required field
    let mut missing = aluguel_sede();
    missing.as_object_mut().unwrap().remove("cnpj1");
    let (status, body) = send(&app, Method::PUT, &uri, Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    // Blank required field
    let mut blank = aluguel_sede();
    blank["nomeAmigavel"] = json!("");
    let (status, body) = send(&app, Method::PUT, &uri, Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["field"], "nomeAmigavel");

    // Negative amount
    let mut negative = aluguel_sede();
    negative["valorTotal"] = json!(-5);
    let (status, body) = send(&app, Method::PUT, &uri, Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "valorTotal");

    let after = list(&app).await;
    assert_eq!(after, before);
    let row = find(&after, &id).unwrap();
    assert_eq!(row["nomeAmigavel"], "Aluguel Sede");
    assert_eq!(row["filial"], "SP");
    assert_eq!(row["valorTotal"], 1000.0);
}

#[tokio::test]
async fn body_without_json_content_type_is_rejected() {
    let (app, _tmp) = test_app().await;

    let id = create(&app, aluguel_sede()).await;

    for (method, uri) in [
        (Method::POST, "/api/contratos".to_string()),
        (Method::PUT, format!("/api/contratos/{id}")),
    ] {
        let mut payload = aluguel_sede();
        payload["nomeAmigavel"] = json!("Sem content-type");
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(payload.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 2);
    }

    let rows = list(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(find(&rows, &id).unwrap()["nomeAmigavel"], "Aluguel Sede");
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let (app, _tmp) = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-abc-123");
}

#[tokio::test]
async fn responses_allow_any_origin_and_carry_request_id() {
    let (app, _tmp) = test_app().await;

    let request = Request::builder()
        .uri("/api/contratos")
        .header(header::ORIGIN, "http://portal.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn health_reports_store_status() {
    let (app, _tmp) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "portal-server");
}
