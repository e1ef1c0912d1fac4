pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::intake::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate))
        // JSON API
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/layout", post(handlers::handle_layout))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::intake::handlers::{RENDER_ID_HEADER, TEMPLATE_HEADER, WARNINGS_HEADER};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::from_config(Config::default()))
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        raw_json_request(uri, &body.to_string())
    }

    fn raw_json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("action=\"/generate\""));
        assert!(html.contains("name=\"soft_skills\""));
    }

    #[tokio::test]
    async fn test_generate_from_urlencoded_form_returns_attachment() {
        let body = "name=Ada+Lovelace&phone=555&education=BSc%7CLondon%7CLogic%7C1835\
                    &projects=Note+G%7Ca%5Cnb&skills=Python%2C+Rust&template=modern";
        let response = app().oneshot(form_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        assert!(headers.contains_key(RENDER_ID_HEADER));
        assert_eq!(headers[WARNINGS_HEADER], "0");

        let pdf = body_bytes(response).await;
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_generate_reports_malformed_entries_in_header() {
        let body = "name=Ada&education=only%7Ctwo&template=nope";
        let response = app().oneshot(form_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        // unknown template + malformed education line
        assert_eq!(response.headers()[WARNINGS_HEADER], "2");
        assert_eq!(response.headers()[TEMPLATE_HEADER], "professional");
    }

    #[tokio::test]
    async fn test_generate_from_multipart_form() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAda\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"certifications\"\r\n\r\nOne\r\nTwo\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"template\"\r\n\r\ncreative\r\n\
             --{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    }

    #[tokio::test]
    async fn test_generate_rejects_unreadable_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_json_uses_configured_filename() {
        let config = Config {
            download_filename: "cv.pdf".to_string(),
            ..Config::default()
        };
        let app = build_router(AppState::from_config(config));
        let response = app
            .oneshot(json_request(
                "/api/v1/render",
                json!({ "record": { "name": "Ada" }, "template": "creative" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"cv.pdf\""
        );
    }

    #[tokio::test]
    async fn test_render_archives_copy_under_render_id() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config {
            archive_dir: Some(tmp.path().to_path_buf()),
            ..Config::default()
        };
        let app = build_router(AppState::from_config(config));
        let response = app
            .oneshot(json_request("/api/v1/render", json!({ "record": { "name": "Ada" } })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let render_id = response.headers()[RENDER_ID_HEADER].to_str().unwrap().to_string();
        let pdf = body_bytes(response).await;
        let archived = std::fs::read(tmp.path().join(format!("{render_id}.pdf"))).unwrap();
        assert_eq!(archived, pdf);
    }

    #[tokio::test]
    async fn test_archive_failure_fails_the_request() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let config = Config {
            archive_dir: Some(blocker.join("pdfs")),
            ..Config::default()
        };
        let app = build_router(AppState::from_config(config));
        let response = app
            .oneshot(json_request("/api/v1/render", json!({ "record": {} })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_layout_endpoint_returns_plan() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/layout",
                json!({
                    "record": { "name": "Ada", "projects": ["Title|line1\\nline2", "broken"] },
                    "template": "minimalistic"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let plan = body_json(response).await;
        assert_eq!(plan["template"], "minimalistic");
        assert_eq!(plan["ops"][0]["op"], "text");
        assert_eq!(plan["ops"][0]["text"], "Ada");
        assert_eq!(plan["ops"][0]["font"], "CourierBold");
        assert_eq!(plan["warnings"][0]["kind"], "malformed_project");
        assert_eq!(plan["warnings"][0]["index"], 1);
        let texts: Vec<&str> = plan["ops"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|op| op["text"].as_str())
            .collect();
        assert!(texts.contains(&"• line1"));
        assert!(texts.contains(&"• line2"));
        assert_eq!(plan["steps"]["entry_gaps"], 2);
        assert_eq!(plan["final_y"], plan["predicted_final_y"]);
    }

    #[tokio::test]
    async fn test_render_rejects_json_syntax_error_with_envelope() {
        let response = app()
            .oneshot(raw_json_request("/api/v1/render", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_rejects_wrong_field_type_as_bad_request() {
        let response = app()
            .oneshot(raw_json_request("/api/v1/render", r#"{"record":{"name":5}}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_treats_null_fields_as_empty() {
        let response = app()
            .oneshot(raw_json_request(
                "/api/v1/render",
                r#"{"record":{"name":null,"education":null},"template":null}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(response.headers()[TEMPLATE_HEADER], "professional");
        assert_eq!(response.headers()[WARNINGS_HEADER], "0");
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_layout_treats_null_education_as_empty() {
        let response = app()
            .oneshot(raw_json_request("/api/v1/layout", r#"{"record":{"education":null}}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let plan = body_json(response).await;
        assert_eq!(plan["steps"]["entry_gaps"], 0);
        assert!(plan["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_templates_endpoint_lists_four() {
        let response = app()
            .oneshot(Request::get("/api/v1/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["default"], "professional");
        let names: Vec<&str> = body["templates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["professional", "minimalistic", "creative", "modern"]);
        assert_eq!(body["templates"][2]["heading_size"], 16.0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
