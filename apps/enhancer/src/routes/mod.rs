pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/resumes/enhance", post(handlers::handle_enhance))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::enhancement::EnhancementPipeline;
    use crate::llm_client::testing::{Script, ScriptedGenerator};

    const VALID: &str = r#"{"name": "Jane Doe", "title": "Software Engineer", "experience": [{"title": "Software Engineer", "company": "Acme"}]}"#;

    fn test_app(llm: ScriptedGenerator) -> Router {
        let pipeline = EnhancementPipeline::new(Arc::new(llm), Duration::from_secs(60));
        build_router(AppState { pipeline })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(ScriptedGenerator::new(Script::Fail));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let app = test_app(ScriptedGenerator::new(Script::Fail));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["name"], "Modern Professional");
        assert!(json[0].get("style_directive").is_none());
    }

    #[tokio::test]
    async fn test_enhance_from_pages() {
        let app = test_app(
            ScriptedGenerator::new(Script::reply(VALID)).on("Executive Classic", Script::Fail),
        );
        let body = json!({
            "pages": [[
                {"text": "Software Engineer", "x": 10.0, "y": 680.0},
                {"text": "Jane", "x": 10.0, "y": 700.0},
                {"text": "Doe", "x": 50.0, "y": 702.0}
            ]]
        });

        let (status, json) = post_json(app, "/api/v1/resumes/enhance", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["document"], "Jane Doe\nSoftware Engineer");
        assert_eq!(json["inspection"]["basic_info"]["name"], "Jane Doe");
        assert_eq!(json["batch"]["improvements"].as_array().unwrap().len(), 4);
        let variants = json["batch"]["variants"].as_array().unwrap();
        assert_eq!(variants.len(), 4);
        assert_eq!(variants[1]["used_fallback"], true);
        assert_eq!(variants[0]["used_fallback"], false);
        assert_eq!(
            json["export_filenames"][0],
            "Jane_Doe_Resume_Modern_Professional.pdf"
        );
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_enhance_from_text() {
        let app = test_app(ScriptedGenerator::new(Script::reply(VALID)));
        let body = json!({"text": "Jane Doe\nSoftware Engineer\njane@x.com"});

        let (status, json) = post_json(app, "/api/v1/resumes/enhance", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["inspection"]["basic_info"]["email"], "jane@x.com");
        assert_eq!(json["batch"]["variants"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_enhance_rejects_blank_text() {
        let app = test_app(ScriptedGenerator::new(Script::reply(VALID)));

        let (status, json) =
            post_json(app, "/api/v1/resumes/enhance", json!({"text": "  \n\t "})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_enhance_rejects_document_without_pages() {
        let app = test_app(ScriptedGenerator::new(Script::reply(VALID)));

        let (status, _) = post_json(app, "/api/v1/resumes/enhance", json!({"pages": []})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_enhance_requires_exactly_one_source() {
        let app = test_app(ScriptedGenerator::new(Script::reply(VALID)));
        let (status, json) = post_json(app, "/api/v1/resumes/enhance", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

        let app = test_app(ScriptedGenerator::new(Script::reply(VALID)));
        let both = json!({"text": "Jane Doe", "pages": [[]]});
        let (status, _) = post_json(app, "/api/v1/resumes/enhance", both).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
