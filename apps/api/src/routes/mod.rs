pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::render::handlers as render_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form API
        .route(
            "/api/v1/resume/default",
            get(resume_handlers::handle_default_record),
        )
        .route("/api/v1/resume/edit", post(resume_handlers::handle_edit))
        .route(
            "/api/v1/resume/validate",
            post(resume_handlers::handle_validate),
        )
        // Presentation API
        .route(
            "/api/v1/templates",
            get(render_handlers::handle_list_templates),
        )
        .route("/api/v1/render", post(render_handlers::handle_render))
        .route(
            "/api/v1/export/pdf",
            post(export_handlers::handle_export_pdf),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::export::PrintPdfExporter;
    use crate::render::fixtures::sample_record;
    use crate::render::TemplateKind;
    use crate::resume::ids::SequentialIds;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                bind_addr: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                default_template: TemplateKind::Modern,
            },
            ids: Arc::new(SequentialIds::new("id")),
            exporter: Arc::new(PrintPdfExporter),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_default_record_endpoint() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/resume/default")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["name"], "");
        assert_eq!(body["education"], json!([]));
    }

    #[tokio::test]
    async fn test_edit_endpoint_assigns_ids() {
        let request = post_json(
            "/api/v1/resume/edit",
            json!({
                "record": {},
                "edit": { "type": "add_entry", "kind": "experience" }
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["experience"][0]["id"], "id-1");
        assert_eq!(body["experience"][0]["company"], "");
    }

    #[tokio::test]
    async fn test_edit_endpoint_rejects_bad_index() {
        let request = post_json(
            "/api/v1/resume/edit",
            json!({
                "record": {},
                "edit": { "type": "remove_entry", "kind": "education", "index": 0 }
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "INVALID_EDIT");
    }

    #[tokio::test]
    async fn test_validate_rejects_empty_record() {
        let response = test_router()
            .oneshot(post_json("/api/v1/resume/validate", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["fields"]["name"], "Name is required");
        assert_eq!(
            body["error"]["fields"]["experience"],
            "At least one experience entry is required"
        );
    }

    #[tokio::test]
    async fn test_validate_accepts_and_derives() {
        let record = serde_json::to_value(sample_record()).unwrap();
        let response = test_router()
            .oneshot(post_json("/api/v1/resume/validate", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["skills"], json!(["Compilers", "COBOL", "Mathematics"]));
        assert_eq!(
            body["responsibilities"][0]["lines"],
            json!(["Built the A-0 compiler", "Led FLOW-MATIC"])
        );
    }

    #[tokio::test]
    async fn test_render_uses_default_template() {
        let record = serde_json::to_value(sample_record()).unwrap();
        let response = test_router()
            .oneshot(post_json("/api/v1/render", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("<title>Grace Hopper - modern</title>"));
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_template_and_invalid_record() {
        let record = serde_json::to_value(sample_record()).unwrap();
        let response = test_router()
            .oneshot(post_json("/api/v1/render?template=baroque", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = test_router()
            .oneshot(post_json("/api/v1/render?template=classic", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_export_pdf() {
        let record = serde_json::to_value(sample_record()).unwrap();
        let response = test_router()
            .oneshot(post_json("/api/v1/export/pdf?template=classic", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Grace_Hopper_-_classic.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }
}
