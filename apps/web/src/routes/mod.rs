pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assets;
use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::hero::handlers as hero;
use crate::pages::handlers as pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/about", get(pages::handle_about))
        .route("/experience", get(pages::handle_experience))
        .route("/projects", get(pages::handle_projects))
        .route(
            "/contact",
            get(pages::handle_contact).post(contact::handle_contact_form),
        )
        .route("/assets/site.js", get(assets::handle_site_js))
        // JSON API
        .route("/api/v1/content", get(content::handle_get_content))
        .route("/api/v1/projects", get(content::handle_list_projects))
        .route("/api/v1/contact", post(contact::handle_contact_api))
        .route("/api/v1/hero/roles", get(hero::handle_role_stream))
        .fallback(pages::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::contact::classify::ACCESS_POLICY_MESSAGE;
    use crate::contact::store::testing::RecordingStore;
    use crate::contact::ErrorClassifier;
    use crate::content;

    fn app_with(store: Arc<RecordingStore>) -> Router {
        build_router(AppState {
            content: Arc::new(content::load().unwrap()),
            contact_store: store,
            classifier: Arc::new(ErrorClassifier::default()),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(RecordingStore::default()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        send(app, request).await
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const JANE_FORM: &str = "name=Jane+Doe&email=jane%40example.com&phone=&message=Hello";

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_path(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["content"]["projects"], 4);
        assert_eq!(json["content"]["roles"], 5);
    }

    #[tokio::test]
    async fn test_every_page_renders() {
        for path in ["/", "/about", "/experience", "/projects", "/contact"] {
            let (status, body) = get_path(app(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
            assert!(body.contains(&format!(r#"href="{path}" aria-current="page""#)), "{path}");
        }
    }

    #[tokio::test]
    async fn test_projects_filter_query() {
        let (status, body) = get_path(app(), "/projects?category=Games").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No projects found"));

        let (status, body) = get_path(app(), "/projects?category=AI").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"<article class="card project""#).count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let (status, body) = get_path(app(), "/projects?category=Robotics").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_contact_form_success_resets_fields() {
        let store = Arc::new(RecordingStore::default());
        let (status, body) = send(app_with(store.clone()), form_post(JANE_FORM)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Message sent successfully!"));
        assert!(body.contains("toast-success"));
        assert!(!body.contains(r#"value="Jane Doe""#));
        assert!(body.contains("></textarea>"));

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jane@example.com");
        assert_eq!(records[0].phone, None);
    }

    #[tokio::test]
    async fn test_contact_form_policy_failure_keeps_fields() {
        let store = Arc::new(RecordingStore::failing(
            401,
            Some("new row violates row-level security policy for table \"contacts\""),
        ));
        let (status, body) = send(app_with(store), form_post(JANE_FORM)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to send message"));
        assert!(body.contains("Database security settings need to be configured."));
        assert!(body.contains(r#"value="Jane Doe""#));
        assert!(body.contains(">Hello</textarea>"));
    }

    #[tokio::test]
    async fn test_contact_form_missing_message_skips_store() {
        let store = Arc::new(RecordingStore::default());
        let (status, body) = send(
            app_with(store.clone()),
            form_post("name=Jane&email=jane%40example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("The message field is required"));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_contact_api_created() {
        let store = Arc::new(RecordingStore::default());
        let request = json_post(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+1 555 0100",
            "message": "Hello"
        }));
        let (status, body) = send(app_with(store.clone()), request).await;

        assert_eq!(status, StatusCode::CREATED);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["title"], "Message sent successfully!");
        assert_eq!(json["variant"], "success");
        assert_eq!(store.records()[0].phone.as_deref(), Some("+1 555 0100"));
    }

    #[tokio::test]
    async fn test_contact_api_policy_failure() {
        let store = Arc::new(RecordingStore::failing(
            403,
            Some("violates row-level security policy"),
        ));
        let request = json_post(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hi"
        }));
        let (status, body) = send(app_with(store), request).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "SUBMISSION_FAILED");
        assert_eq!(json["error"]["message"], ACCESS_POLICY_MESSAGE);
    }

    #[tokio::test]
    async fn test_contact_api_missing_field() {
        let request = json_post(json!({ "name": "Jane", "message": "Hi" }));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("The email field is required"));
    }

    #[tokio::test]
    async fn test_projects_api() {
        let (status, body) = get_path(app(), "/api/v1/projects?category=AI").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["filter"], "AI");
        assert_eq!(json["projects"].as_array().unwrap().len(), 3);
        assert_eq!(json["categories"][0]["name"], "All");
        assert_eq!(json["categories"][0]["count"], 4);
    }

    #[tokio::test]
    async fn test_content_api() {
        let (status, body) = get_path(app(), "/api/v1/content").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["profile"]["roles"][0], "AI Developer");
        assert_eq!(json["skills"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_role_stream_is_event_stream() {
        let request = Request::builder()
            .uri("/api/v1/hero/roles")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    }

    #[tokio::test]
    async fn test_site_js_served() {
        let request = Request::builder()
            .uri("/assets/site.js")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/javascript"));
    }

    #[tokio::test]
    async fn test_unknown_paths() {
        let (status, body) = get_path(app(), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));

        let (status, body) = get_path(app(), "/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
