//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use super::dto::*;
use super::form::FormError;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/accessibility", get(accessibility_page))
        .route("/plan", get(plan_page))
        .route("/journey/plan", post(plan_journey))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Render a full page, falling back to the error text.
fn render_page<T: Template>(template: &T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Home page.
async fn index_page() -> impl IntoResponse {
    render_page(&IndexTemplate::default())
}

/// About page.
async fn about_page() -> impl IntoResponse {
    render_page(&AboutTemplate::default())
}

/// Accessibility features page.
async fn accessibility_page() -> impl IntoResponse {
    render_page(&AccessibilityTemplate::default())
}

/// Plan-journey page with the planning form.
async fn plan_page() -> impl IntoResponse {
    render_page(&PlanJourneyTemplate::default())
}

/// Anything without a route.
async fn not_found() -> impl IntoResponse {
    let template = ErrorTemplate {
        title: "Page not found".to_string(),
        message: "The page you were looking for does not exist.".to_string(),
    };
    (StatusCode::NOT_FOUND, render_page(&template))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a journey from a form submission.
async fn plan_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanJourneyRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = req.validate()?;

    // Stand-in for a remote planning service
    let delay = state.config.simulated_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let plan = state.planner.generate_plan(&request);
    info!(
        origin = %plan.origin(),
        destination = %plan.destination(),
        duration = %plan.duration(),
        cost = plan.cost(),
        "plan generated"
    );

    let notice = Notice::plan_generated();

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlanResultTemplate {
            plan: PlanView::from_plan(&plan),
            notice,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanJourneyResponse {
            plan,
            message: notice.description.to_string(),
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::planner::PlannerConfig;

    fn app() -> Router {
        create_router(AppState::new(PlannerConfig::new(0)), "static")
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn plan_request(json: &str, accept: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/journey/plan")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, accept)
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    const DELHI_AGRA: &str = r#"{
        "from": "Delhi",
        "to": "Agra",
        "date": "2024-05-01",
        "optimizeFor": "time",
        "accessibility": ["blind"]
    }"#;

    #[tokio::test]
    async fn health_check() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn pages_render() {
        for (uri, needle) in [
            ("/", "Every Way to Travel"),
            ("/about", "Our Values"),
            ("/accessibility", "Hearing Accessibility"),
            ("/plan", "Plan My Journey"),
        ] {
            let (status, body) = send(get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(needle), "{uri} missing {needle}");
        }
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let (status, body) = send(get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn plan_as_json() {
        let (status, body) = send(plan_request(DELHI_AGRA, "application/json")).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let plan = &json["plan"];
        assert_eq!(plan["duration"], "2h 15m");
        assert_eq!(plan["cost"], 1800);
        assert_eq!(plan["comfortScore"], 4);
        assert_eq!(plan["steps"][1]["description"], "High-speed train to Agra");
        assert_eq!(
            plan["steps"][1]["accessibilityNote"],
            "Audio guidance available"
        );
        assert_eq!(json["message"], "Your journey has been planned successfully.");
    }

    #[tokio::test]
    async fn plan_as_html_fragment() {
        let (status, body) = send(plan_request(DELHI_AGRA, "text/html")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Route Overview"));
        assert!(body.contains("Express Train"));
        assert!(body.contains("₹1800"));
        assert!(body.contains("Wednesday, 1 May, 2024"));
        assert!(!body.contains("<html"));
    }

    #[tokio::test]
    async fn incomplete_form_is_400() {
        let json = r#"{"from": "Delhi", "to": "", "date": "2024-05-01"}"#;
        let (status, body) = send(plan_request(json, "application/json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json["error"],
            "Incomplete form: Please fill in all required fields."
        );
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let (status, body) = send(plan_request("{not json", "application/json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn unknown_values_are_tolerated() {
        let json = r#"{
            "from": "Pune",
            "to": "Goa",
            "date": "2024-05-01",
            "optimizeFor": "scenic",
            "accessibility": ["jetpack", "noiseMinimal"]
        }"#;
        let (status, body) = send(plan_request(json, "application/json")).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["plan"]["duration"], "3h 30m");
        assert_eq!(
            json["plan"]["accessibilityNotes"],
            serde_json::json!(["Quiet zones available"])
        );
    }

    #[tokio::test]
    async fn serves_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.css"), "body {}").unwrap();

        let app = create_router(AppState::new(PlannerConfig::new(0)), dir.path());
        let response = app.oneshot(get("/static/app.css")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"body {}");
    }
}
