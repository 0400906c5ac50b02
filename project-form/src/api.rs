use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{ImportProjectQuery, Project, ProjectRequest};
use std::sync::OnceLock;

use crate::error::RequestFailure;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8757
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    api_base_for_hostname(&hostname)
}

fn api_base_for_hostname(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8757".to_string()
    } else {
        String::new()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestFailure> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(RequestFailure::Status { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| RequestFailure::Decode(e.to_string()))
}

fn encode_path_segment(value: &str) -> String {
    js_sys::encode_uri_component(value)
        .as_string()
        .unwrap_or_else(|| value.to_string())
}

// ============================================================================
// Project API Functions
// ============================================================================

pub async fn create_project(request: &ProjectRequest) -> Result<Project, RequestFailure> {
    let url = format!("{}/api/project", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| RequestFailure::Network(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| RequestFailure::Network(e.to_string()))?;

    read_json(response).await
}

pub async fn update_project(
    project_id: &str,
    request: &ProjectRequest,
) -> Result<Project, RequestFailure> {
    let url = format!(
        "{}/api/project/{}",
        api_base(),
        encode_path_segment(project_id)
    );

    let response = Request::patch(&url)
        .json(request)
        .map_err(|e| RequestFailure::Network(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| RequestFailure::Network(e.to_string()))?;

    read_json(response).await
}

pub async fn import_project(project_path: &str) -> Result<Project, RequestFailure> {
    let query = ImportProjectQuery {
        project_path: project_path.to_string(),
    };
    let url = format!("{}/api/import_project", api_base());

    let response = Request::post(&url)
        .query(query.query_pairs())
        .send()
        .await
        .map_err(|e| RequestFailure::Network(e.to_string()))?;

    read_json(response).await
}

pub async fn fetch_projects() -> Result<Vec<Project>, RequestFailure> {
    let url = format!("{}/api/projects", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| RequestFailure::Network(e.to_string()))?;

    read_json(response).await
}

// ============================================================================
// Seam used by the form state machine
// ============================================================================

/// Backend operations the project form depends on
#[async_trait(?Send)]
pub trait ProjectApi {
    async fn create_project(&self, request: &ProjectRequest) -> Result<Project, RequestFailure>;

    async fn update_project(
        &self,
        project_id: &str,
        request: &ProjectRequest,
    ) -> Result<Project, RequestFailure>;

    async fn import_project(&self, project_path: &str) -> Result<Project, RequestFailure>;

    /// Refresh the global project list
    async fn load_projects(&self) -> Result<(), RequestFailure>;
}

/// [`ProjectApi`] backed by the HTTP endpoints above
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProjectApi;

#[async_trait(?Send)]
impl ProjectApi for HttpProjectApi {
    async fn create_project(&self, request: &ProjectRequest) -> Result<Project, RequestFailure> {
        create_project(request).await
    }

    async fn update_project(
        &self,
        project_id: &str,
        request: &ProjectRequest,
    ) -> Result<Project, RequestFailure> {
        update_project(project_id, request).await
    }

    async fn import_project(&self, project_path: &str) -> Result<Project, RequestFailure> {
        import_project(project_path).await
    }

    async fn load_projects(&self) -> Result<(), RequestFailure> {
        crate::projects::load_projects().await
    }
}
