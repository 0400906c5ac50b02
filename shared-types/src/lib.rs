//! Shared types between frontend and backend
//!
//! These types describe the project endpoints:
//! - `POST /api/project` and `PATCH /api/project/{id}` take a [`ProjectRequest`]
//! - `POST /api/import_project` takes an [`ImportProjectQuery`]
//! - all three answer with a [`Project`]
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Project
// ============================================================================

/// Current schema version for projects
pub const PROJECT_SCHEMA_VERSION: u32 = 1;

/// Maximum length of a project name
pub const PROJECT_NAME_MAX_LEN: usize = 120;

/// Project - the persisted entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../project-form/bindings/generated.ts")]
pub struct Project {
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,

    /// Schema version
    #[serde(default = "default_schema_version")]
    pub v: u32,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Server-populated, read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub created_at: Option<DateTime<Utc>>,

    /// Server-populated, read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub created_by: Option<String>,
}

fn default_schema_version() -> u32 {
    PROJECT_SCHEMA_VERSION
}

impl Project {
    /// Empty template used to seed a new-project form
    pub fn template() -> Self {
        Self {
            id: None,
            v: PROJECT_SCHEMA_VERSION,
            name: String::new(),
            description: Some(String::new()),
            created_at: None,
            created_by: None,
        }
    }

    /// True when the project has been persisted (has a non-empty id)
    pub fn has_identity(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn identity(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::template()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of a create (`POST`) or partial update (`PATCH`) request.
///
/// Only the user-editable fields; the server owns `id`, `v` and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../project-form/bindings/generated.ts")]
pub struct ProjectRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
}

impl From<&Project> for ProjectRequest {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
        }
    }
}

/// Query string of `POST /api/import_project`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../project-form/bindings/generated.ts")]
pub struct ImportProjectQuery {
    pub project_path: String,
}

impl ImportProjectQuery {
    /// Unencoded `key=value` pairs for the request URL
    pub fn query_pairs(&self) -> [(&'static str, &str); 1] {
        [("project_path", self.project_path.as_str())]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_template_is_new_and_empty() {
        let project = Project::template();
        assert!(!project.has_identity());
        assert_eq!(project.v, 1);
        assert_eq!(project.name, "");
        assert_eq!(project.description.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_id_is_not_an_identity() {
        let project = Project {
            id: Some(String::new()),
            ..Project::template()
        };
        assert!(!project.has_identity());
        assert_eq!(project.identity(), None);
    }

    #[test]
    fn test_request_omits_missing_description() {
        let project = Project {
            name: "Foo".to_string(),
            description: None,
            ..Project::template()
        };
        let json = serde_json::to_value(ProjectRequest::from(&project)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Foo" }));
    }

    #[test]
    fn test_request_drops_server_owned_fields() {
        let project = Project {
            id: Some("p1".to_string()),
            v: 1,
            name: "Bar".to_string(),
            description: Some("desc".to_string()),
            created_at: Some(Utc::now()),
            created_by: Some("someone".to_string()),
        };
        let json = serde_json::to_value(ProjectRequest::from(&project)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Bar", "description": "desc" })
        );
    }

    #[test]
    fn test_project_deserializes_server_payload() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "123456789012",
            "v": 1,
            "name": "Imported",
            "created_at": "2026-02-20T14:32:10Z",
            "created_by": "user",
            "model_type": "project"
        }))
        .unwrap();
        assert_eq!(project.identity(), Some("123456789012"));
        assert_eq!(project.description, None);
        assert!(project.created_at.is_some());
    }

    #[test]
    fn test_missing_version_defaults() {
        let project: Project = serde_json::from_value(serde_json::json!({ "name": "x" })).unwrap();
        assert_eq!(project.v, PROJECT_SCHEMA_VERSION);
    }

    #[test]
    fn test_import_query_pairs_match_serialized_fields() {
        let query = ImportProjectQuery {
            project_path: "/data/my project.kiln".to_string(),
        };
        let json = serde_json::to_value(&query).unwrap();
        let pairs = query.query_pairs();
        assert_eq!(pairs.len(), 1);
        let (key, value) = pairs[0];
        assert_eq!(json[key], value);
    }

    #[test]
    fn export_types() {
        let config = Config::default();
        Project::export(&config).unwrap();
        ProjectRequest::export(&config).unwrap();
        ImportProjectQuery::export(&config).unwrap();
    }
}
