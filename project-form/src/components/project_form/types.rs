//! Project form data types

use shared_types::Project;

/// Which backend operation a submission performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    /// `POST /api/project`
    Create,
    /// `PATCH /api/project/{id}`
    Update,
    /// `POST /api/import_project`
    Import,
}

impl SubmitKind {
    /// Create and import both produce a new project
    pub fn creates_project(self) -> bool {
        matches!(self, Self::Create | Self::Import)
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Import => "import",
        }
    }
}

/// Observable phase of the submission state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Inbound configuration for the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormConfig {
    /// Start in the "created" UI mode
    pub created: bool,
    /// Path prefix to navigate to after a create or import
    pub redirect_on_created: Option<String>,
    /// Seed project; the empty template when absent
    pub project_initial: Option<Project>,
    /// Start in import mode (from `?import=true`)
    pub importing: bool,
}
