//! Global project list shared by every view

use dioxus::prelude::WritableExt;
use shared_types::Project;

use crate::api::fetch_projects;
use crate::error::RequestFailure;

/// Global signal holding the last fetched project list
pub static PROJECTS: dioxus::signals::GlobalSignal<Vec<Project>> =
    dioxus::signals::GlobalSignal::new(Vec::new);

/// Re-fetch the project list from the server and publish it to [`PROJECTS`]
pub async fn load_projects() -> Result<(), RequestFailure> {
    match fetch_projects().await {
        Ok(projects) => {
            dioxus_logger::tracing::debug!("Loaded {} projects", projects.len());
            *PROJECTS.write() = sort_projects(projects);
            Ok(())
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to load projects: {}", e);
            Err(e)
        }
    }
}

/// Newest first; projects without a timestamp go last, ties broken by name
pub fn sort_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.name.cmp(&b.name))
    });
    projects
}
