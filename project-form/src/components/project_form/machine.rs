//! Project form state machine
//!
//! `idle -> submitting -> {succeeded, failed}` for create, update and import.
//! All three submissions share [`run_submission`]; only the network call
//! differs. Derived state (`warn_before_unload`) is recomputed by
//! [`ProjectFormState::reconcile`] at the end of every mutation.

use std::future::Future;

use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use shared_types::{Project, ProjectRequest};

use super::logic::{has_unsaved_changes, redirect_path, validate_draft};
use super::types::{FormConfig, SubmissionPhase, SubmitKind};
use crate::api::ProjectApi;
use crate::error::{FormError, RequestFailure};
use crate::navigation::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFormState {
    initial: Project,
    draft: Project,
    submitting: bool,
    saved: bool,
    created: bool,
    importing: bool,
    import_project_path: String,
    redirect_on_created: Option<String>,
    created_project_id: Option<String>,
    error: Option<FormError>,
    warn_before_unload: bool,
}

impl ProjectFormState {
    pub fn new(config: FormConfig) -> Self {
        let initial = config.project_initial.unwrap_or_else(Project::template);
        let mut state = Self {
            draft: initial.clone(),
            initial,
            submitting: false,
            saved: false,
            created: config.created,
            importing: false,
            import_project_path: String::new(),
            redirect_on_created: config.redirect_on_created,
            created_project_id: None,
            error: None,
            warn_before_unload: false,
        };
        state.set_importing(config.importing);
        state
    }

    pub fn draft(&self) -> &Project {
        &self.draft
    }

    pub fn initial(&self) -> &Project {
        &self.initial
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn created(&self) -> bool {
        self.created
    }

    pub fn importing(&self) -> bool {
        self.importing
    }

    pub fn import_project_path(&self) -> &str {
        &self.import_project_path
    }

    pub fn redirect_on_created(&self) -> Option<&str> {
        self.redirect_on_created.as_deref()
    }

    /// Id of the project produced by the last successful create or import
    pub fn created_project_id(&self) -> Option<&str> {
        self.created_project_id.as_deref()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Cached result of [`Self::has_unsaved_changes`], as of the last mutation
    pub fn warn_before_unload(&self) -> bool {
        self.warn_before_unload
    }

    pub fn has_unsaved_changes(&self) -> bool {
        has_unsaved_changes(&self.draft, &self.initial, self.saved)
    }

    /// Editing an existing project never offers import
    pub fn can_toggle_import(&self) -> bool {
        !self.draft.has_identity()
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.submitting {
            SubmissionPhase::Submitting
        } else if self.error.is_some() {
            SubmissionPhase::Failed
        } else if self.saved {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Idle
        }
    }

    fn reconcile(&mut self) {
        self.warn_before_unload = self.has_unsaved_changes();
    }

    /// Replace both the baseline and the draft with `project`
    pub fn set_project(&mut self, project: Project) {
        self.draft = project.clone();
        self.initial = project;
        if self.draft.has_identity() {
            self.importing = false;
        }
        self.reconcile();
    }

    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.reconcile();
    }

    pub fn edit_description(&mut self, description: impl Into<String>) {
        self.draft.description = Some(description.into());
        self.reconcile();
    }

    pub fn set_import_path(&mut self, path: impl Into<String>) {
        self.import_project_path = path.into();
        self.reconcile();
    }

    /// Returns whether the requested mode was applied
    pub fn set_importing(&mut self, importing: bool) -> bool {
        let applied = !importing || self.can_toggle_import();
        self.importing = importing && applied;
        self.reconcile();
        applied
    }

    fn begin_submission(&mut self) {
        self.error = None;
        self.saved = false;
        self.submitting = true;
        self.reconcile();
    }

    fn fail(&mut self, error: FormError) {
        self.error = Some(error);
        self.reconcile();
    }

    /// Server accepted the submission and the project list was refreshed
    fn complete(&mut self, kind: SubmitKind, submitted: Project, returned: &Project) {
        match kind {
            SubmitKind::Update => self.initial = submitted,
            SubmitKind::Import => self.created = true,
            SubmitKind::Create => {}
        }
        if kind.creates_project() {
            self.created_project_id = returned.identity().map(str::to_string);
        }
        self.saved = true;
        self.reconcile();
    }

    fn mark_created(&mut self) {
        self.created = true;
        self.reconcile();
    }

    fn finish_submission(&mut self) {
        self.submitting = false;
        self.reconcile();
    }
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

/// Access to form state that stays valid across await points
pub trait FormStore {
    fn read_state<R>(&self, f: impl FnOnce(&ProjectFormState) -> R) -> R;
    fn update_state<R>(&mut self, f: impl FnOnce(&mut ProjectFormState) -> R) -> R;
}

impl FormStore for Signal<ProjectFormState> {
    fn read_state<R>(&self, f: impl FnOnce(&ProjectFormState) -> R) -> R {
        f(&self.read())
    }

    fn update_state<R>(&mut self, f: impl FnOnce(&mut ProjectFormState) -> R) -> R {
        f(&mut self.write())
    }
}

/// How a submission ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already running
    Ignored,
    /// Saved; the form stays on screen
    Saved,
    /// Saved and navigated to the contained path
    Redirected(String),
}

/// Create the draft (no identity) or update it (identity present)
pub async fn save_project<S, A, N>(
    store: &mut S,
    api: &A,
    navigator: &N,
) -> Result<SubmitOutcome, FormError>
where
    S: FormStore,
    A: ProjectApi + ?Sized,
    N: Navigator + ?Sized,
{
    if store.read_state(|s| s.submitting()) {
        dioxus_logger::tracing::warn!("Ignoring save while a submission is in flight");
        return Ok(SubmitOutcome::Ignored);
    }

    let draft = store.read_state(|s| s.draft().clone());
    if let Err(err) = validate_draft(&draft) {
        store.update_state(|s| s.fail(err.clone()));
        return Err(err);
    }

    let request = ProjectRequest::from(&draft);
    match draft.identity() {
        None => {
            run_submission(store, api, navigator, SubmitKind::Create, draft.clone(), || {
                api.create_project(&request)
            })
            .await
        }
        Some(project_id) => {
            run_submission(store, api, navigator, SubmitKind::Update, draft.clone(), || {
                api.update_project(project_id, &request)
            })
            .await
        }
    }
}

/// Import the project found at the form's import path
pub async fn import_project<S, A, N>(
    store: &mut S,
    api: &A,
    navigator: &N,
) -> Result<SubmitOutcome, FormError>
where
    S: FormStore,
    A: ProjectApi + ?Sized,
    N: Navigator + ?Sized,
{
    if store.read_state(|s| s.submitting()) {
        dioxus_logger::tracing::warn!("Ignoring import while a submission is in flight");
        return Ok(SubmitOutcome::Ignored);
    }

    let (path, draft) = store.read_state(|s| (s.import_project_path().to_string(), s.draft().clone()));
    run_submission(store, api, navigator, SubmitKind::Import, draft, || {
        api.import_project(&path)
    })
    .await
}

/// Shared template: set flags, call the network, refresh the list, set flags,
/// maybe redirect. `submitting` is cleared on every exit path.
async fn run_submission<S, A, N, F, Fut>(
    store: &mut S,
    api: &A,
    navigator: &N,
    kind: SubmitKind,
    submitted: Project,
    request: F,
) -> Result<SubmitOutcome, FormError>
where
    S: FormStore,
    A: ProjectApi + ?Sized,
    N: Navigator + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Project, RequestFailure>>,
{
    store.update_state(|s| s.begin_submission());
    dioxus_logger::tracing::info!("Starting project {}", kind.verb());

    let result = submission_steps(store, api, navigator, kind, submitted, request).await;

    store.update_state(|s| {
        if let Err(err) = &result {
            s.fail(err.clone());
        }
        s.finish_submission();
    });

    if let Err(err) = &result {
        dioxus_logger::tracing::error!("Project {} failed: {}", kind.verb(), err);
    }
    result
}

async fn submission_steps<S, A, N, F, Fut>(
    store: &mut S,
    api: &A,
    navigator: &N,
    kind: SubmitKind,
    submitted: Project,
    request: F,
) -> Result<SubmitOutcome, FormError>
where
    S: FormStore,
    A: ProjectApi + ?Sized,
    N: Navigator + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Project, RequestFailure>>,
{
    let returned = request().await?;

    // A refresh failure lands in the same error path even though the
    // project now exists on the server.
    api.load_projects().await?;

    store.update_state(|s| s.complete(kind, submitted, &returned));

    // Let the unload guard observe `saved` before any navigation.
    navigator.tick().await;

    if kind == SubmitKind::Create {
        store.update_state(|s| s.mark_created());
    }

    let target = store.read_state(|s| redirect_path(s.redirect_on_created(), returned.identity()));
    dioxus_logger::tracing::info!(
        "Project {} succeeded (id: {})",
        kind.verb(),
        returned.identity().unwrap_or("none")
    );

    match target {
        Some(path) => {
            navigator.goto(&path);
            Ok(SubmitOutcome::Redirected(path))
        }
        None => Ok(SubmitOutcome::Saved),
    }
}
