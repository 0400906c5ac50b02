//! ProjectForm component: create, edit or import a project

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{Project, PROJECT_NAME_MAX_LEN};

use super::machine::{import_project, save_project, ProjectFormState};
use super::styles::PROJECT_FORM_STYLES;
use super::types::{FormConfig, SubmissionPhase};
use crate::api::HttpProjectApi;
use crate::navigation::{import_requested_from_location, install_unload_guard, BrowserNavigator};

#[component]
pub fn ProjectForm(
    #[props(default)] created: bool,
    #[props(default)] redirect_on_created: Option<String>,
    #[props(default)] project: Option<Project>,
) -> Element {
    let mut state = use_signal(|| {
        ProjectFormState::new(FormConfig {
            created,
            redirect_on_created: redirect_on_created.clone(),
            project_initial: project.clone(),
            importing: import_requested_from_location(),
        })
    });

    // Dropped with the component, which removes the listener
    let _unload_guard = use_hook(|| Rc::new(install_unload_guard(state)));

    // A new seed project from the parent replaces the draft wholesale
    use_effect(use_reactive((&project,), move |(project,)| {
        if let Some(project) = project {
            state.write().set_project(project);
        }
    }));

    let on_save = use_callback(move |_| {
        spawn(async move {
            let mut store = state;
            if let Err(e) = save_project(&mut store, &HttpProjectApi, &BrowserNavigator).await {
                dioxus_logger::tracing::debug!("save_project left error in form state: {}", e);
            }
        });
    });

    let on_import = use_callback(move |_| {
        spawn(async move {
            let mut store = state;
            if let Err(e) = import_project(&mut store, &HttpProjectApi, &BrowserNavigator).await {
                dioxus_logger::tracing::debug!("import_project left error in form state: {}", e);
            }
        });
    });

    let on_name_input = use_callback(move |e: FormEvent| {
        state.write().edit_name(e.value());
    });

    let on_description_input = use_callback(move |e: FormEvent| {
        state.write().edit_description(e.value());
    });

    let on_path_input = use_callback(move |e: FormEvent| {
        state.write().set_import_path(e.value());
    });

    let current = state.read().clone();
    let submitting = current.submitting();
    let is_existing = current.draft().has_identity();
    let name = current.draft().name.clone();
    let description = current.draft().description.clone().unwrap_or_default();
    let import_path = current.import_project_path().to_string();
    let max_len = PROJECT_NAME_MAX_LEN.to_string();
    let save_label = if is_existing { "Save" } else { "Create" };
    let error_banner = current
        .error()
        .map(|err| (err.title().to_string(), err.message().to_string()));

    if current.created() {
        return rsx! {
            style { {PROJECT_FORM_STYLES} }
            div {
                class: "project-form",
                CreatedPanel {
                    name: current.draft().name.clone(),
                    project_id: current.created_project_id().map(str::to_string),
                    imported: current.importing(),
                }
            }
        };
    }

    rsx! {
        style { {PROJECT_FORM_STYLES} }
        div {
            class: "project-form",
            if let Some((title, message)) = error_banner {
                div {
                    class: "project-form-error",
                    role: "alert",
                    strong { "{title}" }
                    pre { "{message}" }
                }
            }
            if current.importing() {
                div {
                    class: "project-form-fields",
                    label {
                        class: "project-form-label",
                        "Project path"
                        input {
                            class: "project-form-input",
                            r#type: "text",
                            placeholder: "/path/to/project.kiln",
                            value: "{import_path}",
                            disabled: submitting,
                            oninput: on_path_input,
                        }
                    }
                    p {
                        class: "project-form-hint",
                        "The path to a project.kiln file on this machine."
                    }
                    button {
                        class: "project-form-submit",
                        disabled: submitting,
                        onclick: on_import,
                        if submitting { "Importing..." } else { "Import" }
                    }
                }
            } else {
                div {
                    class: "project-form-fields",
                    label {
                        class: "project-form-label",
                        "Project name"
                        input {
                            class: "project-form-input",
                            r#type: "text",
                            maxlength: "{max_len}",
                            value: "{name}",
                            disabled: submitting,
                            oninput: on_name_input,
                        }
                    }
                    label {
                        class: "project-form-label",
                        "Description"
                        textarea {
                            class: "project-form-input",
                            rows: "4",
                            value: "{description}",
                            disabled: submitting,
                            oninput: on_description_input,
                        }
                    }
                    div {
                        class: "project-form-actions",
                        button {
                            class: "project-form-submit",
                            disabled: submitting,
                            onclick: on_save,
                            if submitting { "Saving..." } else { "{save_label}" }
                        }
                        if is_existing && current.phase() == SubmissionPhase::Succeeded {
                            span { class: "project-form-saved", "Saved" }
                        }
                    }
                }
            }
            if current.can_toggle_import() {
                p {
                    class: "project-form-toggle",
                    if current.importing() {
                        "Want to start from scratch? "
                        button {
                            class: "project-form-link",
                            disabled: submitting,
                            onclick: move |_| {
                                state.write().set_importing(false);
                            },
                            "Create a new project instead"
                        }
                    } else {
                        "Already have a project? "
                        button {
                            class: "project-form-link",
                            disabled: submitting,
                            onclick: move |_| {
                                state.write().set_importing(true);
                            },
                            "Import an existing project"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreatedPanel(name: String, project_id: Option<String>, imported: bool) -> Element {
    let heading = if imported {
        "Project imported"
    } else {
        "Project created"
    };
    let label = if name.is_empty() {
        "Your project".to_string()
    } else {
        format!("\"{name}\"")
    };

    rsx! {
        div {
            class: "project-form-created",
            h3 { "{heading}" }
            p { "{label} is ready to use." }
            if let Some(id) = project_id {
                span { class: "project-form-id", "ID: {id}" }
            }
        }
    }
}
