pub mod project_form;

pub use project_form::ProjectForm;
