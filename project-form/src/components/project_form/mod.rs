pub mod logic;
pub mod machine;
pub mod styles;
pub mod types;
pub mod view;

pub use machine::{import_project, save_project, FormStore, ProjectFormState, SubmitOutcome};
pub use types::{FormConfig, SubmissionPhase, SubmitKind};
pub use view::ProjectForm;
