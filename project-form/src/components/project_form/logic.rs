//! Project form pure logic functions, no RSX, no signals

use shared_types::Project;

use crate::error::FormError;

pub const NAME_REQUIRED: &str = "Project name is required";

fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub fn validate_draft(draft: &Project) -> Result<(), FormError> {
    if draft.name.is_empty() {
        return Err(FormError::validation(NAME_REQUIRED));
    }
    Ok(())
}

/// True when a user-editable field differs between the two projects
pub fn watched_fields_differ(draft: &Project, initial: &Project) -> bool {
    draft.name != initial.name || draft.description != initial.description
}

/// Existing projects compare against their last saved state; new projects
/// count as dirty once anything was typed, until they are saved.
pub fn has_unsaved_changes(draft: &Project, initial: &Project, saved: bool) -> bool {
    if draft.has_identity() {
        return watched_fields_differ(draft, initial);
    }
    !saved && (is_truthy(Some(draft.name.as_str())) || is_truthy(draft.description.as_deref()))
}

/// `{target}/{project_id}` when both a target and an id are available
pub fn redirect_path(target: Option<&str>, project_id: Option<&str>) -> Option<String> {
    let target = target?;
    let project_id = project_id.filter(|id| !id.is_empty())?;
    Some(format!("{target}/{project_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(name: &str, description: Option<&str>) -> Project {
        Project {
            name: name.to_string(),
            description: description.map(str::to_string),
            ..Project::template()
        }
    }

    fn existing(id: &str, name: &str, description: Option<&str>) -> Project {
        Project {
            id: Some(id.to_string()),
            ..new_project(name, description)
        }
    }

    #[test]
    fn empty_name_fails_validation() {
        let err = validate_draft(&new_project("", Some("desc"))).expect_err("must fail");
        assert_eq!(err.message(), NAME_REQUIRED);
        assert!(validate_draft(&new_project("x", None)).is_ok());
    }

    #[test]
    fn new_empty_draft_is_clean() {
        let template = Project::template();
        assert!(!has_unsaved_changes(&template, &template, false));
    }

    #[test]
    fn new_draft_with_any_field_is_dirty_until_saved() {
        let initial = Project::template();
        let named = new_project("Foo", Some(""));
        let described = new_project("", Some("notes"));
        assert!(has_unsaved_changes(&named, &initial, false));
        assert!(has_unsaved_changes(&described, &initial, false));
        assert!(!has_unsaved_changes(&named, &initial, true));
    }

    #[test]
    fn existing_draft_compares_watched_fields_only() {
        let initial = existing("p1", "Bar", Some("d"));
        let mut draft = initial.clone();
        assert!(!has_unsaved_changes(&draft, &initial, false));

        draft.created_by = Some("someone else".to_string());
        draft.v = 2;
        assert!(!has_unsaved_changes(&draft, &initial, false));

        draft.name = "Baz".to_string();
        assert!(has_unsaved_changes(&draft, &initial, false));
        // saved does not mask a real difference on an existing project
        assert!(has_unsaved_changes(&draft, &initial, true));

        draft.name = "Bar".to_string();
        draft.description = None;
        assert!(has_unsaved_changes(&draft, &initial, false));
    }

    #[test]
    fn redirect_needs_target_and_id() {
        assert_eq!(
            redirect_path(Some("/projects"), Some("p1")).as_deref(),
            Some("/projects/p1")
        );
        assert_eq!(
            redirect_path(Some("/projects/"), Some("p1")).as_deref(),
            Some("/projects//p1"),
            "target is joined verbatim"
        );
        assert_eq!(redirect_path(Some("/"), Some("p1")).as_deref(), Some("//p1"));
        assert_eq!(redirect_path(None, Some("p1")), None);
        assert_eq!(redirect_path(Some("/projects"), None), None);
        assert_eq!(redirect_path(Some("/projects"), Some("")), None);
    }
}
