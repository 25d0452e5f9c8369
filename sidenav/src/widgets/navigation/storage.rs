use std::path::{Path, PathBuf};

use super::errors::NavigationError;
use super::model::{NavItem, NavigationFile};

/// Return the path to the navigation JSON file.
fn navigation_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("sidenav")
            .join("navigation.json");
    }
    std::env::temp_dir().join("sidenav").join("navigation.json")
}

/// Load navigation labels from `path`; a missing file yields the defaults.
pub(crate) fn load_navigation_from(
    path: &Path,
) -> Result<NavigationFile, NavigationError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(NavigationFile::default());
        },
        Err(err) => return Err(err.into()),
    };
    parse_navigation(&content)
}

/// Parse and validate a navigation payload.
pub(crate) fn parse_navigation(
    content: &str,
) -> Result<NavigationFile, NavigationError> {
    let data: NavigationFile = serde_json::from_str(content)?;
    validate(&data)?;
    Ok(data)
}

fn validate(data: &NavigationFile) -> Result<(), NavigationError> {
    if data.items.is_empty() {
        return Err(NavigationError::Validation {
            message: String::from("navigation list is empty"),
        });
    }
    if let Some(position) =
        data.items.iter().position(|label| label.trim().is_empty())
    {
        return Err(NavigationError::Validation {
            message: format!("navigation label #{position} is blank"),
        });
    }
    Ok(())
}

/// Load the configured items, falling back to defaults on error.
pub(crate) fn load_initial_items() -> Vec<NavItem> {
    let path = navigation_path();
    match load_navigation_from(&path) {
        Ok(data) => data.into_items(),
        Err(err) => {
            log::warn!(
                "Failed to load navigation from {}, using defaults: {err}",
                path.display()
            );
            NavigationFile::default().into_items()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::navigation::model::DEFAULT_NAV_LABELS;

    #[test]
    fn given_valid_json_when_parsed_then_labels_keep_file_order() {
        let json = serde_json::json!({
            "items": ["Zeta", "Alpha", "Mu"]
        })
        .to_string();

        let data = parse_navigation(&json).expect("should parse");
        assert_eq!(data.items, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn given_empty_list_when_parsed_then_validation_fails() {
        let err = parse_navigation(r#"{"items": []}"#)
            .expect_err("empty list must fail");
        assert!(matches!(err, NavigationError::Validation { .. }));
    }

    #[test]
    fn given_blank_label_when_parsed_then_validation_names_position() {
        let err = parse_navigation(r#"{"items": ["Home", "  "]}"#)
            .expect_err("blank label must fail");
        assert_eq!(err.to_string(), "validation error: navigation label #1 is blank");
    }

    #[test]
    fn given_malformed_json_when_parsed_then_json_error_is_returned() {
        let err = parse_navigation("{ items: ").expect_err("must fail");
        assert!(matches!(err, NavigationError::Json(_)));
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let path = std::env::temp_dir()
            .join("sidenav-missing-navigation")
            .join("navigation.json");

        let data = load_navigation_from(&path).expect("missing file is ok");
        assert_eq!(data.items.len(), DEFAULT_NAV_LABELS.len());
        assert_eq!(data.items[0], "Home");
    }
}
