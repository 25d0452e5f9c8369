use serde::{Deserialize, Serialize};

/// Labels shown when no navigation file is configured.
pub(crate) const DEFAULT_NAV_LABELS: [&str; 8] = [
    "Home",
    "Login / Register",
    "Web Development",
    "Web Design",
    "Programming",
    "DevOps",
    "Life Style",
    "How I Made This Website",
];

/// One entry of the navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavItem {
    label: String,
}

impl NavItem {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }
}

/// A rendered row: display position plus the item it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavRow<'a> {
    pub(crate) position: usize,
    pub(crate) label: &'a str,
}

/// On-disk navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NavigationFile {
    pub(crate) items: Vec<String>,
}

impl Default for NavigationFile {
    fn default() -> Self {
        Self {
            items: DEFAULT_NAV_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl NavigationFile {
    pub(crate) fn into_items(self) -> Vec<NavItem> {
        self.items.into_iter().map(NavItem::new).collect()
    }
}
