mod errors;
pub(crate) mod model;
mod storage;
pub(crate) mod view;

use self::model::{NavItem, NavRow};

/// Navigation list widget: a fixed, ordered set of items rendered once.
pub(crate) struct NavigationWidget {
    items: Vec<NavItem>,
}

impl NavigationWidget {
    /// Create a widget showing `items` in the given order.
    pub(crate) fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// Create a widget from the configured navigation file.
    pub(crate) fn load() -> Self {
        let items = storage::load_initial_items();
        log::info!("navigation initialised with {} item(s)", items.len());
        Self::new(items)
    }

    /// Rows in display order.
    pub(crate) fn rows(&self) -> Vec<NavRow<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| NavRow {
                position,
                label: item.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationWidget;
    use super::model::{DEFAULT_NAV_LABELS, NavItem, NavigationFile};

    #[test]
    fn given_eight_labels_when_rendered_then_eight_rows_keep_input_order() {
        let widget =
            NavigationWidget::new(NavigationFile::default().into_items());
        let rows = widget.rows();

        assert_eq!(rows.len(), 8);
        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row.position, idx);
            assert_eq!(row.label, DEFAULT_NAV_LABELS[idx]);
        }
    }

    #[test]
    fn given_repeated_render_when_rows_requested_then_list_is_unchanged() {
        let widget = NavigationWidget::new(vec![
            NavItem::new("b"),
            NavItem::new("a"),
            NavItem::new("c"),
        ]);

        let first: Vec<_> = widget.rows().iter().map(|r| r.label).collect();
        let second: Vec<_> = widget.rows().iter().map(|r| r.label).collect();
        assert_eq!(first, vec!["b", "a", "c"]);
        assert_eq!(first, second);
    }
}
