//! Which street section the detail pane is showing.

use walk_survey::site::SiteId;

/// Selection starts out empty and, once a marker has been clicked, always
/// holds a site. There is deliberately no transition back to `Unselected`:
/// the map only drills down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(SiteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A map marker for this site was clicked.
    MarkerClicked(SiteId),
}

impl Selection {
    /// Next selection after `event`. Clicking the already selected site
    /// yields an equal selection.
    pub fn apply(&self, event: SelectionEvent) -> Selection {
        match event {
            SelectionEvent::MarkerClicked(site_id) => Selection::Selected(site_id),
        }
    }

    pub fn site_id(&self) -> Option<&SiteId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(site_id) => Some(site_id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let selection = Selection::default();
        assert!(!selection.is_selected());
        assert_eq!(selection.site_id(), None);
    }

    #[test]
    fn test_click_selects_site() {
        let selection =
            Selection::default().apply(SelectionEvent::MarkerClicked(SiteId::from("42")));
        assert_eq!(selection, Selection::Selected(SiteId::from("42")));
        assert_eq!(selection.site_id().map(SiteId::as_str), Some("42"));
    }

    #[test]
    fn test_reselect_and_switch() {
        let a = Selection::default().apply(SelectionEvent::MarkerClicked(SiteId::from("1")));
        let again = a.apply(SelectionEvent::MarkerClicked(SiteId::from("1")));
        assert_eq!(a, again);
        let b = again.apply(SelectionEvent::MarkerClicked(SiteId::from("2")));
        assert_eq!(b.site_id(), Some(&SiteId::from("2")));
        // The earlier value is untouched by later transitions
        assert_eq!(a.site_id(), Some(&SiteId::from("1")));
    }
}
