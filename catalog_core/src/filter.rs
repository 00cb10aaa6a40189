//! Deciding which view records are visible.

use tracing::trace;

use crate::{data::UserId, view::ViewRecord};

/// The owner selection and search text that decide which records are
/// visible. Every transition returns a new state; no transition can fail.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct FilterState {
    /// Only records owned by this user are visible. `None` means any owner,
    /// including no owner at all.
    selected_owner: Option<UserId>,
    /// Only records whose name contains this text, ignoring case, are visible.
    /// Empty means any name.
    search_text: String,
}

impl FilterState {
    /// The neutral state, under which every record is visible.
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn selected_owner(&self) -> Option<UserId> {
        self.selected_owner
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn select_owner(self, id: UserId) -> Self {
        FilterState { selected_owner: Some(id), ..self }
    }

    pub fn select_all_owners(self) -> Self {
        FilterState { selected_owner: None, ..self }
    }

    /// Sets the search text exactly as given; it is not trimmed.
    pub fn set_search_text(self, text: impl Into<String>) -> Self {
        FilterState { search_text: text.into(), ..self }
    }

    pub fn clear_search(self) -> Self {
        self.set_search_text(String::new())
    }

    pub fn reset_all(self) -> Self {
        FilterState::new()
    }

    pub fn is_owner_selected(&self, id: UserId) -> bool {
        self.selected_owner == Some(id)
    }

    pub fn is_all_owners(&self) -> bool {
        self.selected_owner.is_none()
    }

    pub fn has_search(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn is_neutral(&self) -> bool {
        self.is_all_owners() && !self.has_search()
    }

    // `needle` is the lower-cased search text, computed once per filter run.
    fn matches_with(&self, needle: &str, record: &ViewRecord) -> bool {
        let owner_matches = match self.selected_owner {
            None => true,
            Some(owner) => record.user.as_ref().is_some_and(|user| user.id == owner),
        };
        owner_matches && (needle.is_empty() || record.name.to_lowercase().contains(needle))
    }
}

/// A user interaction that changes the filter state.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FilterEvent {
    SelectOwner(UserId),
    SelectAllOwners,
    SetSearchText(String),
    ClearSearch,
    ResetAll,
}

impl FilterEvent {
    /// Returns the state that results from this event happening in `state`.
    pub fn apply(self, state: FilterState) -> FilterState {
        match self {
            FilterEvent::SelectOwner(id) => state.select_owner(id),
            FilterEvent::SelectAllOwners => state.select_all_owners(),
            FilterEvent::SetSearchText(text) => state.set_search_text(text),
            FilterEvent::ClearSearch => state.clear_search(),
            FilterEvent::ResetAll => state.reset_all(),
        }
    }
}

/// Returns the records of `views` that match `state`, in their original
/// order. An empty result is a valid outcome, not an error.
pub fn apply_filters(views: &[ViewRecord], state: &FilterState) -> Vec<ViewRecord> {
    let needle = state.search_text.to_lowercase();
    let visible: Vec<_> = views
        .iter()
        .filter(|record| state.matches_with(&needle, record))
        .cloned()
        .collect();
    trace!(?state, total = views.len(), visible = visible.len(), "applied filters");
    visible
}
