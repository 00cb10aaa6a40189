use tracing::debug;

use crate::{
    data::{RecordStore, User},
    digest::{DigestOutput, Digestible},
    filter::{apply_filters, FilterEvent, FilterState},
    view::{build_views, ViewCache, ViewRecord},
};

/// The records a front end should show for the current filter state.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Listing {
    /// At least one record matched.
    Rows(Vec<ViewRecord>),
    /// Nothing matched the current filters.
    NoMatches,
}

impl Listing {
    fn from_rows(rows: Vec<ViewRecord>) -> Self {
        if rows.is_empty() {
            Listing::NoMatches
        } else {
            Listing::Rows(rows)
        }
    }
}

/// A browsing session over one record store: the store, the views built from
/// it, and the filter state driven by the user.
///
/// The store is loaded once and never changes for the life of the session.
#[derive(Debug)]
pub struct Catalog {
    store: RecordStore,
    /// Digest of `store`, taken once at construction.
    digest: DigestOutput,
    views: ViewCache,
    filter: FilterState,
}

impl Catalog {
    /// Starts a session with no filters applied.
    pub fn new(store: RecordStore) -> Self {
        let digest = store.digest();
        Catalog { store, digest, views: ViewCache::new(), filter: FilterState::new() }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The users that can be picked as the owner filter, in store order.
    pub fn owners(&self) -> &[User] {
        self.store.users()
    }

    pub fn dispatch(&mut self, event: FilterEvent) {
        debug!(?event, "filter event");
        let state = std::mem::take(&mut self.filter);
        self.filter = event.apply(state);
    }

    /// Recomputes the visible records for the current filter state. Views are
    /// built on the first call and reused afterwards.
    pub fn visible(&mut self) -> Listing {
        let store = &self.store;
        let views = self.views.get_or_build(self.digest, || {
            build_views(store.users(), store.categories(), store.products())
        });
        Listing::from_rows(apply_filters(views, &self.filter))
    }
}
