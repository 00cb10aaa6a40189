//! Joining products to their category and owning user.

use std::{collections::HashMap, hash::Hash};

use tracing::debug;

use crate::{
    data::{Category, CategoryId, Product, ProductId, User},
    digest::DigestOutput,
};

/// A product enriched with the category it belongs to and the user who owns
/// that category. Either may be missing when the reference it was resolved
/// from dangles.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ViewRecord {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    /// The category whose ID equals `category_id`, if there is one.
    pub category: Option<Category>,
    /// The user whose ID equals the owner ID of `category`. Always `None` when
    /// `category` is `None`.
    pub user: Option<User>,
}

/// Builds one view record per product, in product order.
///
/// References are resolved by exact ID equality. When an ID occurs more than
/// once in a collection, the first record with that ID is used. Dangling
/// references resolve to `None` and are never an error.
pub fn build_views(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<ViewRecord> {
    let categories_by_id = index_first(categories, |category| category.id);
    let users_by_id = index_first(users, |user| user.id);

    products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            if category.is_none() {
                debug!(
                    product = product.id.0,
                    category = product.category_id.0,
                    "dangling category reference"
                );
            }

            let user = category.and_then(|category| {
                let user = users_by_id.get(&category.owner_id).copied();
                if user.is_none() {
                    debug!(
                        category = category.id.0,
                        owner = category.owner_id.0,
                        "dangling owner reference"
                    );
                }
                user
            });

            ViewRecord {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}

// Maps each key to the first record that has it, so lookups agree with a
// front-to-back linear search.
fn index_first<T, K, F>(records: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(key(record)).or_insert(record);
    }
    index
}

/// Memoizes view records by the digest of the snapshot they were built from.
///
/// The caller computes the digest, so an immutable snapshot is hashed once
/// rather than on every lookup.
#[derive(Debug, Default)]
pub struct ViewCache {
    cached: Option<(DigestOutput, Vec<ViewRecord>)>,
}

impl ViewCache {
    pub fn new() -> Self {
        ViewCache::default()
    }

    /// Returns the cached views if they were built for `digest`, otherwise
    /// replaces them with the output of `build`.
    pub fn get_or_build<F>(&mut self, digest: DigestOutput, build: F) -> &[ViewRecord]
    where
        F: FnOnce() -> Vec<ViewRecord>,
    {
        if self.cached.as_ref().is_some_and(|(cached, _)| *cached != digest) {
            self.cached = None;
        }
        let (_, views) = self.cached.get_or_insert_with(|| {
            let views = build();
            debug!(digest, views = views.len(), "built views");
            (digest, views)
        });
        views
    }
}
