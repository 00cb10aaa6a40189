use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::info;

use super::{
    category::{Category, CategoryId},
    product::Product,
    user::{User, UserId},
};
use crate::{
    digest::{hash_digest, DigestOutput, Digestible},
    error::LoadError,
};

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// An immutable snapshot of the three record collections.
///
/// The collections are unrelated as far as the store is concerned: references
/// between them are not checked, and IDs are assumed but not required to be
/// unique. Collection order is kept exactly as loaded.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct RecordStore {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl RecordStore {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        RecordStore { users, categories, products }
    }

    /// Parses a store from the JSON text of each collection. Each text must be
    /// a JSON array of records.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, LoadError> {
        fn parse<T: DeserializeOwned>(
            collection: &'static str,
            text: &str,
        ) -> Result<Vec<T>, LoadError> {
            serde_json::from_str(text).map_err(|source| LoadError::Parse { collection, source })
        }

        Ok(RecordStore::new(
            parse("users", users)?,
            parse("categories", categories)?,
            parse("products", products)?,
        ))
    }

    /// Loads a store from a directory containing `users.json`,
    /// `categories.json` and `products.json`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
            let text = fs::read_to_string(path)
                .map_err(|source| LoadError::Io { path: path.to_owned(), source })?;
            serde_json::from_str(&text)
                .map_err(|source| LoadError::ParseFile { path: path.to_owned(), source })
        }

        let dir = dir.as_ref();
        let store = RecordStore::new(
            read(&dir.join(USERS_FILE))?,
            read(&dir.join(CATEGORIES_FILE))?,
            read(&dir.join(PRODUCTS_FILE))?,
        );
        info!(
            dir = %dir.display(),
            users = store.users.len(),
            categories = store.categories.len(),
            products = store.products.len(),
            "loaded record store"
        );
        Ok(store)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the first user with the given ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Returns the first category with the given ID.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

impl Digestible for RecordStore {
    fn digest(&self) -> DigestOutput {
        hash_digest(self)
    }
}
