//! The flat record collections that make up a catalog snapshot.

pub mod category;
pub mod product;
pub mod store;
pub mod user;

pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
pub use store::RecordStore;
pub use user::{Sex, User, UserId};
