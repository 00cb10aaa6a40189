use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// A short name of the category, e.g. "Drinks"
    pub title: String,
    /// An emoji shown next to the title.
    pub icon: String,
    /// The user responsible for this category. Not guaranteed to refer to an
    /// existing user.
    pub owner_id: UserId,
}

impl Category {
    /// The text shown in the category column, e.g. "🍹 - Drinks".
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn owner_id_is_camel_case() {
        let category: Category = serde_json::from_str(
            r#"{"id": 10, "title": "Drinks", "icon": "🍹", "ownerId": 1}"#,
        )
        .unwrap();
        assert_eq!(category.owner_id, UserId(1));
        assert_eq!(category.label(), "🍹 - Drinks");
    }
}
