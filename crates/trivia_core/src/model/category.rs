//! Category records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Store-assigned category identifier.
pub type CategoryId = i64;

/// Category id that selects the whole catalog for a quiz.
pub const ALL_CATEGORIES: CategoryId = 0;

/// Read-only category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, serialized as `type` to match the catalog schema.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category labels keyed by id, ordered by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Collapses an id-ordered category list into a label map.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{category_map, Category};

    #[test]
    fn category_serializes_label_as_type() {
        let json = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(json["type"], "Geography");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn category_map_keeps_id_order() {
        let map = category_map(&[Category::new(2, "Art"), Category::new(1, "Science")]);
        let ids = map.keys().copied().collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
    }
}
