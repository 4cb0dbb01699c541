//! Product category.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Entity};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Entity for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }
}
