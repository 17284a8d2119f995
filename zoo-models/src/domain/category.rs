use crate::entities::prelude::{AnimalModel, CategoryModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create payload for a category. The slug is derived from the name when
/// not supplied; uniqueness is enforced by the duplicate validator and the
/// backing unique index.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub slug: Option<String>,
}

/// A category together with its animals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnimals {
    pub category: CategoryModel,
    pub animals: Vec<AnimalModel>,
}
