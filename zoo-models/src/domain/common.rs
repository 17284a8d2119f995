use serde::Deserialize;
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PathId {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SlugPath {
    #[validate(length(min = 1, message = "slug is required"))]
    pub slug: String,
}

/// Optional free-text search over the catalog.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchParams {
    pub q: Option<String>,
}
