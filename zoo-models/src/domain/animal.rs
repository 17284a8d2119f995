use crate::entities::prelude::{
    AnimalActiveModel, AnimalModel, CategoryModel, ZoneModel,
};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create/update payload for an animal record.
///
/// `view_count` is deliberately absent: that column belongs to the
/// detail-view counter alone.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPayload {
    #[validate(length(min = 1, max = 140, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub scientific_name: String,
    pub category_id: Option<i32>,
    pub zone_id: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub fun_facts: String,
    pub image: Option<String>,
    pub sound: Option<String>,
    pub video: Option<String>,
}

impl IntoActiveModel<AnimalActiveModel> for AnimalPayload {
    fn into_active_model(self) -> AnimalActiveModel {
        AnimalActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            scientific_name: ActiveValue::Set(self.scientific_name),
            category_id: ActiveValue::Set(self.category_id),
            zone_id: ActiveValue::Set(self.zone_id),
            description: ActiveValue::Set(self.description),
            diet: ActiveValue::Set(self.diet),
            habitat: ActiveValue::Set(self.habitat),
            fun_facts: ActiveValue::Set(self.fun_facts),
            image: ActiveValue::Set(self.image),
            sound: ActiveValue::Set(self.sound),
            video: ActiveValue::Set(self.video),
            created_at: ActiveValue::NotSet,
            view_count: ActiveValue::NotSet,
        }
    }
}

/// Detail-page context: the animal plus its joined category/zone and the
/// requester's favorite state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDetail {
    pub animal: AnimalModel,
    pub category: Option<CategoryModel>,
    pub zone: Option<ZoneModel>,
    pub is_favorite: bool,
}
