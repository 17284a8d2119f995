pub mod animal;
pub mod blog;
pub mod category;
pub mod contact_message;
pub mod fact;
pub mod favorite;
pub mod feedback;
pub mod profile;
pub mod prelude;
pub mod quiz;
pub mod user;
pub mod zone;

use crate::enums::common::EntityType;
use std::any::Any;

/// Marker trait implemented by active models that flow through the
/// cross-record validation framework.
pub trait ZooEntity: Any + Send + Sync {
    fn entity_type(&self) -> EntityType;

    fn as_any(&self) -> &dyn Any;
}

impl dyn ZooEntity {
    #[inline]
    pub fn downcast_ref<T: ZooEntity>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl ZooEntity for user::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::User
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ZooEntity for category::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Category
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ZooEntity for animal::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Animal
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ZooEntity for blog::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Blog
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
