pub mod manager;
pub mod prelude;
pub mod validators;

use async_trait::async_trait;
use std::sync::Arc;
use zoo_error::WebResult;
use zoo_models::entities::ZooEntity;
use zoo_models::enums::common::{EntityType, Operation};

/// Core trait for entity validators
#[async_trait]
pub trait EntityValidator: Send + Sync {
    /// Returns entity types supported by this validator
    fn supported_entity_types(&self) -> Vec<EntityType>;

    /// Returns operations supported by this validator
    fn supported_operations(&self) -> Vec<Operation>;

    /// Performs validation on the entity
    ///
    /// # Arguments
    /// * `entity` - Entity to validate
    /// * `operation` - Operation to validate
    ///
    /// # Returns
    /// * `WebResult<()>` - Success or validation error
    async fn validate(&self, entity: &dyn ZooEntity, operation: Operation) -> WebResult<()>;

    /// Checks if this validator applies to the given entity type and operation
    fn is_applicable(&self, entity_type: &EntityType, operation: &Operation) -> bool {
        self.supported_entity_types().contains(entity_type)
            && self.supported_operations().contains(operation)
    }
}
