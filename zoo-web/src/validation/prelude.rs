use super::{manager::ValidationManager, validators::duplicate::EntityDuplicateValidator};
use std::sync::Arc;

/// Create a default validation manager with pre-registered validators
pub fn create_default_manager() -> ValidationManager {
    let mut manager = ValidationManager::new();
    manager.register(Arc::new(EntityDuplicateValidator));
    manager
}
