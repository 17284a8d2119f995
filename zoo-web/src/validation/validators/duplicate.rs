use crate::validation::EntityValidator;
use async_trait::async_trait;
use tracing::instrument;
use zoo_error::{web::WebError, WebResult};
use zoo_models::{
    entities::{
        prelude::{CategoryActiveModel, UserActiveModel},
        ZooEntity,
    },
    enums::common::{EntityType, Operation},
};
use zoo_repository::{CategoryRepository, UserRepository};

/// Duplicate validator backing the unique columns that carry user-supplied
/// values: usernames and category slugs. The database unique indexes remain
/// the last line of defense against races.
pub struct EntityDuplicateValidator;

#[async_trait]
impl EntityValidator for EntityDuplicateValidator {
    #[inline]
    fn supported_entity_types(&self) -> Vec<EntityType> {
        vec![EntityType::User, EntityType::Category]
    }

    #[inline]
    fn supported_operations(&self) -> Vec<Operation> {
        vec![Operation::Create]
    }

    #[inline]
    #[instrument(skip(self, entity))]
    async fn validate(&self, entity: &dyn ZooEntity, operation: Operation) -> WebResult<()> {
        match entity.entity_type() {
            EntityType::User => {
                if let Some(user) = entity.downcast_ref::<UserActiveModel>() {
                    validate_user(user, operation).await?;
                }
            }
            EntityType::Category => {
                if let Some(category) = entity.downcast_ref::<CategoryActiveModel>() {
                    validate_category(category, operation).await?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[inline]
async fn validate_user(user: &UserActiveModel, operation: Operation) -> WebResult<()> {
    if operation == Operation::Create {
        if let Some(username) = user.username.to_owned().take() {
            if UserRepository::exists_by_username(&username).await? {
                return Err(WebError::BadRequest(
                    "duplicate entity for username".to_string(),
                ));
            }
        }
    }
    Ok(())
}

#[inline]
async fn validate_category(category: &CategoryActiveModel, operation: Operation) -> WebResult<()> {
    if operation == Operation::Create {
        if let Some(slug) = category.slug.to_owned().take() {
            if CategoryRepository::exists_by_slug(&slug).await? {
                return Err(WebError::BadRequest(
                    "duplicate entity for slug".to_string(),
                ));
            }
        }
    }
    Ok(())
}
