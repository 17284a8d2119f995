use crate::get_db_connection;
use sea_orm::{ActiveModelTrait, ConnectionTrait};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{ContactMessageActiveModel, ContactMessageModel};

pub struct ContactMessageRepository;

impl ContactMessageRepository {
    pub async fn create<C>(
        message: ContactMessageActiveModel,
        db: Option<&C>,
    ) -> StorageResult<ContactMessageModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(message.insert(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(message.insert(&db).await?)
            }
        }
    }
}
