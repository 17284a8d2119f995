use crate::get_db_connection;
use sea_orm::{EntityTrait, Order, PaginatorTrait, QueryOrder};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{Zone, ZoneColumn, ZoneModel};

pub struct ZoneRepository;

impl ZoneRepository {
    pub async fn find_all() -> StorageResult<Vec<ZoneModel>> {
        let db = get_db_connection()?;
        Ok(Zone::find()
            .order_by(ZoneColumn::Name, Order::Asc)
            .all(&db)
            .await?)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Zone::find().count(&db).await?)
    }
}
