use crate::get_db_connection;
use sea_orm::{EntityTrait, Order, QueryOrder, QuerySelect};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{Fact, FactColumn, FactModel};

pub struct FactRepository;

impl FactRepository {
    pub async fn find_recent(limit: u64) -> StorageResult<Vec<FactModel>> {
        let db = get_db_connection()?;
        Ok(Fact::find()
            .order_by(FactColumn::Id, Order::Desc)
            .limit(limit)
            .all(&db)
            .await?)
    }
}
