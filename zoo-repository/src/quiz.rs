use crate::get_db_connection;
use sea_orm::{EntityTrait, Order, PaginatorTrait, QueryOrder, QuerySelect};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{Quiz, QuizColumn, QuizModel};

pub struct QuizRepository;

impl QuizRepository {
    /// Questions presented for a quiz attempt, in stable id order.
    pub async fn find_page(limit: u64) -> StorageResult<Vec<QuizModel>> {
        let db = get_db_connection()?;
        Ok(Quiz::find()
            .order_by(QuizColumn::Id, Order::Asc)
            .limit(limit)
            .all(&db)
            .await?)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Quiz::find().count(&db).await?)
    }
}
