use crate::get_db_connection;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryOrder, QuerySelect,
};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{
    Feedback, FeedbackActiveModel, FeedbackColumn, FeedbackModel, User, UserModel,
};

pub struct FeedbackRepository;

impl FeedbackRepository {
    pub async fn create<C>(
        feedback: FeedbackActiveModel,
        db: Option<&C>,
    ) -> StorageResult<FeedbackModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(feedback.insert(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(feedback.insert(&db).await?)
            }
        }
    }

    /// Feedback with submitting users, newest first.
    pub async fn find_with_user(
        limit: Option<u64>,
    ) -> StorageResult<Vec<(FeedbackModel, Option<UserModel>)>> {
        let db = get_db_connection()?;
        let mut query = Feedback::find().order_by(FeedbackColumn::CreatedAt, Order::Desc);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        Ok(query.find_also_related(User).all(&db).await?)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Feedback::find().count(&db).await?)
    }
}
