use crate::get_db_connection;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use zoo_error::StorageResult;
use zoo_models::{
    entities::prelude::{ProfileActiveModel, User, UserActiveModel, UserColumn, UserModel},
    enums::common::Role,
};

pub struct UserRepository;

impl UserRepository {
    /// Creates a user together with its profile in a single transaction.
    ///
    /// A failure at any step leaves neither row behind.
    pub async fn create_with_profile(
        user: UserActiveModel,
        role: Role,
        age: Option<i32>,
    ) -> StorageResult<UserModel> {
        let db = get_db_connection()?;
        let txn = db.begin().await?;

        let user = user.insert(&txn).await?;
        ProfileActiveModel {
            user_id: Set(user.id),
            role: Set(role),
            age: Set(age),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    pub async fn find_by_id(id: i32) -> StorageResult<Option<UserModel>> {
        let db = get_db_connection()?;
        Ok(User::find_by_id(id).one(&db).await?)
    }

    pub async fn find_by_username(username: &str) -> StorageResult<Option<UserModel>> {
        let db = get_db_connection()?;
        Ok(User::find()
            .filter(UserColumn::Username.eq(username))
            .one(&db)
            .await?)
    }

    pub async fn exists_by_username(username: &str) -> StorageResult<bool> {
        let db = get_db_connection()?;
        Ok(User::find()
            .filter(UserColumn::Username.eq(username))
            .count(&db)
            .await?
            > 0)
    }
}
