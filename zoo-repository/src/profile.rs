use crate::get_db_connection;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};
use zoo_error::StorageResult;
use zoo_models::{
    entities::prelude::{Profile, ProfileColumn, ProfileModel},
    enums::common::Role,
};

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find_by_user_id(user_id: i32) -> StorageResult<Option<ProfileModel>> {
        let db = get_db_connection()?;
        Ok(Profile::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&db)
            .await?)
    }

    /// Role of the given user, None when the user has no profile row.
    pub async fn find_role_by_user_id(user_id: i32) -> StorageResult<Option<Role>> {
        let db = get_db_connection()?;
        Ok(Profile::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .select_only()
            .column(ProfileColumn::Role)
            .into_tuple::<Role>()
            .one(&db)
            .await?)
    }
}
