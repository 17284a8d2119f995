use crate::get_db_connection;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{
    Animal, AnimalModel, Favorite, FavoriteActiveModel, FavoriteColumn, FavoriteModel,
};

pub struct FavoriteRepository;

impl FavoriteRepository {
    /// Flips the favorite state for a (user, animal) pair.
    ///
    /// Returns true when the pair was created, false when it was removed.
    pub async fn toggle(user_id: i32, animal_id: i32) -> StorageResult<bool> {
        let db = get_db_connection()?;
        let existing = Favorite::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .filter(FavoriteColumn::AnimalId.eq(animal_id))
            .one(&db)
            .await?;

        match existing {
            Some(favorite) => {
                favorite.delete(&db).await?;
                Ok(false)
            }
            None => {
                FavoriteActiveModel {
                    user_id: Set(user_id),
                    animal_id: Set(animal_id),
                    ..Default::default()
                }
                .insert(&db)
                .await?;
                Ok(true)
            }
        }
    }

    pub async fn is_favorite(user_id: i32, animal_id: i32) -> StorageResult<bool> {
        let db = get_db_connection()?;
        Ok(Favorite::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .filter(FavoriteColumn::AnimalId.eq(animal_id))
            .count(&db)
            .await?
            > 0)
    }

    /// All favorites of a user with the animals resolved.
    pub async fn find_by_user_with_animals(
        user_id: i32,
    ) -> StorageResult<Vec<(FavoriteModel, Option<AnimalModel>)>> {
        let db = get_db_connection()?;
        Ok(Favorite::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .find_also_related(Animal)
            .all(&db)
            .await?)
    }
}
