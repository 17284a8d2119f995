use crate::get_db_connection;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{
    Category, CategoryActiveModel, CategoryColumn, CategoryModel,
};

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn create<C>(
        category: CategoryActiveModel,
        db: Option<&C>,
    ) -> StorageResult<CategoryModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(category.insert(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(category.insert(&db).await?)
            }
        }
    }

    pub async fn find_all() -> StorageResult<Vec<CategoryModel>> {
        let db = get_db_connection()?;
        Ok(Category::find()
            .order_by(CategoryColumn::Name, Order::Asc)
            .all(&db)
            .await?)
    }

    pub async fn find_by_slug(slug: &str) -> StorageResult<Option<CategoryModel>> {
        let db = get_db_connection()?;
        Ok(Category::find()
            .filter(CategoryColumn::Slug.eq(slug))
            .one(&db)
            .await?)
    }

    pub async fn exists_by_slug(slug: &str) -> StorageResult<bool> {
        let db = get_db_connection()?;
        Ok(Category::find()
            .filter(CategoryColumn::Slug.eq(slug))
            .count(&db)
            .await?
            > 0)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Category::find().count(&db).await?)
    }
}
