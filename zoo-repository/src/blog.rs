use crate::get_db_connection;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{
    Blog, BlogActiveModel, BlogColumn, BlogModel, User, UserModel,
};

pub struct BlogRepository;

impl BlogRepository {
    pub async fn create<C>(blog: BlogActiveModel, db: Option<&C>) -> StorageResult<BlogModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(blog.insert(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(blog.insert(&db).await?)
            }
        }
    }

    pub async fn update<C>(blog: BlogActiveModel, db: Option<&C>) -> StorageResult<BlogModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(blog.update(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(blog.update(&db).await?)
            }
        }
    }

    pub async fn delete<C>(id: i32, db: Option<&C>) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => {
                let _ = Blog::delete_by_id(id).exec(conn).await?;
            }
            None => {
                let db = get_db_connection()?;
                let _ = Blog::delete_by_id(id).exec(&db).await?;
            }
        }
        Ok(())
    }

    pub async fn find_by_id(id: i32) -> StorageResult<Option<BlogModel>> {
        let db = get_db_connection()?;
        Ok(Blog::find_by_id(id).one(&db).await?)
    }

    /// Post only if it belongs to the given author.
    pub async fn find_by_id_and_author(
        id: i32,
        author_id: i32,
    ) -> StorageResult<Option<BlogModel>> {
        let db = get_db_connection()?;
        Ok(Blog::find_by_id(id)
            .filter(BlogColumn::AuthorId.eq(author_id))
            .one(&db)
            .await?)
    }

    /// Approved posts with their authors, newest first.
    pub async fn find_approved_with_author(
        limit: Option<u64>,
    ) -> StorageResult<Vec<(BlogModel, Option<UserModel>)>> {
        let db = get_db_connection()?;
        let mut query = Blog::find()
            .filter(BlogColumn::Approved.eq(true))
            .order_by(BlogColumn::DatePosted, Order::Desc);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        Ok(query.find_also_related(User).all(&db).await?)
    }

    pub async fn find_recent(limit: u64) -> StorageResult<Vec<BlogModel>> {
        let db = get_db_connection()?;
        Ok(Blog::find()
            .order_by(BlogColumn::DatePosted, Order::Desc)
            .limit(limit)
            .all(&db)
            .await?)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Blog::find().count(&db).await?)
    }
}
