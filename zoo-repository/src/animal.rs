use crate::get_db_connection;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use zoo_error::StorageResult;
use zoo_models::entities::prelude::{
    Animal, AnimalActiveModel, AnimalColumn, AnimalModel, Category, CategoryModel, Zone, ZoneModel,
};

pub struct AnimalRepository;

impl AnimalRepository {
    pub async fn create<C>(animal: AnimalActiveModel, db: Option<&C>) -> StorageResult<AnimalModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(animal.insert(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(animal.insert(&db).await?)
            }
        }
    }

    pub async fn update<C>(animal: AnimalActiveModel, db: Option<&C>) -> StorageResult<AnimalModel>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => Ok(animal.update(conn).await?),
            None => {
                let db = get_db_connection()?;
                Ok(animal.update(&db).await?)
            }
        }
    }

    pub async fn delete<C>(id: i32, db: Option<&C>) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        match db {
            Some(conn) => {
                let _ = Animal::delete_by_id(id).exec(conn).await?;
            }
            None => {
                let db = get_db_connection()?;
                let _ = Animal::delete_by_id(id).exec(&db).await?;
            }
        }
        Ok(())
    }

    pub async fn find_by_id(id: i32) -> StorageResult<Option<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find_by_id(id).one(&db).await?)
    }

    /// Animal with its category and zone resolved.
    pub async fn find_detail(
        id: i32,
    ) -> StorageResult<Option<(AnimalModel, Option<CategoryModel>, Option<ZoneModel>)>> {
        let db = get_db_connection()?;
        let Some((animal, category)) = Animal::find_by_id(id)
            .find_also_related(Category)
            .one(&db)
            .await?
        else {
            return Ok(None);
        };
        let zone = match animal.zone_id {
            Some(zone_id) => Zone::find_by_id(zone_id).one(&db).await?,
            None => None,
        };
        Ok(Some((animal, category, zone)))
    }

    pub async fn find_all() -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .order_by(AnimalColumn::Name, Order::Asc)
            .all(&db)
            .await?)
    }

    /// Case-insensitive substring match on name or species.
    pub async fn search(q: &str) -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        let pattern = format!("%{q}%");
        Ok(Animal::find()
            .filter(
                Condition::any()
                    .add(AnimalColumn::Name.like(&pattern))
                    .add(AnimalColumn::Species.like(&pattern)),
            )
            .order_by(AnimalColumn::Name, Order::Asc)
            .all(&db)
            .await?)
    }

    pub async fn find_by_category(category_id: i32) -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .filter(AnimalColumn::CategoryId.eq(category_id))
            .order_by(AnimalColumn::Name, Order::Asc)
            .all(&db)
            .await?)
    }

    /// Full catalog ordered newest first, for the management listing.
    pub async fn find_all_recent() -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .order_by(AnimalColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }

    /// Most recently added animals first.
    pub async fn find_recent(limit: u64) -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .order_by(AnimalColumn::CreatedAt, Order::Desc)
            .limit(limit)
            .all(&db)
            .await?)
    }

    pub async fn find_most_viewed(limit: u64) -> StorageResult<Vec<AnimalModel>> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .order_by(AnimalColumn::ViewCount, Order::Desc)
            .limit(limit)
            .all(&db)
            .await?)
    }

    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Animal::find().count(&db).await?)
    }

    pub async fn count_by_category(category_id: i32) -> StorageResult<u64> {
        let db = get_db_connection()?;
        Ok(Animal::find()
            .filter(AnimalColumn::CategoryId.eq(category_id))
            .count(&db)
            .await?)
    }

    /// Bumps the view counter in place with a single UPDATE.
    ///
    /// A missing id matches zero rows and is not an error.
    pub async fn increment_view_count(id: i32) -> StorageResult<()> {
        let db = get_db_connection()?;
        Animal::update_many()
            .col_expr(
                AnimalColumn::ViewCount,
                Expr::col(AnimalColumn::ViewCount).add(1),
            )
            .filter(AnimalColumn::Id.eq(id))
            .exec(&db)
            .await?;
        Ok(())
    }
}
