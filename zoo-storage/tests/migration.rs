use sea_orm::{ColumnTrait, Database, EntityTrait, PaginatorTrait, QueryFilter};
use zoo_models::{entities::prelude::*, enums::common::Role};
use zoo_storage::{Migrator, MigratorTrait};
use zoo_utils::hash::bcrypt_check;

async fn fresh_db() -> (tempfile::TempDir, sea_orm::DatabaseConnection) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/test.db?mode=rwc", dir.path().display());
    let db = Database::connect(url).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    (dir, db)
}

#[tokio::test]
async fn migration_seeds_catalog_data() {
    let (_dir, db) = fresh_db().await;

    assert_eq!(Category::find().count(&db).await.unwrap(), 6);
    assert_eq!(Zone::find().count(&db).await.unwrap(), 5);
    assert_eq!(Animal::find().count(&db).await.unwrap(), 5);
    assert_eq!(Quiz::find().count(&db).await.unwrap(), 3);
    assert_eq!(Fact::find().count(&db).await.unwrap(), 3);
}

#[tokio::test]
async fn seeded_categories_have_slugs() {
    let (_dir, db) = fresh_db().await;

    let mammals = Category::find()
        .filter(CategoryColumn::Name.eq("Mammals"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mammals.slug, "mammals");
}

#[tokio::test]
async fn demo_users_are_seeded_with_profiles() {
    let (_dir, db) = fresh_db().await;

    let demo = User::find()
        .filter(UserColumn::Username.eq("demo"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(bcrypt_check("demo1234", &demo.password));

    let profile = Profile::find()
        .filter(ProfileColumn::UserId.eq(demo.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.role, Role::Visitor);

    let keeper = User::find()
        .filter(UserColumn::Username.eq("keeper"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    let keeper_profile = Profile::find()
        .filter(ProfileColumn::UserId.eq(keeper.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(keeper_profile.role, Role::Zookeeper);
}

#[tokio::test]
async fn seeded_blog_is_approved_and_attributed() {
    let (_dir, db) = fresh_db().await;

    let blog = Blog::find().one(&db).await.unwrap().unwrap();
    assert!(blog.approved);
    assert!(blog.author_id.is_some());
}

#[tokio::test]
async fn deleting_category_nulls_animal_reference() {
    let (_dir, db) = fresh_db().await;
    use sea_orm::ConnectionTrait;

    // sqlite enforces ON DELETE actions only with foreign_keys on
    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .unwrap();

    let reptiles = Category::find()
        .filter(CategoryColumn::Name.eq("Reptiles"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    Category::delete_by_id(reptiles.id)
        .exec(&db)
        .await
        .unwrap();

    let komodo = Animal::find()
        .filter(AnimalColumn::Name.eq("Komodo Dragon"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(komodo.category_id, None);
}
