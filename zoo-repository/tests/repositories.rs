use chrono::Utc;
use once_cell::sync::Lazy;
use sea_orm::Set;
use std::sync::Arc;
use tokio::runtime::Runtime;
use zoo_common::{LogMailer, ZooAppContext};
use zoo_error::storage::StorageError;
use zoo_models::{
    entities::prelude::{BlogActiveModel, UserActiveModel},
    enums::common::Role,
    settings::Settings,
};
use zoo_repository::{
    AnimalRepository, BlogRepository, CategoryRepository, FavoriteRepository, ProfileRepository,
    QuizRepository, UserRepository, ZoneRepository,
};
use zoo_storage::{Migrator, MigratorTrait};
use zoo_utils::hash::bcrypt_hash;

static RT: Lazy<Runtime> = Lazy::new(|| Runtime::new().unwrap());

static BOOTSTRAP: Lazy<()> = Lazy::new(|| {
    RT.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}/test.db?mode=rwc", dir.path().display());
        let db = sea_orm::Database::connect(url).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        // keep the backing file alive for the whole test run
        std::mem::forget(dir);

        let settings = Settings::new("zoo-test".to_string()).unwrap();
        ZooAppContext::init(settings, db, Arc::new(LogMailer)).unwrap();
    });
});

fn run<F: std::future::Future>(fut: F) -> F::Output {
    Lazy::force(&BOOTSTRAP);
    RT.block_on(fut)
}

fn new_user(username: &str) -> UserActiveModel {
    UserActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        password: Set(bcrypt_hash("password1234")),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
}

#[test]
fn create_with_profile_writes_both_rows() {
    run(async {
        let user = UserRepository::create_with_profile(new_user("alice"), Role::Educator, Some(30))
            .await
            .unwrap();

        let profile = ProfileRepository::find_by_user_id(user.id)
            .await
            .unwrap()
            .expect("profile row must exist");
        assert_eq!(profile.role, Role::Educator);
        assert_eq!(profile.age, Some(30));
    });
}

#[test]
fn duplicate_username_is_rejected_and_leaves_no_profile() {
    run(async {
        let first = UserRepository::create_with_profile(new_user("bob"), Role::Visitor, None)
            .await
            .unwrap();

        let err = UserRepository::create_with_profile(new_user("bob"), Role::Visitor, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Duplicate(_)));

        // the failed registration must not leave a second profile behind
        let profile = ProfileRepository::find_by_user_id(first.id).await.unwrap();
        assert!(profile.is_some());
        let survivors = UserRepository::find_by_username("bob").await.unwrap();
        assert_eq!(survivors.map(|u| u.id), Some(first.id));
    });
}

#[test]
fn favorite_toggle_is_an_involution() {
    run(async {
        let user = UserRepository::create_with_profile(new_user("carol"), Role::Visitor, None)
            .await
            .unwrap();
        let animal = AnimalRepository::find_all().await.unwrap().remove(0);

        assert!(FavoriteRepository::toggle(user.id, animal.id).await.unwrap());
        assert!(FavoriteRepository::is_favorite(user.id, animal.id)
            .await
            .unwrap());

        assert!(!FavoriteRepository::toggle(user.id, animal.id).await.unwrap());
        assert!(!FavoriteRepository::is_favorite(user.id, animal.id)
            .await
            .unwrap());
    });
}

#[test]
fn view_counter_increments_atomically() {
    run(async {
        let animal = AnimalRepository::find_all().await.unwrap().remove(0);
        let before = animal.view_count;

        AnimalRepository::increment_view_count(animal.id)
            .await
            .unwrap();

        let after = AnimalRepository::find_by_id(animal.id)
            .await
            .unwrap()
            .unwrap()
            .view_count;
        assert_eq!(after, before + 1);
    });
}

#[test]
fn view_counter_ignores_missing_animals() {
    run(async {
        AnimalRepository::increment_view_count(99_999).await.unwrap();
    });
}

#[test]
fn search_matches_name_and_species() {
    run(async {
        let by_name = AnimalRepository::search("elephant").await.unwrap();
        assert!(by_name.iter().any(|a| a.name == "African Elephant"));

        let by_species = AnimalRepository::search("chelonia").await.unwrap();
        assert!(by_species.iter().any(|a| a.name == "Green Sea Turtle"));

        let none = AnimalRepository::search("no-such-animal").await.unwrap();
        assert!(none.is_empty());
    });
}

#[test]
fn category_slug_lookup_round_trips() {
    run(async {
        assert!(CategoryRepository::exists_by_slug("mammals").await.unwrap());
        let mammals = CategoryRepository::find_by_slug("mammals")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(mammals.name, "Mammals");
        assert!(!CategoryRepository::exists_by_slug("no-such-slug")
            .await
            .unwrap());
    });
}

#[test]
fn only_approved_blogs_are_listed_publicly() {
    run(async {
        let author = UserRepository::create_with_profile(new_user("dave"), Role::Educator, None)
            .await
            .unwrap();
        BlogRepository::create::<sea_orm::DatabaseConnection>(
            BlogActiveModel {
                title: Set("Pending post".to_string()),
                content: Set("Awaiting review".to_string()),
                author_id: Set(Some(author.id)),
                date_posted: Set(Some(Utc::now())),
                approved: Set(false),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

        let listed = BlogRepository::find_approved_with_author(None).await.unwrap();
        assert!(listed.iter().all(|(blog, _)| blog.approved));
        assert!(listed
            .iter()
            .all(|(blog, _)| blog.title != "Pending post"));
    });
}

#[test]
fn seeded_role_lookup_resolves() {
    run(async {
        let keeper = UserRepository::find_by_username("keeper")
            .await
            .unwrap()
            .unwrap();
        let role = ProfileRepository::find_role_by_user_id(keeper.id)
            .await
            .unwrap();
        assert_eq!(role, Some(Role::Zookeeper));

        let missing = ProfileRepository::find_role_by_user_id(99_999).await.unwrap();
        assert_eq!(missing, None);
    });
}

#[test]
fn quiz_page_is_bounded_and_ordered() {
    run(async {
        let quizzes = QuizRepository::find_page(5).await.unwrap();
        assert!(quizzes.len() <= 5);
        assert!(quizzes.windows(2).all(|w| w[0].id < w[1].id));
    });
}

#[test]
fn zone_catalog_is_seeded() {
    run(async {
        assert_eq!(ZoneRepository::count().await.unwrap(), 5);
    });
}
