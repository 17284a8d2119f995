use chrono::Utc;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::{info, instrument};
use zoo_models::{entities::prelude::*, enums::common::Role};
use zoo_utils::{hash::bcrypt_hash, slug::slugify};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_tables(manager).await?;
        create_indexes(manager).await?;
        seeding_data(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            ContactMessageTable::Table.into_table_ref(),
            QuizTable::Table.into_table_ref(),
            FavoriteTable::Table.into_table_ref(),
            FeedbackTable::Table.into_table_ref(),
            BlogTable::Table.into_table_ref(),
            FactTable::Table.into_table_ref(),
            AnimalTable::Table.into_table_ref(),
            ZoneTable::Table.into_table_ref(),
            CategoryTable::Table.into_table_ref(),
            ProfileTable::Table.into_table_ref(),
            UserTable::Table.into_table_ref(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(UserTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(UserTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(UserTable::Username).string().not_null())
                .col(ColumnDef::new(UserTable::Email).string().not_null())
                .col(ColumnDef::new(UserTable::Password).string().not_null())
                .col(ColumnDef::new(UserTable::CreatedAt).timestamp())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(ProfileTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(ProfileTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(ProfileTable::UserId).integer().not_null())
                .col(
                    ColumnDef::new(ProfileTable::Role)
                        .string_len(20)
                        .not_null(),
                )
                .col(ColumnDef::new(ProfileTable::Age).integer())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_profile_user")
                        .from(ProfileTable::Table, ProfileTable::UserId)
                        .to(UserTable::Table, UserTable::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(CategoryTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(CategoryTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(CategoryTable::Name).string().not_null())
                .col(
                    ColumnDef::new(CategoryTable::Description)
                        .text()
                        .not_null(),
                )
                .col(ColumnDef::new(CategoryTable::Slug).string().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(ZoneTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(ZoneTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(ZoneTable::Name).string().not_null())
                .col(ColumnDef::new(ZoneTable::Description).text().not_null())
                .col(ColumnDef::new(ZoneTable::MapLocation).string().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(AnimalTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(AnimalTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(AnimalTable::Name).string().not_null())
                .col(ColumnDef::new(AnimalTable::Species).string().not_null())
                .col(
                    ColumnDef::new(AnimalTable::ScientificName)
                        .string()
                        .not_null(),
                )
                .col(ColumnDef::new(AnimalTable::CategoryId).integer())
                .col(ColumnDef::new(AnimalTable::ZoneId).integer())
                .col(ColumnDef::new(AnimalTable::Description).text().not_null())
                .col(ColumnDef::new(AnimalTable::Diet).string().not_null())
                .col(ColumnDef::new(AnimalTable::Habitat).string().not_null())
                .col(ColumnDef::new(AnimalTable::FunFacts).text().not_null())
                .col(ColumnDef::new(AnimalTable::Image).string())
                .col(ColumnDef::new(AnimalTable::Sound).string())
                .col(ColumnDef::new(AnimalTable::Video).string())
                .col(ColumnDef::new(AnimalTable::CreatedAt).timestamp())
                .col(
                    ColumnDef::new(AnimalTable::ViewCount)
                        .integer()
                        .not_null()
                        .default(0),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_animal_category")
                        .from(AnimalTable::Table, AnimalTable::CategoryId)
                        .to(CategoryTable::Table, CategoryTable::Id)
                        .on_delete(ForeignKeyAction::SetNull),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_animal_zone")
                        .from(AnimalTable::Table, AnimalTable::ZoneId)
                        .to(ZoneTable::Table, ZoneTable::Id)
                        .on_delete(ForeignKeyAction::SetNull),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(FactTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(FactTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(FactTable::Title).string().not_null())
                .col(ColumnDef::new(FactTable::Content).text().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(BlogTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(BlogTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(BlogTable::Title).string().not_null())
                .col(ColumnDef::new(BlogTable::Content).text().not_null())
                .col(ColumnDef::new(BlogTable::AuthorId).integer())
                .col(ColumnDef::new(BlogTable::DatePosted).timestamp())
                .col(
                    ColumnDef::new(BlogTable::Approved)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_blog_author")
                        .from(BlogTable::Table, BlogTable::AuthorId)
                        .to(UserTable::Table, UserTable::Id)
                        .on_delete(ForeignKeyAction::SetNull),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(FeedbackTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(FeedbackTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(FeedbackTable::UserId).integer())
                .col(ColumnDef::new(FeedbackTable::Message).text().not_null())
                .col(
                    ColumnDef::new(FeedbackTable::Rating)
                        .small_integer()
                        .not_null(),
                )
                .col(ColumnDef::new(FeedbackTable::CreatedAt).timestamp())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_feedback_user")
                        .from(FeedbackTable::Table, FeedbackTable::UserId)
                        .to(UserTable::Table, UserTable::Id)
                        .on_delete(ForeignKeyAction::SetNull),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(FavoriteTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(FavoriteTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(FavoriteTable::UserId).integer().not_null())
                .col(
                    ColumnDef::new(FavoriteTable::AnimalId)
                        .integer()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorite_user")
                        .from(FavoriteTable::Table, FavoriteTable::UserId)
                        .to(UserTable::Table, UserTable::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorite_animal")
                        .from(FavoriteTable::Table, FavoriteTable::AnimalId)
                        .to(AnimalTable::Table, AnimalTable::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(QuizTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(QuizTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(QuizTable::Question).string().not_null())
                .col(ColumnDef::new(QuizTable::Options).text().not_null())
                .col(
                    ColumnDef::new(QuizTable::CorrectAnswer)
                        .string()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(ContactMessageTable::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(ContactMessageTable::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(ContactMessageTable::Name).string().not_null())
                .col(
                    ColumnDef::new(ContactMessageTable::Email)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ContactMessageTable::Subject)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ContactMessageTable::Urgency)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ContactMessageTable::Message)
                        .text()
                        .not_null(),
                )
                .col(ColumnDef::new(ContactMessageTable::CreatedAt).timestamp())
                .to_owned(),
        )
        .await?;

    Ok(())
}

async fn create_indexes(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_index(
            Index::create()
                .name("idx_user_username")
                .table(UserTable::Table)
                .col(UserTable::Username)
                .unique()
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_profile_user_id")
                .table(ProfileTable::Table)
                .col(ProfileTable::UserId)
                .unique()
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_category_slug")
                .table(CategoryTable::Table)
                .col(CategoryTable::Slug)
                .unique()
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_favorite_user_animal")
                .table(FavoriteTable::Table)
                .col(FavoriteTable::UserId)
                .col(FavoriteTable::AnimalId)
                .unique()
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_animal_category")
                .table(AnimalTable::Table)
                .col(AnimalTable::CategoryId)
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_animal_zone")
                .table(AnimalTable::Table)
                .col(AnimalTable::ZoneId)
                .to_owned(),
        )
        .await?;
    manager
        .create_index(
            Index::create()
                .name("idx_blog_author")
                .table(BlogTable::Table)
                .col(BlogTable::AuthorId)
                .to_owned(),
        )
        .await?;
    Ok(())
}

#[instrument(name = "seeding-data", skip_all)]
async fn seeding_data(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();
    let txn = db.begin().await?;
    let now = Utc::now();

    let demo_user = UserActiveModel {
        username: Set("demo".to_string()),
        email: Set("demo@example.com".to_string()),
        password: Set(bcrypt_hash("demo1234")),
        created_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    ProfileActiveModel {
        user_id: Set(demo_user.id),
        role: Set(Role::Visitor),
        age: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let keeper = UserActiveModel {
        username: Set("keeper".to_string()),
        email: Set("keeper@example.com".to_string()),
        password: Set(bcrypt_hash("keeper1234")),
        created_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    ProfileActiveModel {
        user_id: Set(keeper.id),
        role: Set(Role::Zookeeper),
        age: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut category_ids = std::collections::HashMap::new();
    for name in [
        "Mammals",
        "Birds",
        "Reptiles",
        "Amphibians",
        "Fish",
        "Insects",
    ] {
        let category = CategoryActiveModel {
            name: Set(name.to_string()),
            description: Set(format!("{name} at the Virtual Zoo")),
            slug: Set(slugify(name)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        category_ids.insert(name, category.id);
    }

    let mut zone_ids = std::collections::HashMap::new();
    for name in ["Jungle", "Desert", "Ocean", "Savannah", "Rainforest"] {
        let zone = ZoneActiveModel {
            name: Set(name.to_string()),
            description: Set(format!("{name} zone")),
            map_location: Set(String::new()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        zone_ids.insert(name, zone.id);
    }

    let animals: [(&str, &str, &str, &str, &str, &str, &str, &str); 5] = [
        (
            "African Elephant",
            "Loxodonta africana",
            "Mammals",
            "Savannah",
            "Large herbivore with tusks.",
            "Herbivore",
            "Savannah",
            "They have strong social bonds.",
        ),
        (
            "Bald Eagle",
            "Haliaeetus leucocephalus",
            "Birds",
            "Rainforest",
            "A large bird of prey.",
            "Carnivore",
            "Near water",
            "National bird of the United States.",
        ),
        (
            "Green Sea Turtle",
            "Chelonia mydas",
            "Fish",
            "Ocean",
            "Marine turtle that feeds on seagrass.",
            "Herbivore",
            "Oceans",
            "Can live for decades.",
        ),
        (
            "Komodo Dragon",
            "Varanus komodoensis",
            "Reptiles",
            "Desert",
            "Largest living species of lizard.",
            "Carnivore",
            "Tropical savannahs",
            "Has venom glands.",
        ),
        (
            "Poison Dart Frog",
            "Dendrobatidae",
            "Amphibians",
            "Jungle",
            "Colorful small frog.",
            "Insectivore",
            "Tropical rainforests",
            "Some species are poisonous.",
        ),
    ];
    for (name, species, category, zone, description, diet, habitat, fun_facts) in animals {
        AnimalActiveModel {
            name: Set(name.to_string()),
            species: Set(species.to_string()),
            scientific_name: Set(species.to_string()),
            category_id: Set(category_ids.get(category).copied()),
            zone_id: Set(zone_ids.get(zone).copied()),
            description: Set(description.to_string()),
            diet: Set(diet.to_string()),
            habitat: Set(habitat.to_string()),
            fun_facts: Set(fun_facts.to_string()),
            image: Set(None),
            sound: Set(None),
            video: Set(None),
            created_at: Set(Some(now)),
            view_count: Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for (title, content) in [
        (
            "Elephants can recognize themselves in mirrors",
            "Elephants show self-awareness.",
        ),
        ("Bird migration", "Many birds migrate thousands of miles."),
        (
            "Sea turtles navigate by magnetic fields",
            "Green sea turtles return to the beach where they hatched.",
        ),
    ] {
        FactActiveModel {
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    BlogActiveModel {
        title: Set("Welcome to the Virtual Zoo".to_string()),
        content: Set("This is a demo blog post.".to_string()),
        author_id: Set(Some(demo_user.id)),
        date_posted: Set(Some(now)),
        approved: Set(true),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for (question, options, answer) in [
        (
            "Which animal is known as the king of the jungle?",
            "Lion\nTiger\nElephant\nGiraffe",
            "Lion",
        ),
        (
            "Which animal can fly?",
            "Penguin\nEagle\nOstrich\nElephant",
            "Eagle",
        ),
        (
            "Which animal is the largest land mammal?",
            "Lion\nElephant\nGiraffe\nRhino",
            "Elephant",
        ),
    ] {
        QuizActiveModel {
            question: Set(question.to_string()),
            options: Set(options.to_string()),
            correct_answer: Set(answer.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!("seeding data success");
    Ok(())
}

#[derive(DeriveIden)]
enum UserTable {
    #[sea_orm(iden = "user")]
    Table,
    Id,
    Username,
    Email,
    Password,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProfileTable {
    #[sea_orm(iden = "profile")]
    Table,
    Id,
    UserId,
    Role,
    Age,
}

#[derive(DeriveIden)]
enum CategoryTable {
    #[sea_orm(iden = "category")]
    Table,
    Id,
    Name,
    Description,
    Slug,
}

#[derive(DeriveIden)]
enum ZoneTable {
    #[sea_orm(iden = "zone")]
    Table,
    Id,
    Name,
    Description,
    MapLocation,
}

#[derive(DeriveIden)]
enum AnimalTable {
    #[sea_orm(iden = "animal")]
    Table,
    Id,
    Name,
    Species,
    ScientificName,
    CategoryId,
    ZoneId,
    Description,
    Diet,
    Habitat,
    FunFacts,
    Image,
    Sound,
    Video,
    CreatedAt,
    ViewCount,
}

#[derive(DeriveIden)]
enum FactTable {
    #[sea_orm(iden = "fact")]
    Table,
    Id,
    Title,
    Content,
}

#[derive(DeriveIden)]
enum BlogTable {
    #[sea_orm(iden = "blog")]
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    DatePosted,
    Approved,
}

#[derive(DeriveIden)]
enum FeedbackTable {
    #[sea_orm(iden = "feedback")]
    Table,
    Id,
    UserId,
    Message,
    Rating,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FavoriteTable {
    #[sea_orm(iden = "favorite")]
    Table,
    Id,
    UserId,
    AnimalId,
}

#[derive(DeriveIden)]
enum QuizTable {
    #[sea_orm(iden = "quiz")]
    Table,
    Id,
    Question,
    Options,
    CorrectAnswer,
}

#[derive(DeriveIden)]
enum ContactMessageTable {
    #[sea_orm(iden = "contact_message")]
    Table,
    Id,
    Name,
    Email,
    Subject,
    Urgency,
    Message,
    CreatedAt,
}
