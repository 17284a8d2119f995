use sea_orm::{entity::prelude::StringLen, DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};

/// Per-user role stored on the Profile, gating access to management
/// operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(20))",
    rename_all = "snake_case"
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Visitor,
    Admin,
    Zookeeper,
    Educator,
}

impl Default for Role {
    fn default() -> Self {
        Role::Visitor
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let s = match self {
            Role::Visitor => "visitor",
            Role::Admin => "admin",
            Role::Zookeeper => "zookeeper",
            Role::Educator => "educator",
        };
        write!(f, "{s}")
    }
}

/// Entity kinds used by validators and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    User,
    Profile,
    Category,
    Zone,
    Animal,
    Fact,
    Blog,
    Feedback,
    Favorite,
    Quiz,
    ContactMessage,
}

impl Display for EntityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let s = match self {
            EntityType::User => "User",
            EntityType::Profile => "Profile",
            EntityType::Category => "Category",
            EntityType::Zone => "Zone",
            EntityType::Animal => "Animal",
            EntityType::Fact => "Fact",
            EntityType::Blog => "Blog",
            EntityType::Feedback => "Feedback",
            EntityType::Favorite => "Favorite",
            EntityType::Quiz => "Quiz",
            EntityType::ContactMessage => "ContactMessage",
        };
        write!(f, "{s}")
    }
}

/// Operations distinguished by the validation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Create,
    Read,
    Write,
    Delete,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let s = match self {
            Operation::Create => "Create",
            Operation::Read => "Read",
            Operation::Write => "Write",
            Operation::Delete => "Delete",
        };
        write!(f, "{s}")
    }
}
