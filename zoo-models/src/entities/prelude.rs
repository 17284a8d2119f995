pub use super::animal::{
    ActiveModel as AnimalActiveModel, Column as AnimalColumn, Entity as Animal,
    Model as AnimalModel,
};
pub use super::blog::{
    ActiveModel as BlogActiveModel, Column as BlogColumn, Entity as Blog, Model as BlogModel,
};
pub use super::category::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as Category,
    Model as CategoryModel,
};
pub use super::contact_message::{
    ActiveModel as ContactMessageActiveModel, Column as ContactMessageColumn,
    Entity as ContactMessage, Model as ContactMessageModel,
};
pub use super::fact::{
    ActiveModel as FactActiveModel, Column as FactColumn, Entity as Fact, Model as FactModel,
};
pub use super::favorite::{
    ActiveModel as FavoriteActiveModel, Column as FavoriteColumn, Entity as Favorite,
    Model as FavoriteModel,
};
pub use super::feedback::{
    ActiveModel as FeedbackActiveModel, Column as FeedbackColumn, Entity as Feedback,
    Model as FeedbackModel,
};
pub use super::profile::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as Profile,
    Model as ProfileModel,
};
pub use super::quiz::{
    ActiveModel as QuizActiveModel, Column as QuizColumn, Entity as Quiz, Model as QuizModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};
pub use super::zone::{
    ActiveModel as ZoneActiveModel, Column as ZoneColumn, Entity as Zone, Model as ZoneModel,
};
