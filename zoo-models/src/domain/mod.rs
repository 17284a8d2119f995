pub mod animal;
pub mod auth;
pub mod blog;
pub mod category;
pub mod common;
pub mod contact;
pub mod dashboard;
pub mod feedback;
pub mod home;
pub mod prelude;
pub mod quiz;
pub mod user;
