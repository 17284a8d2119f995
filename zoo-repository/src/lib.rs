//! Data access layer. One repository per entity, all reading through the
//! global application context's database handle.

pub mod animal;
pub mod blog;
pub mod category;
pub mod contact_message;
pub mod fact;
pub mod favorite;
pub mod feedback;
pub mod profile;
pub mod quiz;
pub mod user;
pub mod zone;

pub use animal::AnimalRepository;
pub use blog::BlogRepository;
pub use category::CategoryRepository;
pub use contact_message::ContactMessageRepository;
pub use fact::FactRepository;
pub use favorite::FavoriteRepository;
pub use feedback::FeedbackRepository;
pub use profile::ProfileRepository;
pub use quiz::QuizRepository;
pub use user::UserRepository;
pub use zone::ZoneRepository;

use sea_orm::DatabaseConnection;
use zoo_common::ZooAppContext;
use zoo_error::storage::StorageError;

#[inline]
pub fn get_db_connection() -> Result<DatabaseConnection, StorageError> {
    ZooAppContext::instance()
        .map(|ctx| ctx.db().clone())
        .map_err(|_| StorageError::StorageUnavailable)
}
