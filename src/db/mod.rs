pub mod models;
pub mod notes;
pub mod users;

pub use models::{Note, User};
pub use notes::NoteRepository;
pub use users::UserRepository;

/// Embedded migrations from ./migrations, applied at startup and by the
/// integration tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
