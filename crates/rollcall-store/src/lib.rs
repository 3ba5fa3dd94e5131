// Append-only attendance row store.
// One table, no update or delete paths; listing is a fresh bounded query.

mod db;
mod error;
mod schema;

pub use db::Database;
pub use error::{Error, Result};
