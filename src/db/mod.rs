//! Database module for the SQLite roster store.

mod error;
mod pool;
mod roster;
mod schema;

pub use error::{ConstraintKind, StoreError};
pub use pool::DatabasePool;
pub use roster::{Roster, RosterStats};
pub use schema::*;
