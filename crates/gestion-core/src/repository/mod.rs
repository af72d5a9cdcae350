//! Repository Layer
//!
//! The storage gateway: one SQLite database with a table per collection.

mod consigna_repo;
mod db;
mod novedad_repo;
mod row;
mod traits;

#[cfg(test)]
mod tests;

pub use consigna_repo::ConsignaRepository;
pub use db::{init_db, DbState, SharedConnection, SCHEMA_VERSION};
pub use novedad_repo::NovedadRepository;
pub use traits::Repository;
