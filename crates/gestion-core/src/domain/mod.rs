//! Domain Layer
//!
//! Contains the two record types and the rules every collection shares.
//! This layer has NO storage dependencies.

mod collection;
mod completion;
mod consigna;
mod entity;
mod novedad;

pub use collection::Collection;
pub use completion::Completable;
pub use consigna::Consigna;
pub use entity::{DomainError, DomainResult, Entity};
pub use novedad::{Novedad, Prioridad};
