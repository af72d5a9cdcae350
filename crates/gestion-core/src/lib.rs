//! Gestión Pro Core
//!
//! Layered architecture:
//! - domain: records and business rules
//! - repository: SQLite storage gateway
//! - filter / render: list filtering and card view models
//! - form / confirm: modal and delete-confirmation state
//! - export / reminder: CSV reports and desktop reminders
//! - service: the operations the backend exposes over IPC

pub mod config;
pub mod confirm;
pub mod domain;
pub mod export;
pub mod filter;
pub mod form;
pub mod reminder;
pub mod render;

#[cfg(feature = "storage")]
pub mod repository;
#[cfg(feature = "storage")]
pub mod service;

pub use domain::{
    Collection, Completable, Consigna, DomainError, DomainResult, Entity, Novedad, Prioridad,
};
