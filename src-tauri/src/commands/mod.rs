//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the service.
//! Errors cross the IPC boundary as strings.

mod app_cmd;
mod consigna_cmd;
mod export_cmd;
mod novedad_cmd;

pub use app_cmd::*;
pub use consigna_cmd::*;
pub use export_cmd::*;
pub use novedad_cmd::*;
