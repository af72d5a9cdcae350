//! Consigna Entity
//!
//! A simple assigned checklist item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::completion::Completable;
use super::entity::Entity;

/// A checklist entry ("consigna")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consigna {
    #[serde(default)]
    pub id: u32,
    pub titulo: String,
    pub asignado: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Consigna {
    pub fn new(titulo: String, asignado: String, descripcion: String) -> Self {
        Self {
            id: 0,
            titulo,
            asignado,
            descripcion,
            completed: false,
            completion_date: None,
        }
    }
}

impl Entity for Consigna {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Completable for Consigna {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    fn write_completion(&mut self, completed: bool, completion_date: Option<DateTime<Utc>>) {
        self.completed = completed;
        self.completion_date = completion_date;
    }
}
