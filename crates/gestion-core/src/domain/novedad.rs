//! Novedad Entity
//!
//! A prioritized task entry with a responsible party and a start time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::completion::Completable;
use super::entity::{DomainError, Entity};

/// Priority of a novedad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Prioridad {
    Alta,
    #[default]
    Media,
    Baja,
}

impl Prioridad {
    pub const ALL: [Prioridad; 3] = [Prioridad::Alta, Prioridad::Media, Prioridad::Baja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prioridad::Alta => "Alta",
            Prioridad::Media => "Media",
            Prioridad::Baja => "Baja",
        }
    }
}

impl fmt::Display for Prioridad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prioridad {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alta" => Ok(Prioridad::Alta),
            "Media" => Ok(Prioridad::Media),
            "Baja" => Ok(Prioridad::Baja),
            other => Err(DomainError::InvalidInput(format!(
                "prioridad desconocida: {other}"
            ))),
        }
    }
}

/// A task entry ("novedad")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Novedad {
    /// Assigned by the database on first insert (0 until then)
    #[serde(default)]
    pub id: u32,
    pub descripcion: String,
    pub responsable: String,
    /// Start time as entered, `HH:MM`
    pub hora_inicio: String,
    pub prioridad: Prioridad,
    #[serde(default)]
    pub observaciones: String,
    /// Creation timestamp, never changed after insert
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Novedad {
    /// Create a new, pending novedad created at `date`
    pub fn new(
        descripcion: String,
        responsable: String,
        hora_inicio: String,
        prioridad: Prioridad,
        observaciones: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            descripcion,
            responsable,
            hora_inicio,
            prioridad,
            observaciones,
            date,
            completed: false,
            completion_date: None,
        }
    }

    /// High priority and still open: what the reminders count
    pub fn is_pending_high_priority(&self) -> bool {
        self.prioridad == Prioridad::Alta && !self.completed
    }
}

impl Entity for Novedad {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Completable for Novedad {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Novedad {
        Novedad::new(
            "Revisar bomba".to_string(),
            "Ana".to_string(),
            "08:30".to_string(),
            Prioridad::Alta,
            String::new(),
            Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_novedad_creation() {
        let novedad = sample();
        assert_eq!(novedad.id(), 0);
        assert!(!novedad.completed);
        assert!(novedad.completion_date.is_none());
        assert!(novedad.is_pending_high_priority());
    }

    #[test]
    fn test_completion_transitions() {
        let mut novedad = sample();
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();

        novedad.set_completed(true, now);
        assert!(novedad.completed);
        assert_eq!(novedad.completion_date, Some(now));
        assert!(novedad.completion_consistent());
        assert!(!novedad.is_pending_high_priority());

        novedad.set_completed(false, now);
        assert!(!novedad.completed);
        assert!(novedad.completion_date.is_none());
        assert!(novedad.completion_consistent());
    }

    #[test]
    fn test_prioridad_parsing() {
        assert_eq!("Alta".parse::<Prioridad>().unwrap(), Prioridad::Alta);
        assert_eq!(Prioridad::Baja.as_str(), "Baja");
        assert!("Urgente".parse::<Prioridad>().is_err());
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["horaInicio"], "08:30");
        assert_eq!(json["prioridad"], "Alta");
        assert!(json["completionDate"].is_null());
    }
}
