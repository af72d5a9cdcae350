//! List Filters
//!
//! Pure predicates behind the search box and the select controls of each
//! section. A record is shown when text, category and status all match.

use serde::{Deserialize, Serialize};

use crate::domain::{Consigna, Novedad, Prioridad};

/// Value of an "estado" select: all, completed or pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    Any,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Parse the raw `<select>` value (`""`, `"true"`, `"false"`)
    pub fn from_select(value: &str) -> Self {
        match value {
            "true" => StatusFilter::Completed,
            "false" => StatusFilter::Pending,
            _ => StatusFilter::Any,
        }
    }

    pub fn select_value(&self) -> &'static str {
        match self {
            StatusFilter::Any => "",
            StatusFilter::Completed => "true",
            StatusFilter::Pending => "false",
        }
    }

    pub fn matches(&self, completed: bool) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

/// A predicate over one record type
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Keep the records that match, in their original order
pub fn apply<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Case-insensitive containment of `search` in either field
fn text_match(search: &str, first: &str, second: &str) -> bool {
    let needle = search.to_lowercase();
    first.to_lowercase().contains(&needle) || second.to_lowercase().contains(&needle)
}

/// Filter controls of the novedades section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NovedadFilter {
    pub search: String,
    /// `None` when the priority select is on "all"
    pub prioridad: Option<Prioridad>,
    pub estado: StatusFilter,
}

impl NovedadFilter {
    /// Parse the raw priority select value; unknown or empty means "all"
    pub fn prioridad_from_select(value: &str) -> Option<Prioridad> {
        value.parse().ok()
    }
}

impl RecordFilter<Novedad> for NovedadFilter {
    fn matches(&self, record: &Novedad) -> bool {
        text_match(&self.search, &record.descripcion, &record.responsable)
            && self.prioridad.map_or(true, |p| p == record.prioridad)
            && self.estado.matches(record.completed)
    }
}

/// Filter controls of the consignas section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsignaFilter {
    pub search: String,
    pub estado: StatusFilter,
}

impl RecordFilter<Consigna> for ConsignaFilter {
    fn matches(&self, record: &Consigna) -> bool {
        text_match(&self.search, &record.titulo, &record.asignado)
            && self.estado.matches(record.completed)
    }
}
