//! Collection names

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two record collections (one table each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Novedades,
    Consignas,
}

impl Collection {
    /// Table name in the database
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Novedades => "novedades",
            Collection::Consignas => "consignas",
        }
    }

    /// Singular name used in user-facing messages
    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Novedades => "novedad",
            Collection::Consignas => "consigna",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
