//! Consigna Repository Implementation
//!
//! SQLite-backed implementation of Repository<Consigna>

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::DbState;
use super::row::{id_from_rowid, optional_timestamp_from_sql, timestamp_to_sql};
use super::traits::Repository;
use crate::domain::{Consigna, DomainError, DomainResult};

const SELECT_COLUMNS: &str =
    "SELECT id, titulo, asignado, descripcion, completed, completion_date FROM consignas";

/// SQLite implementation of the consignas collection
#[derive(Clone)]
pub struct ConsignaRepository {
    db: DbState,
}

impl ConsignaRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Consigna> for ConsignaRepository {
    async fn add(&self, entity: &Consigna) -> DomainResult<u32> {
        let id = self
            .db
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO consignas (titulo, asignado, descripcion, completed, completion_date)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        entity.titulo,
                        entity.asignado,
                        entity.descripcion,
                        entity.completed,
                        entity.completion_date.as_ref().map(timestamp_to_sql),
                    ],
                )?;
                id_from_rowid(conn.last_insert_rowid())
            })
            .await?;
        log::debug!("Consigna added with ID {}", id);
        Ok(id)
    }

    async fn get(&self, id: u32) -> DomainResult<Option<Consigna>> {
        self.db
            .with_connection(|conn| {
                conn.query_row(
                    &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                    params![id],
                    row_to_consigna,
                )
                .optional()
            })
            .await
    }

    async fn get_all(&self) -> DomainResult<Vec<Consigna>> {
        let items = self
            .db
            .with_connection(|conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
                let rows = stmt.query_map([], row_to_consigna)?;
                let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(items)
            })
            .await?;
        log::debug!("Retrieved {} items from consignas", items.len());
        Ok(items)
    }

    async fn update(&self, entity: &Consigna) -> DomainResult<()> {
        if entity.id == 0 {
            return Err(DomainError::InvalidInput("update requires an id".to_string()));
        }
        self.db
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO consignas (id, titulo, asignado, descripcion, completed, completion_date)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT(id) DO UPDATE SET
                        titulo = excluded.titulo,
                        asignado = excluded.asignado,
                        descripcion = excluded.descripcion,
                        completed = excluded.completed,
                        completion_date = excluded.completion_date",
                    params![
                        entity.id,
                        entity.titulo,
                        entity.asignado,
                        entity.descripcion,
                        entity.completed,
                        entity.completion_date.as_ref().map(timestamp_to_sql),
                    ],
                )
            })
            .await?;
        log::debug!("Consigna {} updated", entity.id);
        Ok(())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        self.db
            .with_connection(|conn| conn.execute("DELETE FROM consignas WHERE id = ?1", params![id]))
            .await?;
        log::debug!("Consigna {} deleted", id);
        Ok(())
    }
}

fn row_to_consigna(row: &Row<'_>) -> rusqlite::Result<Consigna> {
    Ok(Consigna {
        id: row.get(0)?,
        titulo: row.get(1)?,
        asignado: row.get(2)?,
        descripcion: row.get(3)?,
        completed: row.get(4)?,
        completion_date: optional_timestamp_from_sql(5, row.get(5)?)?,
    })
}
