//! Novedad Repository Implementation
//!
//! SQLite-backed implementation of Repository<Novedad>

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::DbState;
use super::row::{id_from_rowid, optional_timestamp_from_sql, timestamp_from_sql, timestamp_to_sql};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Novedad};

const SELECT_COLUMNS: &str =
    "SELECT id, descripcion, responsable, hora_inicio, prioridad, observaciones, date, completed, completion_date FROM novedades";

/// SQLite implementation of the novedades collection
#[derive(Clone)]
pub struct NovedadRepository {
    db: DbState,
}

impl NovedadRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Novedad> for NovedadRepository {
    async fn add(&self, entity: &Novedad) -> DomainResult<u32> {
        let id = self
            .db
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO novedades (descripcion, responsable, hora_inicio, prioridad, observaciones, date, completed, completion_date)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        entity.descripcion,
                        entity.responsable,
                        entity.hora_inicio,
                        entity.prioridad.as_str(),
                        entity.observaciones,
                        timestamp_to_sql(&entity.date),
                        entity.completed,
                        entity.completion_date.as_ref().map(timestamp_to_sql),
                    ],
                )?;
                id_from_rowid(conn.last_insert_rowid())
            })
            .await?;
        log::debug!("Novedad added with ID {}", id);
        Ok(id)
    }

    async fn get(&self, id: u32) -> DomainResult<Option<Novedad>> {
        self.db
            .with_connection(|conn| {
                conn.query_row(
                    &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                    params![id],
                    row_to_novedad,
                )
                .optional()
            })
            .await
    }

    async fn get_all(&self) -> DomainResult<Vec<Novedad>> {
        let items = self
            .db
            .with_connection(|conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
                let rows = stmt.query_map([], row_to_novedad)?;
                let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(items)
            })
            .await?;
        log::debug!("Retrieved {} items from novedades", items.len());
        Ok(items)
    }

    async fn update(&self, entity: &Novedad) -> DomainResult<()> {
        if entity.id == 0 {
            return Err(DomainError::InvalidInput("update requires an id".to_string()));
        }
        self.db
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO novedades (id, descripcion, responsable, hora_inicio, prioridad, observaciones, date, completed, completion_date)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                     ON CONFLICT(id) DO UPDATE SET
                        descripcion = excluded.descripcion,
                        responsable = excluded.responsable,
                        hora_inicio = excluded.hora_inicio,
                        prioridad = excluded.prioridad,
                        observaciones = excluded.observaciones,
                        date = excluded.date,
                        completed = excluded.completed,
                        completion_date = excluded.completion_date",
                    params![
                        entity.id,
                        entity.descripcion,
                        entity.responsable,
                        entity.hora_inicio,
                        entity.prioridad.as_str(),
                        entity.observaciones,
                        timestamp_to_sql(&entity.date),
                        entity.completed,
                        entity.completion_date.as_ref().map(timestamp_to_sql),
                    ],
                )
            })
            .await?;
        log::debug!("Novedad {} updated", entity.id);
        Ok(())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        self.db
            .with_connection(|conn| conn.execute("DELETE FROM novedades WHERE id = ?1", params![id]))
            .await?;
        log::debug!("Novedad {} deleted", id);
        Ok(())
    }
}

fn row_to_novedad(row: &Row<'_>) -> rusqlite::Result<Novedad> {
    let prioridad: String = row.get(4)?;
    let date: String = row.get(6)?;
    Ok(Novedad {
        id: row.get(0)?,
        descripcion: row.get(1)?,
        responsable: row.get(2)?,
        hora_inicio: row.get(3)?,
        // Unknown values (hand-edited files) fall back to the default priority
        prioridad: prioridad.parse().unwrap_or_default(),
        observaciones: row.get(5)?,
        date: timestamp_from_sql(6, &date)?,
        completed: row.get(7)?,
        completion_date: optional_timestamp_from_sql(8, row.get(8)?)?,
    })
}
