//! Application Service
//!
//! The operations behind the IPC commands: submit a form, toggle
//! completion, delete, list and export. Owns the repositories and the
//! notification gate; the backend keeps one instance in its state.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::sync::Arc;

use crate::confirm::PendingDelete;
use crate::domain::{Collection, Completable, Consigna, DomainError, DomainResult, Novedad};
use crate::export::{build_report, CsvReport};
pub use crate::form::Saved;
use crate::form::{ConsignaForm, NovedadForm};
use crate::reminder::{Notification, NotificationGate, ReminderScheduler};
use crate::repository::{ConsignaRepository, DbState, NovedadRepository, Repository};

#[derive(Clone)]
pub struct Service {
    novedades: NovedadRepository,
    consignas: ConsignaRepository,
    notifications: Arc<NotificationGate>,
}

impl Service {
    pub fn new(db: DbState, notifications: Arc<NotificationGate>) -> Self {
        Self {
            novedades: NovedadRepository::new(db.clone()),
            consignas: ConsignaRepository::new(db),
            notifications,
        }
    }

    pub fn notifications(&self) -> &Arc<NotificationGate> {
        &self.notifications
    }

    /// The hourly reminder over this service's novedades
    pub fn reminder_scheduler(&self) -> ReminderScheduler<NovedadRepository> {
        ReminderScheduler::new(self.novedades.clone(), self.notifications.clone())
    }

    // ========================
    // Novedades
    // ========================

    pub async fn list_novedades(&self) -> DomainResult<Vec<Novedad>> {
        self.novedades.get_all().await
    }

    pub async fn get_novedad(&self, id: u32) -> DomainResult<Option<Novedad>> {
        self.novedades.get(id).await
    }

    /// Create (no id) or edit (id) a novedad from the modal form
    pub async fn submit_novedad(&self, form: &NovedadForm, now: DateTime<Utc>) -> DomainResult<Saved<Novedad>> {
        match form.id {
            Some(id) => {
                let existing = self
                    .novedades
                    .get(id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("novedad {}", id)))?;
                let updated = form.overlay(&existing)?;
                self.novedades.update(&updated).await?;
                log::info!("Novedad {} updated", id);
                Ok(Saved::Updated(updated))
            }
            None => {
                let mut created = form.build(now)?;
                let id = self.novedades.add(&created).await?;
                created.id = id;
                log::info!("Novedad created with ID {}", id);
                if let Some(notification) = Notification::new_high_priority(&created) {
                    self.notifications.send(&notification);
                }
                Ok(Saved::Created(created))
            }
        }
    }

    /// Set the completion state. The stored record is only replaced once
    /// the update succeeded; the returned record is what storage holds.
    pub async fn toggle_novedad(&self, id: u32, completed: bool, now: DateTime<Utc>) -> DomainResult<Novedad> {
        let mut novedad = self
            .novedades
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("novedad {}", id)))?;
        novedad.set_completed(completed, now);
        self.novedades.update(&novedad).await?;
        log::info!("Novedad completion toggled: {} {}", id, completed);
        Ok(novedad)
    }

    // ========================
    // Consignas
    // ========================

    pub async fn list_consignas(&self) -> DomainResult<Vec<Consigna>> {
        self.consignas.get_all().await
    }

    pub async fn get_consigna(&self, id: u32) -> DomainResult<Option<Consigna>> {
        self.consignas.get(id).await
    }

    pub async fn submit_consigna(&self, form: &ConsignaForm) -> DomainResult<Saved<Consigna>> {
        match form.id {
            Some(id) => {
                let existing = self
                    .consignas
                    .get(id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("consigna {}", id)))?;
                let updated = form.overlay(&existing)?;
                self.consignas.update(&updated).await?;
                log::info!("Consigna {} updated", id);
                Ok(Saved::Updated(updated))
            }
            None => {
                let mut created = form.build()?;
                created.id = self.consignas.add(&created).await?;
                log::info!("Consigna created with ID {}", created.id);
                Ok(Saved::Created(created))
            }
        }
    }

    pub async fn toggle_consigna(&self, id: u32, completed: bool, now: DateTime<Utc>) -> DomainResult<Consigna> {
        let mut consigna = self
            .consignas
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("consigna {}", id)))?;
        consigna.set_completed(completed, now);
        self.consignas.update(&consigna).await?;
        log::info!("Consigna completion toggled: {} {}", id, completed);
        Ok(consigna)
    }

    // ========================
    // Shared
    // ========================

    /// Delete a record the user confirmed
    pub async fn delete(&self, target: PendingDelete) -> DomainResult<()> {
        match target.collection {
            Collection::Novedades => self.novedades.delete(target.id).await?,
            Collection::Consignas => self.consignas.delete(target.id).await?,
        }
        log::info!("Item deleted from {} with ID {}", target.collection, target.id);
        Ok(())
    }

    /// Load both collections and build the CSV report
    pub async fn export_all<Tz>(&self, now: &DateTime<Tz>) -> DomainResult<Option<CsvReport>>
    where
        Tz: TimeZone,
        Tz::Offset: Display + Sync,
    {
        let novedades = self.novedades.get_all().await?;
        let consignas = self.consignas.get_all().await?;
        build_report(&novedades, &consignas, now)
    }
}
