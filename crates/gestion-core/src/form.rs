//! Form and Modal State
//!
//! The create/edit modal of each section. Forms hold raw field text exactly
//! as typed; `validate` applies the same constraints the HTML form declares
//! (`required`, `type="time"`, the priority `<select>`).

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Completable, Consigna, DomainError, DomainResult, Novedad, Prioridad};

/// Whether the modal creates a record or edits the one with this id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Create,
    Edit(u32),
}

/// A form bound to one record type
pub trait ModalForm: Default + Clone {
    type Record;

    /// Noun shown in the modal title
    const KIND: &'static str;

    fn from_record(record: &Self::Record) -> Self;

    fn id(&self) -> Option<u32>;
}

/// Open/closed state of a create/edit modal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModalState<F> {
    pub open: bool,
    pub mode: FormMode,
    pub form: F,
}

impl<F: ModalForm> ModalState<F> {
    /// Reset the form and show the modal in create mode
    pub fn open_create(&mut self) {
        self.form = F::default();
        self.mode = FormMode::Create;
        self.open = true;
    }

    /// Show the modal prefilled with `record`
    pub fn open_edit(&mut self, record: &F::Record) {
        self.form = F::from_record(record);
        self.mode = self.form.id().map_or(FormMode::Create, FormMode::Edit);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Nueva {}", F::KIND),
            FormMode::Edit(_) => format!("Editar {}", F::KIND),
        }
    }
}

/// Result of a form submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Saved<T> {
    Created(T),
    Updated(T),
}

impl<T> Saved<T> {
    pub fn record(&self) -> &T {
        match self {
            Saved::Created(r) | Saved::Updated(r) => r,
        }
    }
}

fn required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} es obligatorio")));
    }
    Ok(())
}

/// Raw values of the novedad form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovedadForm {
    /// Hidden identity field; `None` in create mode
    pub id: Option<u32>,
    pub descripcion: String,
    pub responsable: String,
    pub hora_inicio: String,
    pub prioridad: String,
    pub observaciones: String,
}

impl ModalForm for NovedadForm {
    type Record = Novedad;
    const KIND: &'static str = "Novedad";

    fn from_record(record: &Novedad) -> Self {
        Self {
            id: Some(record.id),
            descripcion: record.descripcion.clone(),
            responsable: record.responsable.clone(),
            hora_inicio: record.hora_inicio.clone(),
            prioridad: record.prioridad.as_str().to_string(),
            observaciones: record.observaciones.clone(),
        }
    }

    fn id(&self) -> Option<u32> {
        self.id
    }
}

impl NovedadForm {
    /// Check the field constraints and return the parsed priority
    pub fn validate(&self) -> DomainResult<Prioridad> {
        required("descripcion", &self.descripcion)?;
        required("responsable", &self.responsable)?;
        required("horaInicio", &self.hora_inicio)?;
        NaiveTime::parse_from_str(self.hora_inicio.trim(), "%H:%M").map_err(|_| {
            DomainError::InvalidInput(format!("horaInicio inválida: {}", self.hora_inicio))
        })?;
        self.prioridad.parse()
    }

    /// A new pending record created at `now`
    pub fn build(&self, now: DateTime<Utc>) -> DomainResult<Novedad> {
        let prioridad = self.validate()?;
        Ok(Novedad::new(
            self.descripcion.clone(),
            self.responsable.clone(),
            self.hora_inicio.trim().to_string(),
            prioridad,
            self.observaciones.clone(),
            now,
        ))
    }

    /// The submitted content laid over `existing`. Identity, creation date
    /// and completion state come from `existing`.
    pub fn overlay(&self, existing: &Novedad) -> DomainResult<Novedad> {
        let mut updated = self.build(existing.date)?;
        updated.id = existing.id;
        updated.copy_completion_from(existing);
        Ok(updated)
    }
}

/// Raw values of the consigna form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsignaForm {
    pub id: Option<u32>,
    pub titulo: String,
    pub asignado: String,
    pub descripcion: String,
}

impl ModalForm for ConsignaForm {
    type Record = Consigna;
    const KIND: &'static str = "Consigna";

    fn from_record(record: &Consigna) -> Self {
        Self {
            id: Some(record.id),
            titulo: record.titulo.clone(),
            asignado: record.asignado.clone(),
            descripcion: record.descripcion.clone(),
        }
    }

    fn id(&self) -> Option<u32> {
        self.id
    }
}

impl ConsignaForm {
    pub fn validate(&self) -> DomainResult<()> {
        required("titulo", &self.titulo)?;
        required("asignado", &self.asignado)
    }

    pub fn build(&self) -> DomainResult<Consigna> {
        self.validate()?;
        Ok(Consigna::new(
            self.titulo.clone(),
            self.asignado.clone(),
            self.descripcion.clone(),
        ))
    }

    pub fn overlay(&self, existing: &Consigna) -> DomainResult<Consigna> {
        let mut updated = self.build()?;
        updated.id = existing.id;
        updated.copy_completion_from(existing);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> NovedadForm {
        NovedadForm {
            id: None,
            descripcion: "Alarma disparada".into(),
            responsable: "Jorge".into(),
            hora_inicio: "22:15".into(),
            prioridad: "Alta".into(),
            observaciones: String::new(),
        }
    }

    #[test]
    fn test_open_create_resets_form() {
        let mut modal = ModalState::<NovedadForm>::default();
        modal.form = filled();
        modal.form.id = Some(3);
        modal.mode = FormMode::Edit(3);

        modal.open_create();
        assert!(modal.open);
        assert_eq!(modal.form, NovedadForm::default());
        assert_eq!(modal.mode, FormMode::Create);
        assert_eq!(modal.title(), "Nueva Novedad");
    }

    #[test]
    fn test_open_edit_prefills() {
        let mut consigna = Consigna::new("Revisar stock".into(), "Eva".into(), "depósito".into());
        consigna.id = 12;

        let mut modal = ModalState::<ConsignaForm>::default();
        modal.open_edit(&consigna);
        assert_eq!(modal.mode, FormMode::Edit(12));
        assert_eq!(modal.form.titulo, "Revisar stock");
        assert_eq!(modal.form.descripcion, "depósito");
        assert_eq!(modal.title(), "Editar Consigna");

        modal.close();
        assert!(!modal.open);
    }

    #[test]
    fn test_validation_rejects_missing_fields() {
        let mut form = filled();
        form.responsable = "   ".into();
        assert!(matches!(form.validate(), Err(DomainError::InvalidInput(_))));

        let mut form = filled();
        form.hora_inicio = "25:99".into();
        assert!(form.validate().is_err());

        let mut form = filled();
        form.prioridad = String::new();
        assert!(form.validate().is_err());

        assert_eq!(filled().validate(), Ok(Prioridad::Alta));
        assert!(ConsignaForm::default().validate().is_err());
    }

    #[test]
    fn test_build_creates_pending_record() {
        let now = Utc.with_ymd_and_hms(2024, 7, 9, 22, 16, 0).unwrap();
        let novedad = filled().build(now).unwrap();
        assert_eq!(novedad.id, 0);
        assert_eq!(novedad.date, now);
        assert!(!novedad.completed);
        assert!(novedad.completion_date.is_none());
    }

    #[test]
    fn test_overlay_preserves_identity_date_and_completion() {
        let created = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        let done = Utc.with_ymd_and_hms(2024, 7, 2, 8, 0, 0).unwrap();
        let mut existing = filled().build(created).unwrap();
        existing.id = 4;
        existing.set_completed(true, done);

        let mut edit = NovedadForm::from_record(&existing);
        edit.descripcion = "Alarma revisada".into();
        edit.prioridad = "Baja".into();

        let updated = edit.overlay(&existing).unwrap();
        assert_eq!(updated.id, 4);
        assert_eq!(updated.date, created);
        assert!(updated.completed);
        assert_eq!(updated.completion_date, Some(done));
        assert_eq!(updated.descripcion, "Alarma revisada");
        assert_eq!(updated.prioridad, Prioridad::Baja);
    }
}
