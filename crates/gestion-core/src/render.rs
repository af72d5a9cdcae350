//! Card Rendering
//!
//! Turns a load result plus the active filter into a view model. The
//! functions here are pure: same input, same cards. The frontend rebuilds the
//! list from the returned `ListView` on every refresh.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::domain::{Consigna, DomainResult, Novedad};
use crate::filter::{apply, ConsignaFilter, NovedadFilter};

pub const NOVEDADES_EMPTY: &str = "No se encontraron novedades que coincidan con los filtros.";
pub const CONSIGNAS_EMPTY: &str = "No se encontraron consignas que coincidan con los filtros.";
pub const NOVEDADES_ERROR: &str = "Error al cargar las novedades. Por favor, recarga la página.";
pub const CONSIGNAS_ERROR: &str = "Error al cargar las consignas. Por favor, recarga la página.";

/// What a list container shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListView {
    Cards(Vec<Card>),
    /// Nothing matched the filters
    Empty(String),
    /// Loading or rendering failed
    Error(String),
}

/// Priority badge: label plus css class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub class: String,
}

/// One rendered record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub badge: Option<Badge>,
    pub description: String,
    pub meta: Vec<String>,
    pub completed: bool,
}

impl Card {
    /// Label of the completion button on novedad cards
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "✓ Completada"
        } else {
            "Marcar como completada"
        }
    }
}

/// Date and time the way the lists and reports show them: `2/5/2024, 9:05:03`
pub fn format_timestamp<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

/// Date only: `2/5/2024`
pub fn format_date<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%-d/%-m/%Y").to_string()
}

fn completion_meta<Tz>(completion_date: Option<&DateTime<Utc>>, completed: bool, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match completion_date {
        Some(ts) if completed => Some(format!("✅ Finalización: {}", format_timestamp(ts, tz))),
        _ => None,
    }
}

pub fn novedad_card<Tz>(novedad: &Novedad, now: &DateTime<Tz>) -> Card
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let created = if novedad.date.with_timezone(&tz).date_naive() == now.date_naive() {
        "Hoy".to_string()
    } else {
        format_date(&novedad.date, &tz)
    };

    let mut meta = vec![
        format!("👤 {}", novedad.responsable),
        format!("🕐 {}", novedad.hora_inicio),
        format!("📅 Creación: {}", created),
    ];
    meta.extend(completion_meta(novedad.completion_date.as_ref(), novedad.completed, &tz));

    Card {
        id: novedad.id,
        title: novedad.descripcion.clone(),
        badge: Some(Badge {
            label: novedad.prioridad.as_str().to_string(),
            class: format!("priority-badge priority-{}", novedad.prioridad.as_str()),
        }),
        description: novedad.observaciones.clone(),
        meta,
        completed: novedad.completed,
    }
}

pub fn consigna_card<Tz>(consigna: &Consigna, now: &DateTime<Tz>) -> Card
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let mut meta = vec![format!("👤 {}", consigna.asignado)];
    meta.extend(completion_meta(consigna.completion_date.as_ref(), consigna.completed, &tz));

    Card {
        id: consigna.id,
        title: consigna.titulo.clone(),
        badge: None,
        description: consigna.descripcion.clone(),
        meta,
        completed: consigna.completed,
    }
}

/// render(state) for the novedades section
pub fn render_novedades<Tz>(
    loaded: &DomainResult<Vec<Novedad>>,
    filter: &NovedadFilter,
    now: &DateTime<Tz>,
) -> ListView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match loaded {
        Ok(all) => {
            let cards: Vec<Card> = apply(all, filter).iter().map(|n| novedad_card(n, now)).collect();
            into_view(cards, NOVEDADES_EMPTY)
        }
        Err(e) => {
            log::error!("Error loading novedades: {}", e);
            ListView::Error(NOVEDADES_ERROR.to_string())
        }
    }
}

/// render(state) for the consignas section
pub fn render_consignas<Tz>(
    loaded: &DomainResult<Vec<Consigna>>,
    filter: &ConsignaFilter,
    now: &DateTime<Tz>,
) -> ListView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match loaded {
        Ok(all) => {
            let cards: Vec<Card> = apply(all, filter).iter().map(|c| consigna_card(c, now)).collect();
            into_view(cards, CONSIGNAS_EMPTY)
        }
        Err(e) => {
            log::error!("Error loading consignas: {}", e);
            ListView::Error(CONSIGNAS_ERROR.to_string())
        }
    }
}

fn into_view(cards: Vec<Card>, empty: &str) -> ListView {
    if cards.is_empty() {
        ListView::Empty(empty.to_string())
    } else {
        ListView::Cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Completable, DomainError, Prioridad};
    use crate::filter::StatusFilter;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 15, 30, 0).unwrap()
    }

    fn novedad(id: u32, created: DateTime<Utc>) -> Novedad {
        let mut n = Novedad::new(
            "Corte de luz".into(),
            "Ana".into(),
            "14:00".into(),
            Prioridad::Alta,
            "Tablero norte".into(),
            created,
        );
        n.id = id;
        n
    }

    #[test]
    fn test_created_today_shows_hoy() {
        let card = novedad_card(&novedad(1, now()), &now());
        assert_eq!(card.title, "Corte de luz");
        assert_eq!(card.description, "Tablero norte");
        assert_eq!(
            card.meta,
            vec!["👤 Ana".to_string(), "🕐 14:00".to_string(), "📅 Creación: Hoy".to_string()]
        );
        assert_eq!(card.badge.as_ref().unwrap().class, "priority-badge priority-Alta");
        assert_eq!(card.toggle_label(), "Marcar como completada");
    }

    #[test]
    fn test_older_card_shows_date_and_completion() {
        let created = Utc.with_ymd_and_hms(2024, 4, 28, 8, 0, 0).unwrap();
        let mut n = novedad(2, created);
        n.set_completed(true, Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 3).unwrap());

        let card = novedad_card(&n, &now());
        assert_eq!(card.meta[2], "📅 Creación: 28/4/2024");
        assert_eq!(card.meta[3], "✅ Finalización: 1/5/2024, 9:05:03");
        assert!(card.completed);
        assert_eq!(card.toggle_label(), "✓ Completada");
    }

    #[test]
    fn test_empty_result_renders_placeholder() {
        let loaded = Ok(vec![novedad(1, now())]);
        let filter = NovedadFilter { estado: StatusFilter::Completed, ..Default::default() };
        assert_eq!(
            render_novedades(&loaded, &filter, &now()),
            ListView::Empty(NOVEDADES_EMPTY.to_string())
        );
    }

    #[test]
    fn test_load_failure_renders_error_placeholder() {
        let loaded: DomainResult<Vec<Consigna>> = Err(DomainError::Storage("disk I/O error".into()));
        assert_eq!(
            render_consignas(&loaded, &ConsignaFilter::default(), &now()),
            ListView::Error(CONSIGNAS_ERROR.to_string())
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut consigna = Consigna::new("Llaves".into(), "Rita".into(), String::new());
        consigna.id = 5;
        let loaded = Ok(vec![consigna]);
        let filter = ConsignaFilter::default();

        let first = render_consignas(&loaded, &filter, &now());
        let second = render_consignas(&loaded, &filter, &now());
        assert_eq!(first, second);
        match first {
            ListView::Cards(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].meta, vec!["👤 Rita".to_string()]);
                assert!(cards[0].badge.is_none());
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
