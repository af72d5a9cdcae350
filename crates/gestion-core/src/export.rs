//! CSV Export
//!
//! Both collections in one report: novedades first, then consignas, under a
//! shared 10-column header. Every field is quoted; the file starts with a
//! UTF-8 BOM so spreadsheet tools pick the right encoding.

use chrono::{DateTime, NaiveDate, TimeZone};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::domain::{Consigna, DomainError, DomainResult, Novedad};
use crate::render::format_timestamp;

pub const BOM: char = '\u{FEFF}';

pub const HEADERS: [&str; 10] = [
    "Tipo",
    "ID",
    "Título/Descripción",
    "Responsable/Asignado",
    "Hora Inicio",
    "Prioridad",
    "Observaciones/Detalles",
    "Fecha Creación",
    "Fecha Finalización",
    "Estado",
];

pub const NOTHING_TO_EXPORT: &str = "No hay datos para exportar.";
pub const EXPORT_FAILED: &str = "Ocurrió un error al exportar los datos.";

/// A finished report, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    pub file_name: String,
    /// Full file content, BOM included
    pub content: String,
    pub rows: usize,
}

impl CsvReport {
    /// Write the report into `dir` and return the file path
    pub fn write_to(&self, dir: &Path) -> DomainResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|e| DomainError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.content.as_bytes())
            .map_err(|e| DomainError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("Exported {} rows to {}", self.rows, path.display());
        Ok(path)
    }
}

/// `reporte_completo_<YYYY-MM-DD>.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("reporte_completo_{}.csv", date.format("%Y-%m-%d"))
}

fn estado(completed: bool) -> &'static str {
    if completed {
        "Completada"
    } else {
        "Pendiente"
    }
}

fn novedad_row<Tz>(n: &Novedad, tz: &Tz) -> [String; 10]
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    [
        "Novedad".to_string(),
        n.id.to_string(),
        n.descripcion.clone(),
        n.responsable.clone(),
        n.hora_inicio.clone(),
        n.prioridad.as_str().to_string(),
        n.observaciones.clone(),
        format_timestamp(&n.date, tz),
        n.completion_date.as_ref().map(|d| format_timestamp(d, tz)).unwrap_or_default(),
        estado(n.completed).to_string(),
    ]
}

fn consigna_row<Tz>(c: &Consigna, tz: &Tz) -> [String; 10]
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    [
        "Consigna".to_string(),
        c.id.to_string(),
        c.titulo.clone(),
        c.asignado.clone(),
        // hora inicio, prioridad: novedad only
        String::new(),
        String::new(),
        c.descripcion.clone(),
        // fecha creación: novedad only
        String::new(),
        c.completion_date.as_ref().map(|d| format_timestamp(d, tz)).unwrap_or_default(),
        estado(c.completed).to_string(),
    ]
}

/// Build the report, or `None` when both collections are empty.
///
/// Timestamps are shown in the time zone of `now`; the file name uses its date.
pub fn build_report<Tz>(
    novedades: &[Novedad],
    consignas: &[Consigna],
    now: &DateTime<Tz>,
) -> DomainResult<Option<CsvReport>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if novedades.is_empty() && consignas.is_empty() {
        log::info!("{}", NOTHING_TO_EXPORT);
        return Ok(None);
    }

    let tz = now.timezone();
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let csv_err = |e: csv::Error| DomainError::Export(format!("Failed to write CSV record: {}", e));
    writer.write_record(HEADERS).map_err(csv_err)?;
    for n in novedades {
        writer.write_record(novedad_row(n, &tz)).map_err(csv_err)?;
    }
    for c in consignas {
        writer.write_record(consigna_row(c, &tz)).map_err(csv_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::Export(format!("Failed to flush CSV writer: {}", e)))?;
    let mut body = String::from_utf8(bytes).map_err(|e| DomainError::Export(e.to_string()))?;
    // Rows are joined by newlines, no trailing one
    if body.ends_with('\n') {
        body.pop();
    }

    Ok(Some(CsvReport {
        file_name: report_file_name(now.date_naive()),
        content: format!("{BOM}{body}"),
        rows: novedades.len() + consignas.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Completable, Prioridad};
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 30, 18, 0, 0).unwrap()
    }

    fn novedad(id: u32, descripcion: &str) -> Novedad {
        let mut n = Novedad::new(
            descripcion.into(),
            "Sofía".into(),
            "06:30".into(),
            Prioridad::Media,
            "nota, con coma".into(),
            Utc.with_ymd_and_hms(2024, 9, 29, 6, 31, 0).unwrap(),
        );
        n.id = id;
        n
    }

    fn consigna(id: u32, titulo: &str) -> Consigna {
        let mut c = Consigna::new(titulo.into(), "Tomás".into(), String::new());
        c.id = id;
        c
    }

    #[test]
    fn test_nothing_to_export() {
        assert_eq!(build_report(&[], &[], &now()).unwrap(), None);
    }

    #[test]
    fn test_line_count_and_order() {
        let novedades = vec![novedad(1, "uno"), novedad(2, "dos")];
        let consignas = vec![consigna(1, "tres"), consigna(2, "cuatro"), consigna(3, "cinco")];
        let report = build_report(&novedades, &consignas, &now()).unwrap().unwrap();

        assert_eq!(report.rows, 5);
        assert!(report.content.starts_with(BOM));
        let lines: Vec<&str> = report.content.trim_start_matches(BOM).lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("\"Tipo\",\"ID\""));
        assert!(lines[1].starts_with("\"Novedad\""));
        assert!(lines[2].starts_with("\"Novedad\""));
        assert!(lines[3..].iter().all(|l| l.starts_with("\"Consigna\"")));
        assert!(!report.content.ends_with('\n'));
    }

    #[test]
    fn test_quotes_round_trip() {
        let novedades = vec![novedad(1, "Dijo \"ya voy\" y se fue")];
        let report = build_report(&novedades, &[], &now()).unwrap().unwrap();
        assert!(report.content.contains("\"Dijo \"\"ya voy\"\" y se fue\""));

        let mut reader = csv::Reader::from_reader(report.content.trim_start_matches(BOM).as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 10);
        assert_eq!(&headers[2], "Título/Descripción");

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "Dijo \"ya voy\" y se fue");
        assert_eq!(&record[6], "nota, con coma");
        assert_eq!(&record[7], "29/9/2024, 6:31:00");
        assert_eq!(&record[8], "");
        assert_eq!(&record[9], "Pendiente");
    }

    #[test]
    fn test_consigna_rows_leave_novedad_columns_blank() {
        let mut c = consigna(4, "Apagar luces");
        c.set_completed(true, Utc.with_ymd_and_hms(2024, 9, 30, 7, 0, 5).unwrap());
        let report = build_report(&[], &[c], &now()).unwrap().unwrap();

        let mut reader = csv::Reader::from_reader(report.content.trim_start_matches(BOM).as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Consigna");
        assert_eq!(&record[1], "4");
        assert_eq!(&record[4], "");
        assert_eq!(&record[5], "");
        assert_eq!(&record[7], "");
        assert_eq!(&record[8], "30/9/2024, 7:00:05");
        assert_eq!(&record[9], "Completada");
    }

    #[test]
    fn test_file_name_and_write() {
        let report = build_report(&[novedad(1, "x")], &[], &now()).unwrap().unwrap();
        assert_eq!(report.file_name, "reporte_completo_2024-09-30.csv");

        let dir = tempfile::tempdir().unwrap();
        let path = report.write_to(dir.path()).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(written, report.content.as_bytes());
    }
}
