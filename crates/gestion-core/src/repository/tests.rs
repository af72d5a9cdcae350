//! Repository Integration Tests
//!
//! Tests for both repositories with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::domain::{Completable, Consigna, DomainError, Novedad, Prioridad};
    use crate::repository::{ConsignaRepository, DbState, NovedadRepository, Repository};

    async fn setup_test_db() -> DbState {
        let db = DbState::new();
        db.open_in_memory().await.expect("Failed to init test DB");
        db
    }

    fn novedad(descripcion: &str, prioridad: Prioridad) -> Novedad {
        Novedad::new(
            descripcion.to_string(),
            "Marta".to_string(),
            "07:45".to_string(),
            prioridad,
            "Sin observaciones \"urgentes\"".to_string(),
            Utc.with_ymd_and_hms(2024, 3, 14, 7, 45, 12).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_record() {
        let repo = NovedadRepository::new(setup_test_db().await);

        let original = novedad("Fuga en sala 2", Prioridad::Alta);
        let id = repo.add(&original).await.expect("Failed to add");
        assert!(id > 0);

        let found = repo.get(id).await.expect("Get failed").expect("missing");
        let mut expected = original.clone();
        expected.id = id;
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn test_sub_millisecond_timestamps_survive_storage() {
        let db = setup_test_db().await;
        let novedades = NovedadRepository::new(db.clone());
        let consignas = ConsignaRepository::new(db);
        let precise = Utc.with_ymd_and_hms(2024, 3, 14, 7, 45, 12).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);

        let mut n = novedad("Sensor intermitente", Prioridad::Media);
        n.date = precise;
        n.set_completed(true, precise);
        let id = novedades.add(&n).await.unwrap();
        n.id = id;
        assert_eq!(novedades.get(id).await.unwrap(), Some(n));

        let mut c = Consigna::new("Revisar cámaras".into(), "Eva".into(), String::new());
        c.set_completed(true, precise);
        let id = consignas.add(&c).await.unwrap();
        c.id = id;
        assert_eq!(consignas.get(id).await.unwrap(), Some(c));
    }

    #[tokio::test]
    async fn test_add_ignores_incoming_id() {
        let repo = NovedadRepository::new(setup_test_db().await);

        let mut first = novedad("uno", Prioridad::Baja);
        first.id = 99;
        let id = repo.add(&first).await.unwrap();
        assert_ne!(id, 99);
        assert!(repo.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_not_reused() {
        let repo = ConsignaRepository::new(setup_test_db().await);

        let a = repo.add(&Consigna::new("A".into(), "x".into(), String::new())).await.unwrap();
        let b = repo.add(&Consigna::new("B".into(), "x".into(), String::new())).await.unwrap();
        assert_ne!(a, b);

        repo.delete(b).await.unwrap();
        let c = repo.add(&Consigna::new("C".into(), "x".into(), String::new())).await.unwrap();
        assert!(c > b, "AUTOINCREMENT must not hand out a deleted id again");
    }

    #[tokio::test]
    async fn test_get_all_lists_every_record() {
        let repo = NovedadRepository::new(setup_test_db().await);

        repo.add(&novedad("Item 1", Prioridad::Alta)).await.unwrap();
        repo.add(&novedad("Item 2", Prioridad::Media)).await.unwrap();

        let items = repo.get_all().await.expect("List failed");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].descripcion, "Item 1");
        assert_eq!(items[1].descripcion, "Item 2");
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = NovedadRepository::new(setup_test_db().await);

        let id = repo.add(&novedad("Original", Prioridad::Media)).await.unwrap();
        let mut stored = repo.get(id).await.unwrap().unwrap();
        stored.descripcion = "Updated".to_string();
        stored.set_completed(true, Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());

        repo.update(&stored).await.expect("Update failed");
        let found = repo.get(id).await.unwrap().unwrap();
        assert_eq!(found, stored);
        assert!(found.completion_consistent());
    }

    #[tokio::test]
    async fn test_update_upserts_missing_key() {
        let repo = ConsignaRepository::new(setup_test_db().await);

        let mut consigna = Consigna::new("Nueva".into(), "Pedro".into(), "detalle".into());
        consigna.id = 7;
        repo.update(&consigna).await.unwrap();

        assert_eq!(repo.get(7).await.unwrap(), Some(consigna));
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let repo = ConsignaRepository::new(setup_test_db().await);
        let consigna = Consigna::new("Sin id".into(), "Pedro".into(), String::new());
        assert!(matches!(repo.update(&consigna).await, Err(DomainError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = ConsignaRepository::new(setup_test_db().await);

        let id = repo.add(&Consigna::new("To delete".into(), "Ana".into(), String::new())).await.unwrap();
        repo.delete(id).await.expect("Delete failed");

        assert!(repo.get(id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().iter().all(|c| c.id != id));
        // deleting again is harmless
        repo.delete(id).await.expect("second delete");
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let db = setup_test_db().await;
        let novedades = NovedadRepository::new(db.clone());
        let consignas = ConsignaRepository::new(db);

        novedades.add(&novedad("n", Prioridad::Baja)).await.unwrap();
        assert!(consignas.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_operations_before_init_fail() {
        let repo = NovedadRepository::new(DbState::new());
        assert_eq!(repo.get_all().await, Err(DomainError::NotInitialized));
        assert_eq!(
            repo.add(&novedad("x", Prioridad::Alta)).await,
            Err(DomainError::NotInitialized)
        );
    }
}
