//! Desktop Reminders
//!
//! Permission is asked for once per session. Every interval the scheduler
//! counts high-priority novedades that are still open and, when there are
//! any, raises one summary notification. Open tasks are announced again on
//! every tick.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{DomainResult, Novedad, Prioridad};

/// OS notification permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Not decided yet; asking is allowed
    #[default]
    Default,
    Granted,
    Denied,
}

/// Platform notification backend
pub trait Notifier: Send + Sync {
    fn permission(&self) -> PermissionState;

    fn request_permission(&self) -> PermissionState;

    fn notify(&self, title: &str, body: &str) -> DomainResult<()>;
}

/// A notification to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Shown right after the user grants permission
    pub fn enabled() -> Self {
        Self::new(
            "¡Notificaciones activadas!",
            "Recibirás recordatorios de tareas importantes.",
        )
    }

    /// Raised when a high-priority novedad is created
    pub fn new_high_priority(novedad: &Novedad) -> Option<Self> {
        (novedad.prioridad == Prioridad::Alta)
            .then(|| Self::new("Nueva Tarea de Alta Prioridad", novedad.descripcion.clone()))
    }

    /// Summary of open high-priority novedades, `None` when there are none
    pub fn pending_summary(novedades: &[Novedad]) -> Option<Self> {
        let count = novedades.iter().filter(|n| n.is_pending_high_priority()).count();
        (count > 0).then(|| {
            Self::new(
                "Recordatorio de Tareas Pendientes",
                format!("Tienes {count} novedad(es) de alta prioridad sin completar."),
            )
        })
    }
}

/// Session-wide permission state in front of a `Notifier`
pub struct NotificationGate {
    notifier: Arc<dyn Notifier>,
    enabled: bool,
    state: Mutex<PermissionState>,
    prompted: AtomicBool,
}

impl NotificationGate {
    pub fn new(notifier: Arc<dyn Notifier>, enabled: bool) -> Self {
        Self {
            notifier,
            enabled,
            state: Mutex::new(PermissionState::Default),
            prompted: AtomicBool::new(false),
        }
    }

    /// Query the permission and ask for it if undecided. Runs once; later
    /// calls return the cached state without prompting again.
    pub fn init(&self) -> PermissionState {
        if !self.enabled {
            log::info!("Notifications disabled by configuration");
            return self.permission();
        }
        if self.prompted.swap(true, Ordering::SeqCst) {
            return self.permission();
        }

        let current = self.notifier.permission();
        let resolved = match current {
            PermissionState::Granted => {
                log::info!("Notification permission already granted.");
                current
            }
            PermissionState::Denied => {
                log::info!("Notification permission denied; not asking again.");
                current
            }
            PermissionState::Default => {
                let answer = self.notifier.request_permission();
                if answer == PermissionState::Granted {
                    log::info!("Notification permission granted.");
                    self.store(answer);
                    self.send(&Notification::enabled());
                }
                answer
            }
        };
        self.store(resolved);
        resolved
    }

    pub fn permission(&self) -> PermissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self, state: PermissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Show `notification` if permission was granted. Returns whether it
    /// was handed to the platform.
    pub fn send(&self, notification: &Notification) -> bool {
        if !self.enabled || self.permission() != PermissionState::Granted {
            return false;
        }
        match self.notifier.notify(&notification.title, &notification.body) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to show notification: {}", e);
                false
            }
        }
    }
}

#[cfg(feature = "storage")]
pub use scheduler::ReminderScheduler;

#[cfg(feature = "storage")]
mod scheduler {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::{interval_at, Instant};

    use super::{Notification, NotificationGate};
    use crate::domain::{DomainResult, Novedad};
    use crate::repository::Repository;

    /// Default period between reminder checks
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(60 * 60);

    /// Hourly check for open high-priority novedades
    pub struct ReminderScheduler<R> {
        repo: R,
        gate: Arc<NotificationGate>,
    }

    impl<R: Repository<Novedad>> ReminderScheduler<R> {
        pub fn new(repo: R, gate: Arc<NotificationGate>) -> Self {
            Self { repo, gate }
        }

        /// One check. Returns the notification raised, if any.
        pub async fn tick(&self) -> DomainResult<Option<Notification>> {
            let novedades = self.repo.get_all().await?;
            let Some(summary) = Notification::pending_summary(&novedades) else {
                log::debug!("No pending high-priority novedades");
                return Ok(None);
            };
            log::info!("Reminder: {}", summary.body);
            self.gate.send(&summary);
            Ok(Some(summary))
        }

        /// Tick every `period`, starting one period from now. Never returns.
        pub async fn run(self, period: Duration) {
            let period = if period.is_zero() { DEFAULT_PERIOD } else { period };
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if let Err(e) = self.tick().await {
                    log::warn!("Reminder check failed: {}", e);
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::Ordering;

    fn novedad(prioridad: Prioridad, completed: bool) -> Novedad {
        let mut n = Novedad::new(
            "Tarea".into(),
            "Ana".into(),
            "08:00".into(),
            prioridad,
            String::new(),
            Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        );
        n.completed = completed;
        if completed {
            n.completion_date = Some(n.date);
        }
        n
    }

    #[test]
    fn test_summary_counts_open_high_priority_only() {
        let list = vec![
            novedad(Prioridad::Alta, false),
            novedad(Prioridad::Alta, false),
            novedad(Prioridad::Alta, true),
            novedad(Prioridad::Media, false),
        ];
        let summary = Notification::pending_summary(&list).unwrap();
        assert_eq!(summary.title, "Recordatorio de Tareas Pendientes");
        assert_eq!(summary.body, "Tienes 2 novedad(es) de alta prioridad sin completar.");

        assert_eq!(Notification::pending_summary(&list[2..]), None);
        assert_eq!(Notification::pending_summary(&[]), None);
    }

    #[test]
    fn test_new_high_priority_notification() {
        let alta = novedad(Prioridad::Alta, false);
        assert_eq!(
            Notification::new_high_priority(&alta),
            Some(Notification::new("Nueva Tarea de Alta Prioridad", "Tarea"))
        );
        assert_eq!(Notification::new_high_priority(&novedad(Prioridad::Baja, false)), None);
    }

    #[test]
    fn test_init_prompts_once_and_welcomes() {
        let notifier = Arc::new(RecordingNotifier::new(PermissionState::Default, PermissionState::Granted));
        let gate = NotificationGate::new(notifier.clone(), true);

        assert_eq!(gate.init(), PermissionState::Granted);
        assert_eq!(gate.init(), PermissionState::Granted);
        assert_eq!(notifier.requests.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.sent(), vec![Notification::enabled()]);
    }

    #[test]
    fn test_denied_is_never_reprompted() {
        let notifier = Arc::new(RecordingNotifier::new(PermissionState::Denied, PermissionState::Granted));
        let gate = NotificationGate::new(notifier.clone(), true);

        assert_eq!(gate.init(), PermissionState::Denied);
        gate.init();
        assert_eq!(notifier.requests.load(Ordering::SeqCst), 0);
        assert!(!gate.send(&Notification::new("t", "b")));
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_dismissed_prompt_is_not_repeated() {
        let notifier = Arc::new(RecordingNotifier::new(PermissionState::Default, PermissionState::Default));
        let gate = NotificationGate::new(notifier.clone(), true);

        assert_eq!(gate.init(), PermissionState::Default);
        assert_eq!(gate.init(), PermissionState::Default);
        assert_eq!(notifier.requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_send_requires_grant_and_enabled() {
        let notifier = Arc::new(RecordingNotifier::granted());
        let gate = NotificationGate::new(notifier.clone(), true);
        assert!(!gate.send(&Notification::new("antes", "de init")));
        gate.init();
        assert!(gate.send(&Notification::new("t", "b")));
        assert_eq!(notifier.sent().len(), 1);

        let disabled = NotificationGate::new(Arc::new(RecordingNotifier::granted()), false);
        disabled.init();
        assert!(!disabled.send(&Notification::new("t", "b")));
    }

    #[test]
    fn test_platform_failure_is_swallowed() {
        let mut failing = RecordingNotifier::granted();
        failing.fail = true;
        let gate = NotificationGate::new(Arc::new(failing), true);
        gate.init();
        assert!(!gate.send(&Notification::new("t", "b")));
    }

    #[cfg(feature = "storage")]
    mod scheduler_tests {
        use super::*;
        use crate::repository::{DbState, NovedadRepository, Repository};
        use std::time::Duration;

        async fn setup(entries: Vec<Novedad>) -> NovedadRepository {
            let db = DbState::new();
            db.open_in_memory().await.unwrap();
            let repo = NovedadRepository::new(db);
            for n in &entries {
                repo.add(n).await.unwrap();
            }
            repo
        }

        #[tokio::test]
        async fn test_tick_raises_one_summary_with_count() {
            let repo = setup(vec![
                novedad(Prioridad::Alta, false),
                novedad(Prioridad::Alta, false),
                novedad(Prioridad::Alta, false),
                novedad(Prioridad::Baja, false),
            ])
            .await;
            let notifier = Arc::new(RecordingNotifier::granted());
            let gate = Arc::new(NotificationGate::new(notifier.clone(), true));
            gate.init();

            let scheduler = ReminderScheduler::new(repo, gate);
            let raised = scheduler.tick().await.unwrap().unwrap();
            assert!(raised.body.contains(" 3 "));
            // no de-duplication between ticks
            scheduler.tick().await.unwrap();
            assert_eq!(notifier.sent().len(), 2);
        }

        #[tokio::test]
        async fn test_tick_with_nothing_pending_is_silent() {
            let repo = setup(vec![novedad(Prioridad::Alta, true), novedad(Prioridad::Media, false)]).await;
            let notifier = Arc::new(RecordingNotifier::granted());
            let gate = Arc::new(NotificationGate::new(notifier.clone(), true));
            gate.init();

            let scheduler = ReminderScheduler::new(repo, gate);
            assert_eq!(scheduler.tick().await.unwrap(), None);
            assert!(notifier.sent().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_run_ticks_every_period() {
            let repo = setup(vec![novedad(Prioridad::Alta, false)]).await;
            let notifier = Arc::new(RecordingNotifier::granted());
            let gate = Arc::new(NotificationGate::new(notifier.clone(), true));
            gate.init();

            let period = Duration::from_secs(3600);
            let handle = tokio::spawn(ReminderScheduler::new(repo, gate).run(period));

            tokio::time::sleep(period / 2).await;
            assert!(notifier.sent().is_empty(), "first check happens one period after start");

            tokio::time::sleep(period * 2).await;
            assert_eq!(notifier.sent().len(), 2);
            handle.abort();
        }
    }
}
