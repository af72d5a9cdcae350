//! Completion state shared by both record types.

use chrono::{DateTime, Utc};

/// Records that can be marked as done.
///
/// `completion_date()` is `Some` exactly when `is_completed()` is true.
pub trait Completable {
    fn is_completed(&self) -> bool;

    fn completion_date(&self) -> Option<DateTime<Utc>>;

    /// Writes both completion fields. Callers go through `set_completed`.
    fn write_completion(&mut self, completed: bool, completion_date: Option<DateTime<Utc>>);

    /// Sets the completed flag, stamping `now` on completion and clearing the
    /// date when reopened.
    fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.write_completion(completed, completed.then_some(now));
    }

    /// Carries the completion fields of `other` over to `self`.
    fn copy_completion_from<C: Completable>(&mut self, other: &C) {
        self.write_completion(other.is_completed(), other.completion_date());
    }

    fn completion_consistent(&self) -> bool {
        self.is_completed() == self.completion_date().is_some()
    }
}
