//! Delete Confirmation
//!
//! One confirmation dialog shared by both sections. At most one delete can
//! be pending; confirming hands the pending delete out exactly once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Collection;

/// The record a confirmation dialog is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDelete {
    pub collection: Collection,
    pub id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmError {
    #[error("a delete of {0:?} is already awaiting confirmation")]
    AlreadyPending(PendingDelete),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    AwaitingConfirmation(PendingDelete),
}

impl DeleteConfirmation {
    /// Ask for confirmation. A second request while one is open is rejected
    /// and leaves the open one untouched.
    pub fn request(&mut self, collection: Collection, id: u32) -> Result<(), ConfirmError> {
        match self {
            DeleteConfirmation::AwaitingConfirmation(pending) => {
                Err(ConfirmError::AlreadyPending(*pending))
            }
            DeleteConfirmation::Idle => {
                *self = DeleteConfirmation::AwaitingConfirmation(PendingDelete { collection, id });
                Ok(())
            }
        }
    }

    /// Take the pending delete and go back to idle. Returns `None` when
    /// nothing is pending, so repeated confirms delete once.
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        match std::mem::take(self) {
            DeleteConfirmation::AwaitingConfirmation(pending) => Some(pending),
            DeleteConfirmation::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteConfirmation::AwaitingConfirmation(_))
    }

    pub fn pending(&self) -> Option<PendingDelete> {
        match self {
            DeleteConfirmation::AwaitingConfirmation(pending) => Some(*pending),
            DeleteConfirmation::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_hands_out_pending_once() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(Collection::Novedades, 8).unwrap();
        assert!(dialog.is_open());

        assert_eq!(
            dialog.confirm(),
            Some(PendingDelete { collection: Collection::Novedades, id: 8 })
        );
        assert_eq!(dialog.confirm(), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(Collection::Consignas, 2).unwrap();
        dialog.cancel();
        assert_eq!(dialog, DeleteConfirmation::Idle);
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn test_second_request_is_rejected() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(Collection::Consignas, 2).unwrap();

        let err = dialog.request(Collection::Novedades, 9).unwrap_err();
        assert_eq!(
            err,
            ConfirmError::AlreadyPending(PendingDelete { collection: Collection::Consignas, id: 2 })
        );
        assert_eq!(dialog.pending().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_reopen_after_confirm() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(Collection::Consignas, 1).unwrap();
        dialog.confirm();
        dialog.request(Collection::Consignas, 3).unwrap();
        assert_eq!(dialog.confirm().map(|p| p.id), Some(3));
    }
}
