//! Batch actions applied to the selected rows at once.

use contracts::RowId;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Another action has not settled yet
    #[error("action '{0}' is still running")]
    Busy(String),
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ActionError::Failed(message.into())
    }
}

pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>>>>;

/// Named effect over the list of selected ids
#[derive(Clone)]
pub struct BatchAction {
    label: String,
    effect: Callback<Vec<RowId>, ActionFuture>,
}

impl BatchAction {
    /// Asynchronous action
    pub fn new<F, Fut>(label: impl Into<String>, effect: F) -> Self
    where
        F: Fn(Vec<RowId>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + 'static,
    {
        Self {
            label: label.into(),
            effect: Callback::new(move |ids: Vec<RowId>| -> ActionFuture { Box::pin(effect(ids)) }),
        }
    }

    /// Synchronous action
    pub fn sync<F>(label: impl Into<String>, effect: F) -> Self
    where
        F: Fn(Vec<RowId>) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Self::new(label, move |ids| std::future::ready(effect(ids)))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn invoke(&self, ids: Vec<RowId>) -> ActionFuture {
        self.effect.run(ids)
    }
}

/// Tracks the action in flight and the last failure.
///
/// Only one action runs at a time; a second one is rejected with
/// [`ActionError::Busy`] until the first settles.
#[derive(Clone, Copy)]
pub struct BatchRunner {
    pending: RwSignal<Option<String>>,
    last_error: RwSignal<Option<String>>,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
            last_error: RwSignal::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.with(Option::is_some)
    }

    pub fn is_running(&self, label: &str) -> bool {
        self.pending.with(|p| p.as_deref() == Some(label))
    }

    pub fn error(&self) -> Option<String> {
        self.last_error.get()
    }

    pub fn clear_error(&self) {
        self.last_error.set(None);
    }

    /// Runs `action` on `ids` and waits for it to settle
    pub async fn run(&self, action: &BatchAction, ids: Vec<RowId>) -> Result<(), ActionError> {
        if let Some(running) = self.pending.get_untracked() {
            log::warn!(
                "batch action '{}' ignored: '{}' is still running",
                action.label(),
                running
            );
            return Err(ActionError::Busy(running));
        }

        log::info!("batch action '{}' on {} row(s)", action.label(), ids.len());
        self.pending.set(Some(action.label().to_string()));
        self.last_error.set(None);

        let result = action.invoke(ids).await;
        self.pending.set(None);

        match &result {
            Ok(()) => log::info!("batch action '{}' done", action.label()),
            Err(e) => {
                log::error!("batch action '{}' failed: {}", action.label(), e);
                self.last_error.set(Some(e.to_string()));
            }
        }
        result
    }
}

/// Visibility of the batch-action modal together with its runner.
///
/// Opening clears any error left by an action that failed after the
/// modal had already been closed.
#[derive(Clone, Copy)]
pub struct BatchDialog {
    visible: RwSignal<bool>,
    pub runner: BatchRunner,
}

impl Default for BatchDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchDialog {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            runner: BatchRunner::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible.get()
    }

    pub fn open(&self) {
        self.runner.clear_error();
        self.visible.set(true);
    }

    pub fn close(&self) {
        self.visible.set(false);
        self.runner.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::{Arc, Mutex};

    fn recording_action(label: &str, calls: Arc<Mutex<Vec<Vec<RowId>>>>) -> BatchAction {
        BatchAction::new(label, move |ids| {
            let calls = calls.clone();
            async move {
                calls.lock().unwrap().push(ids);
                Ok(())
            }
        })
    }

    #[test]
    fn test_action_receives_ids_in_order_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let archive = recording_action("Archive", calls.clone());
        let runner = BatchRunner::new();

        let result = block_on(runner.run(&archive, vec![2, 5]));

        assert_eq!(result, Ok(()));
        assert_eq!(*calls.lock().unwrap(), vec![vec![2, 5]]);
        assert!(!runner.is_busy());
        assert_eq!(runner.error(), None);
    }

    #[test]
    fn test_sync_action() {
        let total = Arc::new(Mutex::new(0usize));
        let counter = total.clone();
        let delete = BatchAction::sync("Delete", move |ids| {
            *counter.lock().unwrap() += ids.len();
            Ok(())
        });

        assert_eq!(delete.label(), "Delete");
        assert_eq!(block_on(BatchRunner::new().run(&delete, vec![1, 2, 3])), Ok(()));
        assert_eq!(*total.lock().unwrap(), 3);
    }

    #[test]
    fn test_failure_is_kept_for_display() {
        let runner = BatchRunner::new();
        let broken = BatchAction::sync("Export", |_| Err(ActionError::failed("disk full")));

        let result = block_on(runner.run(&broken, vec![7]));

        assert_eq!(result, Err(ActionError::Failed("disk full".to_string())));
        assert_eq!(runner.error(), Some("disk full".to_string()));
        assert!(!runner.is_busy());

        runner.clear_error();
        assert_eq!(runner.error(), None);
    }

    #[test]
    fn test_second_action_rejected_while_busy() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let archive = recording_action("Archive", calls.clone());
        let runner = BatchRunner::new();
        runner.pending.set(Some("Delete".to_string()));

        assert!(runner.is_running("Delete"));
        let result = block_on(runner.run(&archive, vec![1]));

        assert_eq!(result, Err(ActionError::Busy("Delete".to_string())));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reopened_dialog_drops_stale_error() {
        let dialog = BatchDialog::new();
        let broken = BatchAction::sync("Export", |_| Err(ActionError::failed("timeout")));

        dialog.open();
        assert!(dialog.is_open());
        dialog.close();
        // The action settles only after the dialog was closed
        let result = block_on(dialog.runner.run(&broken, vec![3]));
        assert!(result.is_err());
        assert_eq!(dialog.runner.error(), Some("timeout".to_string()));

        dialog.open();
        assert_eq!(dialog.runner.error(), None);
    }
}
