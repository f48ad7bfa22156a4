//! Dataset loading and reload
//!
//! Handles the load pass that runs at startup and on every Reload:
//! - Spawning the async dataset read alongside the persisted selection
//! - Discarding results of load passes a newer reload has superseded
//! - Restoring the persisted selection into the fresh dataset

use crate::app::{Message, Phase, State, StatusLine};
use crate::core::dataset::{AppDetails, RuleDataset};
use crate::core::source;
use iced::Task;

/// Starts a load pass. The previous dataset stays on screen and interactive
/// until the pass resolves; only the resolution replaces or clears it.
pub(crate) fn begin_load(state: &mut State) -> Task<Message> {
    state.load_seq += 1;
    let seq = state.load_seq;
    state.phase = Phase::Loading;
    state.status = Some(StatusLine::info("Loading data…"));

    let path = state.data_path.clone();
    Task::perform(
        async move {
            let dataset = source::load_dataset(&path).await.map_err(|e| e.to_string())?;
            let saved = crate::config::load_config().await.selected_app;
            Ok((dataset, saved))
        },
        move |result| Message::DatasetLoaded(seq, result),
    )
}

/// Handles a resolved load pass.
pub(crate) fn handle_dataset_loaded(
    state: &mut State,
    seq: u64,
    result: Result<(RuleDataset, Option<String>), String>,
) -> Task<Message> {
    if seq != state.load_seq {
        // Superseded by a newer load pass; whichever resolves last must be
        // the newest, so this result is dropped.
        tracing::debug!("Dropping stale load result (seq {seq} < {})", state.load_seq);
        return Task::none();
    }

    match result {
        Ok((dataset, saved)) => {
            let restored = dataset
                .restorable_selection(saved.as_deref())
                .map(str::to_string);
            state.details = restored
                .as_deref()
                .map(|app| dataset.details(app))
                .unwrap_or_default();
            state.selected = restored;
            state.app_names = dataset.app_names();
            state.dataset = Some(dataset);
            state.phase = Phase::Ready;
            state.status = None;
        }
        Err(message) => {
            tracing::warn!("Dataset load failed: {message}");
            state.dataset = None;
            state.app_names.clear();
            state.selected = None;
            state.details = AppDetails::default();
            state.phase = Phase::Failed;
            state.status = Some(StatusLine::error(message));
        }
    }

    Task::none()
}
