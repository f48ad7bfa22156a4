//! Selection changes, persistence, and clearing

use crate::app::{Message, PLACEHOLDER_OPTION, State, StatusLine};
use crate::config::AppConfig;
use crate::core::dataset::AppDetails;
use iced::Task;

/// Handles a selector pick. The placeholder entry maps to an empty
/// selection, which is persisted as an empty value rather than removed.
pub(crate) fn handle_app_picked(state: &mut State, choice: String) -> Task<Message> {
    let app = if choice == PLACEHOLDER_OPTION {
        String::new()
    } else {
        choice
    };

    state.details = match (&state.dataset, app.is_empty()) {
        (Some(dataset), false) => dataset.details(&app),
        _ => AppDetails::default(),
    };
    state.selected = if app.is_empty() {
        None
    } else {
        Some(app.clone())
    };

    persist_selection(Some(app))
}

/// Handles the Clear action. The stored key is removed outright, unlike a
/// placeholder re-selection which stores an empty value.
pub(crate) fn handle_clear(state: &mut State) -> Task<Message> {
    state.selected = None;
    state.details = AppDetails::default();
    state.status = Some(StatusLine::info("Cleared."));

    persist_selection(None)
}

fn persist_selection(selected_app: Option<String>) -> Task<Message> {
    Task::perform(
        async move {
            let config = AppConfig { selected_app };
            if let Err(e) = crate::config::save_config(&config).await {
                tracing::warn!("Failed to save selection: {e}");
            }
        },
        |()| Message::ConfigSaved,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Phase, Severity};
    use crate::core::dataset::RuleDataset;
    use serde_json::json;
    use std::path::PathBuf;

    fn ready_state() -> State {
        let mut state = State::new(PathBuf::from("data/sample.json")).0;
        let dataset = RuleDataset::from_value(&json!({
            "RULE_TARGET_APP_LISTS": {"a": ["X", "Y"]},
            "RULES_PACKAGE_LIST": {"X_Rules_PackageName": ["P1"]},
            "RULES_PACKAGE_DESCRIPTION": {"X_Rules_PackageDescription": "D1"}
        }));
        state.app_names = dataset.app_names();
        state.dataset = Some(dataset);
        state.phase = Phase::Ready;
        state.status = None;
        state
    }

    #[test]
    fn test_pick_derives_both_fields() {
        let mut state = ready_state();
        let _ = handle_app_picked(&mut state, "X".into());

        assert_eq!(state.selected.as_deref(), Some("X"));
        assert_eq!(state.details.package_name.as_deref(), Some("P1"));
        assert_eq!(state.details.description.as_deref(), Some("D1"));
    }

    #[test]
    fn test_pick_without_metadata_shows_empty_fields() {
        let mut state = ready_state();
        let _ = handle_app_picked(&mut state, "Y".into());

        assert_eq!(state.selected.as_deref(), Some("Y"));
        assert_eq!(state.details, AppDetails::default());
    }

    #[test]
    fn test_placeholder_pick_maps_to_empty_selection() {
        let mut state = ready_state();
        let _ = handle_app_picked(&mut state, "X".into());
        let _ = handle_app_picked(&mut state, PLACEHOLDER_OPTION.into());

        assert_eq!(state.selected, None);
        assert_eq!(state.details, AppDetails::default());
    }

    #[test]
    fn test_clear_resets_selection_and_reports() {
        let mut state = ready_state();
        let _ = handle_app_picked(&mut state, "X".into());
        let _ = handle_clear(&mut state);

        assert_eq!(state.selected, None);
        assert_eq!(state.details, AppDetails::default());
        let status = state.status.expect("status expected");
        assert_eq!(status.severity, Severity::Info);
        assert_eq!(status.text, "Cleared.");
    }
}
