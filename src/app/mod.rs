pub mod ui_components;
pub mod view;

mod handlers;

use crate::core::dataset::{AppDetails, RuleDataset};
use iced::{Element, Task};
use std::path::PathBuf;

/// First selector entry; picking it maps to an empty selection.
pub const PLACEHOLDER_OPTION: &str = "Select an App";

pub struct State {
    /// Where the dataset is loaded from; fixed for the lifetime of the app.
    pub data_path: PathBuf,
    /// Dataset of the last successful load, if any.
    pub dataset: Option<RuleDataset>,
    /// Derived app list of the last successful load.
    pub app_names: Vec<String>,
    /// Currently selected app. `None` renders as the placeholder entry.
    pub selected: Option<String>,
    /// Display fields derived from `dataset` + `selected`.
    pub details: AppDetails,
    pub phase: Phase,
    pub status: Option<StatusLine>,
    /// Generation counter for load passes. Results carrying an older
    /// generation are stale and get dropped, so a newer reload always wins.
    pub load_seq: u64,
}

/// Lifecycle of a load pass. `Failed` is terminal until a manual reload
/// re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// One line of status text shown above the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A load pass resolved: its generation, plus the dataset and the
    /// persisted selection read alongside it.
    DatasetLoaded(u64, Result<(RuleDataset, Option<String>), String>),
    AppPicked(String),
    ClearClicked,
    ReloadClicked,
    ConfigSaved,
}

impl State {
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn new(data_path: PathBuf) -> (Self, Task<Message>) {
        let mut state = Self {
            data_path,
            dataset: None,
            app_names: Vec::new(),
            selected: None,
            details: AppDetails::default(),
            phase: Phase::Loading,
            status: None,
            load_seq: 0,
        };
        let task = handlers::begin_load(&mut state);
        (state, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(seq, result) => {
                handlers::handle_dataset_loaded(self, seq, result)
            }
            Message::AppPicked(choice) => handlers::handle_app_picked(self, choice),
            Message::ClearClicked => handlers::handle_clear(self),
            Message::ReloadClicked => handlers::begin_load(self),
            Message::ConfigSaved => Task::none(),
        }
    }
}
