//! UI rendering for rulelens
//!
//! One screen: a status line, the app selector, the three derived output
//! fields, and the Clear/Reload actions. The selector and outputs only
//! exist while a loaded dataset is on hand; a failed load leaves the status
//! line and Reload.

use crate::app::ui_components::{
    DANGER, TEXT_BRIGHT, TEXT_DIM, card_container, main_container, primary_button,
    secondary_button,
};
use crate::app::{Message, PLACEHOLDER_OPTION, Phase, Severity, State};
use crate::core::dataset::EMPTY_FIELD;
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let mut content = column![
        text("Rules Package Lens").size(20).color(TEXT_BRIGHT),
        view_status(state),
    ]
    .spacing(14);

    // Phase::Failed always has the dataset cleared; the extra check keeps a
    // reload pass showing the previous selector until its result lands.
    if state.dataset.is_some() && state.phase != Phase::Failed {
        content = content.push(view_selector(state));
        content = content.push(view_outputs(state));
    }

    content = content.push(view_actions(state));

    container(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(main_container)
        .into()
}

fn view_status(state: &State) -> Element<'_, Message> {
    match &state.status {
        Some(line) => text(&line.text)
            .size(13)
            .color(match line.severity {
                Severity::Error => DANGER,
                Severity::Info => TEXT_DIM,
            })
            .into(),
        None => text("").size(13).into(),
    }
}

fn view_selector(state: &State) -> Element<'_, Message> {
    let mut options = Vec::with_capacity(state.app_names.len() + 1);
    options.push(PLACEHOLDER_OPTION.to_string());
    options.extend(state.app_names.iter().cloned());

    let selected = Some(
        state
            .selected
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_OPTION.to_string()),
    );

    column![
        text("APP").size(10).color(TEXT_DIM),
        pick_list(options, selected, Message::AppPicked)
            .width(Length::Fill)
            .padding(10),
    ]
    .spacing(6)
    .into()
}

fn view_outputs(state: &State) -> Element<'_, Message> {
    container(
        column![
            field_row("App", state.selected.as_deref()),
            field_row("Package", state.details.package_name.as_deref()),
            field_row("Description", state.details.description.as_deref()),
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card_container)
    .into()
}

fn field_row<'a>(label: &'a str, value: Option<&'a str>) -> Element<'a, Message> {
    row![
        text(label).size(12).color(TEXT_DIM).width(Length::Fixed(110.0)),
        text(value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_FIELD))
            .size(13)
            .color(TEXT_BRIGHT),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn view_actions(state: &State) -> Element<'_, Message> {
    let mut actions = row![].spacing(8);

    if state.dataset.is_some() {
        actions = actions.push(
            button(text("Clear").size(13))
                .on_press(Message::ClearClicked)
                .padding([8, 16])
                .style(secondary_button),
        );
    }

    actions = actions.push(
        button(text("Reload").size(13))
            .on_press(Message::ReloadClicked)
            .padding([8, 16])
            .style(primary_button),
    );

    actions.into()
}
