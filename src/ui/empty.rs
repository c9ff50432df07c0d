use iced::widget::{button, column, text, Row};
use iced::{Alignment, Element};

use crate::Message;

/// Shown when search and filter leave nothing: suggested tags and a reset.
/// `search_exhausted` means the search alone already matches nothing.
pub fn empty_state<'a>(suggestions: &[String], search_exhausted: bool) -> Element<'a, Message> {
    let reason = if search_exhausted {
        "Nothing in the catalog matches this search."
    } else {
        "Nothing in this filter matches the search."
    };

    let mut content = column![
        text("👻").size(48),
        text("No projects found").size(24),
        text(reason).size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if !suggestions.is_empty() {
        let chips = suggestions.iter().map(|tag| {
            button(text(tag.clone()).size(14))
                .padding([4, 10])
                .style(button::secondary)
                .on_press(Message::SuggestionPicked(tag.clone()))
                .into()
        });
        content = content
            .push(text("Try one of these tags:").size(14))
            .push(Row::<'a, Message>::with_children(chips).spacing(8));
    }

    content
        .push(
            button(text("Reset filters"))
                .padding(10)
                .style(button::primary)
                .on_press(Message::ClearFilters),
        )
        .into()
}
