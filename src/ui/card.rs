use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::{CardVisual, Project};
use crate::state::filter::Filter;
use crate::Message;

/// Fixed card width so the grid wraps evenly
const CARD_WIDTH: f32 = 320.0;

/// A single project card; the focused card gets a border
pub fn project_card(project: &Project, focused: bool) -> Element<'_, Message> {
    let visual: Element<'_, Message> = match project.visual() {
        // Remote previews are not fetched; mark that one exists
        CardVisual::Image(_) => row![text(&project.icon).size(28), text("🖼").size(14)]
            .spacing(6)
            .align_y(Alignment::Center)
            .into(),
        CardVisual::Icon(icon) => text(icon).size(40).into(),
    };

    let tags = Row::with_children(project.tags().iter().map(|tag| tag_chip(tag))).spacing(4);

    let body = column![
        visual,
        text(&project.title).size(20),
        text(&project.description).size(14),
        tags,
        button(text("Open ↗").size(14))
            .padding([6, 14])
            .style(button::primary)
            .on_press(Message::OpenProject(project.id)),
    ]
    .spacing(10);

    let style: fn(&Theme) -> container::Style = if focused {
        container::bordered_box
    } else {
        container::rounded_box
    };

    container(body)
        .padding(16)
        .width(Length::Fixed(CARD_WIDTH))
        .style(style)
        .into()
}

// Clicking a tag on a card filters by that tag
fn tag_chip(tag: &str) -> Element<'_, Message> {
    button(text(tag).size(12))
        .padding([2, 8])
        .style(button::text)
        .on_press(Message::FilterSelected(Filter::Tag(tag.to_string())))
        .into()
}
