use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// Prev / "Page x of y" / Next; the buttons disable at either end
pub fn pagination<'a>(page: usize, total_pages: usize) -> Element<'a, Message> {
    row![
        button(text("‹ Prev"))
            .style(button::secondary)
            .on_press_maybe((page > 1).then_some(Message::PreviousPage)),
        text(format!("Page {} of {}", page, total_pages)).size(14),
        button(text("Next ›"))
            .style(button::secondary)
            .on_press_maybe((page < total_pages).then_some(Message::NextPage)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}
