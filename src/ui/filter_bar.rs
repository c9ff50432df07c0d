use iced::widget::{button, text, Row};
use iced::{Element, Theme};
use iced_aw::Wrap;

use crate::state::catalog::{Catalog, Category};
use crate::state::filter::{Counts, Filter, ALL_LABEL};
use crate::Message;

/// "All" plus one button per category, each with its result count
pub fn category_bar<'a>(
    catalog: &'a Catalog,
    filter: &Filter,
    counts: &Counts,
) -> Element<'a, Message> {
    let mut buttons = vec![filter_button(
        format!("{} ({})", ALL_LABEL, counts.total),
        Filter::All,
        *filter == Filter::All,
    )];

    for category in catalog.categories().categories() {
        let selected = matches!(filter, Filter::Category(name) if *name == category.name);
        let label = format!(
            "{} {} ({})",
            category.icon,
            category.name,
            counts.category(&category.name)
        );
        buttons.push(filter_button(
            label,
            Filter::Category(category.name.clone()),
            selected,
        ));
    }

    Row::with_children(buttons).spacing(8).into()
}

/// Sub-tag panel for the active category; wraps onto more lines when the
/// category has many tags
pub fn tag_panel<'a>(
    category: &'a Category,
    filter: &Filter,
    counts: &Counts,
) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = category
        .tags
        .iter()
        .map(|tag| {
            let selected = matches!(filter, Filter::Tag(active) if active == tag);
            filter_button(
                format!("{} ({})", tag, counts.tag(tag)),
                Filter::Tag(tag.clone()),
                selected,
            )
        })
        .collect();

    Wrap::with_elements(buttons)
        .spacing(6.0)
        .line_spacing(6.0)
        .into()
}

fn filter_button<'a>(label: String, filter: Filter, selected: bool) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .padding([6, 12])
        .style(style)
        .on_press(Message::FilterSelected(filter))
        .into()
}
