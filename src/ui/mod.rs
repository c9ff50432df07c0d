/// Presentational widgets
///
/// Each function turns a piece of gallery state into an iced element.
/// No filtering happens here; the state module hands over ready-made data.

pub mod card;
pub mod empty;
pub mod filter_bar;
pub mod pagination;
