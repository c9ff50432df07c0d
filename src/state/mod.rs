/// State management module
///
/// This module handles all gallery state, including:
/// - The static catalog and its category index (catalog.rs)
/// - Shared data structures (data.rs)
/// - The filter, search, and pagination engine (filter.rs)
/// - Client-held view state and keyboard focus (gallery.rs)
/// - Deep links mirroring filter and search (deep_link.rs)
/// - Offline catalog checks (validate.rs)

pub mod catalog;
pub mod data;
pub mod deep_link;
pub mod filter;
pub mod gallery;
pub mod validate;
