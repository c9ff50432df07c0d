/// Catalog filter engine
///
/// Pure functions that turn (catalog, filter, search term) into the visible
/// projects, the per-category and per-tag counts shown on the filter buttons,
/// and page slices. Nothing here fails: an unknown filter just matches nothing.

use std::collections::{HashMap, HashSet};

use super::catalog::{Catalog, Category, CategoryMap};
use super::data::Project;

/// Number of cards per page
pub const PAGE_SIZE: usize = 6;

/// Label and query value of the unfiltered state
pub const ALL_LABEL: &str = "All";

/// The currently selected scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
    Tag(String),
}

impl Filter {
    /// Interpret a raw value (e.g. from a deep link).
    ///
    /// Empty and `All` mean unfiltered; a known category name wins over a tag
    /// of the same name; anything else is a tag, known or not.
    pub fn resolve(value: &str, categories: &CategoryMap) -> Self {
        if value.is_empty() || value == ALL_LABEL {
            Filter::All
        } else if categories.is_category(value) {
            Filter::Category(value.to_string())
        } else {
            Filter::Tag(value.to_string())
        }
    }

    /// Value written to the `filter` query parameter, `None` for `All`
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Filter::All => None,
            Filter::Category(name) | Filter::Tag(name) => Some(name),
        }
    }

    pub fn label(&self) -> &str {
        self.as_param().unwrap_or(ALL_LABEL)
    }

    /// Whether a project passes the filter stage
    pub fn matches(&self, project: &Project, categories: &CategoryMap) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => project
                .tags()
                .iter()
                .any(|tag| categories.contains_tag(name, tag)),
            Filter::Tag(tag) => project.has_tag(tag),
        }
    }
}

/// True iff every word of `term` appears (case-insensitively) in the title,
/// the description, or one of the tags. An empty term matches everything.
pub fn matches_search(project: &Project, term: &str) -> bool {
    let mut words = term.split_whitespace().peekable();
    if words.peek().is_none() {
        return true;
    }

    let title = project.title.to_lowercase();
    let description = project.description.to_lowercase();
    let tags: Vec<String> = project.tags().iter().map(|t| t.to_lowercase()).collect();

    words.all(|word| {
        let word = word.to_lowercase();
        title.contains(&word)
            || description.contains(&word)
            || tags.iter().any(|tag| tag.contains(&word))
    })
}

/// Projects matching the search term alone, in catalog order
pub fn search_matches<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Project> {
    catalog
        .projects()
        .iter()
        .filter(|p| matches_search(p, term))
        .collect()
}

/// Projects passing both the filter and the search, in catalog order
pub fn select_projects<'a>(
    catalog: &'a Catalog,
    filter: &Filter,
    term: &str,
) -> Vec<&'a Project> {
    let categories = catalog.categories();
    catalog
        .projects()
        .iter()
        .filter(|p| filter.matches(p, categories) && matches_search(p, term))
        .collect()
}

/// Result counts for the filter buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    /// Projects matching the search ("All (n)")
    pub total: usize,
    categories: HashMap<String, usize>,
    tags: HashMap<String, usize>,
}

impl Counts {
    pub fn category(&self, name: &str) -> usize {
        self.categories.get(name).copied().unwrap_or(0)
    }

    pub fn tag(&self, tag: &str) -> usize {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    /// Count for whatever the filter selects
    pub fn for_filter(&self, filter: &Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Category(name) => self.category(name),
            Filter::Tag(tag) => self.tag(tag),
        }
    }

    pub fn is_all_zero(&self) -> bool {
        self.total == 0
            && self.categories.values().all(|&n| n == 0)
            && self.tags.values().all(|&n| n == 0)
    }
}

/// Per-category and per-tag counts over the search-matched subset.
///
/// A project counts once per category it touches and once per distinct tag.
pub fn compute_counts(matched: &[&Project], categories: &CategoryMap) -> Counts {
    let mut counts = Counts {
        total: matched.len(),
        categories: categories
            .categories()
            .iter()
            .map(|c| (c.name.clone(), 0))
            .collect(),
        tags: categories
            .categories()
            .iter()
            .flat_map(|c| c.tags.iter())
            .map(|t| (t.clone(), 0))
            .collect(),
    };

    let defs = categories.categories();
    for project in matched {
        let mut seen_categories = HashSet::new();
        let mut seen_tags = HashSet::new();

        for tag in project.tags() {
            if !seen_tags.insert(tag.as_str()) {
                continue;
            }
            *counts.tags.entry(tag.clone()).or_insert(0) += 1;

            for &idx in categories.owner_indices(tag) {
                if seen_categories.insert(idx) {
                    *counts.categories.entry(defs[idx].name.clone()).or_insert(0) += 1;
                }
            }
        }
    }

    counts
}

/// The 1-based page `page` of `items`; empty when out of range
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages, zero for an empty sequence
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Which sub-tag panel to show for the current filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Unfiltered,
    CategorySelected(&'a Category),
    /// `parent` is `None` for an uncategorized tag; the panel is hidden then
    TagSelected {
        tag: &'a str,
        parent: Option<&'a Category>,
    },
}

impl<'a> Resolution<'a> {
    pub fn resolve(filter: &'a Filter, categories: &'a CategoryMap) -> Self {
        match filter {
            Filter::All => Resolution::Unfiltered,
            Filter::Category(name) => match categories.get(name) {
                Some(category) => Resolution::CategorySelected(category),
                // Stale category name: treat like a free tag
                None => Resolution::TagSelected {
                    tag: name.as_str(),
                    parent: None,
                },
            },
            Filter::Tag(tag) => Resolution::TagSelected {
                tag: tag.as_str(),
                parent: categories.parent_of(tag),
            },
        }
    }

    /// Category whose tags make up the sub-tag panel, if any
    pub fn active_category(&self) -> Option<&'a Category> {
        match *self {
            Resolution::Unfiltered => None,
            Resolution::CategorySelected(category) => Some(category),
            Resolution::TagSelected { parent, .. } => parent,
        }
    }
}

/// Tags to offer when a search leaves nothing on screen: the most used tags in
/// the whole catalog, ties broken by first appearance.
pub fn suggest_tags(catalog: &Catalog, limit: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut usage: HashMap<&str, usize> = HashMap::new();

    for project in catalog.projects() {
        let mut seen = HashSet::new();
        for tag in project.tags() {
            if !seen.insert(tag.as_str()) {
                continue;
            }
            let count = usage.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag);
            }
            *count += 1;
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    order.sort_by(|a, b| usage[b].cmp(&usage[a]));
    order.into_iter().take(limit).map(str::to_string).collect()
}
