use super::catalog::Catalog;
use super::data::Project;
use super::deep_link::DeepLink;
use super::filter::{
    compute_counts, paginate, search_matches, select_projects, suggest_tags, total_pages, Counts,
    Filter, Resolution,
};

/// Where keyboard focus sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    /// Index into the cards of the current page
    Card(usize),
}

/// Client-held gallery state: filter, search term, page, and keyboard focus.
///
/// Any change of filter or search term sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    filter: Filter,
    search: String,
    page: usize,
    focus: Focus,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            search: String::new(),
            page: 1,
            focus: Focus::Search,
        }
    }
}

/// Everything the UI needs for one frame
#[derive(Debug, Clone)]
pub struct GalleryView<'a> {
    /// Counts over the search-matched subset
    pub counts: Counts,
    /// All projects passing filter and search, in catalog order
    pub visible: Vec<&'a Project>,
    /// The cards on the current page
    pub page_items: Vec<&'a Project>,
    pub page: usize,
    pub total_pages: usize,
    pub resolution: Resolution<'a>,
    /// Tags to offer when `visible` is empty
    pub suggestions: Vec<String>,
}

impl GalleryState {
    pub fn from_link(link: &DeepLink, catalog: &Catalog) -> Self {
        Self {
            filter: link.filter(catalog.categories()),
            search: link.search().to_string(),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn link(&self) -> DeepLink {
        DeepLink::new(&self.filter, &self.search)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.restart();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.restart();
    }

    /// Clear the search and jump straight to one tag
    pub fn pick_suggestion(&mut self, tag: impl Into<String>) {
        self.search.clear();
        self.set_filter(Filter::Tag(tag.into()));
    }

    /// Back to everything: `All`, no search, page 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
            self.focus = Focus::Search;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.focus = Focus::Search;
        }
    }

    /// Move focus down: search box -> first card -> next card (clamped)
    pub fn focus_next(&mut self, cards_on_page: usize) {
        if cards_on_page == 0 {
            self.focus = Focus::Search;
            return;
        }
        self.focus = match self.focus {
            Focus::Search => Focus::Card(0),
            Focus::Card(idx) => Focus::Card((idx + 1).min(cards_on_page - 1)),
        };
    }

    /// Move focus up; from the first card it returns to the search box
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Search | Focus::Card(0) => Focus::Search,
            Focus::Card(idx) => Focus::Card(idx - 1),
        };
    }

    /// Derive the visible projects, counts and page for the current state
    pub fn view<'a>(
        &'a self,
        catalog: &'a Catalog,
        page_size: usize,
        suggestion_limit: usize,
    ) -> GalleryView<'a> {
        let matched = search_matches(catalog, &self.search);
        let counts = compute_counts(&matched, catalog.categories());
        let visible = select_projects(catalog, &self.filter, &self.search);
        let total_pages = total_pages(visible.len(), page_size);
        let page_items = paginate(&visible, page_size, self.page).to_vec();
        let suggestions = if visible.is_empty() {
            suggest_tags(catalog, suggestion_limit)
        } else {
            Vec::new()
        };

        GalleryView {
            counts,
            page_items,
            page: self.page,
            total_pages,
            resolution: Resolution::resolve(&self.filter, catalog.categories()),
            visible,
            suggestions,
        }
    }

    fn restart(&mut self) {
        self.page = 1;
        self.focus = Focus::Search;
    }
}

impl<'a> GalleryView<'a> {
    /// The focused card on this page, if any
    pub fn focused(&self, focus: Focus) -> Option<&'a Project> {
        match focus {
            Focus::Search => None,
            Focus::Card(idx) => self.page_items.get(idx).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::fixtures::{self, project};
    use crate::state::filter::PAGE_SIZE;

    fn big_catalog() -> Catalog {
        let projects = (1..=9)
            .map(|id| project(id, &format!("Project {id}"), "", &["Game"]))
            .collect();
        Catalog::new(projects, vec![fixtures::category("Games", &["Game"])])
    }

    #[test]
    fn test_filter_change_resets_page() {
        let catalog = big_catalog();
        let mut state = GalleryState::default();
        state.next_page(2);
        assert_eq!(state.page(), 2);

        state.set_filter(Filter::Category("Games".into()));
        assert_eq!(state.page(), 1);

        state.next_page(2);
        state.set_search("project");
        assert_eq!(state.page(), 1);

        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page_items.len(), 6);
    }

    #[test]
    fn test_page_navigation_clamps() {
        let catalog = big_catalog();
        let mut state = GalleryState::default();
        let total = state.view(&catalog, PAGE_SIZE, 3).total_pages;

        state.previous_page();
        assert_eq!(state.page(), 1);
        state.next_page(total);
        state.next_page(total);
        assert_eq!(state.page(), 2);

        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.page_items.len(), 3);
        assert_eq!(view.page_items[0].id, 7);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = GalleryState::default();
        state.set_filter(Filter::Tag("Fun".into()));
        state.set_search("tetris");
        state.reset();
        assert_eq!(state, GalleryState::default());
        assert_eq!(state.link().encode(), "");
    }

    #[test]
    fn test_from_link_round_trip() {
        let catalog = fixtures::catalog();
        let mut state = GalleryState::default();
        state.set_filter(Filter::Category("Games".into()));
        state.set_search("fluid");

        let restored = GalleryState::from_link(&DeepLink::parse(&state.link().encode()), &catalog);
        assert_eq!(restored.filter(), &Filter::Category("Games".into()));
        assert_eq!(restored.search(), "fluid");
        assert_eq!(restored.page(), 1);
    }

    #[test]
    fn test_empty_result_offers_suggestions() {
        let catalog = fixtures::catalog();
        let mut state = GalleryState::default();
        state.set_search("nothing-matches-this");

        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert!(view.visible.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(view.counts.is_all_zero());
        assert_eq!(view.suggestions, ["Game", "Web", "Adventure"]);

        state.pick_suggestion("Game");
        assert_eq!(state.search(), "");
        assert_eq!(state.filter(), &Filter::Tag("Game".into()));
        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.visible.len(), 2);
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn test_view_resolution_tracks_filter() {
        let catalog = fixtures::catalog();
        let mut state = GalleryState::default();

        state.set_filter(Filter::Tag("Adventure".into()));
        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.resolution.active_category().map(|c| c.name.as_str()), Some("Games"));
        assert_eq!(view.counts.tag("Adventure"), 1);

        state.set_filter(Filter::Tag("Draft".into()));
        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.resolution.active_category(), None);
        assert_eq!(view.visible.len(), 1);
    }

    #[test]
    fn test_keyboard_focus_walk() {
        let catalog = fixtures::catalog();
        let mut state = GalleryState::default();
        let cards = state.view(&catalog, PAGE_SIZE, 3).page_items.len();

        state.focus_next(cards);
        assert_eq!(state.focus(), Focus::Card(0));
        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.focused(state.focus()).map(|p| p.id), Some(1));

        state.focus_next(cards);
        assert_eq!(state.focus(), Focus::Card(1));

        for _ in 0..10 {
            state.focus_next(cards);
        }
        assert_eq!(state.focus(), Focus::Card(cards - 1));

        state.focus_previous();
        assert_eq!(state.focus(), Focus::Card(cards - 2));

        state.focus = Focus::Card(0);
        state.focus_previous();
        assert_eq!(state.focus(), Focus::Search);
        let view = state.view(&catalog, PAGE_SIZE, 3);
        assert_eq!(view.focused(state.focus()), None);

        state.focus_next(0);
        assert_eq!(state.focus(), Focus::Search);
    }

    #[test]
    fn test_filter_change_clears_focus() {
        let mut state = GalleryState::default();
        state.focus_next(3);
        state.set_filter(Filter::Category("Games".into()));
        assert_eq!(state.focus(), Focus::Search);
    }
}
