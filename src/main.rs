use clap::Parser;
use iced::keyboard::{self, key};
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{event, Alignment, Element, Event, Length, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod error;
mod launch;
mod state;
mod ui;

use config::GalleryConfig;
use state::catalog::Catalog;
use state::deep_link::{DeepLink, Location};
use state::filter::Filter;
use state::gallery::{Focus, GalleryState, GalleryView};
use state::validate::validate_catalog;

/// Widget id of the search box, so keyboard navigation can return to it
const SEARCH_INPUT_ID: &str = "search";

#[derive(Parser, Debug)]
#[command(
    name = "project-gallery",
    version,
    about = "Browse a filterable gallery of web projects"
)]
struct Cli {
    /// Start from a deep link, e.g. "?filter=Games&q=fluid"
    #[arg(long, value_name = "QUERY")]
    link: Option<String>,

    /// Catalog directory containing projects.json and categories.json
    #[arg(long, value_name = "DIR")]
    catalog: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Check the catalog for consistency and exit
    #[arg(long)]
    verify: bool,
}

/// Main application state
struct ProjectGallery {
    /// The static project catalog
    catalog: Catalog,
    config: GalleryConfig,
    /// Filter, search, page and focus
    state: GalleryState,
    /// Deep link mirroring filter and search
    location: Location,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search box edited
    SearchChanged(String),
    /// "All", a category, or a tag button clicked
    FilterSelected(Filter),
    /// Suggested tag clicked in the empty state
    SuggestionPicked(String),
    /// Escape key or the reset button
    ClearFilters,
    NextPage,
    PreviousPage,
    /// Arrow down
    FocusNext,
    /// Arrow up
    FocusPrevious,
    /// Enter on a focused card
    OpenFocused,
    OpenProject(u32),
    /// Browser launch finished
    ProjectOpened(Result<String, String>),
    CopyLink,
}

impl ProjectGallery {
    /// Create a new instance of the application
    fn new(catalog: Catalog, config: GalleryConfig, link: DeepLink) -> (Self, Task<Message>) {
        let state = GalleryState::from_link(&link, &catalog);
        let mut location = Location::default();
        location.replace(&state.link());

        log::info!(
            "🎨 Project Gallery initialized with {} projects (filter: {}, search: '{}')",
            catalog.len(),
            state.filter().label(),
            state.search()
        );

        let status = format!("Ready. {} projects in catalog.", catalog.len());

        (
            ProjectGallery {
                catalog,
                config,
                state,
                location,
                status,
            },
            focus_search(),
        )
    }

    /// Window title, carrying the current deep link
    fn title(&self) -> String {
        match self.location.as_str() {
            "" => "Project Gallery".to_string(),
            link => format!("Project Gallery {}", link),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(term) => {
                self.state.set_search(term);
                self.sync_location();
                Task::none()
            }
            Message::FilterSelected(filter) => {
                log::debug!("🔎 Filter selected: {}", filter.label());
                self.state.set_filter(filter);
                self.sync_location();
                Task::none()
            }
            Message::SuggestionPicked(tag) => {
                log::debug!("💡 Suggestion picked: {}", tag);
                self.state.pick_suggestion(tag);
                self.sync_location();
                Task::none()
            }
            Message::ClearFilters => {
                self.state.reset();
                self.sync_location();
                focus_search()
            }
            Message::NextPage => {
                let total_pages = self.gallery_view().total_pages;
                self.state.next_page(total_pages);
                Task::none()
            }
            Message::PreviousPage => {
                self.state.previous_page();
                Task::none()
            }
            Message::FocusNext => {
                let cards = self.gallery_view().page_items.len();
                self.state.focus_next(cards);
                Task::none()
            }
            Message::FocusPrevious => {
                self.state.focus_previous();
                if self.state.focus() == Focus::Search {
                    focus_search()
                } else {
                    Task::none()
                }
            }
            Message::OpenFocused => {
                let focused = self
                    .gallery_view()
                    .focused(self.state.focus())
                    .map(|project| project.id);

                match focused {
                    Some(id) => self.update(Message::OpenProject(id)),
                    None => Task::none(),
                }
            }
            Message::OpenProject(id) => {
                let Some(project) = self.catalog.project(id) else {
                    log::warn!("⚠️  No project with id {}", id);
                    return Task::none();
                };

                match launch::resolve_url(&self.config.site_url, &project.url) {
                    Ok(url) => {
                        self.status = format!("Opening {}...", project.title);
                        Task::perform(
                            launch::open_in_browser(url.to_string()),
                            Message::ProjectOpened,
                        )
                    }
                    Err(e) => {
                        log::warn!(
                            "⚠️  Bad URL for {}: {} ({})",
                            project.title,
                            project.url,
                            e
                        );
                        self.status = format!("⚠️  Cannot open {}: {}", project.title, e);
                        Task::none()
                    }
                }
            }
            Message::ProjectOpened(Ok(url)) => {
                log::info!("🌐 Opened {}", url);
                self.status = format!("✅ Opened {}", url);
                Task::none()
            }
            Message::ProjectOpened(Err(e)) => {
                log::warn!("⚠️  {}", e);
                self.status = format!("⚠️  {}", e);
                Task::none()
            }
            Message::CopyLink => {
                self.status = "🔗 Link copied to clipboard.".to_string();
                iced::clipboard::write(self.location.as_str().to_string())
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let gallery = self.gallery_view();

        let header = column![
            text("Project Gallery").size(40),
            text("Explore a portfolio of web applications").size(16),
        ]
        .spacing(6)
        .align_x(Alignment::Center);

        let search = text_input("Search projects...", self.state.search())
            .id(text_input::Id::new(SEARCH_INPUT_ID))
            .on_input(Message::SearchChanged)
            .padding(10)
            .size(16)
            .width(Length::Fixed(480.0));

        let mut content = column![
            header,
            search,
            ui::filter_bar::category_bar(&self.catalog, self.state.filter(), &gallery.counts),
        ]
        .spacing(20)
        .padding(32)
        .align_x(Alignment::Center);

        if let Some(category) = gallery.resolution.active_category() {
            content = content.push(ui::filter_bar::tag_panel(
                category,
                self.state.filter(),
                &gallery.counts,
            ));
        }

        if gallery.visible.is_empty() {
            content = content.push(ui::empty::empty_state(
                &gallery.suggestions,
                gallery.counts.is_all_zero(),
            ));
        } else {
            let focus = self.state.focus();
            let cards = gallery
                .page_items
                .iter()
                .enumerate()
                .map(|(idx, &project)| ui::card::project_card(project, focus == Focus::Card(idx)))
                .collect();

            content = content.push(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0));

            if gallery.total_pages > 1 {
                content = content
                    .push(ui::pagination::pagination(gallery.page, gallery.total_pages));
            }
        }

        content = content.push(self.status_bar(&gallery));

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    fn status_bar(&self, gallery: &GalleryView<'_>) -> Element<'_, Message> {
        let shown = format!(
            "{} of {} projects",
            gallery.counts.for_filter(self.state.filter()),
            self.catalog.len()
        );
        let link = match self.location.as_str() {
            "" => "(no filters)".to_string(),
            link => link.to_string(),
        };

        row![
            text(&self.status).size(14),
            text(shown).size(14),
            text(link).size(14),
            button(text("Copy link").size(14))
                .style(button::secondary)
                .on_press(Message::CopyLink),
        ]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
    }

    /// Keyboard shortcuts. Listens to captured events too, since the search
    /// box swallows Escape.
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::ClearFilters),
                keyboard::Key::Named(key::Named::ArrowDown) => Some(Message::FocusNext),
                keyboard::Key::Named(key::Named::ArrowUp) => Some(Message::FocusPrevious),
                keyboard::Key::Named(key::Named::Enter) => Some(Message::OpenFocused),
                _ => None,
            },
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn gallery_view(&self) -> GalleryView<'_> {
        self.state.view(
            &self.catalog,
            self.config.page_size,
            self.config.suggestion_limit,
        )
    }

    /// Mirror filter and search into the deep link (replace, never push)
    fn sync_location(&mut self) {
        if self.location.replace(&self.state.link()) {
            log::debug!("🔗 Link is now '{}'", self.location.as_str());
        }
    }
}

fn focus_search() -> Task<Message> {
    text_input::focus(text_input::Id::new(SEARCH_INPUT_ID))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GalleryConfig::load_from(path),
        None => GalleryConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log_level());

    let catalog_dir = cli.catalog.clone().or_else(|| config.catalog_dir.clone());
    let catalog = match catalog_dir {
        Some(dir) => Catalog::load_dir(&dir),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.verify {
        return verify(&catalog);
    }

    if catalog.is_empty() {
        log::warn!("⚠️  The catalog has no projects");
    }

    let link = cli.link.as_deref().map(DeepLink::parse).unwrap_or_default();

    let result = iced::application(
        ProjectGallery::title,
        ProjectGallery::update,
        ProjectGallery::view,
    )
    .theme(ProjectGallery::theme)
    .subscription(ProjectGallery::subscription)
    .centered()
    .run_with(move || ProjectGallery::new(catalog, config, link));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Timestamped logger; `RUST_LOG` overrides the configured level
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Print every catalog problem; non-zero exit when there are any
fn verify(catalog: &Catalog) -> ExitCode {
    println!("🔍 Verifying catalog ({} projects)...", catalog.len());

    let issues = validate_catalog(catalog);
    if issues.is_empty() {
        println!("✅ Catalog verification passed!");
        return ExitCode::SUCCESS;
    }

    for issue in &issues {
        eprintln!("❌ {}", issue);
    }
    eprintln!("Catalog verification failed with {} problem(s).", issues.len());
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> ProjectGallery {
        let catalog = Catalog::builtin().unwrap();
        let (app, _) = ProjectGallery::new(catalog, GalleryConfig::default(), DeepLink::default());
        app
    }

    #[test]
    fn test_state_changes_replace_the_link() {
        let mut app = gallery();
        assert_eq!(app.location.as_str(), "");
        assert_eq!(app.title(), "Project Gallery");

        let _ = app.update(Message::SearchChanged("fluid".to_string()));
        assert_eq!(app.location.as_str(), "?q=fluid");

        let _ = app.update(Message::FilterSelected(Filter::Category("Games".to_string())));
        assert_eq!(app.location.as_str(), "?filter=Games&q=fluid");
        assert_eq!(app.title(), "Project Gallery ?filter=Games&q=fluid");

        let _ = app.update(Message::SuggestionPicked("Game".to_string()));
        assert_eq!(app.location.as_str(), "?filter=Game");
        assert_eq!(app.state.search(), "");

        let _ = app.update(Message::ClearFilters);
        assert_eq!(app.location.as_str(), "");
        assert_eq!(app.state.filter(), &Filter::All);
    }

    #[test]
    fn test_paging_leaves_the_link_alone() {
        let mut app = gallery();
        let _ = app.update(Message::SearchChanged("a".to_string()));
        let link = app.location.as_str().to_string();
        let total_pages = app.gallery_view().total_pages;
        assert!(total_pages > 1);

        let _ = app.update(Message::NextPage);
        assert_eq!(app.state.page(), 2);
        assert_eq!(app.location.as_str(), link);

        let _ = app.update(Message::PreviousPage);
        assert_eq!(app.state.page(), 1);
        assert_eq!(app.location.as_str(), link);
    }

    #[test]
    fn test_startup_link_is_mirrored() {
        let catalog = Catalog::builtin().unwrap();
        let link = DeepLink::parse("?filter=Tools&q=synth");
        let (app, _) = ProjectGallery::new(catalog, GalleryConfig::default(), link);

        assert_eq!(app.location.as_str(), "?filter=Tools&q=synth");
        assert_eq!(app.title(), "Project Gallery ?filter=Tools&q=synth");
    }
}
