use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::data::Project;
use crate::error::{GalleryError, Result};

const BUILTIN_PROJECTS: &str = include_str!("../../assets/projects.json");
const BUILTIN_CATEGORIES: &str = include_str!("../../assets/categories.json");

/// File names inside a catalog directory
pub const PROJECTS_FILE: &str = "projects.json";
pub const CATEGORIES_FILE: &str = "categories.json";

/// A named group of related tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Glyph shown next to the category button
    #[serde(default)]
    pub icon: String,
    /// Member tags in display order
    pub tags: Vec<String>,
}

/// Category definitions plus the inverse tag -> category index.
///
/// Built once at startup and never mutated. A tag is expected to belong to a
/// single category, but the index keeps every owner so the validator can
/// report overlaps.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    categories: Vec<Category>,
    by_name: HashMap<String, usize>,
    tag_index: HashMap<String, Vec<usize>>,
}

impl CategoryMap {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut by_name = HashMap::with_capacity(categories.len());
        let mut tag_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, category) in categories.iter().enumerate() {
            by_name.entry(category.name.clone()).or_insert(idx);
            for tag in &category.tags {
                let owners = tag_index.entry(tag.clone()).or_default();
                if !owners.contains(&idx) {
                    owners.push(idx);
                }
            }
        }

        Self {
            categories,
            by_name,
            tag_index,
        }
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|&idx| &self.categories[idx])
    }

    pub fn is_category(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Positions (into `categories()`) of every category containing `tag`
    pub fn owner_indices(&self, tag: &str) -> &[usize] {
        self.tag_index.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories containing `tag`, normally zero or one
    pub fn categories_of<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Category> + 'a {
        self.owner_indices(tag)
            .iter()
            .map(move |&idx| &self.categories[idx])
    }

    /// The first category that owns `tag`
    pub fn parent_of(&self, tag: &str) -> Option<&Category> {
        self.categories_of(tag).next()
    }

    /// Whether `tag` is a member of the category named `category`
    pub fn contains_tag(&self, category: &str, tag: &str) -> bool {
        match self.by_name.get(category) {
            Some(idx) => self.owner_indices(tag).contains(idx),
            None => false,
        }
    }

    /// Whether any category lists `tag`
    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.tag_index.contains_key(tag)
    }

    /// Tags listed by more than one category, with their owners, in tag order
    pub fn shared_tags(&self) -> Vec<(&str, Vec<&str>)> {
        let mut shared: Vec<(&str, Vec<&str>)> = self
            .tag_index
            .iter()
            .filter(|(_, owners)| owners.len() > 1)
            .map(|(tag, owners)| {
                let names = owners
                    .iter()
                    .map(|&idx| self.categories[idx].name.as_str())
                    .collect();
                (tag.as_str(), names)
            })
            .collect();
        shared.sort_by(|a, b| a.0.cmp(b.0));
        shared
    }
}

/// The static collection of projects and the categories used to browse them
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    categories: CategoryMap,
}

impl Catalog {
    pub fn new(projects: Vec<Project>, categories: Vec<Category>) -> Self {
        Self {
            projects,
            categories: CategoryMap::new(categories),
        }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let projects = serde_json::from_str(BUILTIN_PROJECTS).map_err(|source| {
            GalleryError::Builtin {
                name: PROJECTS_FILE,
                source,
            }
        })?;
        let categories = serde_json::from_str(BUILTIN_CATEGORIES).map_err(|source| {
            GalleryError::Builtin {
                name: CATEGORIES_FILE,
                source,
            }
        })?;
        Ok(Self::new(projects, categories))
    }

    /// Load `projects.json` and `categories.json` from a directory
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let projects: Vec<Project> = read_json(&dir.join(PROJECTS_FILE))?;
        let categories: Vec<Category> = read_json(&dir.join(CATEGORIES_FILE))?;

        log::info!(
            "📁 Loaded catalog from {}: {} projects, {} categories",
            dir.display(),
            projects.len(),
            categories.len()
        );

        Ok(Self::new(projects, categories))
    }

    /// Projects in catalog order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| GalleryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn project(id: u32, title: &str, description: &str, tags: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: description.to_string(),
            url: format!("/p{id}/index.html"),
            image: None,
            icon: "✨".to_string(),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    pub fn category(name: &str, tags: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            icon: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Small catalog covering single, multi, and uncategorized tags
    pub fn catalog() -> Catalog {
        Catalog::new(
            vec![
                project(
                    1,
                    "Cave Crystals",
                    "An immersive exploration game.",
                    &["Game", "Web", "Adventure"],
                ),
                project(2, "Tronic", "A digital audio workstation.", &["Audio", "DAW", "Music"]),
                project(3, "Tetris", "Falling blocks.", &["Game", "Tetris", "Fun"]),
                project(
                    4,
                    "Fluid Garden",
                    "Stir ink through a fluid sim.",
                    &["Fluid", "Interactive"],
                ),
                project(5, "Scratchpad", "Loose notes.", &["Draft"]),
            ],
            vec![
                category("Games", &["Game", "Fun", "Tetris", "Adventure"]),
                category("Audio/Visual", &["Audio", "DAW", "Music", "Fluid"]),
                category("Experiments", &["Web", "Interactive"]),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_tag_index_lookup() {
        let catalog = catalog();
        let categories = catalog.categories();

        assert_eq!(categories.parent_of("Tetris").map(|c| c.name.as_str()), Some("Games"));
        assert_eq!(categories.parent_of("Draft"), None);
        assert!(categories.contains_tag("Games", "Fun"));
        assert!(!categories.contains_tag("Games", "Audio"));
        assert!(!categories.contains_tag("Nope", "Fun"));
        assert!(categories.is_category("Audio/Visual"));
        assert!(!categories.is_category("Audio"));
    }

    #[test]
    fn test_shared_tags_reported() {
        let categories = CategoryMap::new(vec![
            category("A", &["x", "y"]),
            category("B", &["y", "z"]),
        ]);
        assert_eq!(categories.shared_tags(), vec![("y", vec!["A", "B"])]);
        assert_eq!(categories.categories_of("y").count(), 2);
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.categories().categories().len(), 4);
        assert_eq!(catalog.project(1).map(|p| p.title.as_str()), Some("Cave Crystals"));
        assert_eq!(catalog.project(2).map(|p| p.title.as_str()), Some("Tronic"));
        assert_eq!(catalog.project(3).map(|p| p.title.as_str()), Some("Pixelocity"));
    }

    #[test]
    fn test_builtin_sample_urls_are_placeholders() {
        let catalog = Catalog::builtin().unwrap();
        for project in catalog.projects().iter().filter(|p| p.id > 3) {
            let url = project.url.as_str();
            assert!(
                url.starts_with('/') || url.contains(".example.org"),
                "{} points at a real host: {}",
                project.title,
                url
            );
        }
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECTS_FILE),
            r#"[{"id": 7, "title": "Solo", "url": "/solo", "tags": ["Toy"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(CATEGORIES_FILE),
            r#"[{"name": "Games", "tags": ["Toy"]}]"#,
        )
        .unwrap();

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.categories().contains_tag("Games", "Toy"));
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }

    #[test]
    fn test_load_dir_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECTS_FILE), "{ not json").unwrap();
        let err = Catalog::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GalleryError::Json { .. }));
    }
}
