/// Offline catalog consistency check (`--verify`)
///
/// The GUI never runs this; it exists to catch catalog mistakes before a
/// release. Every problem is collected instead of stopping at the first.

use std::collections::HashSet;
use thiserror::Error;

use super::catalog::Catalog;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("project \"{title}\" (index {index}): tags missing or not an array")]
    MissingTags { index: usize, title: String },

    #[error("project \"{title}\" (index {index}): invalid tag \"{tag}\"")]
    UnknownTag {
        index: usize,
        title: String,
        tag: String,
    },

    #[error("project \"{title}\" (index {index}): missing field \"{field}\"")]
    MissingField {
        index: usize,
        title: String,
        field: &'static str,
    },

    #[error("project \"{title}\" (index {index}): duplicate id {id}")]
    DuplicateId {
        index: usize,
        title: String,
        id: u32,
    },

    #[error("tag \"{tag}\" belongs to more than one category: {}", .categories.join(", "))]
    SharedTag { tag: String, categories: Vec<String> },
}

pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let categories = catalog.categories();
    let mut issues = Vec::new();
    let mut ids = HashSet::new();

    for (index, project) in catalog.projects().iter().enumerate() {
        let title = project.title.clone();

        match &project.tags {
            None => issues.push(CatalogIssue::MissingTags {
                index,
                title: title.clone(),
            }),
            Some(tags) => {
                for tag in tags.iter().filter(|t| !categories.is_known_tag(t)) {
                    issues.push(CatalogIssue::UnknownTag {
                        index,
                        title: title.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }

        let required = [
            ("title", project.title.is_empty()),
            ("description", project.description.is_empty()),
            ("url", project.url.is_empty()),
            ("image", project.image.as_deref().map_or(true, str::is_empty)),
        ];
        for (field, missing) in required {
            if missing {
                issues.push(CatalogIssue::MissingField {
                    index,
                    title: title.clone(),
                    field,
                });
            }
        }

        if !ids.insert(project.id) {
            issues.push(CatalogIssue::DuplicateId {
                index,
                title,
                id: project.id,
            });
        }
    }

    for (tag, owners) in categories.shared_tags() {
        issues.push(CatalogIssue::SharedTag {
            tag: tag.to_string(),
            categories: owners.into_iter().map(str::to_string).collect(),
        });
    }

    issues
}
