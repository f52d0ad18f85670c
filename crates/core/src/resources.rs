//! External learning links shown on the resources page.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const BUILTIN_RESOURCES: &str = include_str!("../data/resources.toml");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("resource category name cannot be empty")]
    EmptyCategory,
    #[error("link {title:?} has an invalid url: {source}")]
    InvalidUrl {
        title: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid resource data: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceIcon {
    #[default]
    Book,
    Globe,
    BrainCircuit,
    Users,
    Code,
    Video,
}

impl ResourceIcon {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "globe" => Self::Globe,
            "brain-circuit" => Self::BrainCircuit,
            "users" => Self::Users,
            "code" => Self::Code,
            "video" => Self::Video,
            _ => Self::Book,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: String,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCategory {
    pub name: String,
    pub icon: ResourceIcon,
    pub links: Vec<ResourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceLibrary {
    categories: Vec<ResourceCategory>,
}

impl ResourceLibrary {
    /// # Errors
    ///
    /// Returns `ResourceError` for malformed TOML, blank category names, or
    /// unparseable link urls.
    pub fn from_toml(input: &str) -> Result<Self, ResourceError> {
        let file: ResourcesFile = toml::from_str(input)?;
        let mut categories = Vec::with_capacity(file.categories.len());
        for record in file.categories {
            let name = record.name.trim().to_string();
            if name.is_empty() {
                return Err(ResourceError::EmptyCategory);
            }
            let mut links = Vec::with_capacity(record.links.len());
            for link in record.links {
                let url = match Url::parse(&link.url) {
                    Ok(url) => url,
                    Err(source) => {
                        return Err(ResourceError::InvalidUrl {
                            title: link.title,
                            source,
                        });
                    }
                };
                links.push(ResourceLink {
                    title: link.title,
                    url,
                });
            }
            categories.push(ResourceCategory {
                name,
                icon: ResourceIcon::from_tag(&record.icon),
                links,
            });
        }
        Ok(Self { categories })
    }

    /// # Errors
    ///
    /// Returns `ResourceError` if the embedded data fails validation.
    pub fn builtin() -> Result<Self, ResourceError> {
        Self::from_toml(BUILTIN_RESOURCES)
    }

    #[must_use]
    pub fn categories(&self) -> &[ResourceCategory] {
        &self.categories
    }
}

#[derive(Debug, Deserialize)]
struct ResourcesFile {
    #[serde(default)]
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    title: String,
    url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_library_has_six_categories() {
        let library = ResourceLibrary::builtin().unwrap();

        assert_eq!(library.categories().len(), 6);
        let first = &library.categories()[0];
        assert_eq!(first.name, "Documentation");
        assert_eq!(first.icon, ResourceIcon::Book);
        assert_eq!(first.links[0].url.host_str(), Some("docs.python.org"));
        assert!(
            library
                .categories()
                .iter()
                .any(|c| c.icon == ResourceIcon::BrainCircuit)
        );
    }

    #[test]
    fn invalid_url_is_reported_with_link_title() {
        let input = r#"
[[categories]]
name = "Broken"

[[categories.links]]
title = "Nowhere"
url = "not a url"
"#;
        let err = ResourceLibrary::from_toml(input).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUrl { ref title, .. } if title == "Nowhere"));
    }
}
