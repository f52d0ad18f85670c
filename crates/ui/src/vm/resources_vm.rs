use learner_core::ResourceLibrary;

use crate::vm::icons::resource_glyph;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceLinkVm {
    pub title: String,
    pub href: String,
    pub host: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceCategoryVm {
    pub name: String,
    pub glyph: &'static str,
    pub links: Vec<ResourceLinkVm>,
}

#[must_use]
pub fn map_resource_categories(library: &ResourceLibrary) -> Vec<ResourceCategoryVm> {
    library
        .categories()
        .iter()
        .map(|category| ResourceCategoryVm {
            name: category.name.clone(),
            glyph: resource_glyph(category.icon),
            links: category
                .links
                .iter()
                .map(|link| ResourceLinkVm {
                    title: link.title.clone(),
                    href: link.url.to_string(),
                    host: link.url.host_str().unwrap_or_default().to_string(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_library_maps_to_cards() {
        let categories = map_resource_categories(&ResourceLibrary::builtin().unwrap());

        assert_eq!(categories.len(), 6);
        let docs = &categories[0];
        assert_eq!(docs.name, "Documentation");
        assert_eq!(docs.glyph, "\u{1F4D6}");
        assert_eq!(docs.links[0].href, "https://docs.python.org/3/");
        assert_eq!(docs.links[0].host, "docs.python.org");
    }
}
