/// Deep links: the filter and search state encoded as a query string
///
/// `?filter=Games&q=fluid` reproduces the same view on the next launch.
/// Pagination is deliberately not part of the link.

use url::form_urlencoded;

use super::catalog::CategoryMap;
use super::filter::Filter;

pub const FILTER_PARAM: &str = "filter";
pub const SEARCH_PARAM: &str = "q";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    pub filter: Option<String>,
    pub query: Option<String>,
}

impl DeepLink {
    pub fn new(filter: &Filter, search: &str) -> Self {
        Self {
            filter: filter.as_param().map(str::to_string),
            query: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Parse a query string. A leading `?`, a full URL, and a trailing
    /// `#fragment` are all accepted. The first occurrence of a parameter wins,
    /// even when its value is empty; an empty value counts as absent.
    pub fn parse(input: &str) -> Self {
        let without_fragment = input.split('#').next().unwrap_or_default();
        // A bare query may carry a raw `?` inside a value
        let query = if without_fragment.starts_with('?') || without_fragment.contains("://") {
            without_fragment
                .split_once('?')
                .map_or("", |(_, query)| query)
        } else {
            without_fragment
        };

        let mut link = DeepLink::default();
        let mut seen_filter = false;
        let mut seen_query = false;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let (seen, slot) = match &*key {
                FILTER_PARAM => (&mut seen_filter, &mut link.filter),
                SEARCH_PARAM => (&mut seen_query, &mut link.query),
                _ => continue,
            };
            if *seen {
                continue;
            }
            *seen = true;
            if !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        link
    }

    /// `?filter=..&q=..`, or an empty string when there is nothing to encode
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(filter) = &self.filter {
            serializer.append_pair(FILTER_PARAM, filter);
        }
        if let Some(query) = &self.query {
            serializer.append_pair(SEARCH_PARAM, query);
        }
        let encoded = serializer.finish();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{encoded}")
        }
    }

    pub fn filter(&self, categories: &CategoryMap) -> Filter {
        Filter::resolve(self.filter.as_deref().unwrap_or_default(), categories)
    }

    pub fn search(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

/// The current link. Writes replace it in place; there is no history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    current: String,
}

impl Location {
    /// Replace the current link, returning `true` when it actually changed
    pub fn replace(&mut self, link: &DeepLink) -> bool {
        let encoded = link.encode();
        if encoded == self.current {
            return false;
        }
        log::debug!("🔗 Location replaced: '{}' -> '{}'", self.current, encoded);
        self.current = encoded;
        true
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }
}
