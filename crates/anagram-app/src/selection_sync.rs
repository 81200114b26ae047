//! Sharing the selected puzzle with an external location, such as a page URL.

use url::Url;

/// Publishes the selected puzzle's name and reports the name requested on startup.
pub trait SelectionSync {
    /// Records the currently selected puzzle name, or clears it.
    fn publish(&mut self, name: Option<&str>);

    /// Returns the puzzle name requested by the external location, if any.
    fn requested_name(&self) -> Option<String>;
}

/// Keeps the selection in the `name` query parameter of a URL.
///
/// Other query parameters are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParamSync {
    url: Url,
}

impl QueryParamSync {
    pub const PARAM: &'static str = "name";

    #[must_use]
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(input)?))
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SelectionSync for QueryParamSync {
    fn publish(&mut self, name: Option<&str>) {
        let others = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != Self::PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<_>>();

        self.url.set_query(None);
        if others.is_empty() && name.is_none() {
            return;
        }
        let mut pairs = self.url.query_pairs_mut();
        pairs.extend_pairs(others);
        if let Some(name) = name {
            pairs.append_pair(Self::PARAM, name);
        }
    }

    fn requested_name(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == Self::PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|name| !name.is_empty())
    }
}
