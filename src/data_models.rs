use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of the query parameter holding the user's search input.
pub const TEXT_PARAM: &str = "text";

/// The query a search page is rendered for.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub text: String,
}

impl PageQuery {
    pub fn new(text: impl Into<String>) -> PageQuery {
        PageQuery { text: text.into() }
    }

    /// Picks `text` out of the request parameters, everything else is ignored.
    /// A missing parameter and an empty one both end up as `""`.
    pub fn from_params(params: &HashMap<String, String>) -> PageQuery {
        let text = params
            .get(TEXT_PARAM)
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_default();
        PageQuery { text }
    }
}

/// Data handed to the render step of the search page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub query: PageQuery,
}
