use minijinja::{Environment, context};

use crate::data_models::PageData;

pub const SEARCH_TEMPLATE: &str = "search.html";

/// Templates for the pages served by the router. Names ending in `.html` are auto-escaped.
pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(SEARCH_TEMPLATE, include_str!("../../templates/search.html"))?;
    Ok(env)
}

/// The search page as rendered for a single request.
#[derive(Debug)]
pub struct SearchPage<'a> {
    pub title: &'a str,
    pub data: &'a PageData,
}

impl<'a> SearchPage<'a> {
    pub fn new(title: &'a str, data: &'a PageData) -> Self {
        SearchPage { title, data }
    }

    pub fn render(&self, env: &Environment<'_>) -> Result<String, minijinja::Error> {
        env.get_template(SEARCH_TEMPLATE)?.render(context! {
            title => self.title,
            query => &self.data.query,
        })
    }
}
