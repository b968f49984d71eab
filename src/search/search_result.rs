#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub teaser: Option<String>,
    pub score: f64,
}

impl SearchResult {
    pub const fn new(url: String, title: String, teaser: Option<String>, score: f64) -> Self {
        Self {
            url,
            title,
            teaser,
            score,
        }
    }
}
