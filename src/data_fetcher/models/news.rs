use serde::{Deserialize, Serialize};

/// A single article from the `/News` and `/NewsByPlayerID/{id}` feeds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NewsItem {
    #[serde(rename = "NewsID", default)]
    pub news_id: Option<i64>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content", default)]
    pub content: Option<String>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "OriginalSource", default)]
    pub original_source: Option<String>,
    #[serde(rename = "OriginalSourceUrl", default)]
    pub original_source_url: Option<String>,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
    #[serde(rename = "Updated", default)]
    pub updated: Option<String>,
    #[serde(rename = "TimeAgo", default)]
    pub time_ago: Option<String>,
    #[serde(rename = "PlayerID", default)]
    pub player_id: Option<i64>,
}

impl NewsItem {
    /// Source shown under the headline. Prefers the original publisher.
    pub fn display_source(&self) -> &str {
        self.original_source
            .as_deref()
            .or(self.source.as_deref())
            .unwrap_or("Unknown")
    }

    /// Link to the article, original publisher first.
    pub fn link(&self) -> Option<&str> {
        self.original_source_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.url.as_deref().filter(|url| !url.is_empty()))
    }
}
