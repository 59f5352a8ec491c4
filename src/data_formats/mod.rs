mod request;
mod wrapper;

pub use request::*;
pub use wrapper::*;

use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::validation::{
    parse_positive, validate_topic, ArticleFilter, CommentPage, SortBy, SortOrder,
};

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ArticleQueryParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CommentQueryParams {
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub p: Option<String>,
}

impl ArticleQueryParams {
    pub fn into_filter(self) -> Result<ArticleFilter, ApiError> {
        let mut filter = ArticleFilter::default();
        if let Some(sort_by) = self.sort_by {
            filter.sort_by = SortBy::parse(&sort_by)?;
        }
        if let Some(order) = self.order {
            filter.order = SortOrder::parse(&order)?;
        }
        if let Some(topic) = self.topic {
            filter.topic = Some(validate_topic(&topic)?.to_owned());
        }
        Ok(filter)
    }
}

impl CommentQueryParams {
    pub fn into_page(self) -> Result<CommentPage, ApiError> {
        let mut page = CommentPage::default();
        if let Some(order) = self.order {
            page.order = SortOrder::parse(&order)?;
        }
        if let Some(limit) = self.limit {
            page.limit = parse_positive(&limit)?;
        }
        if let Some(p) = self.p {
            page.page = parse_positive(&p)?;
        }
        Ok(page)
    }
}
