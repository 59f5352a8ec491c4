//! Turns raw wire strings into typed values for the query layer.
//!
//! Everything here fails with [`ApiError::MalformedInput`]. Whether a
//! well-formed value actually names a row is the store's business.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ApiError;

const DEFAULT_COMMENT_LIMIT: i64 = 10;

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortBy {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw {
            "author" => Ok(Self::Author),
            "title" => Ok(Self::Title),
            "article_id" => Ok(Self::ArticleId),
            "topic" => Ok(Self::Topic),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(ApiError::MalformedInput),
        }
    }

    /// SQL expression for this column in the article listing query.
    pub fn column(self) -> &'static str {
        match self {
            Self::Author => "articles.author",
            Self::Title => "articles.title",
            Self::ArticleId => "articles.article_id",
            Self::Topic => "articles.topic",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ApiError::MalformedInput)
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated parameters of `GET /api/articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

/// Validated window over an article's comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPage {
    pub order: SortOrder,
    pub limit: i64,
    pub page: i64,
}

impl Default for CommentPage {
    fn default() -> Self {
        Self {
            order: SortOrder::Desc,
            limit: DEFAULT_COMMENT_LIMIT,
            page: 1,
        }
    }
}

impl CommentPage {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::MalformedInput)
}

/// Parses a strictly positive count such as `limit` or `p`.
pub fn parse_positive(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ApiError::MalformedInput),
    }
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("slug pattern is valid"))
}

pub fn validate_topic(raw: &str) -> Result<&str, ApiError> {
    if slug_pattern().is_match(raw) {
        Ok(raw)
    } else {
        Err(ApiError::MalformedInput)
    }
}

/// Rejects a missing or blank required text field.
pub fn require_text(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::MalformedInput),
    }
}
