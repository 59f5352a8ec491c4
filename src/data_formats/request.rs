use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::validation::require_text;

// ----------------- Comment Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CommentRequest {
    pub author: Option<String>,
    pub body: Option<String>,
}

/// A comment submission whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl CommentRequest {
    pub fn validate(self) -> Result<NewComment, ApiError> {
        Ok(NewComment {
            author: require_text(self.author)?,
            body: require_text(self.body)?,
        })
    }
}

// ----------------- Article Request -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateVotesRequest {
    pub inc_votes: i64,
}
