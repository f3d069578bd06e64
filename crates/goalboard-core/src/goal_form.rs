//! New Goal Draft
//!
//! Form state of the goal creation panel.

use crate::error::ApiError;
use crate::models::{CreateGoalRequest, Frequency};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGoalDraft {
    pub title: String,
    /// `YYYY-MM-DDTHH:MM` from a datetime-local input, or empty.
    pub deadline: String,
    pub description: String,
    pub category_id: Option<u32>,
    pub frequency: Frequency,
}

impl NewGoalDraft {
    /// Validate and build the request body. A blank title never reaches the server.
    pub fn to_request(&self) -> Result<CreateGoalRequest, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("Title is required".to_string()));
        }
        Ok(CreateGoalRequest {
            title: title.to_string(),
            deadline: self.deadline.trim().to_string(),
            description: self.description.clone(),
            category_id: self.category_id,
            frequency: self.frequency,
        })
    }

    /// Reset after a successful submit; deadline, category and frequency are kept.
    pub fn clear_text(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
