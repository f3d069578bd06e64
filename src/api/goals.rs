//! Goal Endpoints

use goalboard_core::filters::GoalQuery;
use goalboard_core::heatmap::{self, DayMarker};
use goalboard_core::models::{CreateGoalRequest, Goal};
use goalboard_core::{schema, ApiError};

use super::ApiClient;

impl ApiClient {
    pub async fn list_goals(&self, query: &GoalQuery) -> Result<Vec<Goal>, ApiError> {
        self.get_json(&format!("/api/goals?{}", query.to_query_string())).await
    }

    /// Fetch every goal and fold it into calendar markers.
    pub async fn load_heatmap(&self) -> Result<Vec<DayMarker>, ApiError> {
        let goals: Vec<Goal> = self.get_json("/api/goals").await?;
        Ok(heatmap::heatmap_markers(&goals))
    }

    pub async fn create_goal(&self, request: &CreateGoalRequest) -> Result<(), ApiError> {
        let (status, body) = self.post_json("/api/goals/create", request).await?;
        schema::decode_mutation(status, &body)
    }

    /// Move a goal one step: pending -> in progress -> completed
    pub async fn advance_goal(&self, id: u32) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/advance/{}", id)).await
    }

    pub async fn delete_goal(&self, id: u32) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/delete/{}", id)).await
    }
}
