//! Statistics Endpoint

use goalboard_core::models::Stats;
use goalboard_core::ApiError;

use super::ApiClient;

impl ApiClient {
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.get_json("/api/stats").await
    }
}
