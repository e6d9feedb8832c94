use contracts::domain::a005_agent_tracker::AgentActivity;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use super::NoParams;
use crate::shared::http::post_form;

pub async fn fetch_agent_activity() -> Result<ApiResult<AgentActivity>, ApiError> {
    post_form("getAgentTracker.php", &NoParams::default()).await
}
