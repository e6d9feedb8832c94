use contracts::domain::a007_service_automation::{AutomationStatus, ToggleAutomationRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use super::NoParams;
use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_automation_status() -> Result<ApiResult<AutomationStatus>, ApiError> {
    post_form("getServiceAutomation.php", &NoParams::default()).await
}

pub async fn toggle_automation(request: &ToggleAutomationRequest) -> ActionResult {
    post_form("serviceAutomation_toggle.php", request).await
}
