use contracts::domain::a002_withdraw_queue::{
    AssignWithdrawRequest, CheckAutomationRequest, FailWithdrawRequest, WithdrawListQuery,
    WithdrawTransaction,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_withdraw_list(
    query: &WithdrawListQuery,
) -> Result<ApiResult<WithdrawTransaction>, ApiError> {
    post_form("getAutomationWithdrawList.php", query).await
}

/// Asks the automation whether it picked up the withdrawal
pub async fn check_automation(request: &CheckAutomationRequest) -> ActionResult {
    post_form("withdrawList_checkAutomation.php", request).await
}

pub async fn fail_withdraw(request: &FailWithdrawRequest) -> ActionResult {
    post_form("withdrawList_fail.php", request).await
}

pub async fn assign_withdraw(request: &AssignWithdrawRequest) -> ActionResult {
    post_form("withdrawList_assign.php", request).await
}
