use contracts::domain::a010_credit_balance::{CreditAdjustmentRequest, CreditBalance};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use super::NoParams;
use crate::shared::http::{post_json, ActionResult};

pub async fn fetch_credit_balance() -> Result<ApiResult<CreditBalance>, ApiError> {
    post_json("cp_credit_balance.php", &NoParams::default()).await
}

pub async fn adjust_credit(request: &CreditAdjustmentRequest) -> ActionResult {
    post_json("cp_credit_adjustment.php", request).await
}
