use contracts::domain::a004_sms::{MarkSmsRequest, SmsListQuery, SmsRecord};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_sms(query: &SmsListQuery) -> Result<ApiResult<SmsRecord>, ApiError> {
    post_form("getSmsList.php", query).await
}

pub async fn mark_used(request: &MarkSmsRequest) -> ActionResult {
    post_form("sms_markUsed.php", request).await
}
