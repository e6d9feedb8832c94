use contracts::domain::a006_service_nagad::{NagadListQuery, NagadServiceRow, ResubmitRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_nagad_rows(query: &NagadListQuery) -> Result<ApiResult<NagadServiceRow>, ApiError> {
    post_form("getServiceNagad.php", query).await
}

/// Single resubmission; the bulk flow calls this once per selected row
pub async fn resubmit(request: &ResubmitRequest) -> ActionResult {
    post_form("serviceNagad_resubmit.php", request).await
}
