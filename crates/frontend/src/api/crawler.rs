use contracts::domain::a008_crawler::{CrawlerStatus, RestartCrawlerRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use super::NoParams;
use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_crawler_status() -> Result<ApiResult<CrawlerStatus>, ApiError> {
    post_form("getCrawlerStatus.php", &NoParams::default()).await
}

pub async fn restart_crawler(request: &RestartCrawlerRequest) -> ActionResult {
    post_form("crawler_restart.php", request).await
}
