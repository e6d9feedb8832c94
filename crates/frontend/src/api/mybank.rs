use contracts::domain::a003_my_bank::{
    BankAccount, MasterBank, MasterIbft, MyBankQuery, ToggleActiveRequest, UpdateMemoRequest,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use super::NoParams;
use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_my_bank(query: &MyBankQuery) -> Result<ApiResult<BankAccount>, ApiError> {
    post_form("getMyBank.php", query).await
}

pub async fn fetch_master_banks() -> Result<ApiResult<MasterBank>, ApiError> {
    post_form("getMasterMyBank.php", &NoParams::default()).await
}

pub async fn fetch_master_ibft() -> Result<ApiResult<MasterIbft>, ApiError> {
    post_form("getMasterIBFT.php", &NoParams::default()).await
}

pub async fn update_memo(request: &UpdateMemoRequest) -> ActionResult {
    post_form("updateMemo2.php", request).await
}

pub async fn toggle_active(request: &ToggleActiveRequest) -> ActionResult {
    post_form("updateMyBankActive.php", request).await
}
