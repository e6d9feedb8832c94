use contracts::domain::a001_deposit_queue::{
    ApproveDepositRequest, DepositPendingQuery, DepositTransaction, EditDepositRequest,
    ManualStatusRequest, MatchMutasiRequest, MatchSmsRequest,
};
use contracts::domain::a009_transaction_history::{HistoryQuery, ResendRequest, TransactionHistoryRow};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;

use crate::shared::http::{post_form, ActionResult};

pub async fn fetch_deposit_pending(
    query: &DepositPendingQuery,
) -> Result<ApiResult<DepositTransaction>, ApiError> {
    post_form("GetDepositPendingList.php", query).await
}

pub async fn edit_deposit(request: &EditDepositRequest) -> ActionResult {
    post_form("transactionByAccount_edit.php", request).await
}

/// Manual status change, used to fail a queued deposit
pub async fn update_manual_status(request: &ManualStatusRequest) -> ActionResult {
    post_form("updateManualTransaction.php", request).await
}

pub async fn approve_deposit(request: &ApproveDepositRequest) -> ActionResult {
    post_form("changeStatusSuccessTransactionAccountByCompany.php", request).await
}

pub async fn match_mutasi(request: &MatchMutasiRequest) -> ActionResult {
    post_form("depositQueue_matchedMutasi.php", request).await
}

pub async fn match_sms(request: &MatchSmsRequest) -> ActionResult {
    post_form("depositQueue_matchedSms.php", request).await
}

pub async fn fetch_history(query: &HistoryQuery) -> Result<ApiResult<TransactionHistoryRow>, ApiError> {
    post_form("getTransactionHistory.php", query).await
}

/// Re-sends the merchant callback of a finished transaction
pub async fn resend_callback(request: &ResendRequest) -> ActionResult {
    post_form("resendTransaction.php", request).await
}
