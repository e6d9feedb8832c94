//! Tab key -> screen. Every tab key is listed here and nowhere else.

use super::tab_labels::*;
use crate::domain::a001_deposit_queue::ui::list::DepositQueueList;
use crate::domain::a002_withdraw_queue::ui::assign::WithdrawAssignPage;
use crate::domain::a002_withdraw_queue::ui::list::WithdrawQueueList;
use crate::domain::a003_my_bank::ui::list::MyBankList;
use crate::domain::a004_sms::ui::list::SmsList;
use crate::domain::a005_agent_tracker::ui::list::AgentTrackerList;
use crate::domain::a006_service_nagad::ui::list::ServiceNagadList;
use crate::domain::a007_service_automation::ui::list::ServiceAutomationList;
use crate::domain::a008_crawler::ui::list::CrawlerList;
use crate::domain::a009_transaction_history::ui::list::TransactionHistoryList;
use crate::domain::a010_credit_balance::ui::list::CreditBalanceList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        DEPOSIT_QUEUE => view! { <DepositQueueList /> }.into_any(),
        WITHDRAW_QUEUE => view! { <WithdrawQueueList /> }.into_any(),
        WITHDRAW_ASSIGN => view! { <WithdrawAssignPage /> }.into_any(),
        MY_BANK => view! { <MyBankList /> }.into_any(),
        SMS => view! { <SmsList /> }.into_any(),
        AGENT_TRACKER => view! { <AgentTrackerList /> }.into_any(),
        SERVICE_NAGAD => view! { <ServiceNagadList /> }.into_any(),
        SERVICE_AUTOMATION => view! { <ServiceAutomationList /> }.into_any(),
        CRAWLER => view! { <CrawlerList /> }.into_any(),
        TRANSACTION_HISTORY => view! { <TransactionHistoryList /> }.into_any(),
        CREDIT_BALANCE => view! { <CreditBalanceList /> }.into_any(),
        other => {
            log::warn!("no screen registered for tab '{other}'");
            view! {
                <div class="placeholder">{format!("Unknown screen: {other}")}</div>
            }
            .into_any()
        }
    }
}
