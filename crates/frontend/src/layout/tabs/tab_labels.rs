//! Tab titles, one per screen key. Unknown keys fall back to a generic title.

pub const DEPOSIT_QUEUE: &str = "a001_deposit_queue";
pub const WITHDRAW_QUEUE: &str = "a002_withdraw_queue";
pub const WITHDRAW_ASSIGN: &str = "a002_withdraw_assign";
pub const MY_BANK: &str = "a003_my_bank";
pub const SMS: &str = "a004_sms";
pub const AGENT_TRACKER: &str = "a005_agent_tracker";
pub const SERVICE_NAGAD: &str = "a006_service_nagad";
pub const SERVICE_AUTOMATION: &str = "a007_service_automation";
pub const CRAWLER: &str = "a008_crawler";
pub const TRANSACTION_HISTORY: &str = "a009_transaction_history";
pub const CREDIT_BALANCE: &str = "a010_credit_balance";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        DEPOSIT_QUEUE => "Deposit queue",
        WITHDRAW_QUEUE => "Withdraw queue",
        WITHDRAW_ASSIGN => "Withdraw assignment",
        MY_BANK => "My bank accounts",
        SMS => "SMS",
        AGENT_TRACKER => "Agent tracker",
        SERVICE_NAGAD => "Service Nagad",
        SERVICE_AUTOMATION => "Service automation",
        CRAWLER => "Crawler status",
        TRANSACTION_HISTORY => "Transaction history",
        CREDIT_BALANCE => "Credit balance",
        _ => "Unknown screen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_a_label() {
        for key in [
            DEPOSIT_QUEUE,
            WITHDRAW_QUEUE,
            WITHDRAW_ASSIGN,
            MY_BANK,
            SMS,
            AGENT_TRACKER,
            SERVICE_NAGAD,
            SERVICE_AUTOMATION,
            CRAWLER,
            TRANSACTION_HISTORY,
            CREDIT_BALANCE,
        ] {
            assert_ne!(tab_label_for_key(key), "Unknown screen", "{key}");
        }
        assert_eq!(tab_label_for_key("nope"), "Unknown screen");
    }
}
