pub mod common;

pub mod a001_deposit_queue;
pub mod a002_withdraw_queue;
pub mod a003_my_bank;
pub mod a004_sms;
pub mod a005_agent_tracker;
pub mod a006_service_nagad;
pub mod a007_service_automation;
pub mod a008_crawler;
pub mod a009_transaction_history;
pub mod a010_credit_balance;
