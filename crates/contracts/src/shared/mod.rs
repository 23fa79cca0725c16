pub mod activity;
pub mod config;
pub mod connectivity;
pub mod i18n;
pub mod sla;
pub mod storage;
pub mod submission;
pub mod wizard;
