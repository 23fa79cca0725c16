pub mod components;
pub mod config;
pub mod connectivity;
pub mod i18n;
pub mod icons;
pub mod storage;
pub mod toast;
