//! Generic wizard UI shared by the SOP and F-SAP/F-DEM modules.

pub mod ui;
