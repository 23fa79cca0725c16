//! Business logic of the operations dashboard: the generic form wizard,
//! per-module form catalog, persistence contracts, connectivity tracking,
//! checklists, mock auth, localization and configuration.
//!
//! No browser dependencies; the frontend crate supplies storage and timers.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
