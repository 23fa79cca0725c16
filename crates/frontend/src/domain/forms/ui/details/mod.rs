//! Wizard details UI
//!
//! MVVM split:
//! - model.rs: storage access (drafts, submission with latency)
//! - view_model.rs: WizardViewModel with commands and state
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::WizardPage;
pub use view_model::WizardViewModel;
