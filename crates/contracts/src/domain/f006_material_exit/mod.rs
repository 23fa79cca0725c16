pub mod form;

pub use form::{definition, HEADLINE_KEYS};
