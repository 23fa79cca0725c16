pub mod form_module;

pub use form_module::FormModule;
