use contracts::shared::i18n::{Language, Localizer};
use contracts::shared::wizard::ValidationError;
use leptos::prelude::*;

use super::config::use_config;
use super::storage::BrowserStorage;
use contracts::shared::storage::KeyValueStore;

/// Current language, persisted between visits.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
    storage_key: StoredValue<String>,
}

impl I18nContext {
    /// Reactive when called inside a closure
    pub fn t(&self, key: &str) -> String {
        self.localizer().t(key).to_string()
    }

    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.language.get())
    }

    pub fn validation(&self, error: ValidationError) -> String {
        self.localizer().validation(error).to_string()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        let key = self.storage_key.get_value();
        if let Err(e) = BrowserStorage.set(&key, language.code()) {
            log::warn!("language not saved: {}", e);
        }
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }
}

#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let config = use_config();
    let storage_key = config.layout().language_key();

    let stored = BrowserStorage
        .get(&storage_key)
        .ok()
        .flatten()
        .and_then(|code| Language::from_code(&code));
    let initial = stored.unwrap_or(config.get().i18n.default_language);

    provide_context(I18nContext {
        language: RwSignal::new(initial),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nProvider not found in component tree")
}
