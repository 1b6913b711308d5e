//! Runtime translation client
//!
//! A [`Translator`] holds a registry of languages, a fallback language and the
//! active locale. Lookups walk the active dictionary first and the fallback
//! dictionary second; everything that is neither is reported through
//! [`LogSink`]s and returned as the key itself.

pub mod format;
pub mod language;
pub mod lookup;
pub mod sink;
pub mod store;

use std::fmt;
use std::sync::Arc;

use chrono::{
    Datelike,
    Timelike,
};

pub use self::format::{
    LocaleFormat,
    NumberOptions,
};
pub use self::language::{
    Language,
    TranslationHit,
    TranslationInfo,
};
pub use self::sink::{
    LogSink,
    Silent,
    TracingSink,
};
pub use self::store::SubscriptionId;
use self::store::Observable;
use crate::placeholder::{
    Params,
    render_template,
};
use crate::types::DEFAULT_KEY_SEPARATOR;

/// Construction parameters of a [`Translator`].
pub struct TranslatorConfig {
    pub languages: Vec<Language>,
    /// Complete dictionary consulted when the active one misses a key.
    pub fallback_language: Language,
    pub log_fallback: Box<dyn LogSink>,
    pub log_missing: Box<dyn LogSink>,
}

impl TranslatorConfig {
    /// Config reporting through [`TracingSink`].
    #[must_use]
    pub fn new(languages: Vec<Language>, fallback_language: Language) -> Self {
        Self {
            languages,
            fallback_language,
            log_fallback: Box::new(TracingSink::Fallback),
            log_missing: Box::new(TracingSink::Missing),
        }
    }

    #[must_use]
    pub fn with_log_fallback(mut self, sink: impl LogSink + 'static) -> Self {
        self.log_fallback = Box::new(sink);
        self
    }

    #[must_use]
    pub fn with_log_missing(mut self, sink: impl LogSink + 'static) -> Self {
        self.log_missing = Box::new(sink);
        self
    }
}

impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("languages", &self.languages)
            .field("fallback_language", &self.fallback_language)
            .finish_non_exhaustive()
    }
}

/// Translation client with an observable active locale.
///
/// The translator is `Send + Sync`; the active language is swapped as a
/// whole so concurrent lookups see either the old or the new dictionary.
pub struct Translator {
    /// Registered languages in registration order
    languages: Vec<Arc<Language>>,
    /// Fallback language, also the initial one
    fallback: Arc<Language>,
    /// Active language
    current: Observable<Arc<Language>>,
    /// Notified for lookups served by the fallback dictionary
    log_fallback: Box<dyn LogSink>,
    /// Notified for lookups found nowhere
    log_missing: Box<dyn LogSink>,
}

impl Translator {
    /// Creates a translator whose active language is the fallback language.
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        let fallback = Arc::new(config.fallback_language);
        Self {
            languages: config.languages.into_iter().map(Arc::new).collect(),
            current: Observable::new(Arc::clone(&fallback)),
            fallback,
            log_fallback: config.log_fallback,
            log_missing: config.log_missing,
        }
    }

    /// Identifier of the active language.
    #[must_use]
    pub fn locale(&self) -> String {
        self.current.get().locale.clone()
    }

    /// The active language.
    #[must_use]
    pub fn language(&self) -> Arc<Language> {
        self.current.get()
    }

    #[must_use]
    pub fn languages(&self) -> &[Arc<Language>] {
        &self.languages
    }

    #[must_use]
    pub fn fallback_language(&self) -> &Language {
        &self.fallback
    }

    /// Activates the language registered as `locale`, or the fallback
    /// language when there is none. Subscribers are notified either way.
    pub fn set_locale(&self, locale: &str) {
        let language = self.find(locale).unwrap_or_else(|| Arc::clone(&self.fallback));
        tracing::debug!(requested = locale, active = %language.locale, "Locale set");
        self.current.set(language);
    }

    /// Activates the best registered match for an untrusted identifier.
    ///
    /// Tries the identifier itself, then its base language (`de` for
    /// `de-DE-123`), then the first registered sub-locale of that base (`es-AR`
    /// for `es`) and finally the fallback language.
    pub fn try_set_locale(&self, locale: &str) {
        if self.find(locale).is_some() {
            self.set_locale(locale);
            return;
        }

        let base = language::base_locale(locale);
        if self.find(base).is_some() {
            self.set_locale(base);
            return;
        }

        let prefix = format!("{base}-");
        if let Some(sub) = self.languages.iter().find(|language| language.locale.starts_with(&prefix)) {
            let sub = sub.locale.clone();
            self.set_locale(&sub);
            return;
        }

        let fallback = self.fallback.locale.clone();
        self.set_locale(&fallback);
    }

    /// Calls `callback` with the current locale now and after every change.
    ///
    /// Notifications arrive in the order the locales were set. The callback
    /// must not set the locale itself.
    pub fn subscribe(&self, callback: impl Fn(&str) + Send + Sync + 'static) -> SubscriptionId {
        self.current.subscribe(move |language: &Arc<Language>| callback(&language.locale))
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.current.unsubscribe(id)
    }

    /// Translates `key` and reports where the text came from.
    ///
    /// Found texts are rendered with `params`. A key found nowhere is
    /// returned verbatim. Empty texts count as missing.
    #[must_use]
    pub fn translate_info(&self, key: &str, params: Option<&Params>) -> TranslationInfo {
        let language = self.current.get();
        let render = |text: &str| match params {
            Some(params) => render_template(text, params).into_owned(),
            None => text.to_string(),
        };

        if let Some(text) = lookup_text(&language, key) {
            return TranslationInfo { text: render(text), hit: TranslationHit::CurrentDictionary };
        }

        if let Some(text) = lookup_text(&self.fallback, key) {
            self.log_fallback.log(key, &language.locale);
            return TranslationInfo { text: render(text), hit: TranslationHit::FallbackDictionary };
        }

        self.log_missing.log(key, &language.locale);
        TranslationInfo { text: key.to_string(), hit: TranslationHit::None }
    }

    /// Translated text of `key`, see [`Translator::translate_info`].
    #[must_use]
    pub fn translate(&self, key: &str, params: Option<&Params>) -> String {
        self.translate_info(key, params).text
    }

    /// Short numeric date in the active locale's convention.
    #[must_use]
    pub fn locale_date_string(&self, date: &impl Datelike) -> String {
        self.format().format_date(date)
    }

    /// Time with seconds in the active locale's convention.
    #[must_use]
    pub fn locale_time_string(&self, time: &impl Timelike) -> String {
        self.format().format_time(time)
    }

    /// Grouped decimal in the active locale's convention.
    #[must_use]
    pub fn locale_number_string(&self, number: f64) -> String {
        self.format().format_number(number)
    }

    /// Grouped decimal in the active locale's convention with explicit
    /// fraction digits.
    #[must_use]
    pub fn locale_number_string_with(&self, number: f64, options: NumberOptions) -> String {
        self.format().format_number_with(number, options)
    }

    /// Registered language with exactly this identifier.
    fn find(&self, locale: &str) -> Option<Arc<Language>> {
        self.languages.iter().find(|language| language.locale == locale).map(Arc::clone)
    }

    /// Formatting rules of the active locale.
    fn format(&self) -> LocaleFormat {
        LocaleFormat::for_locale(&self.current.get().locale)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale())
            .field("languages", &self.languages.iter().map(|l| l.locale.as_str()).collect::<Vec<_>>())
            .field("fallback", &self.fallback.locale)
            .finish_non_exhaustive()
    }
}

/// Non-empty leaf text at `key` in the language's dictionary.
fn lookup_text<'a>(language: &'a Language, key: &str) -> Option<&'a str> {
    lookup::find_by_path(&language.dictionary, key, DEFAULT_KEY_SEPARATOR).filter(|text| !text.is_empty())
}
