//! Translated message bundles keyed by language.

use crate::error::{AppError, AppResult};
use crate::state::LanguageTag;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

const EN_BUNDLE: &str = include_str!("../../locales/en.json");
const ZH_BUNDLE: &str = include_str!("../../locales/zh.json");

/// Immutable message table for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    language: LanguageTag,
    messages: HashMap<String, String>,
}

impl LocaleBundle {
    pub fn new(language: LanguageTag, messages: HashMap<String, String>) -> Self {
        Self { language, messages }
    }

    pub fn from_json(language: LanguageTag, json: &str) -> AppResult<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json).map_err(|e| {
            AppError::Locale(format!("Invalid message bundle for '{language}': {e}"))
        })?;
        Ok(Self::new(language, messages))
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

/// Fixed language -> bundle mapping, built once at start-up.
///
/// A miss on [`resolve`](Self::resolve) is not an error; callers that want a
/// default ask for it with [`resolve_or_fallback`](Self::resolve_or_fallback).
#[derive(Debug, Clone, Default)]
pub struct LocaleResolver {
    bundles: BTreeMap<LanguageTag, Arc<LocaleBundle>>,
}

impl LocaleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with the bundled `en` and `zh` messages.
    pub fn builtin() -> AppResult<Self> {
        Ok(Self::new()
            .with_bundle(LocaleBundle::from_json("en".into(), EN_BUNDLE)?)
            .with_bundle(LocaleBundle::from_json("zh".into(), ZH_BUNDLE)?))
    }

    pub fn with_bundle(mut self, bundle: LocaleBundle) -> Self {
        self.bundles
            .insert(bundle.language().clone(), Arc::new(bundle));
        self
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.bundles.keys()
    }

    pub fn resolve(&self, language: &LanguageTag) -> Option<Arc<LocaleBundle>> {
        self.bundles.get(language).cloned()
    }

    pub fn resolve_or_fallback(
        &self,
        language: &LanguageTag,
        fallback: Option<&LanguageTag>,
    ) -> Option<Arc<LocaleBundle>> {
        self.resolve(language).or_else(|| {
            let fallback = fallback?;
            log::debug!("No bundle for '{language}', falling back to '{fallback}'");
            self.resolve(fallback)
        })
    }

    /// Message for `key`, or `None` when either the bundle or key is missing.
    pub fn translate(&self, language: &LanguageTag, key: &str) -> Option<String> {
        self.resolve(language)
            .and_then(|bundle| bundle.get(key).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bundles_have_the_same_keys() {
        let resolver = LocaleResolver::builtin().unwrap();
        let en = resolver.resolve(&"en".into()).unwrap();
        let zh = resolver.resolve(&"zh".into()).unwrap();

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort_unstable();
        zh_keys.sort_unstable();
        assert_eq!(en_keys, zh_keys);
        assert!(!en.is_empty());
    }

    #[test]
    fn test_unknown_language_is_absent() {
        let resolver = LocaleResolver::builtin().unwrap();
        assert!(resolver.resolve(&"fr".into()).is_none());
        assert_eq!(resolver.translate(&"fr".into(), "nav.signIn"), None);
    }

    #[test]
    fn test_fallback_is_opt_in() {
        let resolver = LocaleResolver::builtin().unwrap();
        let fr = LanguageTag::from("fr");

        assert!(resolver.resolve_or_fallback(&fr, None).is_none());
        let bundle = resolver.resolve_or_fallback(&fr, Some(&"en".into())).unwrap();
        assert_eq!(bundle.get("nav.signIn"), Some("Sign in"));
    }

    #[test]
    fn test_malformed_bundle_is_a_locale_error() {
        let result = LocaleBundle::from_json("xx".into(), "[1]");
        assert!(matches!(result, Err(AppError::Locale(_))));
    }

    #[test]
    fn test_custom_bundle_replaces_builtin() {
        let mut messages = HashMap::new();
        messages.insert("nav.signIn".to_string(), "Log in".to_string());
        let resolver = LocaleResolver::builtin()
            .unwrap()
            .with_bundle(LocaleBundle::new("en".into(), messages));

        assert_eq!(
            resolver.translate(&"en".into(), "nav.signIn").as_deref(),
            Some("Log in")
        );
        assert_eq!(resolver.languages().count(), 2);
    }
}
