//! Localization manager for the bot's user-facing messages

use anyhow::Result;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::config::DEFAULT_LANGUAGE;

/// Languages with a bundled resource file
pub const SUPPORTED_LANGUAGES: &[&str] = &["es", "en"];

fn resource_source(language: &str) -> Option<&'static str> {
    match language {
        "es" => Some(include_str!("../locales/es/main.ftl")),
        "en" => Some(include_str!("../locales/en/main.ftl")),
        _ => None,
    }
}

/// Localization manager for the bot
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    default_language: String,
}

impl LocalizationManager {
    /// Create a localization manager falling back to `DEFAULT_LANGUAGE`
    pub fn new() -> Result<Self> {
        Self::with_default_language(DEFAULT_LANGUAGE)
    }

    /// Create a localization manager with the given fallback language
    ///
    /// An unsupported fallback is replaced by `DEFAULT_LANGUAGE`.
    pub fn with_default_language(default_language: &str) -> Result<Self> {
        let mut bundles = HashMap::new();
        for language in SUPPORTED_LANGUAGES {
            let locale: LanguageIdentifier = language.parse()?;
            bundles.insert(language.to_string(), Self::create_bundle(&locale));
        }

        let default_language = if bundles.contains_key(default_language) {
            default_language.to_string()
        } else {
            warn!(language = %default_language, "Unsupported default language, using {DEFAULT_LANGUAGE}");
            DEFAULT_LANGUAGE.to_string()
        };

        Ok(Self {
            bundles,
            default_language,
        })
    }

    fn create_bundle(locale: &LanguageIdentifier) -> FluentBundle<FluentResource> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Telegram shows bidi isolation marks literally around placeables
        bundle.set_use_isolating(false);

        if let Some(source) = resource_source(&locale.to_string()) {
            let resource = match FluentResource::try_new(source.to_string()) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    warn!(locale = %locale, errors = ?errors, "Resource parsed with errors");
                    resource
                }
            };
            if let Err(errors) = bundle.add_resource(resource) {
                warn!(locale = %locale, errors = ?errors, "Failed to add resource to bundle");
            }
        }

        bundle
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Map a Telegram language code (e.g. "en-GB") to a supported language
    pub fn resolve_language(&self, language_code: Option<&str>) -> &str {
        language_code
            .and_then(|code| code.split(['-', '_']).next())
            .map(|primary| primary.to_ascii_lowercase())
            .and_then(|primary| {
                self.bundles
                    .get_key_value(primary.as_str())
                    .map(|(key, _)| key.as_str())
            })
            .unwrap_or(self.default_language.as_str())
    }

    /// Get a localized message in a specific language
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let language = self.resolve_language(Some(language));
        let Some(bundle) = self.bundles.get(language) else {
            return format!("Missing translation: {key}");
        };

        let Some(msg) = bundle.get_message(key) else {
            return format!("Missing translation: {key}");
        };
        let Some(pattern) = msg.value() else {
            return format!("Missing value for key: {key}");
        };

        let fluent_args = args.map(|args| {
            args.iter()
                .map(|(k, v)| (*k, FluentValue::from(*v)))
                .collect::<FluentArgs>()
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            warn!(key = %key, errors = ?errors, "Message formatted with errors");
        }
        value.into_owned()
    }
}

static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

/// Initialize the global localization manager with the configured fallback language
pub fn init_localization(default_language: &str) -> Result<()> {
    let manager = LocalizationManager::with_default_language(default_language)?;
    if LOCALIZATION_MANAGER.set(manager).is_err() {
        warn!("Localization manager already initialized");
    }
    Ok(())
}

/// Get the global localization manager, initializing it with defaults if needed
pub fn get_localization_manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER.get_or_init(|| {
        LocalizationManager::new().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to an empty localization manager");
            LocalizationManager {
                bundles: HashMap::new(),
                default_language: DEFAULT_LANGUAGE.to_string(),
            }
        })
    })
}

/// Supported language for a user's Telegram language code
pub fn detect_language(language_code: Option<&str>) -> String {
    get_localization_manager()
        .resolve_language(language_code)
        .to_string()
}

/// Localized message for a user's Telegram language code
pub fn t_lang(key: &str, language_code: Option<&str>) -> String {
    t_args_lang(key, &[], language_code)
}

/// Localized message with arguments for a user's Telegram language code
pub fn t_args_lang(key: &str, args: &[(&str, &str)], language_code: Option<&str>) -> String {
    let manager = get_localization_manager();
    let language = manager.resolve_language(language_code);
    let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
    manager.get_message_in_language(key, language, Some(&args_map))
}
