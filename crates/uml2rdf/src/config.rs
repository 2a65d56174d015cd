//! Run configuration for the conversion pipeline.

use url::Url;

use crate::error::ConvertError;
use crate::model::tags::{Language, TagRole};

/// Options recognized by the converter. One instance per run, passed by
/// reference into every handler.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Language code attributed to tags without a recognized suffix.
    pub language: String,
    /// Emit unrecognized tags under the `any:` passthrough predicate.
    pub all_tags: bool,
    /// URI prefix of the publication environment, used by scope
    /// classification.
    pub publication_environment: String,
    /// Downgrades certain fatal value-presence checks to warnings.
    pub debug: bool,
    /// Base URI assigned to packages that lack an explicit base-URI tag.
    pub fallback_base_uri: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            language: Language::Nl.as_str().to_string(),
            all_tags: false,
            publication_environment: "https://data.example.org/".to_string(),
            debug: false,
            fallback_base_uri: "https://fallback.example.org/ns/".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Validate the configuration before any handler runs.
    ///
    /// Checks that the URI-valued options parse, that the default
    /// language is a recognized code, and that the tag-name contract does
    /// not collide with the language-code set (a role name ending in a
    /// recognized code would make its unsuffixed form unresolvable).
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !Language::is_known(&self.language) {
            return Err(ConvertError::InvalidConfig(format!(
                "unknown default language code ({})",
                self.language
            )));
        }
        Url::parse(&self.publication_environment).map_err(|e| {
            ConvertError::InvalidConfig(format!(
                "publication environment is not a valid URI ({}): {e}",
                self.publication_environment
            ))
        })?;
        Url::parse(&self.fallback_base_uri).map_err(|e| {
            ConvertError::InvalidConfig(format!(
                "fallback base URI is not a valid URI ({}): {e}",
                self.fallback_base_uri
            ))
        })?;
        for role in TagRole::ALL {
            if let Some((_, suffix)) = role.as_str().rsplit_once('-') {
                if Language::is_known(suffix) {
                    return Err(ConvertError::InvalidConfig(format!(
                        "tag role ({}) collides with language code ({suffix})",
                        role.as_str()
                    )));
                }
            }
        }
        Ok(())
    }
}
