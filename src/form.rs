//! The generation request record.
//!
//! [`FormState`] mirrors the input form one field per line. Every field has a
//! safe fallback, which keeps the generator downstream total: there is no
//! input shape it can fail on. The single hard requirement — a repository URL
//! or a project description — is enforced here at the caller boundary via
//! [`FormState::validate`], never inside the generator.
//!
//! Derived values also live here:
//! - [`FormState::project_name`] — last path segment of the repository URL
//! - [`FormState::tag_list`] — parsed, trimmed, order-preserving tags
//! - [`FormState::slug`] — directory-safe form of the project name

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Hashtag seeds used when the form leaves `tags` empty.
pub const DEFAULT_TAGS: &str = "webdev, coding, project";

/// Project name when no repository URL was given.
const NAME_WITHOUT_REPO: &str = "My Awesome Project";

/// Project name when the repository URL ends in `/` and the last path
/// segment is therefore empty.
const NAME_EMPTY_SEGMENT: &str = "My Project";

/// Allowed range for caption variations.
pub const MIN_VARIATIONS: u8 = 1;
pub const MAX_VARIATIONS: u8 = 3;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("provide a repository URL or a project description")]
    MissingInput,
    #[error("variations must be between {MIN_VARIATIONS} and {MAX_VARIATIONS}, got {0}")]
    VariationsOutOfRange(u8),
}

/// Voice of the generated captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Classy,
    #[default]
    Professional,
    Savage,
    Funny,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Classy => "classy",
            Tone::Professional => "professional",
            Tone::Savage => "savage",
            Tone::Funny => "funny",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sticky form defaults, overridable under `[defaults]` in `showcase.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub tone: Tone,
    pub tags: String,
    pub variations: u8,
    pub auto_detect_tech: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            tags: DEFAULT_TAGS.to_string(),
            variations: 2,
            auto_detect_tech: true,
        }
    }
}

/// One generation request. Immutable once resolved; each call to the
/// generator consumes a complete `FormState` and depends on nothing else.
///
/// Deserializable from a sparse TOML form file — unset fields take the stock
/// defaults, unknown keys are rejected to catch typos early.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormState {
    /// Repository URL. The last path segment becomes the project name.
    pub repo_url: String,
    /// Short description used in the README and the landing hero.
    pub project_description: String,
    /// Live demo URL. When empty, demo links fall back to `#` and the README
    /// omits its Live Demo section entirely.
    pub demo_url: String,
    /// Caption voice.
    pub tone: Tone,
    /// Comma-separated hashtag seeds.
    pub tags: String,
    /// Number of caption variations to produce (1–3).
    pub variations: u8,
    /// When false, the README tech-stack section lists a single generic
    /// entry instead of the fixed detected list.
    pub auto_detect_tech: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}

impl FormState {
    /// Build an empty form carrying the given sticky defaults.
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            repo_url: String::new(),
            project_description: String::new(),
            demo_url: String::new(),
            tone: defaults.tone,
            tags: defaults.tags.clone(),
            variations: defaults.variations,
            auto_detect_tech: defaults.auto_detect_tech,
        }
    }

    /// Enforce the caller-side preconditions: at least one of `repo_url` /
    /// `project_description` present, and `variations` within range.
    ///
    /// The flag surface already constrains `variations`; this catches
    /// out-of-range values arriving through form files.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.repo_url.is_empty() && self.project_description.is_empty() {
            return Err(FormError::MissingInput);
        }
        if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&self.variations) {
            return Err(FormError::VariationsOutOfRange(self.variations));
        }
        Ok(())
    }

    /// Project name derived from the repository URL: the substring after the
    /// final `/`. No URL well-formedness check — any string is accepted.
    pub fn project_name(&self) -> String {
        if self.repo_url.is_empty() {
            return NAME_WITHOUT_REPO.to_string();
        }
        let segment = self.repo_url.rsplit('/').next().unwrap_or_default();
        if segment.is_empty() {
            NAME_EMPTY_SEGMENT.to_string()
        } else {
            segment.to_string()
        }
    }

    /// Parsed tag list: split on commas, each piece trimmed, empty pieces
    /// dropped, order preserved. Duplicates are kept. An empty `tags` field
    /// falls back to [`DEFAULT_TAGS`].
    pub fn tag_list(&self) -> Vec<String> {
        let source = if self.tags.is_empty() {
            DEFAULT_TAGS
        } else {
            &self.tags
        };
        source
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Directory-safe slug: project name lower-cased, whitespace runs
    /// replaced by hyphens. Used as the clone target in the README.
    pub fn slug(&self) -> String {
        self.project_name()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The project description, or `fallback` when the form left it empty.
    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.project_description.is_empty() {
            fallback
        } else {
            &self.project_description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_from_repo_url() {
        let form = FormState {
            repo_url: "https://github.com/alice/cool-app".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.project_name(), "cool-app");
    }

    #[test]
    fn project_name_without_repo_url() {
        let form = FormState {
            project_description: "a thing".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.project_name(), "My Awesome Project");
    }

    #[test]
    fn project_name_trailing_slash() {
        let form = FormState {
            repo_url: "https://github.com/alice/cool-app/".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.project_name(), "My Project");
    }

    #[test]
    fn project_name_without_slashes_is_whole_string() {
        let form = FormState {
            repo_url: "cool-app".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.project_name(), "cool-app");
    }

    #[test]
    fn tag_list_trims_and_drops_empties() {
        let form = FormState {
            tags: "  React, , TypeScript ,AI".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.tag_list(), vec!["React", "TypeScript", "AI"]);
    }

    #[test]
    fn tag_list_preserves_order_and_duplicates() {
        let form = FormState {
            tags: "b, a, b".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.tag_list(), vec!["b", "a", "b"]);
    }

    #[test]
    fn tag_list_empty_falls_back_to_defaults() {
        let form = FormState {
            tags: String::new(),
            ..FormState::default()
        };
        assert_eq!(form.tag_list(), vec!["webdev", "coding", "project"]);
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        let form = FormState::default();
        assert_eq!(form.project_name(), "My Awesome Project");
        assert_eq!(form.slug(), "my-awesome-project");
    }

    #[test]
    fn slug_of_single_word_name() {
        let form = FormState {
            repo_url: "https://github.com/alice/Widget".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.slug(), "widget");
    }

    #[test]
    fn validate_rejects_missing_input() {
        let form = FormState::default();
        assert!(matches!(form.validate(), Err(FormError::MissingInput)));
    }

    #[test]
    fn validate_accepts_description_only() {
        let form = FormState {
            project_description: "just words".to_string(),
            ..FormState::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn validate_accepts_repo_url_only() {
        let form = FormState {
            repo_url: "https://github.com/alice/cool-app".to_string(),
            ..FormState::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn validate_rejects_variations_out_of_range() {
        let form = FormState {
            repo_url: "https://github.com/alice/cool-app".to_string(),
            variations: 4,
            ..FormState::default()
        };
        assert!(matches!(
            form.validate(),
            Err(FormError::VariationsOutOfRange(4))
        ));
    }

    #[test]
    fn description_or_falls_back_when_empty() {
        let form = FormState::default();
        assert_eq!(form.description_or("fallback"), "fallback");

        let form = FormState {
            project_description: "real".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.description_or("fallback"), "real");
    }

    #[test]
    fn parse_sparse_form_file() {
        let toml = r#"
repo_url = "https://github.com/alice/cool-app"
tone = "savage"
"#;
        let form: FormState = toml::from_str(toml).unwrap();
        assert_eq!(form.repo_url, "https://github.com/alice/cool-app");
        assert_eq!(form.tone, Tone::Savage);
        // Unset fields take stock defaults
        assert_eq!(form.variations, 2);
        assert!(form.auto_detect_tech);
        assert_eq!(form.tags, DEFAULT_TAGS);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let toml = r#"
repo_url = "https://github.com/alice/cool-app"
repo = "typo"
"#;
        assert!(toml::from_str::<FormState>(toml).is_err());
    }

    #[test]
    fn tone_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn tone_display_matches_serde_names() {
        for (tone, name) in [
            (Tone::Classy, "classy"),
            (Tone::Professional, "professional"),
            (Tone::Savage, "savage"),
            (Tone::Funny, "funny"),
        ] {
            assert_eq!(tone.to_string(), name);
            let parsed: Tone = toml::from_str::<FormState>(&format!("tone = \"{name}\""))
                .unwrap()
                .tone;
            assert_eq!(parsed, tone);
        }
    }
}
