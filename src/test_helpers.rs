//! Shared fixtures for the showcase test suite.
//!
//! Tests build forms by overriding fields on [`sample_form`] with struct
//! update syntax:
//!
//! ```rust
//! let form = FormState {
//!     variations: 3,
//!     ..sample_form()
//! };
//! ```

use crate::form::FormState;

/// A fully-populated form for the fictional cool-app project.
///
/// Tone, variations, and auto-detection sit at their stock defaults so tests
/// that care about those override them explicitly.
pub fn sample_form() -> FormState {
    FormState {
        repo_url: "https://github.com/alice/cool-app".to_string(),
        project_description: "A collaborative whiteboard for remote teams.".to_string(),
        demo_url: "https://cool-app.example".to_string(),
        tags: "React, TypeScript, AI".to_string(),
        ..FormState::default()
    }
}
