//! # Showcase
//!
//! Turn a handful of project facts — repository URL, description, demo link,
//! tone, tags — into three ready-to-publish artifacts: LinkedIn captions, a
//! README, and a self-contained HTML landing page. Everything is produced
//! from fixed templates; nothing is fetched, inspected, or inferred.
//!
//! # Architecture: Resolve → Generate → Write
//!
//! Showcase processes a request through three stages:
//!
//! ```text
//! 1. Resolve   flags + form.toml + showcase.toml  →  FormState
//! 2. Generate  FormState                          →  ShowcaseBundle
//! 3. Write     ShowcaseBundle                     →  out/ (artifacts + bundle.json)
//! ```
//!
//! The middle stage is a pure function: no I/O, no clock, no randomness.
//! Calling [`generate::generate`] twice with the same inputs yields
//! byte-identical bundles. This separation exists for two reasons:
//!
//! - **Testability**: every template can be exercised without touching the
//!   filesystem or waiting on the simulated latency the CLI layer adds.
//! - **Replaceability**: the caller holds at most one bundle at a time; a new
//!   generation unconditionally replaces it, so there is no state to migrate.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | `FormState` input record: defaults, validation, derived values (project name, slug, tag list) |
//! | [`profile`] | Tone profiles — fixed opener/style/call-to-action phrase sets per [`form::Tone`] |
//! | [`captions`] | LinkedIn caption variations from the tone profile and tag list |
//! | [`readme`] | README document assembly, including the optional Live Demo section |
//! | [`landing`] | Landing page rendered with Maud, themed via config colors |
//! | [`generate`] | Bundle orchestration plus artifact writing and the README HTML preview |
//! | [`config`] | `showcase.toml` loading, merging, validation, and color CSS generation |
//! | [`output`] | CLI output formatting — information-first display of results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The landing page is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Honest Non-Detection
//!
//! The `auto_detect_tech` toggle does not inspect the repository. It switches
//! the README's tech-stack section between two fixed lists, and that is all it
//! does. Real stack detection would require cloning and analyzing the repo,
//! which is out of scope for a template tool.
//!
//! ## Config-Driven Theming
//!
//! The landing page ships one inline `<style>` block: CSS custom properties
//! generated from `[colors]` in `showcase.toml`, followed by a static
//! stylesheet embedded at compile time. Users restyle the accent palette
//! without touching markup. See [`config::generate_color_css`].
//!
//! ## Simulated Latency Stays Outside
//!
//! The CLI's `--simulate-latency` flag sleeps before invoking the transform,
//! standing in for the backend round-trip a hosted version would make. The
//! delay wraps the call; it never lives inside it.

pub mod captions;
pub mod config;
pub mod form;
pub mod generate;
pub mod landing;
pub mod output;
pub mod profile;
pub mod readme;

#[cfg(test)]
pub(crate) mod test_helpers;
