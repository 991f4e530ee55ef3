//! Bundle orchestration and artifact writing.
//!
//! [`generate`] is the pure core: it maps a resolved form to a
//! [`ShowcaseBundle`] by delegating to the three template modules. It does no
//! I/O and never fails — every form field has a defined fallback.
//!
//! [`write_bundle`] is the I/O edge. It lays the bundle out on disk and
//! returns a [`WriteReport`] the output module turns into a summary:
//!
//! ```text
//! out/
//! ├── caption-1.txt          # One file per caption variation
//! ├── caption-2.txt
//! ├── README.md
//! ├── readme-preview.html    # README rendered to HTML for eyeballing
//! ├── landing.html
//! └── bundle.json            # The full bundle as a manifest
//! ```

use crate::captions::build_captions;
use crate::config::ShowcaseConfig;
use crate::form::{FormState, MAX_VARIATIONS};
use crate::landing::build_landing;
use crate::readme::build_readme;
use maud::{DOCTYPE, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The three artifacts produced by one generation call.
///
/// A bundle has no relation to prior bundles — each generation is
/// independent, and a new bundle fully replaces whatever the caller held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseBundle {
    /// Caption variations, in generation order. Length equals the form's
    /// `variations`.
    pub linkedin_captions: Vec<String>,
    /// One markdown document.
    pub readme_markdown: String,
    /// One self-contained HTML document.
    pub landing_html: String,
}

/// Map a form to its bundle.
///
/// Pure and infallible: no I/O, no clock, no randomness. Identical inputs
/// produce byte-identical bundles.
pub fn generate(form: &FormState, config: &ShowcaseConfig) -> ShowcaseBundle {
    ShowcaseBundle {
        linkedin_captions: build_captions(form),
        readme_markdown: build_readme(form),
        landing_html: build_landing(form, config),
    }
}

const README_FILE: &str = "README.md";
const LANDING_FILE: &str = "landing.html";
const PREVIEW_FILE: &str = "readme-preview.html";
const MANIFEST_FILE: &str = "bundle.json";

/// One file written to the output directory.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub label: String,
    pub filename: String,
    pub bytes: usize,
}

/// What [`write_bundle`] put on disk, consumed by the output display.
#[derive(Debug)]
pub struct WriteReport {
    pub out_dir: PathBuf,
    pub captions: Vec<Artifact>,
    pub documents: Vec<Artifact>,
    pub manifest: Artifact,
}

/// Write the bundle's artifacts plus a JSON manifest to `out_dir`.
pub fn write_bundle(bundle: &ShowcaseBundle, out_dir: &Path) -> Result<WriteReport, GenerateError> {
    fs::create_dir_all(out_dir)?;

    let mut captions = Vec::new();
    for (i, caption) in bundle.linkedin_captions.iter().enumerate() {
        let filename = format!("caption-{}.txt", i + 1);
        captions.push(write_artifact(
            out_dir,
            &format!("Caption {}", i + 1),
            &filename,
            caption,
        )?);
    }

    // A regeneration with fewer variations must not leave captions from a
    // larger prior run behind.
    for n in bundle.linkedin_captions.len() + 1..=MAX_VARIATIONS as usize {
        let stale = out_dir.join(format!("caption-{n}.txt"));
        if stale.exists() {
            fs::remove_file(stale)?;
        }
    }

    let preview = render_readme_preview(&bundle.readme_markdown);
    let documents = vec![
        write_artifact(out_dir, "README", README_FILE, &bundle.readme_markdown)?,
        write_artifact(out_dir, "README preview", PREVIEW_FILE, &preview)?,
        write_artifact(out_dir, "Landing page", LANDING_FILE, &bundle.landing_html)?,
    ];

    let json = serde_json::to_string_pretty(bundle)?;
    let manifest = write_artifact(out_dir, "Bundle manifest", MANIFEST_FILE, &json)?;

    Ok(WriteReport {
        out_dir: out_dir.to_path_buf(),
        captions,
        documents,
        manifest,
    })
}

fn write_artifact(
    out_dir: &Path,
    label: &str,
    filename: &str,
    content: &str,
) -> Result<Artifact, GenerateError> {
    fs::write(out_dir.join(filename), content)?;
    Ok(Artifact {
        label: label.to_string(),
        filename: filename.to_string(),
        bytes: content.len(),
    })
}

const PREVIEW_CSS: &str = include_str!("../static/preview.css");

/// Convert the README markdown to a small standalone HTML page so the
/// document can be checked in a browser before publishing.
fn render_readme_preview(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "README preview" }
                style { (PREVIEW_CSS) }
            }
            body {
                article.readme { (PreEscaped(body)) }
            }
        }
    }
    .into_string()
}
