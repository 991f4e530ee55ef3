//! LinkedIn caption generation.
//!
//! Each caption follows a fixed shape: tone opener with the project name, a
//! bullet list of highlights, the tone's call to action, and a hashtag line
//! built from the parsed tag list plus three standing hashtags. Variations
//! differ only where the shape says they do — the second caption adds an
//! open-source bullet.

use crate::form::FormState;
use crate::profile::{ToneProfile, profile_for};

/// Highlight bullets present in every caption.
const HIGHLIGHTS: [&str; 4] = [
    "✨ Built with modern web technologies",
    "🎯 Focused on user experience and performance",
    "💡 Implements best practices and clean architecture",
    "🔧 Features responsive design and smooth interactions",
];

/// Extra bullet on the contribution-pitch variation only.
const OPEN_SOURCE_HIGHLIGHT: &str = "🌟 Open source and ready for contributions";

/// Zero-based index of the variation that pitches contributions.
const CONTRIBUTION_PITCH_INDEX: usize = 1;

/// Hashtags appended after the form's own tags.
const STANDING_HASHTAGS: &str = "#coding #webdevelopment #opensource";

/// Produce `form.variations` captions, in generation order.
pub fn build_captions(form: &FormState) -> Vec<String> {
    let profile = profile_for(form.tone);
    let name = form.project_name();
    let hashtags = hashtag_line(&form.tag_list());

    (0..form.variations as usize)
        .map(|index| caption(index, &name, profile, &hashtags))
        .collect()
}

fn caption(index: usize, name: &str, profile: &ToneProfile, hashtags: &str) -> String {
    let mut lines = vec![format!("{} {}! 🚀", profile.opener, name), String::new()];
    lines.extend(HIGHLIGHTS.iter().map(|h| h.to_string()));
    if index == CONTRIBUTION_PITCH_INDEX {
        lines.push(OPEN_SOURCE_HIGHLIGHT.to_string());
    }
    lines.push(String::new());
    lines.push(format!("{}!", profile.cta));
    lines.push(String::new());
    lines.push(format!("{hashtags} {STANDING_HASHTAGS}"));
    lines.join("\n")
}

/// Render tags as a space-joined hashtag run. Internal whitespace is
/// stripped from each tag so multi-word tags stay one hashtag.
fn hashtag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag.split_whitespace().collect::<String>()))
        .collect::<Vec<_>>()
        .join(" ")
}
