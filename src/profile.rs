//! Tone profiles — the fixed phrase set behind each caption voice.
//!
//! A profile carries three phrases: the opener that introduces the project,
//! a style descriptor, and the closing call to action. The mapping from
//! [`Tone`] to profile is an exhaustive match over a closed enum, so the
//! "unrecognized tone" case cannot exist past parsing; the parse layer
//! defaults missing tones to [`Tone::Professional`].

use crate::form::Tone;

/// Fixed phrase set for one caption voice.
#[derive(Debug, PartialEq, Eq)]
pub struct ToneProfile {
    /// Opening phrase, completed by the project name.
    pub opener: &'static str,
    /// Voice descriptor. Part of the profile but never interpolated into
    /// caption text.
    pub style: &'static str,
    /// Closing call to action, rendered with a trailing `!`.
    pub cta: &'static str,
}

const CLASSY: ToneProfile = ToneProfile {
    opener: "Delighted to present",
    style: "elegant and sophisticated",
    cta: "I'd love to hear your thoughts",
};

const PROFESSIONAL: ToneProfile = ToneProfile {
    opener: "Excited to share",
    style: "professional and polished",
    cta: "Looking forward to your feedback",
};

const SAVAGE: ToneProfile = ToneProfile {
    opener: "Just dropped",
    style: "bold and confident",
    cta: "What do you think? 🔥",
};

const FUNNY: ToneProfile = ToneProfile {
    opener: "So I built this thing",
    style: "casual and humorous",
    cta: "Don't judge me too harshly 😅",
};

/// Look up the phrase set for a tone.
pub fn profile_for(tone: Tone) -> &'static ToneProfile {
    match tone {
        Tone::Classy => &CLASSY,
        Tone::Professional => &PROFESSIONAL,
        Tone::Savage => &SAVAGE,
        Tone::Funny => &FUNNY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_a_distinct_profile() {
        let profiles: Vec<_> = [Tone::Classy, Tone::Professional, Tone::Savage, Tone::Funny]
            .into_iter()
            .map(profile_for)
            .collect();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_tone_resolves_to_professional_profile() {
        assert_eq!(profile_for(Tone::default()).opener, "Excited to share");
    }

    #[test]
    fn profiles_carry_all_three_phrases() {
        for tone in [Tone::Classy, Tone::Professional, Tone::Savage, Tone::Funny] {
            let profile = profile_for(tone);
            assert!(!profile.opener.is_empty());
            assert!(!profile.style.is_empty());
            assert!(!profile.cta.is_empty());
        }
    }
}
