//! Display tones shared by tag chips and project badges.

use serde::Serialize;

/// Named color family used when rendering chips and badges.
///
/// The core crate stays renderer-agnostic; frontends map each tone onto
/// whatever color model they draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Purple family.
    Purple,
    /// Blue family.
    Blue,
    /// Green family.
    Green,
    /// Cyan family.
    Cyan,
    /// Orange family.
    Orange,
    /// Yellow family.
    Yellow,
    /// Red family.
    Red,
    /// Indigo family.
    Indigo,
    /// Emerald family.
    Emerald,
    /// Amber family.
    Amber,
    /// Pink family.
    Pink,
    /// Teal family.
    Teal,
    /// Sky family.
    Sky,
    /// Violet family.
    Violet,
    /// Rose family.
    Rose,
    /// Fuchsia family.
    Fuchsia,
    /// Neutral fallback.
    Slate,
}

impl Tone {
    /// Lower-case name of the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Amber => "amber",
            Self::Pink => "pink",
            Self::Teal => "teal",
            Self::Sky => "sky",
            Self::Violet => "violet",
            Self::Rose => "rose",
            Self::Fuchsia => "fuchsia",
            Self::Slate => "slate",
        }
    }
}

/// Badge labels with a dedicated tone, keyed by lower-cased label.
const BADGE_TONES: &[(&str, Tone)] = &[
    ("academic", Tone::Indigo),
    ("freelance", Tone::Emerald),
    ("contract", Tone::Amber),
    ("personal project", Tone::Pink),
    ("deployed", Tone::Teal),
    ("local", Tone::Sky),
    ("research", Tone::Violet),
    ("solo project", Tone::Rose),
    ("client-work", Tone::Emerald),
    ("ai-integrated", Tone::Amber),
    ("full-stack", Tone::Blue),
    ("ai/predictive", Tone::Indigo),
    ("ai-predictive", Tone::Indigo),
    ("saas", Tone::Cyan),
    ("logistics", Tone::Orange),
    ("ai-security", Tone::Red),
    ("marketplace", Tone::Fuchsia),
    ("production-ready", Tone::Emerald),
    ("desktop-app", Tone::Sky),
    ("financial-systems", Tone::Green),
];

/// Resolve the display tone of a free-form badge label.
///
/// Matching is exact on the lower-cased label; unknown labels fall back to
/// [`Tone::Slate`].
#[must_use]
pub fn badge_tone(label: &str) -> Tone {
    let key = label.to_lowercase();
    BADGE_TONES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(Tone::Slate, |(_, tone)| *tone)
}
