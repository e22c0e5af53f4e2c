//! Style presets.

use serde::{Serialize, Serializer};

/// A named preset selecting the prompt template sent to the image provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Inspired,
    SoftPastel,
    Filmic,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Inspired, Style::SoftPastel, Style::Filmic];

    /// Wire identifier used by the front end.
    pub fn id(&self) -> &'static str {
        match self {
            Style::Inspired => "ghibli-inspired",
            Style::SoftPastel => "ghibli-soft-pastel",
            Style::Filmic => "ghibli-filmic",
        }
    }

    /// Looks up a style by its wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }

    /// Resolves a possibly absent or unknown identifier, falling back to the default.
    pub fn resolve(id: Option<&str>) -> Self {
        id.map(str::trim)
            .and_then(Self::from_id)
            .unwrap_or_default()
    }

    pub fn prompt_template(&self) -> &'static str {
        match self {
            Style::Inspired => {
                "A person in Studio Ghibli inspired style. Hand-drawn anime look, vibrant colors, \
                 whimsical atmosphere, detailed background, warm lighting, and expressive \
                 character design."
            }
            Style::SoftPastel => {
                "A person in Studio Ghibli soft pastel style. Dreamlike atmosphere, gentle pastel \
                 colors, soft shading, warm glow, delicate hand-drawn lines, and tender expressions."
            }
            Style::Filmic => {
                "A person in Studio Ghibli cinematic film style. Cinematic composition, deep \
                 contrast, rich lighting, painterly textures, emotional tone, and dramatic \
                 atmosphere."
            }
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for style in Style::ALL {
            assert_eq!(Style::from_id(style.id()), Some(style));
        }
    }

    #[test]
    fn missing_style_resolves_to_inspired() {
        assert_eq!(Style::resolve(None), Style::Inspired);
    }

    #[test]
    fn unknown_style_resolves_to_inspired() {
        assert_eq!(Style::resolve(Some("van-gogh")), Style::Inspired);
        assert_eq!(Style::resolve(Some("")), Style::Inspired);
    }

    #[test]
    fn known_style_is_resolved() {
        assert_eq!(Style::resolve(Some("ghibli-filmic")), Style::Filmic);
        assert_eq!(Style::resolve(Some(" ghibli-soft-pastel ")), Style::SoftPastel);
    }

    #[test]
    fn templates_are_distinct() {
        assert_ne!(Style::Inspired.prompt_template(), Style::Filmic.prompt_template());
        assert_ne!(Style::SoftPastel.prompt_template(), Style::Filmic.prompt_template());
    }

    #[test]
    fn serializes_as_wire_id() {
        let json = serde_json::to_string(&Style::SoftPastel).unwrap();
        assert_eq!(json, "\"ghibli-soft-pastel\"");
    }
}
