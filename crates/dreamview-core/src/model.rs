//! Generation model variants offered by the service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A server-side processing mode.
///
/// Only affects the description shown next to the selector and the
/// `model_type` field of the generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    /// InceptionV3 dreaming on `mixed3`/`mixed5`.
    #[default]
    Inception,
    /// VGG16 dreaming on `block3_conv3`/`block4_conv3`.
    Vgg16,
}

impl ModelVariant {
    /// All variants in selector order.
    pub const ALL: [Self; 2] = [Self::Inception, Self::Vgg16];

    /// Wire value sent as the `model_type` form field.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Inception => "inception",
            Self::Vgg16 => "vgg16",
        }
    }

    /// Name of the backing network.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inception => "InceptionV3",
            Self::Vgg16 => "VGG16",
        }
    }

    /// Human-readable description of the output style.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Inception => "Creates complex, abstract dream patterns with intricate details",
            Self::Vgg16 => "Generates geometric, structured patterns with clear textures",
        }
    }

    /// Look up a variant by its wire value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }

    /// Look up a variant by its wire value, falling back to the default.
    #[must_use]
    pub fn from_value_or_default(value: &str) -> Self {
        Self::from_value(value).unwrap_or_default()
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inception() {
        assert_eq!(ModelVariant::default(), ModelVariant::Inception);
    }

    #[test]
    fn values_are_unique_and_round_trip() {
        let mut seen = std::collections::HashSet::new();
        for variant in ModelVariant::ALL {
            assert!(seen.insert(variant.value()), "duplicate value {variant:?}");
            assert_eq!(ModelVariant::from_value(variant.value()), Some(variant));
        }
    }

    #[test]
    fn unknown_value_falls_back_to_default_description() {
        let variant = ModelVariant::from_value_or_default("custom");
        assert_eq!(variant, ModelVariant::Inception);
        assert_eq!(
            variant.description(),
            "Creates complex, abstract dream patterns with intricate details"
        );
    }

    #[test]
    fn descriptions_differ_between_variants() {
        assert_ne!(
            ModelVariant::Inception.description(),
            ModelVariant::Vgg16.description()
        );
    }

    #[test]
    fn serde_uses_wire_value() {
        let json = serde_json::to_string(&ModelVariant::Vgg16).unwrap();
        assert_eq!(json, "\"vgg16\"");
        let parsed: ModelVariant = serde_json::from_str("\"inception\"").unwrap();
        assert_eq!(parsed, ModelVariant::Inception);
    }
}
