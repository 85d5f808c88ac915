use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::catalog::{self, BodyDesc, BodyFacts};
use crate::config::OrreryConfig;
use crate::error::ManifestError;
use crate::orbit::{ElementsDesc, OrbitalElements};

/// System manifest describing every orbiting body and the simulation config.
/// Loaded from a JSON file at runtime, or built from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemManifest {
    /// Orbiting bodies in display order.
    pub bodies: Vec<BodyDesc>,
    /// Facts for the central star.
    pub sun: BodyFacts,
    pub config: OrreryConfig,
}

/// Unvalidated document shape. Elements stay raw so an invalid body can be
/// reported by name.
#[derive(Debug, Deserialize)]
struct RawManifest {
    bodies: Vec<RawBody>,
    #[serde(default = "catalog::sun_facts")]
    sun: BodyFacts,
    #[serde(default)]
    config: OrreryConfig,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    name: String,
    elements: ElementsDesc,
    #[serde(default)]
    facts: BodyFacts,
}

impl SystemManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json).map_err(ManifestError::Parse)?;
        if raw.bodies.is_empty() {
            return Err(ManifestError::Empty);
        }
        raw.config.validate().map_err(|source| {
            log::warn!("rejecting manifest config: {source}");
            ManifestError::InvalidConfig(source)
        })?;

        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(raw.bodies.len());
        for body in raw.bodies {
            if catalog::name_matches(&body.name, catalog::SUN_NAME) {
                return Err(ManifestError::ReservedName(body.name));
            }
            if !seen.insert(body.name.to_ascii_lowercase()) {
                return Err(ManifestError::DuplicateName(body.name));
            }
            let elements = OrbitalElements::try_from(body.elements).map_err(|source| {
                log::warn!("rejecting body `{}`: {}", body.name, source);
                ManifestError::InvalidBody {
                    name: body.name.clone(),
                    source,
                }
            })?;
            bodies.push(BodyDesc {
                name: body.name,
                elements,
                facts: body.facts,
            });
        }

        log::info!("manifest: {} bodies loaded", bodies.len());
        Ok(Self {
            bodies,
            sun: raw.sun,
            config: raw.config,
        })
    }

    /// Serialize back to JSON (elements in their wire form).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SystemManifest {
    fn default() -> Self {
        Self {
            bodies: catalog::default_bodies(),
            sun: catalog::sun_facts(),
            config: OrreryConfig::default(),
        }
    }
}
