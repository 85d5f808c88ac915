//! Built-in solar system — the nine bodies of the classic viewer plus the Sun.
//!
//! Distances are AU × [`SCALE_FACTOR`] scene units; periods are in days, which
//! the simulation clock treats as plain time units. Display radii are
//! exaggerated so every planet stays visible.

use serde::{Deserialize, Serialize};

use crate::orbit::OrbitalElements;

/// Scene units per astronomical unit.
pub const SCALE_FACTOR: f64 = 25.0;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLUTO: usize = 8;
pub const PLANET_COUNT: usize = 9;

/// Names for UI display (indexed by planet constant).
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
/// The Sun sits at the origin and does not move.
pub const SUN_RADIUS: f64 = 5.0;

/// Body names compare case-insensitively over ASCII only.
pub fn name_matches(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

// ── Facts ────────────────────────────────────────────────────────────

/// Descriptive facts shown in the info panel for a body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyFacts {
    pub intro: String,
    pub mass: String,
    pub radius: String,
    pub rotation: String,
    pub atmosphere: String,
    pub moons: u32,
}

impl BodyFacts {
    fn new(intro: &str, mass: &str, radius: &str, rotation: &str, atmosphere: &str, moons: u32) -> Self {
        Self {
            intro: intro.to_string(),
            mass: mass.to_string(),
            radius: radius.to_string(),
            rotation: rotation.to_string(),
            atmosphere: atmosphere.to_string(),
            moons,
        }
    }
}

/// One orbiting body: name, elements and facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    pub name: String,
    pub elements: OrbitalElements,
    #[serde(default)]
    pub facts: BodyFacts,
}

/// Raw per-planet constants:
/// (display radius, semi-major axis AU, eccentricity, inclination°, orbital period, rotation period).
const PLANET_CONSTANTS: [(f64, f64, f64, f64, f64, f64); PLANET_COUNT] = [
    (0.2, 0.387, 0.20563, 7.0, 88.0, 58.646),        // Mercury
    (0.4, 0.723, 0.006772, 3.86, 224.701, 243.022),  // Venus
    (0.5, 1.0, 0.016708, 7.155, 365.25638, 1.0),     // Earth
    (0.3, 1.524, 0.0934, 5.65, 686.971, 1.025),      // Mars
    (0.7, 5.204, 0.0489, 6.09, 4332.59, 0.415),      // Jupiter
    (0.6, 9.582, 0.0565, 5.51, 10759.22, 0.444),     // Saturn
    (0.5, 19.218, 0.046381, 6.48, 30688.5, 0.718),   // Uranus
    (0.4, 30.070, 0.009456, 6.43, 60182.0, 0.671),   // Neptune
    (0.2, 39.48, 0.2488, 11.88, 90560.0, 0.67),      // Pluto
];

/// Validated elements for all nine planets.
pub fn planet_elements() -> [OrbitalElements; PLANET_COUNT] {
    PLANET_CONSTANTS.map(|(radius, a_au, e, incl, period, rotation)| {
        OrbitalElements::new(radius, a_au * SCALE_FACTOR, e, incl, period, rotation)
            .expect("built-in planet constants are in range")
    })
}

/// Facts for the Sun.
pub fn sun_facts() -> BodyFacts {
    BodyFacts::new(
        "The Sun is the center of our solar system and provides heat and light to all the planets.",
        "1.989 x 10^30 kg",
        "696,340 km",
        "25 days",
        "Hydrogen and Helium",
        0,
    )
}

/// Facts per planet (indexed by planet constant).
pub fn planet_facts() -> [BodyFacts; PLANET_COUNT] {
    [
        BodyFacts::new(
            "Mercury is the closest planet to the Sun and has a surface temperature that varies greatly between day and night.",
            "3.30 x 10^23 kg", "2,440 km", "58.6 days", "Thin", 0,
        ),
        BodyFacts::new(
            "Venus is the second planet from the Sun and is similar in structure to Earth, but it has a thick, toxic atmosphere.",
            "4.87 x 10^24 kg", "6,052 km", "243 days", "Carbon dioxide, Nitrogen, and Argon", 0,
        ),
        BodyFacts::new(
            "Earth is the third planet from the Sun and the only known planet to support life.",
            "5.97 x 10^24 kg", "6,371 km", "24 hours", "Nitrogen, Oxygen, and Argon", 1,
        ),
        BodyFacts::new(
            "Mars is the fourth planet from the Sun and is known for its reddish color due to iron oxide on its surface.",
            "6.42 x 10^23 kg", "3,390 km", "24.6 hours", "Carbon dioxide, Nitrogen, and Argon", 2,
        ),
        BodyFacts::new(
            "Jupiter is the largest planet in our solar system, known for its Great Red Spot and many moons.",
            "1.90 x 10^27 kg", "69,911 km", "9.9 hours", "Hydrogen and Helium", 80,
        ),
        BodyFacts::new(
            "Saturn is famous for its stunning ring system, composed of ice and rock particles.",
            "5.68 x 10^26 kg", "58,232 km", "10.7 hours", "Hydrogen and Helium", 83,
        ),
        BodyFacts::new(
            "Uranus is the seventh planet from the Sun and has a unique blue color due to methane in its atmosphere.",
            "8.68 x 10^25 kg", "25,362 km", "17.2 hours", "Hydrogen and Helium", 27,
        ),
        BodyFacts::new(
            "Neptune is the eighth planet from the Sun and is known for its strong winds and dark blue color.",
            "1.02 x 10^26 kg", "24,622 km", "16.1 hours", "Hydrogen and Helium", 14,
        ),
        BodyFacts::new(
            "Pluto, now classified as a dwarf planet, was once considered the ninth planet in our solar system.",
            "1.31 x 10^22 kg", "1,188 km", "6.39 days", "Nitrogen and Methane", 5,
        ),
    ]
}

/// The full built-in body list, ordered by planet constant.
pub fn default_bodies() -> Vec<BodyDesc> {
    planet_elements()
        .into_iter()
        .zip(planet_facts())
        .zip(PLANET_NAMES)
        .map(|((elements, facts), name)| BodyDesc {
            name: name.to_string(),
            elements,
            facts,
        })
        .collect()
}
