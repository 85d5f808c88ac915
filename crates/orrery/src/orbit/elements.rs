use serde::{Deserialize, Serialize};

use crate::error::InvalidOrbitalElements;

/// Classical orbital elements plus the display/spin properties of one body.
///
/// Always validated: the only way to build one is [`OrbitalElements::new`]
/// (or deserializing, which goes through the same checks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementsDesc", into = "ElementsDesc")]
pub struct OrbitalElements {
    radius: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination_degrees: f64,
    orbital_period: f64,
    rotation_period: f64,
}

/// Unvalidated wire form of [`OrbitalElements`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementsDesc {
    /// Display radius in scene units.
    pub radius: f64,
    /// Semi-major axis in scene units.
    pub semi_major_axis: f64,
    /// Eccentricity, `[0, 1)`.
    pub eccentricity: f64,
    /// Inclination of the orbital plane (degrees).
    #[serde(default)]
    pub inclination_degrees: f64,
    /// Time units per revolution.
    pub orbital_period: f64,
    /// Time units per self-rotation. Negative spins retrograde.
    pub rotation_period: f64,
}

impl OrbitalElements {
    pub fn new(
        radius: f64,
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_degrees: f64,
        orbital_period: f64,
        rotation_period: f64,
    ) -> Result<Self, InvalidOrbitalElements> {
        let fields = [
            ("radius", radius),
            ("semi_major_axis", semi_major_axis),
            ("eccentricity", eccentricity),
            ("inclination_degrees", inclination_degrees),
            ("orbital_period", orbital_period),
            ("rotation_period", rotation_period),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidOrbitalElements::NonFinite { field });
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(InvalidOrbitalElements::Eccentricity(eccentricity));
        }
        if semi_major_axis <= 0.0 {
            return Err(InvalidOrbitalElements::SemiMajorAxis(semi_major_axis));
        }
        if orbital_period <= 0.0 {
            return Err(InvalidOrbitalElements::OrbitalPeriod(orbital_period));
        }
        if rotation_period == 0.0 {
            return Err(InvalidOrbitalElements::RotationPeriod(rotation_period));
        }
        if radius <= 0.0 {
            return Err(InvalidOrbitalElements::Radius(radius));
        }

        Ok(Self {
            radius,
            semi_major_axis,
            eccentricity,
            inclination_degrees,
            orbital_period,
            rotation_period,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination_degrees(&self) -> f64 {
        self.inclination_degrees
    }

    pub fn inclination_radians(&self) -> f64 {
        self.inclination_degrees.to_radians()
    }

    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Closest approach to the focus, `a·(1 − e)`.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, `a·(1 + e)`.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

impl TryFrom<ElementsDesc> for OrbitalElements {
    type Error = InvalidOrbitalElements;

    fn try_from(d: ElementsDesc) -> Result<Self, Self::Error> {
        Self::new(
            d.radius,
            d.semi_major_axis,
            d.eccentricity,
            d.inclination_degrees,
            d.orbital_period,
            d.rotation_period,
        )
    }
}

impl From<OrbitalElements> for ElementsDesc {
    fn from(el: OrbitalElements) -> Self {
        Self {
            radius: el.radius,
            semi_major_axis: el.semi_major_axis,
            eccentricity: el.eccentricity,
            inclination_degrees: el.inclination_degrees,
            orbital_period: el.orbital_period,
            rotation_period: el.rotation_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_planetary_elements() {
        let el = OrbitalElements::new(0.4, 18.075, 0.006772, 3.86, 224.701, -243.022).unwrap();
        assert_eq!(el.rotation_period(), -243.022);
        assert!((el.inclination_radians() - 3.86_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn rejects_unbound_eccentricity() {
        assert_eq!(
            OrbitalElements::new(1.0, 10.0, 1.0, 0.0, 10.0, 1.0),
            Err(InvalidOrbitalElements::Eccentricity(1.0))
        );
        assert_eq!(
            OrbitalElements::new(1.0, 10.0, -0.1, 0.0, 10.0, 1.0),
            Err(InvalidOrbitalElements::Eccentricity(-0.1))
        );
    }

    #[test]
    fn accepts_eccentricity_just_below_one() {
        assert!(OrbitalElements::new(1.0, 10.0, 0.999, 0.0, 10.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_degenerate_sizes_and_periods() {
        assert_eq!(
            OrbitalElements::new(1.0, 0.0, 0.1, 0.0, 10.0, 1.0),
            Err(InvalidOrbitalElements::SemiMajorAxis(0.0))
        );
        assert_eq!(
            OrbitalElements::new(1.0, 10.0, 0.1, 0.0, 0.0, 1.0),
            Err(InvalidOrbitalElements::OrbitalPeriod(0.0))
        );
        assert_eq!(
            OrbitalElements::new(1.0, 10.0, 0.1, 0.0, 10.0, 0.0),
            Err(InvalidOrbitalElements::RotationPeriod(0.0))
        );
        assert_eq!(
            OrbitalElements::new(-1.0, 10.0, 0.1, 0.0, 10.0, 1.0),
            Err(InvalidOrbitalElements::Radius(-1.0))
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            OrbitalElements::new(1.0, 10.0, 0.1, f64::NAN, 10.0, 1.0),
            Err(InvalidOrbitalElements::NonFinite { field: "inclination_degrees" })
        );
    }

    #[test]
    fn apsides() {
        let el = OrbitalElements::new(0.5, 25.0, 0.016708, 7.155, 365.25638, 1.0).unwrap();
        assert!((el.periapsis() - 24.5823).abs() < 1e-9);
        assert!((el.apoapsis() - 25.4177).abs() < 1e-9);
    }

    #[test]
    fn deserialize_validates() {
        let ok = r#"{ "radius": 0.3, "semi_major_axis": 38.1, "eccentricity": 0.0934,
                      "orbital_period": 686.971, "rotation_period": 1.025 }"#;
        let el: OrbitalElements = serde_json::from_str(ok).unwrap();
        assert_eq!(el.inclination_degrees(), 0.0);

        let bad = r#"{ "radius": 0.3, "semi_major_axis": 38.1, "eccentricity": 1.5,
                       "orbital_period": 686.971, "rotation_period": 1.025 }"#;
        let err = serde_json::from_str::<OrbitalElements>(bad).unwrap_err();
        assert!(err.to_string().contains("eccentricity"), "{err}");
    }
}
