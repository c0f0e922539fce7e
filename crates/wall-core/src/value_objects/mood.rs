//! Mood axes, score vectors, and the aura color blend
//!
//! Every message carries one non-negative score per axis, nominally summing
//! to 100. The sum is never validated or renormalized on write; only the
//! blend math normalizes, by dividing by the total weight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The four fixed mood axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoodAxis {
    Positive,
    Calm,
    Energetic,
    Deep,
}

impl MoodAxis {
    /// All axes in canonical order
    pub const ALL: [MoodAxis; 4] = [Self::Positive, Self::Calm, Self::Energetic, Self::Deep];

    /// Wire name of the axis
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Calm => "CALM",
            Self::Energetic => "ENERGETIC",
            Self::Deep => "DEEP",
        }
    }

    /// Fixed base color for this axis
    #[must_use]
    pub const fn base_color(self) -> Rgb {
        match self {
            Self::Positive => Rgb::new(255, 205, 94),
            Self::Calm => Rgb::new(94, 201, 255),
            Self::Energetic => Rgb::new(255, 94, 120),
            Self::Deep => Rgb::new(122, 94, 255),
        }
    }
}

impl fmt::Display for MoodAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex representation, e.g. `#ffcd5e`
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Per-axis score vector
///
/// Serializes as an object with exactly the four axis names as keys, the
/// wire shape the views and the classifier share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "POSITIVE")]
    pub positive: f64,
    #[serde(rename = "CALM")]
    pub calm: f64,
    #[serde(rename = "ENERGETIC")]
    pub energetic: f64,
    #[serde(rename = "DEEP")]
    pub deep: f64,
}

impl ScoreVector {
    /// Create a score vector, rejecting negative values
    pub fn new(positive: f64, calm: f64, energetic: f64, deep: f64) -> Result<Self, DomainError> {
        let vector = Self {
            positive,
            calm,
            energetic,
            deep,
        };
        for axis in MoodAxis::ALL {
            let value = vector.get(axis);
            if value < 0.0 || !value.is_finite() {
                return Err(DomainError::NegativeScore {
                    axis: axis.as_str(),
                });
            }
        }
        Ok(vector)
    }

    /// Get the score for a single axis
    #[must_use]
    pub const fn get(&self, axis: MoodAxis) -> f64 {
        match axis {
            MoodAxis::Positive => self.positive,
            MoodAxis::Calm => self.calm,
            MoodAxis::Energetic => self.energetic,
            MoodAxis::Deep => self.deep,
        }
    }

    /// Sum of all axis scores
    #[must_use]
    pub fn total(&self) -> f64 {
        MoodAxis::ALL.iter().map(|&a| self.get(a)).sum()
    }

    /// The highest-scoring axis (ties resolve in canonical axis order)
    #[must_use]
    pub fn dominant(&self) -> MoodAxis {
        let mut best = MoodAxis::Positive;
        for axis in MoodAxis::ALL {
            if self.get(axis) > self.get(best) {
                best = axis;
            }
        }
        best
    }

    /// Whether every axis carries the same score (the classifier's
    /// middle-ground refusal shape)
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        MoodAxis::ALL
            .iter()
            .all(|&a| (self.get(a) - self.positive).abs() < f64::EPSILON)
    }

    /// Blend the four base colors weighted by this vector.
    ///
    /// Per-channel weighted average with weights `score / 100`; dividing by
    /// the total weight keeps vectors that do not sum to 100 (the fallback
    /// path) in gamut. An all-zero vector blends to the unweighted mean.
    #[must_use]
    pub fn aura(&self) -> Rgb {
        let total = self.total();
        let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
        for axis in MoodAxis::ALL {
            let weight = if total > 0.0 {
                self.get(axis) / total
            } else {
                0.25
            };
            let base = axis.base_color();
            r += weight * f64::from(base.r);
            g += weight * f64::from(base.g);
            b += weight * f64::from(base.b);
        }
        Rgb::new(
            r.round().clamp(0.0, 255.0) as u8,
            g.round().clamp(0.0, 255.0) as u8,
            b.round().clamp(0.0, 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_wire_names() {
        assert_eq!(MoodAxis::Positive.as_str(), "POSITIVE");
        assert_eq!(MoodAxis::Deep.as_str(), "DEEP");
        let json = serde_json::to_string(&MoodAxis::Energetic).unwrap();
        assert_eq!(json, "\"ENERGETIC\"");
    }

    #[test]
    fn test_score_vector_rejects_negative() {
        assert!(ScoreVector::new(50.0, -1.0, 25.0, 25.0).is_err());
        assert!(ScoreVector::new(50.0, 25.0, 25.0, 0.0).is_ok());
    }

    #[test]
    fn test_score_vector_wire_shape() {
        let v = ScoreVector::new(70.0, 10.0, 15.0, 5.0).unwrap();
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["POSITIVE"], 70.0);
        assert_eq!(json["CALM"], 10.0);
        assert_eq!(json["ENERGETIC"], 15.0);
        assert_eq!(json["DEEP"], 5.0);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_dominant_axis() {
        let v = ScoreVector::new(10.0, 60.0, 20.0, 10.0).unwrap();
        assert_eq!(v.dominant(), MoodAxis::Calm);

        // Ties resolve in canonical order
        let v = ScoreVector::new(25.0, 25.0, 25.0, 25.0).unwrap();
        assert_eq!(v.dominant(), MoodAxis::Positive);
    }

    #[test]
    fn test_is_uniform() {
        assert!(ScoreVector::new(25.0, 25.0, 25.0, 25.0).unwrap().is_uniform());
        assert!(!ScoreVector::new(40.0, 25.0, 20.0, 15.0).unwrap().is_uniform());
    }

    #[test]
    fn test_aura_pure_axis_is_base_color() {
        for axis in MoodAxis::ALL {
            let v = ScoreVector::new(
                if axis == MoodAxis::Positive { 100.0 } else { 0.0 },
                if axis == MoodAxis::Calm { 100.0 } else { 0.0 },
                if axis == MoodAxis::Energetic { 100.0 } else { 0.0 },
                if axis == MoodAxis::Deep { 100.0 } else { 0.0 },
            )
            .unwrap();
            assert_eq!(v.aura(), axis.base_color());
        }
    }

    #[test]
    fn test_aura_uniform_is_mean_of_bases() {
        let v = ScoreVector::new(25.0, 25.0, 25.0, 25.0).unwrap();
        let mean_r = MoodAxis::ALL
            .iter()
            .map(|a| f64::from(a.base_color().r))
            .sum::<f64>()
            / 4.0;
        assert_eq!(v.aura().r, mean_r.round() as u8);
    }

    #[test]
    fn test_aura_unnormalized_vector_stays_in_gamut() {
        // Fallback vectors need not sum to 100
        let v = ScoreVector::new(40.0, 40.0, 40.0, 40.0).unwrap();
        let aura = v.aura();
        // Weighted average of the bases, never channel overflow
        assert_eq!(aura, ScoreVector::new(25.0, 25.0, 25.0, 25.0).unwrap().aura());
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(255, 205, 94).to_hex(), "#ffcd5e");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }
}
