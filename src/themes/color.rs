//! Theme colors.

use serde::{Deserialize, Serialize};

/// An RGBA color with components in `[0, 1]`.
///
/// The engine never interprets colors; they are carried for whoever
/// draws the cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaColor {
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    pub const ORANGE: Self = Self::rgb(1.0, 0.584, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.8, 0.0);
    pub const GREEN: Self = Self::rgb(0.204, 0.78, 0.349);
    pub const BLUE: Self = Self::rgb(0.0, 0.478, 1.0);
    pub const PURPLE: Self = Self::rgb(0.686, 0.322, 0.871);

    /// Create a color, clamping every component into `[0, 1]`.
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
        }
    }

    /// An opaque color.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::RED
    }
}

fn unit(component: f64) -> f64 {
    if component.is_nan() {
        0.0
    } else {
        component.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let color = RgbaColor::new(1.5, -0.2, f64::NAN, 0.5);
        assert_eq!(color, RgbaColor::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&RgbaColor::rgb(0.0, 0.5, 1.0)).unwrap();
        assert_eq!(json, r#"{"red":0.0,"green":0.5,"blue":1.0,"alpha":1.0}"#);
    }
}
