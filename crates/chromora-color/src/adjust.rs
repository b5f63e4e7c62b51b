//! Lightness, saturation, and hue transforms.
//!
//! Every transform returns a new [`Color`]; the receiver is never modified.

use chromora_common::Color;

use crate::space;

/// Lab lightness (and LCh chroma) change per unit of `amount`.
pub const LAB_STEP: f64 = 18.0;

pub trait ColorAdjust: Sized {
    /// Raise Lab lightness by `amount` steps.
    fn brighten(self, amount: f64) -> Self;

    /// Raise LCh chroma by `amount` steps. Chroma never drops below zero.
    fn saturate(self, amount: f64) -> Self;

    /// Replace the HSL hue, keeping saturation and lightness.
    fn with_hue(self, degrees: f64) -> Self;

    /// HSL hue in degrees, `0.0` for achromatic colors.
    fn hue(&self) -> f64;

    fn darken(self, amount: f64) -> Self {
        self.brighten(-amount)
    }

    fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Shift the HSL hue by `degrees`, wrapping into `[0, 360)`.
    fn rotate_hue(self, degrees: f64) -> Self {
        let hue = self.hue();
        self.with_hue(hue + degrees)
    }
}

impl ColorAdjust for Color {
    fn brighten(self, amount: f64) -> Self {
        let mut lab = space::to_lab(self);
        lab.l += LAB_STEP * amount;
        Color {
            a: self.a,
            ..space::from_lab(lab)
        }
    }

    fn saturate(self, amount: f64) -> Self {
        let mut lch = space::to_lch(self);
        lch.chroma = (lch.chroma + LAB_STEP * amount).max(0.0);
        Color {
            a: self.a,
            ..space::from_lch(lch)
        }
    }

    fn with_hue(self, degrees: f64) -> Self {
        let hsl = space::to_hsl(self);
        let rotated = space::from_hsl(space::hsl(degrees, hsl.saturation, hsl.lightness));
        Color {
            a: self.a,
            ..rotated
        }
    }

    fn hue(&self) -> f64 {
        space::hsl_hue(&space::to_hsl(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURPLE: Color = Color::from_rgb(168, 85, 247);

    #[test]
    fn brighten_raises_lab_lightness() {
        let base = space::to_lab(PURPLE).l;
        let brighter = space::to_lab(PURPLE.brighten(1.0)).l;
        assert!(brighter > base + 10.0, "{base} -> {brighter}");
    }

    #[test]
    fn darken_is_inverse_direction() {
        let base = space::to_lab(PURPLE).l;
        assert!(space::to_lab(PURPLE.darken(1.0)).l < base);
        assert!(space::to_lab(PURPLE.darken(2.0)).l < space::to_lab(PURPLE.darken(1.0)).l);
    }

    #[test]
    fn brighten_white_saturates_at_white() {
        assert_eq!(Color::WHITE.brighten(3.0), Color::WHITE);
        assert_eq!(Color::BLACK.darken(3.0), Color::BLACK);
    }

    #[test]
    fn zero_amount_is_identity() {
        assert_eq!(PURPLE.brighten(0.0), PURPLE);
        assert_eq!(PURPLE.saturate(0.0), PURPLE);
    }

    #[test]
    fn desaturate_lowers_chroma() {
        let base = space::to_lch(PURPLE).chroma;
        assert!(space::to_lch(PURPLE.desaturate(0.4)).chroma < base);
    }

    #[test]
    fn desaturate_fully_yields_gray() {
        let gray = PURPLE.desaturate(10.0);
        let hsl = space::to_hsl(gray);
        assert!(hsl.saturation < 0.05, "expected near-gray, got {gray}");
    }

    #[test]
    fn with_hue_keeps_saturation_and_lightness() {
        let base = space::to_hsl(PURPLE);
        let shifted = space::to_hsl(PURPLE.with_hue(90.0));
        assert!((space::hsl_hue(&shifted) - 90.0).abs() < 1.0);
        assert!((shifted.saturation - base.saturation).abs() < 0.02);
        assert!((shifted.lightness - base.lightness).abs() < 0.02);
    }

    #[test]
    fn rotate_hue_wraps_past_360() {
        let base = space::from_hsl(space::hsl(350.0, 1.0, 0.5));
        let rotated = base.rotate_hue(45.0);
        assert!((rotated.hue() - 35.0).abs() < 1.0, "got {}", rotated.hue());
    }

    #[test]
    fn rotate_hue_wraps_below_zero() {
        let base = space::from_hsl(space::hsl(10.0, 1.0, 0.5));
        let rotated = base.rotate_hue(-45.0);
        assert!((rotated.hue() - 325.0).abs() < 1.0, "got {}", rotated.hue());
    }

    #[test]
    fn rotating_gray_stays_gray() {
        let gray = Color::from_rgb(128, 128, 128);
        assert_eq!(gray.rotate_hue(120.0), gray);
    }

    #[test]
    fn transforms_do_not_mutate_receiver() {
        let base = PURPLE;
        let _ = base.brighten(2.0).saturate(1.0).rotate_hue(33.0);
        assert_eq!(base, PURPLE);
    }
}
