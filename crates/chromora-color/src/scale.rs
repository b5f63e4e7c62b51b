//! Palette resizing through a perceptual (LCh) color scale.
//!
//! Control points sit evenly on `[0, 1]` in input order. Between two
//! neighbours, lightness and chroma move linearly and hue takes the shorter
//! way around the wheel ([`palette::Mix`] on LCh). Interpolating in LCh
//! keeps midpoints saturated where RGB blending would pass through gray.

use chromora_common::Color;
use palette::Mix;
use tracing::debug;

use crate::space::{self, Lch};

/// Lightness at or below which an achromatic stop counts as black.
const BLACK_LIGHTNESS: f64 = 1e-4;

/// A color scale over `[0, 1]` built from ordered control colors.
#[derive(Debug, Clone)]
pub struct LchScale {
    stops: Vec<Lch>,
}

impl LchScale {
    /// Build a scale. Returns `None` for an empty control list.
    pub fn new(colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self {
            stops: colors.iter().map(|c| space::to_lch(*c)).collect(),
        })
    }

    /// The color at position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color {
        let last = self.stops.len() - 1;
        if last == 0 {
            return space::from_lch(self.stops[0]);
        }

        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let f = pos - i as f64;

        // Exact stops come back untouched; a black stop mixed at its own end
        // would otherwise carry its neighbour's chroma.
        let lch = if f <= 0.0 {
            self.stops[i]
        } else if f >= 1.0 {
            self.stops[i + 1]
        } else {
            mix(self.stops[i], self.stops[i + 1], f)
        };
        space::from_lch(lch)
    }

    /// `count` evenly spaced samples, inclusive of both ends.
    ///
    /// A single sample is taken from the middle of the scale.
    pub fn colors(&self, count: usize) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.5)],
            n => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Interpolate between two LCh points. `f` in `[0, 1]`.
///
/// An achromatic end borrows the other end's hue so the blend does not
/// swing through red (hue 0). A black end also borrows its chroma, so
/// ramps out of black stay saturated.
pub fn mix(from: Lch, to: Lch, f: f64) -> Lch {
    let (from, to) = match (space::is_achromatic(&from), space::is_achromatic(&to)) {
        (true, false) => (borrow_hue(from, &to), to),
        (false, true) => (from, borrow_hue(to, &from)),
        _ => (from, to),
    };
    from.mix(to, f)
}

fn borrow_hue(mut gray: Lch, chromatic: &Lch) -> Lch {
    gray.hue = chromatic.hue;
    if gray.l <= BLACK_LIGHTNESS {
        gray.chroma = chromatic.chroma;
    }
    gray
}

/// Resample `colors` to exactly `count` colors.
///
/// - `count == 0` or empty input yields an empty list.
/// - `count == colors.len()` returns the input unchanged.
/// - Otherwise samples an [`LchScale`] through the input.
pub fn resize(colors: &[Color], count: usize) -> Vec<Color> {
    if colors.is_empty() || count == 0 {
        return Vec::new();
    }
    if colors.len() == count {
        return colors.to_vec();
    }

    debug!(from = colors.len(), to = count, "resizing palette");
    LchScale::new(colors)
        .map(|scale| scale.colors(count))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_rgb(255, 0, 0);
    const GREEN: Color = Color::from_rgb(0, 255, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 255);

    fn channel_distance(a: Color, b: Color) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn resize_zero_or_empty_is_empty() {
        assert!(resize(&[RED, BLUE], 0).is_empty());
        assert!(resize(&[], 5).is_empty());
        assert!(resize(&[], 0).is_empty());
    }

    #[test]
    fn resize_same_length_is_identity() {
        let input = vec![RED, GREEN, BLUE];
        assert_eq!(resize(&input, 3), input);
    }

    #[test]
    fn resize_returns_requested_count() {
        let input = [RED, GREEN, BLUE];
        for n in 1..=12 {
            assert_eq!(resize(&input, n).len(), n);
        }
    }

    #[test]
    fn resize_keeps_endpoints() {
        let out = resize(&[RED, GREEN, BLUE], 5);
        assert_eq!(out.len(), 5);
        assert!(channel_distance(out[0], RED) <= 1, "first was {}", out[0]);
        assert!(channel_distance(out[4], BLUE) <= 1, "last was {}", out[4]);
    }

    #[test]
    fn resize_hits_interior_control_point() {
        // 5 samples over 3 stops land exactly on the middle stop.
        let out = resize(&[RED, GREEN, BLUE], 5);
        assert!(channel_distance(out[2], GREEN) <= 1, "middle was {}", out[2]);
    }

    #[test]
    fn resize_single_sample_is_midpoint() {
        let out = resize(&[RED, GREEN, BLUE], 1);
        assert_eq!(out.len(), 1);
        assert!(channel_distance(out[0], GREEN) <= 1);
    }

    #[test]
    fn resize_single_color_repeats_it() {
        let out = resize(&[BLUE], 4);
        assert_eq!(out, vec![BLUE; 4]);
    }

    #[test]
    fn resize_preserves_order() {
        let out = resize(&[Color::BLACK, Color::WHITE], 6);
        let lightness: Vec<f64> = out.iter().map(|c| space::to_lab(*c).l).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] < pair[1], "{lightness:?}");
        }
    }

    #[test]
    fn lch_midpoint_is_not_muddy() {
        // RGB blending red->blue gives a dull (128,0,128). LCh keeps chroma up.
        let mid = LchScale::new(&[RED, BLUE]).unwrap().sample(0.5);
        let rgb_mid_chroma = space::to_lch(Color::from_rgb(128, 0, 128)).chroma;
        assert!(space::to_lch(mid).chroma > rgb_mid_chroma, "mid was {mid}");
    }

    #[test]
    fn mix_takes_short_way_around_hue() {
        let a = Lch::new(50.0, 40.0, 350.0);
        let b = Lch::new(50.0, 40.0, 10.0);
        let h = space::lch_hue(&mix(a, b, 0.5)).unwrap();
        assert!(h < 1.0 || h > 359.0, "got {h}");
    }

    #[test]
    fn mix_borrows_hue_from_chromatic_end() {
        let gray = Lch::new(50.0, 0.0, 0.0);
        let blue = Lch::new(30.0, 130.0, 300.0);
        let m = mix(gray, blue, 0.25);
        assert!((space::lch_hue(&m).unwrap() - 300.0).abs() < 1e-6);
        assert!((m.chroma - 32.5).abs() < 1e-9);
        assert!((m.l - 45.0).abs() < 1e-9);
    }

    #[test]
    fn mix_from_black_keeps_chroma() {
        let black = space::to_lch(Color::BLACK);
        let red = space::to_lch(RED);
        let m = mix(black, red, 0.5);
        assert!((m.chroma - red.chroma).abs() < 1e-9);
        assert!((m.l - red.l / 2.0).abs() < 1e-6);

        let m = mix(red, black, 0.5);
        assert!((m.chroma - red.chroma).abs() < 1e-9);
    }

    #[test]
    fn resize_out_of_black_stays_saturated() {
        // Linear chroma would give a muddy #7a1b0c here.
        let out = resize(&[Color::BLACK, RED], 3);
        assert_eq!(out[0], Color::BLACK);
        assert_eq!(out[2], RED);
        let mid = out[1];
        assert!(mid.r > 140, "mid was {mid}");
        assert_eq!((mid.g, mid.b), (0, 0), "mid was {mid}");
    }

    #[test]
    fn mix_from_white_interpolates_chroma() {
        let white = space::to_lch(Color::WHITE);
        let red = space::to_lch(RED);
        let m = mix(white, red, 0.5);
        assert!((m.chroma - red.chroma / 2.0).abs() < 0.01);
    }

    #[test]
    fn sample_clamps_t() {
        let scale = LchScale::new(&[RED, BLUE]).unwrap();
        assert_eq!(scale.sample(-1.0), scale.sample(0.0));
        assert_eq!(scale.sample(2.0), scale.sample(1.0));
    }

    #[test]
    fn empty_scale_is_none() {
        assert!(LchScale::new(&[]).is_none());
    }
}
