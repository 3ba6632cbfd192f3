// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel arithmetic
//!
//! The colour operations the grid needs: a brightness score for a
//! single pixel, the distance between two pixels, and the two ways of
//! blending a pair of pixels to fill a carved gap.  All four channels
//! are treated as plain linear values.

use image::Rgba;
use itertools::zip;
use num_traits::clamp;

/// A metric between two colours.
pub trait ColourDistance {
    fn distance(&self, other: &Self) -> f64;
}

// This is the Euclidean distance in RGB space:
//
//      d = √((Δr)² + (Δg)² + (Δb)²)
//
// Alpha doesn't take part.
impl ColourDistance for Rgba<u8> {
    fn distance(&self, other: &Self) -> f64 {
        zip(&self.0[..3], &other.0[..3])
            .map(|(c1, c2)| {
                let d = f64::from(*c1) - f64::from(*c2);
                d * d
            })
            .fold(0.0, |a, c| a + c)
            .sqrt()
    }
}

/// The sum of the colour channels, scaled by opacity.  A fully
/// transparent pixel is as dark as it gets.
#[inline]
pub fn brightness(p: &Rgba<u8>) -> f64 {
    let [r, g, b, a] = p.0;
    (f64::from(r) + f64::from(g) + f64::from(b)) * (f64::from(a) / 255.0)
}

/// The per-channel mean of two pixels.  Integer division, so halves
/// round down.
pub fn average(left: &Rgba<u8>, right: &Rgba<u8>) -> Rgba<u8> {
    let mut out = [0u8; 4];
    zip(&mut out, zip(&left.0, &right.0))
        .for_each(|(o, (l, r))| *o = ((u16::from(*l) + u16::from(*r)) / 2) as u8);
    Rgba(out)
}

/// Linear interpolation from `left` toward `right`, `step` of `steps`
/// of the way along.  Step zero is `left` itself, step `steps` would be
/// `right`; gap pixels land strictly between.  Fractional channel
/// values are truncated, the same as `average`.
pub fn gradient(left: &Rgba<u8>, right: &Rgba<u8>, step: u32, steps: u32) -> Rgba<u8> {
    let (k, n) = (i64::from(step), i64::from(steps));
    let mut out = [0u8; 4];
    zip(&mut out, zip(&left.0, &right.0)).for_each(|(o, (l, r))| {
        let (l, r) = (i64::from(*l), i64::from(*r));
        // l + k/n * (r - l), truncated, in exact integers.
        let c = clamp((l * n + k * (r - l)) / n, 0, 255);
        *o = num_traits::cast::<i64, u8>(c).unwrap_or(u8::max_value());
    });
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_scales_by_alpha() {
        assert_eq!(brightness(&Rgba([10, 20, 30, 255])), 60.0);
        assert_eq!(brightness(&Rgba([10, 20, 30, 0])), 0.0);
    }

    #[test]
    fn distance_ignores_alpha() {
        let a = Rgba([0, 0, 0, 0]);
        let b = Rgba([3, 4, 0, 255]);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(b.distance(&b), 0.0);
    }

    #[test]
    fn average_rounds_down() {
        let avg = average(&Rgba([0, 255, 10, 255]), &Rgba([1, 0, 20, 254]));
        assert_eq!(avg, Rgba([0, 127, 15, 254]));
    }

    #[test]
    fn gradient_thirds() {
        let left = Rgba([0, 30, 90, 255]);
        let right = Rgba([30, 0, 0, 255]);
        assert_eq!(gradient(&left, &right, 1, 3), Rgba([10, 20, 60, 255]));
        assert_eq!(gradient(&left, &right, 2, 3), Rgba([20, 10, 30, 255]));
        assert_eq!(gradient(&left, &right, 0, 3), left);
    }

    #[test]
    fn gradient_truncates() {
        let left = Rgba([0, 10, 7, 255]);
        let right = Rgba([10, 0, 0, 255]);
        assert_eq!(gradient(&left, &right, 1, 3), Rgba([3, 6, 4, 255]));
        assert_eq!(gradient(&left, &right, 2, 3), Rgba([6, 3, 2, 255]));
    }
}
