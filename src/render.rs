// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rendering a grid back into an image
//!
//! A carved grid can be rendered two ways: densely, one pixel per
//! surviving node, which gives the carved (narrower) image; or at its
//! original width, with each carved gap painted in from the nodes on
//! either side of it.

use crate::cq;
use crate::errors::SeamError;
use crate::node::Node;
use crate::pixelpairs::{average, gradient};
use crate::seamgrid::SeamGrid;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::fmt;
use std::str::FromStr;

/// How the pixels of a carved gap are coloured.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillMode {
    /// The colour of the node west of the gap.
    FlatLeft,
    /// The channel-wise mean of the nodes on either side.
    Averaged,
    /// A linear ramp between the nodes on either side.
    Gradient,
}

impl Default for FillMode {
    fn default() -> Self {
        FillMode::FlatLeft
    }
}

impl FillMode {
    // Colour of the gap pixel `step` places east of `left`, in a gap
    // reaching `right` after `steps` places.
    fn fill(self, left: &Rgba<u8>, right: &Rgba<u8>, step: u32, steps: u32) -> Rgba<u8> {
        match self {
            FillMode::FlatLeft => *left,
            FillMode::Averaged => average(left, right),
            FillMode::Gradient => gradient(left, right, step, steps),
        }
    }
}

impl FromStr for FillMode {
    type Err = SeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "flat" => Ok(FillMode::FlatLeft),
            "1" | "average" => Ok(FillMode::Averaged),
            "2" | "gradient" => Ok(FillMode::Gradient),
            _ => Err(SeamError::UnknownFillMode(s.to_string())),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FillMode::FlatLeft => "flat",
            FillMode::Averaged => "average",
            FillMode::Gradient => "gradient",
        })
    }
}

impl SeamGrid {
    /// Render the grid.  Without `fill_gaps` the image is as wide as the
    /// grid is now and `fill_mode` is ignored; with it, the image is as
    /// wide as the source was, and every carved pixel is painted
    /// according to `fill_mode`.
    pub fn render(&self, fill_gaps: bool, fill_mode: FillMode) -> RgbaImage {
        let width = cq!(fill_gaps, self.width_original(), self.width_physical());
        let height = self.height_physical();
        let mut imgbuf = ImageBuffer::new(width, height);

        for (y, start) in (0..height).zip(self.row_starts()) {
            let mut x = 0;
            for node in self.row(start).filter_map(|id| self.node(id)) {
                if x >= width {
                    break;
                }
                imgbuf.put_pixel(x, y, node.colour());
                x += 1;
                if !fill_gaps {
                    continue;
                }

                let right = node
                    .east()
                    .and_then(|id| self.node(id))
                    .map(Node::colour)
                    .unwrap_or_else(|| node.colour());
                let steps = node.skip_right() + 1;
                for step in 1..steps {
                    if x >= width {
                        break;
                    }
                    imgbuf.put_pixel(x, y, fill_mode.fill(&node.colour(), &right, step, steps));
                    x += 1;
                }
            }
        }
        imgbuf
    }
}
