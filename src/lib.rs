// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving on a linked lattice of pixels.
//!
//! An image is loaded into a [`SeamGrid`], carved one interior node per
//! row at a time, and rendered back out either at its carved width or
//! at its original width with the carved gaps painted in.

mod ternary;

pub mod errors;
pub use errors::SeamError;

pub mod node;
pub use node::{Node, NodeId};

pub mod pixelpairs;
pub use pixelpairs::ColourDistance;

pub mod seamgrid;
pub use seamgrid::SeamGrid;

pub mod selection;
pub use selection::SelectionMode;

pub mod render;
pub use render::FillMode;
