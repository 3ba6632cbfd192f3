// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every failure here is a broken precondition.  The grid is never
//! left half-mutated when one of these comes back.

use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum SeamError {
    /// A grid needs at least one pixel to anchor on.
    #[fail(display = "cannot build a grid from a {}x{} raster", width, height)]
    EmptyRaster { width: u32, height: u32 },

    /// Some row is too short to give up an interior node.
    #[fail(
        display = "row {} has {} nodes, but carving needs at least {}",
        row, found, needed
    )]
    RowTooNarrow { row: u32, found: u32, needed: u32 },

    #[fail(display = "cannot copy into a grid that is not empty")]
    TargetNotEmpty,

    #[fail(display = "unknown selection mode: {}", _0)]
    UnknownSelectionMode(String),

    #[fail(display = "unknown fill mode: {}", _0)]
    UnknownFillMode(String),
}
