// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice nodes
//!
//! A node is one pixel of the lattice plus pointers to its four
//! neighbors.  In lieu of pointers, which Rust doesn't care for when
//! they go around in circles, every link is an index into the arena
//! owned by the grid.

use image::Rgba;
use std::fmt;

/// A stable address for a node within one grid's arena.  An id is
/// only meaningful to the grid that handed it out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One cell of the lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) colour: Rgba<u8>,
    pub(crate) north: Option<NodeId>,
    pub(crate) south: Option<NodeId>,
    pub(crate) east: Option<NodeId>,
    pub(crate) west: Option<NodeId>,
    // How many original columns have been carved out of the gap on
    // each side of this node.
    pub(crate) skip_left: u32,
    pub(crate) skip_right: u32,
}

impl Node {
    pub(crate) fn new(colour: Rgba<u8>) -> Self {
        Node {
            colour,
            north: None,
            south: None,
            east: None,
            west: None,
            skip_left: 0,
            skip_right: 0,
        }
    }

    pub fn colour(&self) -> Rgba<u8> {
        self.colour
    }

    /// Repaint this node.  Colour is the only thing that may be changed
    /// from outside the grid; links and skips belong to the carver.
    pub fn set_colour(&mut self, colour: Rgba<u8>) {
        self.colour = colour
    }

    pub fn north(&self) -> Option<NodeId> {
        self.north
    }

    pub fn south(&self) -> Option<NodeId> {
        self.south
    }

    pub fn east(&self) -> Option<NodeId> {
        self.east
    }

    pub fn west(&self) -> Option<NodeId> {
        self.west
    }

    pub fn skip_left(&self) -> u32 {
        self.skip_left
    }

    pub fn skip_right(&self) -> u32 {
        self.skip_right
    }

    /// True for the first node of a row.
    pub fn is_row_start(&self) -> bool {
        self.west.is_none()
    }

    /// True for the last node of a row.
    pub fn is_row_end(&self) -> bool {
        self.east.is_none()
    }
}
