// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Choosing which node a row gives up
//!
//! Each row is scanned from west to east, skipping its two end nodes,
//! and the interior node with the lowest score is the one carved.

use crate::errors::SeamError;
use crate::node::NodeId;
use crate::pixelpairs::{brightness, ColourDistance};
use crate::seamgrid::SeamGrid;
use std::fmt;
use std::str::FromStr;

/// How a row's interior nodes are scored.  Lowest score loses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// The darkest node: channel sum scaled by opacity.
    Brightness,
    /// The node that differs least from its west and east neighbors
    /// combined.
    NeighbourDifference,
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::Brightness
    }
}

impl FromStr for SelectionMode {
    type Err = SeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "brightness" => Ok(SelectionMode::Brightness),
            "1" | "difference" => Ok(SelectionMode::NeighbourDifference),
            _ => Err(SeamError::UnknownSelectionMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SelectionMode::Brightness => "brightness",
            SelectionMode::NeighbourDifference => "difference",
        })
    }
}

impl SeamGrid {
    /// Pick the interior node of the row beginning at `row_start` that
    /// scores lowest under `mode`.  Ties go to the westernmost node.
    /// Rows of fewer than three nodes have no interior and yield `None`.
    pub fn select_node(&self, row_start: NodeId, mode: SelectionMode) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for id in self.row(row_start).skip(1) {
            let node = self.node(id)?;
            // The row's last node has no east neighbor and is never
            // a candidate.
            let east = match node.east().and_then(|e| self.node(e)) {
                Some(east) => east,
                None => break,
            };
            let west = node.west().and_then(|w| self.node(w))?;

            let score = match mode {
                SelectionMode::Brightness => brightness(&node.colour()),
                SelectionMode::NeighbourDifference => {
                    node.colour().distance(&west.colour()) + node.colour().distance(&east.colour())
                }
            };
            if best.map_or(true, |(_, lowest)| score < lowest) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }
}
