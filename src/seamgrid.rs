// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam grid
//!
//! An image turned into a lattice of nodes, each linked to its
//! neighbors north, south, east and west.  Carving unlinks one
//! interior node from every row and leaves its neighbors holding
//! hands across the gap; the neighbors remember how wide the gap has
//! become so the original width can always be recovered.
//!
//! The nodes live in an arena owned by the grid.  A carved node's slot
//! is tombstoned rather than reused; `clear` and `copy_from` are the
//! only operations that rebuild the arena.

use crate::cq;
use crate::errors::SeamError;
use crate::node::{Node, NodeId};
use crate::selection::SelectionMode;
use image::{GenericImageView, Rgba};
use itertools::iproduct;
use std::iter::successors;
use tracing::{debug, trace, warn};

/// A rectangular lattice of pixel nodes that can be carved one
/// interior column per row at a time.
#[derive(Debug, Default)]
pub struct SeamGrid {
    nodes: Vec<Option<Node>>,
    northwest: Option<NodeId>,
    southeast: Option<NodeId>,
}

impl SeamGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lattice with one node per pixel of `image`.
    pub fn from_raster<I>(image: &I) -> Result<Self, SeamError>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyRaster { width, height });
        }

        // The arena is filled in row-major order, so every neighbor's
        // address is known before it exists.
        let (w, h) = (width as usize, height as usize);
        let (mw, mh) = (width - 1, height - 1);
        let nodes = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let index = y as usize * w + x as usize;
                let mut node = Node::new(image.get_pixel(x, y));
                node.north = cq!(y == 0, None, Some(NodeId(index - w)));
                node.south = cq!(y == mh, None, Some(NodeId(index + w)));
                node.west = cq!(x == 0, None, Some(NodeId(index - 1)));
                node.east = cq!(x == mw, None, Some(NodeId(index + 1)));
                Some(node)
            })
            .collect();

        debug!(width, height, "built seam grid");
        Ok(SeamGrid {
            nodes,
            northwest: Some(NodeId(0)),
            southeast: Some(NodeId(w * h - 1)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.northwest.is_none()
    }

    /// The first node of the first row.
    pub fn northwest(&self) -> Option<NodeId> {
        self.northwest
    }

    /// The last node of the last row.
    pub fn southeast(&self) -> Option<NodeId> {
        self.southeast
    }

    /// Look up a live node.  Carved and foreign ids come back `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn walk(
        &self,
        start: Option<NodeId>,
        step: fn(&Node) -> Option<NodeId>,
    ) -> impl Iterator<Item = NodeId> + '_ {
        successors(start, move |id| self.node(*id).and_then(step))
    }

    /// The first node of every row, top to bottom.
    pub fn row_starts(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk(self.northwest, Node::south)
    }

    /// Every node from `start` to the end of its row, west to east.
    pub fn row(&self, start: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.walk(self.node(start).map(|_| start), Node::east)
    }

    /// The number of nodes in a row, right now.
    pub fn width_physical(&self) -> u32 {
        self.walk(self.northwest, Node::east).count() as u32
    }

    /// The number of rows.  The first column is never carved, so this
    /// is always the height of the source image.
    pub fn height_physical(&self) -> u32 {
        self.row_starts().count() as u32
    }

    /// The width of the source image, recovered by counting every node
    /// plus every gap it bridges to the east.
    pub fn width_original(&self) -> u32 {
        self.walk(self.northwest, Node::east)
            .filter_map(|id| self.node(id))
            .map(|node| 1 + node.skip_right)
            .sum()
    }

    /// Remove one node from every row, chosen by `mode`.  Fails without
    /// touching the grid if any row has fewer than three nodes.
    pub fn carve_once(&mut self, mode: SelectionMode) -> Result<(), SeamError> {
        // Row starts are never carved, so these stay valid for the
        // whole round.
        let starts: Vec<NodeId> = self.row_starts().collect();
        for (row, start) in starts.iter().enumerate() {
            let found = self.row(*start).count() as u32;
            if found < 3 {
                return Err(SeamError::RowTooNarrow {
                    row: row as u32,
                    found,
                    needed: 3,
                });
            }
        }

        for start in starts {
            if let Some(victim) = self.select_node(start, mode) {
                self.unlink(victim);
            }
        }
        Ok(())
    }

    /// Carve `rounds` times, one node from every row per round.  Asking
    /// for more than would leave two nodes per row is clamped; the
    /// number of rounds actually carved is returned.
    pub fn carve(&mut self, rounds: u32, mode: SelectionMode) -> Result<u32, SeamError> {
        let limit = self.width_physical().saturating_sub(2);
        if rounds > limit {
            warn!(requested = rounds, limit, "clamping carve rounds");
        }
        let rounds = rounds.min(limit);
        for round in 0..rounds {
            debug!(round, ?mode, "carving");
            self.carve_once(mode)?;
        }
        Ok(rounds)
    }

    // Pull a node out of its row.  The east/west neighbors are joined
    // and absorb the node's gaps; the north/south neighbors lose their
    // link into this row.
    fn unlink(&mut self, victim: NodeId) {
        let node = match self.nodes.get_mut(victim.index()).and_then(Option::take) {
            Some(node) => node,
            None => return,
        };
        trace!(%victim, skip_left = node.skip_left, skip_right = node.skip_right, "unlinking");

        if let Some(west) = node.west.and_then(|id| self.node_mut(id)) {
            west.east = node.east;
            west.skip_right += 1 + node.skip_right;
        }
        if let Some(east) = node.east.and_then(|id| self.node_mut(id)) {
            east.west = node.west;
            east.skip_left += 1 + node.skip_left;
        }
        if let Some(north) = node.north.and_then(|id| self.node_mut(id)) {
            north.south = None;
        }
        if let Some(south) = node.south.and_then(|id| self.node_mut(id)) {
            south.north = None;
        }
    }

    /// Fill this (empty) grid with a copy of `other` that shares nothing
    /// with it.
    pub fn copy_from(&mut self, other: &SeamGrid) -> Result<(), SeamError> {
        if !self.is_empty() {
            return Err(SeamError::TargetNotEmpty);
        }
        *self = Self::compacted(other);
        Ok(())
    }

    // Renumber the live nodes of `other` row by row into a fresh arena
    // and translate every link through the new numbering.
    fn compacted(other: &SeamGrid) -> Self {
        let mut remap: Vec<Option<NodeId>> = vec![None; other.nodes.len()];
        let mut order = Vec::new();
        for start in other.row_starts() {
            for id in other.row(start) {
                remap[id.index()] = Some(NodeId(order.len()));
                order.push(id);
            }
        }

        let relink = |link: Option<NodeId>| link.and_then(|id| remap.get(id.index()).copied().flatten());
        let nodes = order
            .iter()
            .filter_map(|id| other.node(*id))
            .map(|node| {
                Some(Node {
                    north: relink(node.north),
                    south: relink(node.south),
                    east: relink(node.east),
                    west: relink(node.west),
                    ..node.clone()
                })
            })
            .collect();

        debug!(nodes = order.len(), "copied seam grid");
        SeamGrid {
            nodes,
            northwest: relink(other.northwest),
            southeast: relink(other.southeast),
        }
    }

    /// Drop every node.  Clearing an empty grid does nothing.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(slots = self.nodes.len(), "clearing seam grid");
        }
        self.nodes.clear();
        self.northwest = None;
        self.southeast = None;
    }
}

impl Clone for SeamGrid {
    fn clone(&self) -> Self {
        Self::compacted(self)
    }
}
