//! Per-edge crossing classification for the clipping rectangle.
//!
//! The four rectangle edges are enumerated differently depending on the
//! winding order; [`AXES_CW`]/[`AXES_CCW`] capture that as immutable index
//! tables rather than recomputing the mapping on every call, per the design
//! notes: no lazily-initialized global, just `const` data.

use crate::geom::{exclusive_between_i64, inclusive_between_i64, intersect_int};
use crate::region::Region;
use crate::Winding;

const MIN_X: usize = 0;
const MIN_Y: usize = 1;
const MAX_X: usize = 2;
const MAX_Y: usize = 3;

const AXES_CW: [[usize; 4]; 4] = [
    [MIN_X, MAX_Y, MIN_X, MIN_Y],
    [MIN_X, MIN_Y, MAX_X, MIN_Y],
    [MAX_X, MIN_Y, MAX_X, MAX_Y],
    [MAX_X, MAX_Y, MIN_X, MAX_Y],
];

const AXES_CCW: [[usize; 4]; 4] = [
    [MIN_X, MIN_Y, MIN_X, MAX_Y],
    [MIN_X, MAX_Y, MAX_X, MAX_Y],
    [MAX_X, MAX_Y, MAX_X, MIN_Y],
    [MAX_X, MIN_Y, MIN_X, MIN_Y],
];

/// One rectangle edge, expressed as truncated integer endpoints, together
/// with enough context (its index and the winding it was enumerated in) to
/// classify a crossing as inbound or outbound.
pub(crate) struct Axis {
    pts: [i64; 4],
    winding: Winding,
    idx: usize,
}

impl Axis {
    pub(crate) fn for_region(region: &Region, idx: usize, winding: Winding) -> Axis {
        let idx = idx % 4;
        let r = [region.min_x, region.min_y, region.max_x, region.max_y];
        let table = match winding {
            Winding::Clockwise => &AXES_CW,
            Winding::CounterClockwise => &AXES_CCW,
        };
        let ids = table[idx];
        let pts = [
            r[ids[0]] as i64,
            r[ids[1]] as i64,
            r[ids[2]] as i64,
            r[ids[3]] as i64,
        ];
        Axis { pts, winding, idx }
    }

    /// Whether a subject segment known to cross this edge is heading into
    /// the rectangle's interior at the crossing point, given the segment's
    /// truncated endpoints `[x1, y1, x2, y2]`.
    pub(crate) fn is_inward_bound(&self, seg: [i64; 4]) -> bool {
        match self.winding {
            Winding::Clockwise => self.is_inward_bound_clockwise(seg),
            Winding::CounterClockwise => self.is_inward_bound_raw(self.idx, seg),
        }
    }

    fn is_inward_bound_clockwise(&self, seg: [i64; 4]) -> bool {
        let raw_idx = match self.idx {
            0 => 0,
            1 => 3,
            2 => 2,
            _ => 1,
        };
        self.is_inward_bound_raw(raw_idx, seg)
    }

    fn is_inward_bound_raw(&self, idx: usize, seg: [i64; 4]) -> bool {
        let (x, y) = (self.pts[0], self.pts[1]);
        match idx {
            0 => seg[0] <= x && x < seg[2],
            2 => seg[2] < x && x <= seg[0],
            1 => seg[3] < y && y <= seg[1],
            _ => seg[1] <= y && y < seg[3],
        }
    }

    /// The point where `seg` crosses this edge, if any.
    ///
    /// Acceptance is exclusive along the edge's varying axis and inclusive
    /// along the subject segment, per the rectangle-edge / segment asymmetry
    /// prescribed for this predicate.
    pub(crate) fn does_cross(&self, seg: [i64; 4]) -> Option<(i64, i64)> {
        let (x, y) = intersect_int(self.pts, seg)?;
        if self.pts[0] == self.pts[2] {
            if exclusive_between_i64(self.pts[1], y, self.pts[3])
                && inclusive_between_i64(seg[0], x, seg[2])
            {
                Some((x, y))
            } else {
                None
            }
        } else if exclusive_between_i64(self.pts[0], x, self.pts[2])
            && inclusive_between_i64(seg[1], y, seg[3])
        {
            Some((x, y))
        } else {
            None
        }
    }
}
