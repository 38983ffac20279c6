//! The axis-aligned rectangular clip window.

use crate::axis::Axis;
use crate::Winding;

/// An axis-aligned rectangle `(min_x, min_y, max_x, max_y)`.
///
/// `min_x <= max_x` and `min_y <= max_y` are the expected orientation, but
/// every operation here tolerates the mirrored case (`min > max`) and still
/// produces the correct interior test and corner enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Region {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Region {
        Region {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Strict (open) interior test: a point on the boundary is not inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let good_x = if self.max_x >= self.min_x {
            self.min_x < x && x < self.max_x
        } else {
            self.max_x < x && x < self.min_x
        };
        let good_y = if self.max_y >= self.min_y {
            self.min_y < y && y < self.max_y
        } else {
            self.max_y < y && y < self.min_y
        };
        good_x && good_y
    }

    /// The `i`-th corner (`i` taken mod 4), such that connecting corners
    /// `0 -> 1 -> 2 -> 3 -> 0` traces the rectangle in `winding` order.
    pub fn corner(&self, i: usize, winding: Winding) -> (f64, f64) {
        use Winding::*;
        match (i % 4, winding) {
            (0, Clockwise) => (self.min_x, self.max_y),
            (0, CounterClockwise) => (self.min_x, self.min_y),
            (1, Clockwise) => (self.min_x, self.min_y),
            (1, CounterClockwise) => (self.min_x, self.max_y),
            (2, Clockwise) => (self.max_x, self.min_y),
            (2, CounterClockwise) => (self.max_x, self.max_y),
            (3, Clockwise) => (self.max_x, self.max_y),
            (3, CounterClockwise) => (self.max_x, self.min_y),
            _ => unreachable!("corner index is reduced mod 4"),
        }
    }

    /// The segment from `corner(i)` to `corner(i + 1)`.
    pub fn edge(&self, i: usize, winding: Winding) -> [f64; 4] {
        let (x1, y1) = self.corner(i, winding);
        let (x2, y2) = self.corner(i + 1, winding);
        [x1, y1, x2, y2]
    }

    /// Cheap bounding pre-check used before computing full crossings for an
    /// out-out line-string segment: does `seg` have any chance of crossing
    /// this rectangle at all?
    pub(crate) fn quick_crosses(&self, seg: [f64; 4]) -> bool {
        let (x1, y1, x2, y2) = (seg[0], seg[1], seg[2], seg[3]);
        let x1_out = x1 <= self.min_x || x1 >= self.max_x;
        let x2_out = x2 <= self.min_x || x2 >= self.max_x;
        let y1_out = y1 <= self.min_y || y1 >= self.max_y;
        let y2_out = y2 <= self.min_y || y2 >= self.max_y;

        if x1_out && y1_out && x2_out && y2_out {
            return true;
        }
        if ((x1 <= self.min_x && x2 >= self.max_x) || (x2 <= self.min_x && x1 >= self.max_x))
            && ((y1 > self.min_y && y1 < self.max_y) || (y2 > self.min_y && y2 < self.max_y))
        {
            return true;
        }
        if ((y1 <= self.min_y && y2 >= self.max_y) || (y2 <= self.min_y && y1 >= self.max_y))
            && ((x1 > self.min_x && x1 < self.max_x) || (x2 > self.min_x && x2 < self.max_x))
        {
            return true;
        }
        false
    }

    /// All crossings of `seg` (truncated endpoints) against the four
    /// rectangle edges, enumerated in `winding` order, each tagged with the
    /// edge index and whether the crossing is inbound.
    pub(crate) fn crossings(
        &self,
        winding: Winding,
        seg: [i64; 4],
    ) -> Vec<(usize, i64, i64, bool)> {
        let mut out = Vec::new();
        for idx in 0..4 {
            let axis = Axis::for_region(self, idx, winding);
            if let Some((x, y)) = axis.does_cross(seg) {
                out.push((idx, x, y, axis.is_inward_bound(seg)));
            }
        }
        out
    }

    /// The first point (in edge-enumeration order) where `seg` crosses the
    /// rectangle, ignoring inbound/outbound classification. Winding does
    /// not affect which points are found, only the order they are tried in,
    /// so an arbitrary winding is used internally.
    pub(crate) fn first_crossing_point(&self, seg: [i64; 4]) -> Option<(i64, i64)> {
        (0..4).find_map(|idx| Axis::for_region(self, idx, Winding::Clockwise).does_cross(seg))
    }

    /// Every point where `seg` crosses the rectangle (0, 1, or 2 points for
    /// a convex rectangle), ignoring inbound/outbound classification.
    pub(crate) fn all_crossing_points(&self, seg: [i64; 4]) -> Vec<(i64, i64)> {
        (0..4)
            .filter_map(|idx| Axis::for_region(self, idx, Winding::Clockwise).does_cross(seg))
            .collect()
    }
}
