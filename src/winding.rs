/// The direction in which a ring's vertices are listed.
///
/// `Winding` governs the order in which [`Region`](crate::Region) enumerates
/// its four corners/edges, the inward/outward direction associated with
/// each edge, and the convention the subject ring is expected to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn is_clockwise(self) -> bool {
        matches!(self, Winding::Clockwise)
    }

    pub fn is_counter_clockwise(self) -> bool {
        matches!(self, Winding::CounterClockwise)
    }
}
