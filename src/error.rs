use std::fmt;

/// A fatal invariant violation raised while clipping.
///
/// These are distinct from the empty-result and recoverable-shape conditions
/// the clip operations return as plain `Ok` values (subject below the
/// minimum vertex count, subject fully outside, subject fully inside, ...).
/// A `ClipError` means the vertex graph built during the subject walk is no
/// longer internally consistent -- either a logic bug, or numerically
/// inconsistent input whose rounded crossings violate the monotonic edge
/// ordering the algorithm depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipError {
    /// Ordered insertion was asked to splice a vertex whose coordinate along
    /// the ordering axis falls outside `[start, end]`.
    InsertionOutOfRange,
    /// The result walk followed a link that had no target.
    BrokenLink,
    /// The result walk arrived at a vertex it had already emitted.
    RevisitedVertex,
    /// The result walk needed an inbound intersection vertex to seed a ring
    /// and none was available.
    MissingInboundIntersection,
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::InsertionOutOfRange => {
                write!(f, "insertion point lies outside the [start, end] bracket")
            }
            ClipError::BrokenLink => write!(f, "walk followed a link with no target vertex"),
            ClipError::RevisitedVertex => write!(f, "walk revisited an already-emitted vertex"),
            ClipError::MissingInboundIntersection => {
                write!(f, "no inbound intersection vertex available to seed a ring")
            }
        }
    }
}

impl std::error::Error for ClipError {}
