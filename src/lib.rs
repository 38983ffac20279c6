//! Weiler-Atherton clipping of polygons and line-strings against an
//! axis-aligned rectangle.
//!
//! This crate implements the clipping core of a vector-tile renderer: given
//! a tile's clip rectangle and a subject geometry in the same coordinate
//! space, it produces the portion of the subject that lies inside the
//! rectangle, splitting it into multiple output rings or fragments where
//! clipping disconnects the subject.
//!
//! Three entry points cover the supported geometry kinds:
//!
//! - [`clip_polygon`] — a single closed ring.
//! - [`clip_linestring`] — an open path.
//! - [`clip_polygon_with_holes`] — an exterior ring plus interior rings
//!   (holes), each clipped against its own region and re-associated
//!   afterward.
//!
//! All coordinates are flat `[x1, y1, x2, y2, ...]` sequences of `f64`; this
//! crate does not provide a generic geometry type hierarchy, only the
//! clipping algorithm itself.

mod axis;
mod dedup;
mod error;
mod geom;
mod linestring;
mod polygon;
mod region;
mod rings;
mod vertex;
mod winding;

pub use error::ClipError;
pub use geom::{contains_point, exclusive_between, inclusive_between, round_toward_zero};
pub use linestring::clip_linestring;
pub use polygon::clip_polygon;
pub use region::Region;
pub use rings::{clip_polygon_with_holes, ClippedPolygon};
pub use winding::Winding;
