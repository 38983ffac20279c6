//! Clipping a polygon with interior rings (holes), and re-attaching clipped
//! holes to the clipped exterior piece that contains them.

use log::debug;

use crate::error::ClipError;
use crate::geom::contains_point;
use crate::polygon::clip_polygon;
use crate::region::Region;
use crate::Winding;

/// One output polygon: a clipped exterior ring together with whichever
/// clipped interior rings (holes) fall inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedPolygon {
    pub exterior: Vec<f64>,
    pub interiors: Vec<Vec<f64>>,
}

/// Clip a polygon with holes against a pair of regions: `region` bounds the
/// exterior ring, `sub_region` (typically a small inset of `region`) bounds
/// each interior ring.
///
/// The exterior is always clipped in `winding` order; every interior ring is
/// clipped in [`Winding::CounterClockwise`], matching how holes are wound
/// relative to their exterior in practice, regardless of what winding the
/// exterior itself uses. Each clipped interior ring is then attached, via a
/// point-in-polygon test, to whichever clipped exterior piece contains it;
/// an interior ring that lands inside no surviving exterior piece is
/// dropped, since it would describe a hole in geometry that no longer
/// exists.
pub fn clip_polygon_with_holes(
    region: Region,
    sub_region: Region,
    winding: Winding,
    exterior: &[f64],
    interiors: &[Vec<f64>],
) -> Result<Vec<ClippedPolygon>, ClipError> {
    let exteriors = clip_polygon(region, winding, exterior)?;
    if exteriors.is_empty() {
        debug!("exterior ring clipped away entirely, dropping {} interior rings", interiors.len());
        return Ok(Vec::new());
    }

    let mut polygons: Vec<ClippedPolygon> = exteriors
        .into_iter()
        .map(|exterior| ClippedPolygon {
            exterior,
            interiors: Vec::new(),
        })
        .collect();

    for hole in interiors {
        for clipped_hole in clip_polygon(sub_region, Winding::CounterClockwise, hole)? {
            let (hx, hy) = (clipped_hole[0], clipped_hole[1]);
            match polygons
                .iter_mut()
                .find(|p| contains_point(&p.exterior, hx, hy))
            {
                Some(target) => target.interiors.push(clipped_hole),
                None => debug!(
                    "clipped interior ring at ({hx}, {hy}) matches no exterior piece, dropping it"
                ),
            }
        }
    }

    Ok(polygons)
}
