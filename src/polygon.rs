//! Weiler-Atherton clipping of a single polygon ring against a [`Region`].

use log::{debug, trace};

use crate::dedup::{dedup_flat, dedup_ring};
use crate::error::ClipError;
use crate::geom::contains_point;
use crate::region::Region;
use crate::vertex::{Graph, Link, VertexKind};
use crate::Winding;

/// Clip a closed polygon ring, given as a flat `[x1, y1, x2, y2, ...]`
/// coordinate sequence (implicitly closed; do not repeat the first vertex at
/// the end), against `region`.
///
/// `winding` is the order in which `subject`'s vertices are wound; the
/// clipping rectangle is enumerated in the same order so that inbound and
/// outbound crossings are classified consistently. Returns one ring per
/// disjoint piece of the subject that survives clipping: zero rings if the
/// subject lies entirely outside `region` and does not contain it, one if the
/// subject is unaffected or reduces to a single piece, more if clipping
/// splits the subject into separate pieces.
///
/// Degenerate subjects (fewer than 3 vertices) clip to nothing.
pub fn clip_polygon(
    region: Region,
    winding: Winding,
    subject: &[f64],
) -> Result<Vec<Vec<f64>>, ClipError> {
    let n = subject.len() / 2;
    if n < 3 {
        return Ok(Vec::new());
    }

    let mut graph = Graph::new();

    let clip_handles: [usize; 4] = {
        let mut h = [0usize; 4];
        for (i, slot) in h.iter_mut().enumerate() {
            let (x, y) = region.corner(i, winding);
            *slot = graph.push(x, y, VertexKind::Clipper);
        }
        h
    };
    for i in 0..4 {
        graph.set_clip_next(clip_handles[i], clip_handles[(i + 1) % 4]);
    }

    let mut sub_handles = Vec::with_capacity(n);
    let mut all_inside = true;
    let mut all_outside = true;
    for i in 0..n {
        let x = subject[i * 2];
        let y = subject[i * 2 + 1];
        let is_in = region.contains(x, y);
        all_inside &= is_in;
        all_outside &= !is_in;
        sub_handles.push(graph.push(x, y, VertexKind::Subject { is_in }));
    }
    for i in 0..n {
        graph.set_sub_next(sub_handles[i], sub_handles[(i + 1) % n]);
    }

    if all_inside {
        debug!("subject entirely inside region, returning unchanged");
        return Ok(vec![dedup_flat(subject)]);
    }

    let mut int_head: Option<usize> = None;
    let mut int_tail: Option<usize> = None;

    for i in 0..n {
        let start_h = sub_handles[i];
        let end_h = sub_handles[(i + 1) % n];
        let (sx, sy) = graph.xy(start_h);
        let (ex, ey) = graph.xy(end_h);
        let seg = [sx as i64, sy as i64, ex as i64, ey as i64];

        let start_in = graph.is_in(start_h);
        let end_in = graph.is_in(end_h);
        trace!("segment {i}: ({sx}, {sy})[in={start_in}] -> ({ex}, {ey})[in={end_in}]");
        if start_in && end_in {
            continue;
        }

        let mut crossings = region.crossings(winding, seg);
        if start_in != end_in && crossings.len() > 1 {
            crossings.truncate(1);
        }

        for (edge_idx, x, y, inward) in crossings {
            let inbound = if start_in != end_in {
                !start_in && end_in
            } else {
                inward
            };
            let item = graph.push(x as f64, y as f64, VertexKind::Intersect { inbound });
            debug!("intersection at ({x}, {y}), inbound={inbound}, edge={edge_idx}");

            graph.insert_ordered(start_h, end_h, item, Link::Sub)?;
            let clip_start = clip_handles[edge_idx];
            let clip_end = clip_handles[(edge_idx + 1) % 4];
            graph.insert_ordered(clip_start, clip_end, item, Link::Clip)?;

            if int_head.is_none() {
                int_head = Some(item);
            }
            int_tail = Some(graph.append_intersection(int_tail, item).unwrap());
        }
    }

    let head = match int_head {
        Some(h) => h,
        None => {
            let inside = (0..4).all(|i| {
                let (cx, cy) = graph.xy(clip_handles[i]);
                contains_point(subject, cx, cy)
            });
            if !inside {
                debug!("subject has no crossings and does not contain region, empty result");
                return Ok(Vec::new());
            }
            debug!("subject contains region with no crossings, emitting region corners");
            let ring: Vec<(f64, f64)> = (0..4).map(|i| graph.xy(clip_handles[i])).collect();
            return Ok(vec![dedup_ring(&ring)]);
        }
    };

    let mut rings = Vec::new();
    let mut seed = Some(head);
    while let Some(candidate) = seed {
        let start = if graph.is_inbound_intersect(candidate) {
            candidate
        } else {
            graph
                .next_inbound_intersect(candidate)
                .ok_or(ClipError::MissingInboundIntersection)?
        };

        let mut coords = vec![graph.xy(start)];
        graph.mark_seen(start);
        let mut cur = graph.walk_next(start).ok_or(ClipError::BrokenLink)?;
        while cur != start {
            if graph.seen(cur) {
                return Err(ClipError::RevisitedVertex);
            }
            coords.push(graph.xy(cur));
            graph.mark_seen(cur);
            cur = graph.walk_next(cur).ok_or(ClipError::BrokenLink)?;
        }
        let ring = dedup_ring(&coords);
        debug!("emitted ring with {} vertices", ring.len() / 2);
        rings.push(ring);

        seed = graph.next_inbound_intersect(start);
    }
    Ok(rings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<f64> {
        vec![min_x, min_y, max_x, min_y, max_x, max_y, min_x, max_y]
    }

    #[test]
    fn subject_entirely_inside_is_returned_unchanged() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = square(2.0, 2.0, 4.0, 4.0);
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_eq!(out, vec![subject]);
    }

    #[test]
    fn subject_entirely_outside_and_disjoint_clips_to_nothing() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = square(20.0, 20.0, 30.0, 30.0);
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn subject_containing_the_region_clips_to_the_four_corners() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = square(-5.0, -5.0, 15.0, 15.0);
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 8);
    }

    #[test]
    fn subject_overhanging_one_edge_is_clipped_to_the_boundary() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        // A square straddling the right edge of the region.
        let subject = square(5.0, 2.0, 15.0, 8.0);
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_eq!(out.len(), 1);
        for chunk in out[0].chunks_exact(2) {
            assert!(chunk[0] <= 10.0 + f64::EPSILON);
        }
    }

    #[test]
    fn a_twice_dipping_subject_splits_into_two_rings() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        // A ring that dips below the top edge into the region in two
        // separate places, staying above it in between, so clipping
        // produces two disjoint pieces rather than one.
        let subject = vec![
            1.0, 15.0, //
            1.0, 8.0, //
            3.0, 8.0, //
            3.0, 12.0, //
            7.0, 12.0, //
            7.0, 8.0, //
            9.0, 8.0, //
            9.0, 15.0, //
        ];
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn degenerate_subject_with_too_few_vertices_clips_to_nothing() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let out = clip_polygon(region, Winding::Clockwise, &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert!(out.is_empty());
    }

    /// Matches `a` against `b` allowing `a` to be a rotation of `b`, since
    /// which vertex a ring is emitted starting from depends on which
    /// inbound intersection the walk happens to reach first, not on any
    /// externally meaningful property.
    fn ring_matches_rotated(a: &[f64], b: &[f64]) -> bool {
        if a.len() != b.len() || a.len() % 2 != 0 {
            return false;
        }
        let pa: Vec<(f64, f64)> = a.chunks(2).map(|c| (c[0], c[1])).collect();
        let pb: Vec<(f64, f64)> = b.chunks(2).map(|c| (c[0], c[1])).collect();
        let m = pa.len();
        (0..m).any(|start| (0..m).all(|i| pa[(start + i) % m] == pb[i]))
    }

    fn assert_rings_match(mut got: Vec<Vec<f64>>, expected: Vec<Vec<f64>>) {
        assert_eq!(got.len(), expected.len(), "got {got:?}, expected {expected:?}");
        for want in &expected {
            let pos = got.iter().position(|have| ring_matches_rotated(have, want));
            match pos {
                Some(i) => {
                    got.remove(i);
                }
                None => panic!("no ring in {got:?} matches expected {want:?}"),
            }
        }
    }

    #[test]
    fn bowtie_notch_subject_clips_to_two_rings_clockwise() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = vec![
            -2.0, 1.0, 2.0, 1.0, 2.0, 2.0, -1.0, 2.0, -1.0, 11.0, 2.0, 11.0, 2.0, 4.0, 4.0, 4.0,
            4.0, 13.0, -2.0, 13.0,
        ];
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_rings_match(
            out,
            vec![
                vec![0.0, 1.0, 2.0, 1.0, 2.0, 2.0, 0.0, 2.0],
                vec![2.0, 10.0, 2.0, 4.0, 4.0, 4.0, 4.0, 10.0],
            ],
        );
    }

    #[test]
    fn bowtie_notch_subject_overhanging_right_edge_clips_to_two_rings() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = vec![
            -2.0, 1.0, 12.0, 1.0, 12.0, 2.0, -1.0, 2.0, -1.0, 11.0, 2.0, 11.0, 2.0, 4.0, 4.0, 4.0,
            4.0, 13.0, -2.0, 13.0,
        ];
        let out = clip_polygon(region, Winding::Clockwise, &subject).unwrap();
        assert_rings_match(
            out,
            vec![
                vec![0.0, 1.0, 10.0, 1.0, 10.0, 2.0, 0.0, 2.0],
                vec![2.0, 10.0, 2.0, 4.0, 4.0, 4.0, 4.0, 10.0],
            ],
        );
    }

    #[test]
    fn comb_shaped_subject_clips_to_two_rings_counter_clockwise() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let subject = vec![
            -3.0, 1.0, -3.0, 9.0, 11.0, 9.0, 11.0, 2.0, 5.0, 2.0, 5.0, 8.0, -1.0, 8.0, -1.0, 4.0,
            3.0, 4.0, 3.0, 1.0,
        ];
        let out = clip_polygon(region, Winding::CounterClockwise, &subject).unwrap();
        assert_rings_match(
            out,
            vec![
                vec![0.0, 9.0, 10.0, 9.0, 10.0, 2.0, 5.0, 2.0, 5.0, 8.0, 0.0, 8.0],
                vec![0.0, 4.0, 3.0, 4.0, 3.0, 1.0, 0.0, 1.0],
            ],
        );
    }

    #[test]
    fn comb_shaped_subject_is_returned_unchanged_when_region_contains_it() {
        let region = Region::new(-4.0, -4.0, 14.0, 14.0);
        let subject = vec![
            -3.0, 1.0, -3.0, 9.0, 11.0, 9.0, 11.0, 2.0, 5.0, 2.0, 5.0, 8.0, -1.0, 8.0, -1.0, 4.0,
            3.0, 4.0, 3.0, 1.0,
        ];
        let out = clip_polygon(region, Winding::CounterClockwise, &subject).unwrap();
        assert_eq!(out, vec![subject]);
    }

    #[test]
    fn comb_shaped_subject_surrounding_but_missing_a_small_region_clips_to_nothing() {
        let region = Region::new(0.0, 5.0, 2.0, 7.0);
        let subject = vec![
            -3.0, 1.0, -3.0, 9.0, 11.0, 9.0, 11.0, 2.0, 5.0, 2.0, 5.0, 8.0, -1.0, 8.0, -1.0, 4.0,
            3.0, 4.0, 3.0, 1.0,
        ];
        let out = clip_polygon(region, Winding::CounterClockwise, &subject).unwrap();
        assert!(out.is_empty());
    }
}
