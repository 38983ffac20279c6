//! Clipping an open line-string against a [`Region`], producing the
//! sub-sequences ("fragments") that lie inside it.

use crate::dedup::dedup_fragment;
use crate::error::ClipError;
use crate::region::Region;

/// Clip a line-string, given as a flat `[x1, y1, x2, y2, ...]` coordinate
/// sequence, against `region`.
///
/// Returns zero or more fragments, each a flat coordinate sequence of length
/// at least 4. A fragment's endpoints are either original subject vertices
/// (when they lie inside the region) or points where the subject crosses a
/// region edge.
///
/// Degenerate subjects (fewer than 2 vertices) clip to nothing.
pub fn clip_linestring(region: Region, subject: &[f64]) -> Result<Vec<Vec<f64>>, ClipError> {
    let n = subject.len() / 2;
    if n < 2 {
        return Ok(Vec::new());
    }

    let pts: Vec<(f64, f64, bool)> = (0..n)
        .map(|i| {
            let x = subject[i * 2];
            let y = subject[i * 2 + 1];
            (x, y, region.contains(x, y))
        })
        .collect();

    let mut fragments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for i in 0..n - 1 {
        let (sx, sy, s_in) = pts[i];
        let (ex, ey, e_in) = pts[i + 1];
        let seg_int = [sx as i64, sy as i64, ex as i64, ey as i64];

        match (s_in, e_in) {
            (true, true) => {
                if current.is_empty() {
                    current.push((sx, sy));
                }
                current.push((ex, ey));
            }
            (true, false) => {
                if current.is_empty() {
                    current.push((sx, sy));
                }
                if let Some((x, y)) = region.first_crossing_point(seg_int) {
                    current.push((x as f64, y as f64));
                }
                fragments.push(std::mem::take(&mut current));
            }
            (false, true) => {
                if !current.is_empty() {
                    fragments.push(std::mem::take(&mut current));
                }
                if let Some((x, y)) = region.first_crossing_point(seg_int) {
                    current.push((x as f64, y as f64));
                }
                current.push((ex, ey));
            }
            (false, false) => {
                if !region.quick_crosses([sx, sy, ex, ey]) {
                    continue;
                }
                let mut crossings = region.all_crossing_points(seg_int);
                if crossings.len() != 2 {
                    continue;
                }
                crossings.sort_by(|a, b| {
                    let da = ((a.0 - seg_int[0]).pow(2) + (a.1 - seg_int[1]).pow(2)) as f64;
                    let db = ((b.0 - seg_int[0]).pow(2) + (b.1 - seg_int[1]).pow(2)) as f64;
                    da.partial_cmp(&db).expect("squared distances are finite")
                });
                if !current.is_empty() {
                    fragments.push(std::mem::take(&mut current));
                }
                fragments.push(vec![
                    (crossings[0].0 as f64, crossings[0].1 as f64),
                    (crossings[1].0 as f64, crossings[1].1 as f64),
                ]);
            }
        }
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    Ok(fragments
        .into_iter()
        .map(|f| dedup_fragment(&f))
        .filter(|f| f.len() >= 4)
        .collect())
}
