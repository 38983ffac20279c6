//! Shared post-processing: collapsing consecutive duplicate vertices and
//! making sure an emitted ring is not closed (its first vertex is not
//! repeated at the end).

pub(crate) fn dedup_ring(coords: &[(f64, f64)]) -> Vec<f64> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(coords.len());
    for &p in coords {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out.into_iter().flat_map(|(x, y)| [x, y]).collect()
}

pub(crate) fn dedup_flat(coords: &[f64]) -> Vec<f64> {
    let pairs: Vec<(f64, f64)> = coords.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    dedup_ring(&pairs)
}

/// Like [`dedup_ring`] but for an open fragment (a line-string clip
/// result): consecutive duplicates are collapsed, but a fragment that
/// happens to start and end at the same point is left closed.
pub(crate) fn dedup_fragment(coords: &[(f64, f64)]) -> Vec<f64> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(coords.len());
    for &p in coords {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out.into_iter().flat_map(|(x, y)| [x, y]).collect()
}
