/*!
Maximum-cardinality matching between a reference and an estimated onset
sequence under a tolerance window.

A greedy nearest-neighbour pass can pair an estimate that a later reference
onset needed and undercount hits, so the matching is computed as a proper
maximum bipartite matching. Both sequences are sorted, which keeps the
eligible partners of each reference onset in one contiguous band of
estimated indices, and both band endpoints only ever move rightwards as the
reference index grows. The augmenting-path search walks those bands in
ascending order, so the result is deterministic: ties always go to the
smallest index.
*/
use crate::metrics::FloatExt;
use crate::validate::InvalidInputError;
use std::ops::Range;

/// Computes a maximum-cardinality one-to-one pairing between `reference` and
/// `estimated` such that every paired couple of onsets differs by at most
/// `window` seconds. Returns the matched `(reference index, estimated
/// index)` pairs sorted by reference index. No index appears twice on either
/// side and no other pairing under the same window contains more couples.
///
/// Both sequences must be sorted in non-decreasing order; the metrics in
/// this crate run them through `validate_events` first.
///
/// * `reference`: reference onset locations, in seconds
/// * `estimated`: estimated onset locations, in seconds
/// * `window`: maximum allowed time difference for a pair, `>= 0`
pub fn match_events<F: FloatExt>(
    reference: &[F],
    estimated: &[F],
    window: F,
) -> Result<Vec<(usize, usize)>, InvalidInputError> {
    if window < F::zero() || window.is_nan() {
        return Err(InvalidInputError::NegativeWindow(
            window.to_f64().unwrap_or(f64::NAN),
        ));
    }
    debug_assert!(reference.windows(2).all(|pair| pair[0] <= pair[1]));
    debug_assert!(estimated.windows(2).all(|pair| pair[0] <= pair[1]));
    if reference.is_empty() || estimated.is_empty() {
        return Ok(Vec::new());
    }
    let bands = eligible_bands(reference, estimated, window);
    let mut owner: Vec<Option<usize>> = vec![None; estimated.len()];
    // Visit stamps identify the attempt that last touched an estimated
    // index, so the buffer never needs clearing between attempts.
    let mut visited = vec![0usize; estimated.len()];
    for reference_index in 0..reference.len() {
        if bands[reference_index].is_empty() {
            continue;
        }
        augment(
            reference_index,
            &bands,
            &mut owner,
            &mut visited,
            reference_index + 1,
        );
    }
    let mut matching: Vec<(usize, usize)> = owner
        .iter()
        .enumerate()
        .filter_map(|(estimated_index, &claim)| {
            claim.map(|reference_index| (reference_index, estimated_index))
        })
        .collect();
    matching.sort_unstable();
    Ok(matching)
}

/// For every reference onset, the contiguous range of estimated indices
/// within the window. Both endpoints are non-decreasing across reference
/// onsets, so a single forward sweep over `estimated` builds all bands.
fn eligible_bands<F: FloatExt>(reference: &[F], estimated: &[F], window: F) -> Vec<Range<usize>> {
    let mut bands = Vec::with_capacity(reference.len());
    let mut lo = 0;
    let mut hi = 0;
    for &onset in reference {
        while lo < estimated.len() && onset - estimated[lo] > window {
            lo += 1;
        }
        if hi < lo {
            hi = lo;
        }
        while hi < estimated.len() && estimated[hi] - onset <= window {
            hi += 1;
        }
        bands.push(lo..hi);
    }
    bands
}

/// One step of an augmenting path: a reference onset scanning its band, and
/// the estimated index through which the search reached it.
struct Frame {
    reference: usize,
    cursor: usize,
    entered_through: Option<usize>,
}

/// Tries to grow the matching with an augmenting path rooted at `root`.
///
/// The search is a depth-first walk kept on an explicit stack. Each
/// estimated index is stamped on first contact and skipped afterwards, so a
/// single attempt inspects at most `estimated.len()` candidates before
/// giving up; this bound is what guarantees termination.
fn augment(
    root: usize,
    bands: &[Range<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [usize],
    stamp: usize,
) -> bool {
    let mut path = vec![Frame {
        reference: root,
        cursor: bands[root].start,
        entered_through: None,
    }];
    loop {
        let (claimant, candidate) = {
            let Some(top) = path.last_mut() else {
                return false;
            };
            let band_end = bands[top.reference].end;
            let mut candidate = None;
            while top.cursor < band_end {
                let estimated_index = top.cursor;
                top.cursor += 1;
                if visited[estimated_index] != stamp {
                    candidate = Some(estimated_index);
                    break;
                }
            }
            (top.reference, candidate)
        };
        let Some(estimated_index) = candidate else {
            path.pop();
            continue;
        };
        visited[estimated_index] = stamp;
        match owner[estimated_index] {
            Some(current_owner) => path.push(Frame {
                reference: current_owner,
                cursor: bands[current_owner].start,
                entered_through: Some(estimated_index),
            }),
            None => {
                owner[estimated_index] = Some(claimant);
                // Walk back to the root, handing every contested estimated
                // onset to the reference one step closer to the root.
                for step in (1..path.len()).rev() {
                    if let Some(contested) = path[step].entered_through {
                        owner[contested] = Some(path[step - 1].reference);
                    }
                }
                return true;
            }
        }
    }
}
