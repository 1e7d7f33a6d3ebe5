//! Nearest-acceptable-index search used to keep the review cursor valid.

use thiserror::Error;

/// No index in `0..size` satisfied the acceptance predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no acceptable index in 0..{size} (requested {requested})")]
pub struct NoAcceptableIndex {
    pub requested: i64,
    pub size: usize,
}

/// Find the accepted index closest to `requested`.
///
/// Candidates are probed at growing distance `d = 0, 1, 2, ...`, testing
/// `requested - d` before `requested + d`, so ties resolve to the lower
/// index. `requested` itself may lie outside `0..size`; only candidates
/// inside the range are tested.
pub fn find_closest<F>(
    requested: i64,
    size: usize,
    mut accept: F,
) -> Result<usize, NoAcceptableIndex>
where
    F: FnMut(usize) -> bool,
{
    let Ok(end) = i64::try_from(size) else {
        return Err(NoAcceptableIndex { requested, size });
    };
    let in_range = |candidate: i64| (0..end).contains(&candidate);

    // An anchor outside the catalog has the same nearest index as the
    // position just past the matching edge.
    let anchor = requested.clamp(-1, end);
    let mut distance = match anchor {
        -1 => 1,
        a if a == end => 1,
        _ => 0,
    };

    loop {
        let below = anchor.saturating_sub(distance);
        let above = anchor.saturating_add(distance);
        if !in_range(below) && !in_range(above) {
            break;
        }
        if in_range(below) && accept(below as usize) {
            return Ok(below as usize);
        }
        if distance > 0 && in_range(above) && accept(above as usize) {
            return Ok(above as usize);
        }
        distance = distance.saturating_add(1);
    }

    Err(NoAcceptableIndex { requested, size })
}
