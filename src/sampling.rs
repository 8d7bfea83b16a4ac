//! Frame index selection.

/// Pick `frame_count` frame numbers spread evenly over `[0, total_frames)`.
///
/// The `i`-th index is `floor(total_frames * i / frame_count)`, so the first
/// pick is always frame 0 and every pick is strictly below `total_frames`.
/// Returns an empty list when either argument is zero; an unknown frame
/// count is reported as zero by [`FrameSource`](crate::FrameSource).
///
/// When `frame_count` exceeds `total_frames` some indices repeat.
///
/// # Example
///
/// ```
/// let indices = framepick::evenly_spaced_indices(100, 4);
/// assert_eq!(indices, vec![0, 25, 50, 75]);
/// ```
pub fn evenly_spaced_indices(total_frames: u64, frame_count: u32) -> Vec<u64> {
    if total_frames == 0 || frame_count == 0 {
        return Vec::new();
    }

    let total = u128::from(total_frames);
    let count = u128::from(frame_count);
    (0..count)
        .map(|i| (total * i / count) as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_frames_ten_picks() {
        assert_eq!(
            evenly_spaced_indices(100, 10),
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90],
        );
    }

    #[test]
    fn uneven_division_floors() {
        // 10 * i / 3 → 0, 3.33, 6.67
        assert_eq!(evenly_spaced_indices(10, 3), vec![0, 3, 6]);
        assert_eq!(evenly_spaced_indices(7, 4), vec![0, 1, 3, 5]);
    }

    #[test]
    fn zero_total_is_empty() {
        assert!(evenly_spaced_indices(0, 10).is_empty());
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(evenly_spaced_indices(100, 0).is_empty());
    }

    #[test]
    fn more_picks_than_frames_repeats() {
        assert_eq!(evenly_spaced_indices(2, 4), vec![0, 0, 1, 1]);
    }

    #[test]
    fn indices_stay_below_total() {
        for total in [1_u64, 2, 3, 29, 100, 1_001, u64::MAX] {
            for count in [1_u32, 2, 7, 10, 64] {
                let indices = evenly_spaced_indices(total, count);
                assert_eq!(indices.len(), count as usize);
                assert!(indices.iter().all(|&index| index < total));
                assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));
            }
        }
    }
}
