//! Line-clear scoring

/// Points indexed by the number of rows cleared by a single lock
pub const LINE_CLEAR_POINTS: [u64; 5] = [0, 400, 1000, 3000, 12000];

/// Points for clearing `lines` rows at once. A piece spans at most four rows,
/// so anything larger is capped at the four-row award.
pub fn line_clear_points(lines: usize) -> u64 {
    LINE_CLEAR_POINTS[lines.min(LINE_CLEAR_POINTS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 400);
        assert_eq!(line_clear_points(2), 1000);
        assert_eq!(line_clear_points(3), 3000);
        assert_eq!(line_clear_points(4), 12000);
    }

    #[test]
    fn test_caps_at_four_rows() {
        assert_eq!(line_clear_points(9), 12000);
    }
}
