/// Table position relative to the button.
///
/// The alphabet carries table-size context: 6-max tables label their
/// early and middle seats `EP(6)`/`MP(6)` while 7-or-more-handed tables
/// use `EP(7+)`/`MP(7+)`. The cutoff is always the seat one before the
/// button on tables of four or more.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Position {
    Btn,
    Sb,
    Bb,
    Co,
    Mp6,
    Mp7,
    Ep6,
    Ep7,
    Unknown,
}

impl Position {
    /// Fixed report grid ordering.
    pub const fn grid() -> [Self; 8] {
        [
            Self::Btn,
            Self::Sb,
            Self::Bb,
            Self::Co,
            Self::Mp6,
            Self::Mp7,
            Self::Ep6,
            Self::Ep7,
        ]
    }

    /// Seats-after-button ring for a given table size.
    const fn ring(seats: usize) -> &'static [Self] {
        match seats {
            2 => &[Self::Btn, Self::Bb],
            3 => &[Self::Btn, Self::Sb, Self::Bb],
            4 => &[Self::Btn, Self::Sb, Self::Bb, Self::Co],
            5 => &[Self::Btn, Self::Sb, Self::Bb, Self::Ep6, Self::Co],
            6 => &[Self::Btn, Self::Sb, Self::Bb, Self::Ep6, Self::Mp6, Self::Co],
            7 => &[
                Self::Btn,
                Self::Sb,
                Self::Bb,
                Self::Ep7,
                Self::Ep7,
                Self::Mp7,
                Self::Co,
            ],
            8 => &[
                Self::Btn,
                Self::Sb,
                Self::Bb,
                Self::Ep7,
                Self::Ep7,
                Self::Mp7,
                Self::Mp7,
                Self::Co,
            ],
            9 => &[
                Self::Btn,
                Self::Sb,
                Self::Bb,
                Self::Ep7,
                Self::Ep7,
                Self::Ep7,
                Self::Mp7,
                Self::Mp7,
                Self::Co,
            ],
            _ => &[
                Self::Btn,
                Self::Sb,
                Self::Bb,
                Self::Ep7,
                Self::Ep7,
                Self::Ep7,
                Self::Ep7,
                Self::Mp7,
                Self::Mp7,
                Self::Co,
            ],
        }
    }
}

impl From<(u32, u32, usize)> for Position {
    /// Map `(seat, button_seat, total_seats)` to a position label.
    fn from((seat, button, seats): (u32, u32, usize)) -> Self {
        if seats == 0 {
            return Self::Unknown;
        }
        let k = (seat as i64 - button as i64).rem_euclid(seats as i64) as usize;
        Self::ring(seats).get(k).copied().unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Btn => write!(f, "BTN"),
            Self::Sb => write!(f, "SB"),
            Self::Bb => write!(f, "BB"),
            Self::Co => write!(f, "CO"),
            Self::Mp6 => write!(f, "MP(6)"),
            Self::Mp7 => write!(f, "MP(7+)"),
            Self::Ep6 => write!(f, "EP(6)"),
            Self::Ep7 => write!(f, "EP(7+)"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "BTN" => Ok(Self::Btn),
            "SB" => Ok(Self::Sb),
            "BB" => Ok(Self::Bb),
            "CO" => Ok(Self::Co),
            "MP(6)" => Ok(Self::Mp6),
            "MP(7+)" => Ok(Self::Mp7),
            "EP(6)" => Ok(Self::Ep6),
            "EP(7+)" => Ok(Self::Ep7),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(format!("invalid position: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_btn_at_any_size() {
        for seats in 2..=10 {
            assert!(Position::from((3, 3, seats)) == Position::Btn);
        }
    }

    #[test]
    fn heads_up_collapses_to_btn_bb() {
        assert!(Position::from((1, 1, 2)) == Position::Btn);
        assert!(Position::from((2, 1, 2)) == Position::Bb);
    }

    #[test]
    fn three_handed_has_sb() {
        assert!(Position::from((2, 1, 3)) == Position::Sb);
        assert!(Position::from((3, 1, 3)) == Position::Bb);
    }

    #[test]
    fn cutoff_sits_before_button() {
        for seats in 4..=10 {
            let co = (1 + seats as u32 - 1, 1, seats);
            assert!(Position::from(co) == Position::Co);
        }
    }

    #[test]
    fn six_max_middle_seat() {
        assert!(Position::from((6, 2, 6)) == Position::Mp6);
        assert!(Position::from((5, 2, 6)) == Position::Ep6);
        assert!(Position::from((4, 2, 6)) == Position::Bb);
    }

    #[test]
    fn wraps_around_the_table() {
        // seat numbers below the button wrap modulo table size
        assert!(Position::from((1, 8, 9)) == Position::Sb);
    }

    #[test]
    fn degenerate_tables_are_unknown() {
        assert!(Position::from((1, 1, 0)) == Position::Unknown);
        // 11-handed leaves one seat past the ten-seat ring
        assert!(Position::from((1, 2, 11)) == Position::Unknown);
    }
}
