/// The thirteen card ranks, ordered ace-high.
///
/// Discriminants follow the canonical alphabet `AKQJT98765432`, so the
/// derived ordering sorts stronger ranks first and the discriminant
/// doubles as the ordering key for report output.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Rank {
    Ace = 0,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// Index into the `AKQJT98765432` alphabet. Lower is stronger.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Self::Ace),
            'K' => Ok(Self::King),
            'Q' => Ok(Self::Queen),
            'J' => Ok(Self::Jack),
            'T' => Ok(Self::Ten),
            '9' => Ok(Self::Nine),
            '8' => Ok(Self::Eight),
            '7' => Ok(Self::Seven),
            '6' => Ok(Self::Six),
            '5' => Ok(Self::Five),
            '4' => Ok(Self::Four),
            '3' => Ok(Self::Three),
            '2' => Ok(Self::Two),
            _ => Err(format!("invalid rank character: {}", c)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_roundtrip() {
        for (i, c) in crate::RANKS.chars().enumerate() {
            let rank = Rank::try_from(c).unwrap();
            assert!(rank.index() == i);
            assert!(rank.symbol() == c);
        }
    }

    #[test]
    fn stronger_sorts_first() {
        assert!(Rank::Ace < Rank::King);
        assert!(Rank::Ten < Rank::Two);
    }
}
