/// The four betting rounds in Texas Hold'em.
///
/// A hand starts at preflop and advances only when the parser sees an
/// explicit street marker; hands with no markers stay at preflop.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Pref,
    Flop,
    Turn,
    Rive,
}

impl Street {
    /// All four streets in report order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn is_preflop(&self) -> bool {
        matches!(self, Self::Pref)
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "PREFLOP" => Ok(Self::Pref),
            "FLOP" => Ok(Self::Flop),
            "TURN" => Ok(Self::Turn),
            "RIVER" => Ok(Self::Rive),
            _ => Err(format!("invalid street: {}", s)),
        }
    }
}
