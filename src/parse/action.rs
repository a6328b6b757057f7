use super::position::Position;
use super::street::Street;
use crate::Chips;
use crate::tourney::Phase;

/// The five recognized voluntary actions.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ActionKind {
    Raise,
    Bet,
    Call,
    Check,
    Fold,
}

impl ActionKind {
    /// Fixed report grid ordering.
    pub const fn all() -> [Self; 5] {
        [Self::Raise, Self::Bet, Self::Call, Self::Check, Self::Fold]
    }
    /// Whether the action commits chips into the pot.
    pub const fn commits(&self) -> bool {
        matches!(self, Self::Raise | Self::Bet | Self::Call)
    }
    /// Whether the action gets a pot-relative size bucket.
    pub const fn sizes_pot(&self) -> bool {
        matches!(self, Self::Raise | Self::Bet)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Raise => write!(f, "raise"),
            Self::Bet => write!(f, "bet"),
            Self::Call => write!(f, "call"),
            Self::Check => write!(f, "check"),
            Self::Fold => write!(f, "fold"),
        }
    }
}

impl TryFrom<&str> for ActionKind {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "raise" => Ok(Self::Raise),
            "bet" => Ok(Self::Bet),
            "call" => Ok(Self::Call),
            "check" => Ok(Self::Check),
            "fold" => Ok(Self::Fold),
            _ => Err(format!("invalid action: {}", s)),
        }
    }
}

/// One action at a single decision point.
///
/// `pot_before` is the pot as the actor saw it; the actor's committed
/// chips are added to the running pot only after the action is recorded.
#[derive(Debug, Clone)]
pub struct HandAction {
    pub player: String,
    pub kind: ActionKind,
    pub amount: Chips,
    pub position: Position,
    pub street: Street,
    pub pot_before: Chips,
    pub stack_size: Chips,
    pub bb_size: Chips,
    pub amount_bb: Chips,
    pub pot_odds: Chips,
    pub phase: Phase,
}
