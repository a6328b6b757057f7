use super::action::HandAction;
use super::position::Position;
use crate::Chips;
use crate::cards::Combo;

/// One showdown revelation for one player in one hand: the canonical
/// combo plus that player's full action timeline and identifying keys.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    pub player: String,
    pub cards: Combo,
    pub position: Position,
    pub actions: Vec<HandAction>,
    pub tournament_id: String,
    pub hand_id: String,
    pub chunk_index: u32,
    pub order_index: u32,
    pub source_file: String,
    pub bb_size: Chips,
}
