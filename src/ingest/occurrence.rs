use super::buckets;
use crate::Chips;
use crate::cards::Combo;
use crate::parse::ActionKind;
use crate::parse::HandAction;
use crate::parse::PlayerHand;
use crate::parse::Position;
use crate::parse::Street;
use crate::tourney::Phase;

/// The flat fact row: one per (shown player, action) pair. This is the
/// durable artifact; everything upstream of it is transient parse state.
#[derive(Debug, Clone)]
pub struct RangeOccurrence {
    pub tournament_id: String,
    pub chunk_index: u32,
    pub hand_id: String,
    pub order_index: u32,
    pub player: String,
    pub position: Position,
    pub street: Street,
    pub kind: ActionKind,
    pub cards: Combo,
    pub phase: Phase,
    pub action_amount: Chips,
    pub pot_before: Chips,
    pub stack_size: Chips,
    pub bb_size: Chips,
    pub amount_bb: Chips,
    pub pot_odds: Chips,
    pub pot_bucket: &'static str,
    pub bb_bucket: &'static str,
    pub stack_bucket: &'static str,
    pub stack_size_bb: Chips,
    pub showdown: bool,
    pub source_file: String,
}

impl From<(&PlayerHand, &HandAction)> for RangeOccurrence {
    fn from((hand, action): (&PlayerHand, &HandAction)) -> Self {
        let stack_bb = if action.bb_size > 0.0 {
            action.stack_size / action.bb_size
        } else {
            0.0
        };
        Self {
            tournament_id: hand.tournament_id.clone(),
            chunk_index: hand.chunk_index,
            hand_id: hand.hand_id.clone(),
            order_index: hand.order_index,
            player: action.player.clone(),
            position: action.position,
            street: action.street,
            kind: action.kind,
            cards: hand.cards,
            phase: action.phase,
            action_amount: action.amount,
            pot_before: action.pot_before,
            stack_size: action.stack_size,
            bb_size: action.bb_size,
            amount_bb: action.amount_bb,
            pot_odds: action.pot_odds,
            pot_bucket: buckets::pot_bucket(action),
            bb_bucket: buckets::bb_bucket(action),
            stack_bucket: buckets::stack_bucket(stack_bb),
            stack_size_bb: stack_bb,
            showdown: true,
            source_file: hand.source_file.clone(),
        }
    }
}

/// Flattens shown hands into occurrence rows while keeping the running
/// totals the distributor reports.
#[derive(Debug, Default)]
pub struct Collector {
    pub occurrences: Vec<RangeOccurrence>,
    pub shown_hands: usize,
    pub actions: usize,
}

impl Collector {
    pub fn add(&mut self, hand: &PlayerHand) {
        self.shown_hands += 1;
        for action in &hand.actions {
            self.occurrences.push(RangeOccurrence::from((hand, action)));
            self.actions += 1;
        }
    }
}
