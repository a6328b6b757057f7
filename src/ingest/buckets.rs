use crate::Chips;
use crate::parse::ActionKind;
use crate::parse::HandAction;

/// Pot-relative size buckets in report order.
pub const POT_ORDER: [&str; 9] = [
    "OPEN", "<0.33x", "0.33x", "0.5x", "0.75x", "1x", "1.5x", "2x", "3x+",
];

/// Preflop big-blind buckets in report order: raises, then flat calls.
pub const BB_ORDER_PRE: [&str; 10] = [
    "MINRAISE",
    "2.5BB",
    "3BB",
    "4-5BB",
    "6-9BB",
    "10BB+",
    "1BB_CALL",
    "2BB_CALL",
    "3-4BB_CALL",
    "5BB+_CALL",
];

/// Postflop big-blind buckets in report order.
pub const BB_ORDER_POST: [&str; 5] = ["<1BB", "1-3BB", "3-6BB", "6-10BB", "10BB+"];

/// Bucket a bet or raise by its size relative to the pot the actor saw.
/// Actions into an empty pot are opens; everything else lands on the
/// ratio thresholds.
pub fn pot_bucket(action: &HandAction) -> &'static str {
    if !action.kind.sizes_pot() {
        return "N/A";
    }
    if action.pot_before == 0.0 {
        return "OPEN";
    }
    match action.pot_odds {
        r if r < 0.33 => "<0.33x",
        r if r < 0.50 => "0.33x",
        r if r < 0.75 => "0.5x",
        r if r < 1.0 => "0.75x",
        r if r < 1.5 => "1x",
        r if r < 2.0 => "1.5x",
        r if r < 3.0 => "2x",
        _ => "3x+",
    }
}

/// Bucket a committing action by its size in big blinds. Preflop raises
/// and calls get their own scales; postflop sizes share one scale.
pub fn bb_bucket(action: &HandAction) -> &'static str {
    if !action.kind.commits() {
        return "N/A";
    }
    let bb = action.amount_bb;
    if action.street.is_preflop() {
        match action.kind {
            ActionKind::Raise => match bb {
                b if b < 2.5 => "MINRAISE",
                b if b < 3.0 => "2.5BB",
                b if b < 4.0 => "3BB",
                b if b < 6.0 => "4-5BB",
                b if b < 10.0 => "6-9BB",
                _ => "10BB+",
            },
            ActionKind::Call => match bb {
                b if b < 2.0 => "1BB_CALL",
                b if b < 3.0 => "2BB_CALL",
                b if b < 5.0 => "3-4BB_CALL",
                _ => "5BB+_CALL",
            },
            _ => "OTHER",
        }
    } else {
        match bb {
            b if b < 1.0 => "<1BB",
            b if b < 3.0 => "1-3BB",
            b if b < 6.0 => "3-6BB",
            b if b < 10.0 => "6-10BB",
            _ => "10BB+",
        }
    }
}

/// Bucket stack depth in big blinds. Non-positive depths come from
/// unparsable headers and stay unknown.
pub fn stack_bucket(stack_bb: Chips) -> &'static str {
    match stack_bb {
        s if s <= 0.0 => "UNKNOWN",
        s if s < 10.0 => "<10BB",
        s if s < 20.0 => "10-20BB",
        s if s < 30.0 => "20-30BB",
        s if s < 50.0 => "30-50BB",
        s if s < 80.0 => "50-80BB",
        _ => "80BB+",
    }
}
