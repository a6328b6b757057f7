use super::action::ActionKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// The closed set of structural hand-history patterns. Compiled once and
/// shared by every worker; the action table is tried in priority order
/// and only the first matching pattern per line applies.

pub static BUTTON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Seat #(\d+) is the button").expect("button pattern"));

pub static BLINDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Hold'em No Limit - Level [IVXL]+ \((\d+)/(\d+)\)").expect("blinds pattern")
});

pub static SEAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Seat (\d+): ([^\s]+) \((\d+) in chips\)").expect("seat pattern"));

pub static STAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\* (FLOP|TURN|RIVER) \*\*\*").expect("stage pattern"));

pub static SHOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Seat \d+: ([^\s]+) .*showed \[([^\]]+)\]").expect("shown pattern"));

pub static TOURNAMENT_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hhDealer\.com_(\d+)-(\d+)_").expect("tournament file pattern"));

pub static HAND_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PokerStars Hand #(\d+)").expect("hand id pattern"));

pub static LEVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Level ([IVXL]+)").expect("level pattern"));

pub static PAYOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"finished the tournament in (\d+)[^\n]*received \$").expect("payout pattern")
});

pub static FINISH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"finished the tournament in (\d+)").expect("finish pattern"));

pub static HAND_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("split pattern"));

/// Action patterns in priority order. The two-amount raise form is tried
/// before the bare single-amount form; for the latter the raise delta is
/// the only amount available.
pub static ACTIONS: Lazy<[(Regex, ActionKind); 6]> = Lazy::new(|| {
    [
        (
            Regex::new(r"([^\s:]+): raises (\d+\.?\d*) to (\d+\.?\d*)").expect("raise pattern"),
            ActionKind::Raise,
        ),
        (
            Regex::new(r"([^\s:]+): raises (\d+\.?\d*)").expect("bare raise pattern"),
            ActionKind::Raise,
        ),
        (
            Regex::new(r"([^\s:]+): bets (\d+\.?\d*)").expect("bet pattern"),
            ActionKind::Bet,
        ),
        (
            Regex::new(r"([^\s:]+): calls (\d+\.?\d*)").expect("call pattern"),
            ActionKind::Call,
        ),
        (
            Regex::new(r"([^\s:]+): folds").expect("fold pattern"),
            ActionKind::Fold,
        ),
        (
            Regex::new(r"([^\s:]+): checks").expect("check pattern"),
            ActionKind::Check,
        ),
    ]
});
