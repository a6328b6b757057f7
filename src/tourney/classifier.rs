use super::phase::Phase;
use crate::parse::Hand;
use crate::parse::patterns;

/// Cross-hand tournament phase assignment.
///
/// Two anchor indices drive the rules: the earliest hand paying out a
/// finisher marks the bubble bursting, and the earliest finishing place
/// inside the final-table cutoff marks the final table. Levels are
/// tracked in first-appearance order so the bubble's run-up can be
/// labeled without any knowledge of the blind schedule.
#[derive(Debug, Default)]
pub struct Classifier {
    first_payout: Option<u32>,
    first_final_table: Option<u32>,
    bubble_level: Option<String>,
    pre_bubble_levels: Vec<String>,
}

impl From<&[Hand]> for Classifier {
    fn from(hands: &[Hand]) -> Self {
        let mut levels = Vec::<String>::new();
        let mut first_payout = None;
        let mut first_final_table = None;
        let mut bubble_level = None;
        for hand in hands {
            if !levels.contains(&hand.level) {
                levels.push(hand.level.clone());
            }
            if first_payout.is_none() && patterns::PAYOUT.is_match(&hand.text) {
                first_payout = Some(hand.order);
                bubble_level = Some(hand.level.clone());
            }
            if first_final_table.is_none() {
                let finished = patterns::FINISH
                    .captures_iter(&hand.text)
                    .filter_map(|c| c[1].parse::<u32>().ok())
                    .any(|place| place <= crate::FINAL_TABLE_PLACES);
                if finished {
                    first_final_table = Some(hand.order);
                }
            }
        }
        let pre_bubble_levels = bubble_level
            .as_ref()
            .and_then(|bubble| levels.iter().position(|level| level == bubble))
            .map(|at| levels[at.saturating_sub(crate::PRE_BUBBLE_LEVELS)..at].to_vec())
            .unwrap_or_default();
        Self {
            first_payout,
            first_final_table,
            bubble_level,
            pre_bubble_levels,
        }
    }
}

impl Classifier {
    /// Assign a phase to one hand. Priority: final table, then bubble,
    /// then pre-bubble, then start.
    pub fn phase(&self, hand: &Hand) -> Phase {
        if let Some(at) = self.first_final_table {
            if hand.order >= at {
                return Phase::FinalTable;
            }
        }
        if let Some(at) = self.first_payout {
            if self.bubble_level.as_deref() == Some(hand.level.as_str()) && hand.order >= at {
                return Phase::Bubble;
            }
            if self.pre_bubble_levels.contains(&hand.level) && hand.order < at {
                return Phase::PreBubble;
            }
        }
        Phase::Start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(order: u32, level: &str, text: &str) -> Hand {
        Hand {
            id: format!("h{}", order),
            text: text.to_string(),
            level: level.to_string(),
            chunk: 0,
            order,
            source: "t.txt".to_string(),
        }
    }

    fn schedule() -> Vec<Hand> {
        // 120 hands, levels stepping every 20 hands; first payout at 80
        // (level V), first finishing place inside the top nine at 100
        let mut hands = Vec::new();
        for order in 0..120u32 {
            let level = ["I", "II", "III", "IV", "V", "VI"][(order / 20) as usize];
            let text = match order {
                80 => "player finished the tournament in 18th place and received $1.50".to_string(),
                100 => "player finished the tournament in 9th place and received $4.00".to_string(),
                _ => "no events".to_string(),
            };
            hands.push(hand(order, level, &text));
        }
        hands
    }

    #[test]
    fn final_table_overrides_bubble() {
        let hands = schedule();
        let classifier = Classifier::from(hands.as_slice());
        assert!(classifier.phase(&hands[100]) == Phase::FinalTable);
        assert!(classifier.phase(&hands[119]) == Phase::FinalTable);
        assert!(classifier.phase(&hands[99]) == Phase::Bubble);
    }

    #[test]
    fn bubble_spans_the_payout_level() {
        let hands = schedule();
        let classifier = Classifier::from(hands.as_slice());
        assert!(classifier.phase(&hands[80]) == Phase::Bubble);
        assert!(classifier.phase(&hands[95]) == Phase::Bubble);
    }

    #[test]
    fn pre_bubble_covers_three_levels_before_payout() {
        let hands = schedule();
        let classifier = Classifier::from(hands.as_slice());
        // levels II..IV precede the level-V payout
        assert!(classifier.phase(&hands[25]) == Phase::PreBubble);
        assert!(classifier.phase(&hands[45]) == Phase::PreBubble);
        assert!(classifier.phase(&hands[65]) == Phase::PreBubble);
        assert!(classifier.phase(&hands[5]) == Phase::Start);
    }

    #[test]
    fn quiet_tournaments_stay_at_start() {
        let hands = (0..10).map(|i| hand(i, "I", "nothing")).collect::<Vec<_>>();
        let classifier = Classifier::from(hands.as_slice());
        assert!(hands.iter().all(|h| classifier.phase(h) == Phase::Start));
    }

    #[test]
    fn payout_on_first_level_has_no_pre_bubble() {
        let hands = vec![
            hand(0, "I", "x finished the tournament in 30th and received $1"),
            hand(1, "I", "nothing"),
        ];
        let classifier = Classifier::from(hands.as_slice());
        assert!(classifier.phase(&hands[0]) == Phase::Bubble);
        assert!(classifier.phase(&hands[1]) == Phase::Bubble);
    }
}
