use super::action::ActionKind;
use super::action::HandAction;
use super::patterns;
use super::player::PlayerHand;
use super::position::Position;
use super::street::Street;
use crate::Chips;
use crate::cards::Combo;
use crate::tourney::Phase;
use std::collections::HashMap;

/// One hand's block of text plus its position within the tournament.
///
/// Built by the tournament driver before classification, then parsed
/// individually once every hand's phase is known.
#[derive(Debug, Clone)]
pub struct Hand {
    pub id: String,
    pub text: String,
    pub level: String,
    pub chunk: u32,
    pub order: u32,
    pub source: String,
}

impl Hand {
    /// Lift one raw block into a hand entry, extracting the hand id and
    /// the level label used by the phase classifier.
    pub fn read(text: &str, tournament_id: &str, chunk: u32, order: u32, source: &str) -> Self {
        let id = patterns::HAND_ID
            .captures(text)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| format!("{}_{}", tournament_id, order));
        let level = patterns::LEVEL
            .captures(text)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        Self {
            id,
            text: text.to_string(),
            level,
            chunk,
            order,
            source: source.to_string(),
        }
    }

    /// Big-blind value from the level header. Defaults to 1.0 so the
    /// derived per-BB ratios stay divisible.
    pub fn bb_size(&self) -> Chips {
        patterns::BLINDS
            .captures(&self.text)
            .and_then(|c| c[2].parse::<Chips>().ok())
            .unwrap_or(crate::DEFAULT_BB)
    }

    /// Parse this hand's timeline and return one [`PlayerHand`] per
    /// showdown revelation. Hands without a button marker are dropped.
    pub fn showdowns(&self, tournament_id: &str, phase: Phase) -> Vec<PlayerHand> {
        let lines = self.text.trim().lines().collect::<Vec<&str>>();
        if lines.len() < crate::MIN_HAND_LINES {
            return vec![];
        }
        let button = match patterns::BUTTON.captures(&self.text) {
            Some(c) => c[1].parse::<u32>().unwrap_or(0),
            None => return vec![],
        };
        let bb_size = self.bb_size();
        let seats = patterns::SEAT
            .captures_iter(&self.text)
            .filter_map(|c| {
                let seat = c[1].parse::<u32>().ok()?;
                let chips = c[3].parse::<Chips>().ok()?;
                Some((c[2].to_string(), (seat, chips)))
            })
            .collect::<HashMap<String, (u32, Chips)>>();
        let total = seats.len();

        let mut street = Street::Pref;
        let mut pot = 0 as Chips;
        let mut timelines = HashMap::<String, Vec<HandAction>>::new();
        for line in &lines {
            if let Some(c) = patterns::STAGE.captures(line) {
                street = Street::try_from(&c[1]).unwrap_or(street);
                continue;
            }
            for (pattern, kind) in patterns::ACTIONS.iter() {
                let Some(c) = pattern.captures(line) else {
                    continue;
                };
                let Some(&(seat, chips)) = seats.get(&c[1]) else {
                    continue;
                };
                let amount = match kind {
                    ActionKind::Raise => match c.get(3) {
                        Some(to) => to.as_str().parse::<Chips>().unwrap_or(0.0),
                        None => {
                            log::debug!("single-amount raise form: {}", line);
                            c[2].parse::<Chips>().unwrap_or(0.0)
                        }
                    },
                    kind if kind.commits() => c[2].parse::<Chips>().unwrap_or(0.0),
                    _ => 0.0,
                };
                let action = HandAction {
                    player: c[1].to_string(),
                    kind: *kind,
                    amount,
                    position: Position::from((seat, button, total)),
                    street,
                    pot_before: pot,
                    stack_size: chips,
                    bb_size,
                    amount_bb: if bb_size > 0.0 { amount / bb_size } else { 0.0 },
                    pot_odds: if pot > 0.0 { amount / pot } else { 0.0 },
                    phase,
                };
                timelines.entry(action.player.clone()).or_default().push(action);
                if kind.commits() {
                    pot += amount;
                }
                break;
            }
        }

        patterns::SHOWN
            .captures_iter(&self.text)
            .filter_map(|c| {
                let &(seat, _) = seats.get(&c[1])?;
                let cards = Combo::normalize(&c[2])?;
                Some(PlayerHand {
                    player: c[1].to_string(),
                    cards,
                    position: Position::from((seat, button, total)),
                    actions: timelines.get(&c[1]).cloned().unwrap_or_default(),
                    tournament_id: tournament_id.to_string(),
                    hand_id: self.id.clone(),
                    chunk_index: self.chunk,
                    order_index: self.order,
                    source_file: self.source.clone(),
                    bb_size,
                })
            })
            .collect()
    }
}
