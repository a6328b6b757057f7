use crate::cards::Combo;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// Frequency stats for one set of (combo, count) rows.
///
/// `hands` is emitted in combo-rank order, pairs first, so consumers
/// see stable output regardless of the SQL grouping order.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub hands: Map<String, Value>,
    pub total_instances: i64,
    pub unique_combos: usize,
    pub median_frequency_pct: f64,
}

impl From<Vec<(String, i64)>> for Summary {
    fn from(mut rows: Vec<(String, i64)>) -> Self {
        rows.sort_by_key(|(combo, _)| combo_key(combo));
        let total = rows.iter().map(|(_, count)| count).sum::<i64>();
        let mut hands = Map::new();
        for (combo, count) in &rows {
            let frequency = match total {
                0 => 0.0,
                _ => *count as f64 / total as f64 * 100.0,
            };
            hands.insert(
                combo.clone(),
                json!({ "count": count, "frequency_pct": round2(frequency) }),
            );
        }
        let counts = rows.iter().map(|(_, count)| *count).collect::<Vec<i64>>();
        let median_pct = match total {
            0 => 0.0,
            _ => median(&counts) / total as f64 * 100.0,
        };
        Self {
            hands,
            total_instances: total,
            unique_combos: rows.len(),
            median_frequency_pct: round2(median_pct),
        }
    }
}

/// Sort key for combo labels; labels that fail to parse sink to the end.
pub fn combo_key(label: &str) -> (u8, u8, u8, u8) {
    Combo::try_from(label)
        .map(|combo| combo.key())
        .unwrap_or((2, 0, 0, 0))
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Median of raw combo counts, mean of the middle pair when even.
pub fn median(counts: &[i64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    match n % 2 {
        1 => sorted[n / 2] as f64,
        _ => (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_sum_from_counts() {
        let summary = Summary::from(vec![("AKs".to_string(), 3), ("QQ".to_string(), 1)]);
        assert!(summary.total_instances == 4);
        assert!(summary.unique_combos == 2);
        assert!(summary.hands["AKs"]["frequency_pct"] == json!(75.0));
        assert!(summary.hands["QQ"]["frequency_pct"] == json!(25.0));
        assert!(summary.median_frequency_pct == 50.0);
    }

    #[test]
    fn counted_hands_match_total() {
        let rows = vec![
            ("AA".to_string(), 5),
            ("72o".to_string(), 2),
            ("T9s".to_string(), 3),
        ];
        let summary = Summary::from(rows);
        let counted = summary
            .hands
            .values()
            .map(|v| v["count"].as_i64().unwrap())
            .sum::<i64>();
        assert!(counted == summary.total_instances);
    }

    #[test]
    fn pairs_lead_the_hand_map() {
        let rows = vec![
            ("AKs".to_string(), 1),
            ("22".to_string(), 1),
            ("AA".to_string(), 1),
        ];
        let summary = Summary::from(rows);
        let order = summary.hands.keys().cloned().collect::<Vec<String>>();
        assert!(order == vec!["AA", "22", "AKs"]);
    }

    #[test]
    fn empty_rows_yield_zeroes() {
        let summary = Summary::from(vec![]);
        assert!(summary.total_instances == 0);
        assert!(summary.unique_combos == 0);
        assert!(summary.median_frequency_pct == 0.0);
    }

    #[test]
    fn rounding_is_two_decimals() {
        assert!(round2(33.333333) == 33.33);
        assert!(round2(66.666666) == 66.67);
    }

    #[test]
    fn median_handles_even_sets() {
        assert!(median(&[1, 3]) == 2.0);
        assert!(median(&[1, 2, 3]) == 2.0);
        assert!(median(&[5]) == 5.0);
    }
}
