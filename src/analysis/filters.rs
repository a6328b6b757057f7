use super::error::QueryError;
use serde::Serialize;
use std::collections::HashMap;

/// Filter payload shared by the HTTP API and the CLI.
///
/// `position`, `stage`, and `action` are required by the query
/// operation; everything else narrows the aggregate. Empty string
/// values behave as absent so `?player=` does not filter on the empty
/// player. The whole struct is echoed back in every response.
#[derive(Debug, Default, Clone, Serialize, clap::Args)]
pub struct Filters {
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub stage: Option<String>,
    #[arg(long)]
    pub action: Option<String>,
    #[arg(long)]
    pub tournament_stage: Option<String>,
    #[arg(long)]
    pub pot_bucket: Option<String>,
    #[arg(long)]
    pub bb_bucket: Option<String>,
    #[arg(long)]
    pub stack_bucket: Option<String>,
    #[arg(long)]
    pub player: Option<String>,
    #[arg(long)]
    pub tournament_id: Option<String>,
    #[arg(long)]
    pub stack_bb_min: Option<f64>,
    #[arg(long)]
    pub stack_bb_max: Option<f64>,
    #[arg(long)]
    pub cards: Option<String>,
    #[arg(long)]
    pub limit: Option<i64>,
}

impl TryFrom<&HashMap<String, String>> for Filters {
    type Error = QueryError;
    fn try_from(query: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let text = |name: &str| query.get(name).filter(|v| !v.is_empty()).cloned();
        let float = |name: &str| match query.get(name).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(v) => v.parse::<f64>().map(Some).map_err(|_| {
                QueryError::InvalidRequest(format!("Invalid float for {}: {}", name, v))
            }),
        };
        let integer = |name: &str| match query.get(name).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(v) => v.parse::<i64>().map(Some).map_err(|_| {
                QueryError::InvalidRequest(format!("Invalid integer for {}: {}", name, v))
            }),
        };
        Ok(Self {
            position: text("position"),
            stage: text("stage"),
            action: text("action"),
            tournament_stage: text("tournament_stage"),
            pot_bucket: text("pot_bucket"),
            bb_bucket: text("bb_bucket"),
            stack_bucket: text("stack_bucket"),
            player: text("player"),
            tournament_id: text("tournament_id"),
            stack_bb_min: float("stack_bb_min")?,
            stack_bb_max: float("stack_bb_max")?,
            cards: text("cards"),
            limit: integer("limit")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_supported_parameters() {
        let query = map(&[
            ("position", "BTN"),
            ("stage", "preflop"),
            ("action", "raise"),
            ("stack_bb_min", "12.5"),
            ("limit", "10"),
        ]);
        let filters = Filters::try_from(&query).unwrap();
        assert!(filters.position.as_deref() == Some("BTN"));
        assert!(filters.stack_bb_min == Some(12.5));
        assert!(filters.limit == Some(10));
        assert!(filters.player.is_none());
    }

    #[test]
    fn empty_values_are_absent() {
        let query = map(&[("position", "BTN"), ("player", "")]);
        let filters = Filters::try_from(&query).unwrap();
        assert!(filters.player.is_none());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let query = map(&[("stack_bb_min", "abc")]);
        let error = Filters::try_from(&query).unwrap_err();
        assert!(error.to_string() == "Invalid float for stack_bb_min: abc");
        let query = map(&[("limit", "ten")]);
        let error = Filters::try_from(&query).unwrap_err();
        assert!(error.to_string() == "Invalid integer for limit: ten");
    }
}
