use super::error::QueryError;
use super::filters::Filters;
use super::summary::Summary;
use crate::save::schema::RANGE_OCCURRENCES;
use duckdb::Connection;
use duckdb::types::Value;
use serde::Serialize;
use serde_json::Map;
use std::path::PathBuf;

/// Aggregate range queries against the warehouse.
///
/// The warehouse is read-only while serving; every call opens its own
/// connection and releases it on all exit paths, so concurrent requests
/// never share statement state.
pub struct API {
    path: PathBuf,
}

impl API {
    pub fn new(path: PathBuf) -> Result<Self, QueryError> {
        if !path.exists() {
            return Err(QueryError::NotFound(format!(
                "Database {} not found.",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    fn connect(&self) -> Result<Connection, QueryError> {
        let config = duckdb::Config::default().access_mode(duckdb::AccessMode::ReadOnly)?;
        Connection::open_with_flags(&self.path, config).map_err(QueryError::from)
    }

    /// The one query operation: a combo frequency summary for the
    /// filtered slice, overall and broken down by each bucket family.
    pub fn query_ranges(&self, filters: &Filters) -> Result<RangesPayload, QueryError> {
        if filters.position.is_none() || filters.stage.is_none() || filters.action.is_none() {
            return Err(QueryError::InvalidRequest(
                "position, stage, and action filters are required".to_string(),
            ));
        }
        let conn = self.connect()?;
        let (clause, params) = Self::predicate(filters);
        let all = Self::all(&conn, &clause, &params, filters.limit)?;
        let pot = Self::bucket(&conn, &clause, &params, "COALESCE(pot_bucket, 'N/A')")?;
        let bb = Self::bucket(&conn, &clause, &params, "COALESCE(bb_bucket, 'N/A')")?;
        let stack = Self::bucket(&conn, &clause, &params, "COALESCE(stack_bucket, 'UNKNOWN')")?;
        let phase = Self::bucket(
            &conn,
            &clause,
            &params,
            "COALESCE(tournament_stage, 'UNKNOWN')",
        )?;
        Ok(RangesPayload {
            filters: filters.clone(),
            all: Summary::from(all),
            by_pot_size: Self::grouped(pot)?,
            by_bb_size: Self::grouped(bb)?,
            by_stack_bucket: Self::grouped(stack)?,
            by_tournament_stage: Self::grouped(phase)?,
        })
    }

    /// Translate the supplied filters into a parameterized WHERE clause.
    fn predicate(filters: &Filters) -> (String, Vec<Value>) {
        let equalities: [(&str, &Option<String>); 10] = [
            ("position = ?", &filters.position),
            ("stage = ?", &filters.stage),
            ("action = ?", &filters.action),
            ("tournament_stage = ?", &filters.tournament_stage),
            ("pot_bucket = ?", &filters.pot_bucket),
            ("bb_bucket = ?", &filters.bb_bucket),
            ("stack_bucket = ?", &filters.stack_bucket),
            ("player = ?", &filters.player),
            ("tournament_id = ?", &filters.tournament_id),
            ("cards = ?", &filters.cards),
        ];
        let mut clauses = Vec::<&str>::new();
        let mut params = Vec::<Value>::new();
        for (clause, value) in equalities {
            if let Some(value) = value {
                clauses.push(clause);
                params.push(Value::Text(value.clone()));
            }
        }
        if let Some(min) = filters.stack_bb_min {
            clauses.push("stack_size_bb >= ?");
            params.push(Value::Double(min));
        }
        if let Some(max) = filters.stack_bb_max {
            clauses.push("stack_size_bb <= ?");
            params.push(Value::Double(max));
        }
        let clause = match clauses.is_empty() {
            true => String::new(),
            false => format!("WHERE {}", clauses.join(" AND ")),
        };
        (clause, params)
    }

    fn all(
        conn: &Connection,
        clause: &str,
        params: &[Value],
        limit: Option<i64>,
    ) -> Result<Vec<(String, i64)>, QueryError> {
        let mut sql = format!(
            "SELECT cards, COUNT(*) AS count FROM {} {} GROUP BY cards ORDER BY count DESC",
            RANGE_OCCURRENCES, clause
        );
        let mut params = params.to_vec();
        // limit=0 means no limit, same as leaving it out
        if let Some(limit) = limit.filter(|&n| n > 0) {
            sql.push_str(" LIMIT ?");
            params.push(Value::BigInt(limit));
        }
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(duckdb::params_from_iter(params), |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        rows.collect::<Result<Vec<(String, i64)>, duckdb::Error>>()
            .map_err(QueryError::from)
    }

    fn bucket(
        conn: &Connection,
        clause: &str,
        params: &[Value],
        expr: &str,
    ) -> Result<Vec<(String, String, i64)>, QueryError> {
        let sql = format!(
            "SELECT {} AS bucket, cards, COUNT(*) AS count FROM {} {} GROUP BY bucket, cards ORDER BY bucket, count DESC",
            expr, RANGE_OCCURRENCES, clause
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(duckdb::params_from_iter(params.to_vec()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;
        rows.collect::<Result<Vec<(String, String, i64)>, duckdb::Error>>()
            .map_err(QueryError::from)
    }

    /// Wrap bucketed rows as `{bucket: summary}` in bucket arrival order.
    fn grouped(
        rows: Vec<(String, String, i64)>,
    ) -> Result<Map<String, serde_json::Value>, QueryError> {
        let mut buckets = Vec::<(String, Vec<(String, i64)>)>::new();
        for (bucket, combo, count) in rows {
            match buckets.last_mut() {
                Some((name, combos)) if *name == bucket => combos.push((combo, count)),
                _ => buckets.push((bucket, vec![(combo, count)])),
            }
        }
        buckets
            .into_iter()
            .map(|(bucket, combos)| {
                serde_json::to_value(Summary::from(combos))
                    .map(|summary| (bucket, summary))
                    .map_err(|e| QueryError::Internal(e.to_string()))
            })
            .collect()
    }
}

/// The stable response schema served over HTTP and printed by the CLI.
#[derive(Debug, Serialize)]
pub struct RangesPayload {
    pub filters: Filters,
    pub all: Summary,
    pub by_pot_size: Map<String, serde_json::Value>,
    pub by_bb_size: Map<String, serde_json::Value>,
    pub by_stack_bucket: Map<String, serde_json::Value>,
    pub by_tournament_stage: Map<String, serde_json::Value>,
}
