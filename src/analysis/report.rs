use super::error::QueryError;
use super::summary;
use crate::ingest::buckets::BB_ORDER_POST;
use crate::ingest::buckets::BB_ORDER_PRE;
use crate::ingest::buckets::POT_ORDER;
use crate::parse::ActionKind;
use crate::parse::Position;
use crate::parse::Street;
use crate::save::schema::RANGE_OCCURRENCES;
use crate::tourney::Phase;
use const_format::concatcp;
use duckdb::Connection;
use duckdb::params;
use std::collections::HashMap;
use std::path::PathBuf;

const WIDTH: usize = 80;

const COMBOS: &str = concatcp!(
    "SELECT cards, COUNT(*) AS count FROM ",
    RANGE_OCCURRENCES,
    " WHERE position = ? AND stage = ? AND action = ? GROUP BY cards"
);

const OPENS: &str = concatcp!(
    "SELECT position, COUNT(DISTINCT cards) AS unique_combos, COUNT(*) AS total_instances FROM ",
    RANGE_OCCURRENCES,
    " WHERE stage = 'preflop' AND action = 'raise' GROUP BY position"
);

/// Renders the batch text report straight from the warehouse.
///
/// Iterates the fixed position, street, and action grids, querying each
/// cell's combo counts and bucket breakdowns. Empty cells are skipped
/// silently, as are streets with no non-empty cells and positions with
/// no non-empty streets.
pub struct Report {
    path: PathBuf,
}

impl Report {
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

    pub fn generate(&self) -> Result<String, QueryError> {
        let conn = self.connect()?;
        let mut report = vec![
            "=".repeat(WIDTH),
            "POKER RANGE ANALYSIS REPORT".to_string(),
            "=".repeat(WIDTH),
            String::new(),
        ];
        for position in Position::grid() {
            let mut position_lines = Vec::<String>::new();
            for street in Street::all() {
                let mut street_lines = Vec::<String>::new();
                for action in ActionKind::all() {
                    if let Some(cell) = Self::cell(&conn, position, street, action)? {
                        street_lines.extend(cell.render(street));
                    }
                }
                if !street_lines.is_empty() {
                    position_lines.push(format!("\n{}:", street.to_string().to_uppercase()));
                    position_lines.push("-".repeat(WIDTH));
                    position_lines.extend(street_lines);
                }
            }
            if !position_lines.is_empty() {
                report.push(format!("\n{}", "=".repeat(WIDTH)));
                report.push(format!("POSITION: {}", position));
                report.push("=".repeat(WIDTH));
                report.extend(position_lines);
            }
        }
        Ok(report.join("\n"))
    }

    /// Unique combos seen raising preflop, per position in grid order.
    pub fn preflop_open_summary(&self) -> Result<Vec<(String, i64, i64)>, QueryError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(OPENS)?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;
        let mut found = HashMap::<String, (i64, i64)>::new();
        for row in rows {
            let (position, unique_combos, total) = row?;
            found.insert(position, (unique_combos, total));
        }
        Ok(Position::grid()
            .iter()
            .filter_map(|position| {
                let label = position.to_string();
                found
                    .get(&label)
                    .map(|&(unique_combos, total)| (label.clone(), unique_combos, total))
            })
            .collect())
    }

    fn cell(
        conn: &Connection,
        position: Position,
        street: Street,
        action: ActionKind,
    ) -> Result<Option<Cell>, QueryError> {
        let mut stmt = conn.prepare(COMBOS)?;
        let rows = stmt.query_map(
            params![position.to_string(), street.to_string(), action.to_string()],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )?;
        let mut hands = rows
            .collect::<Result<Vec<(String, i64)>, duckdb::Error>>()
            .map_err(QueryError::from)?;
        if hands.is_empty() {
            return Ok(None);
        }
        hands.sort_by_key(|(combo, _)| summary::combo_key(combo));
        let total = hands.iter().map(|(_, count)| count).sum::<i64>();
        let counts = hands.iter().map(|(_, count)| *count).collect::<Vec<i64>>();
        let median_pct = match total {
            0 => 0.0,
            _ => summary::median(&counts) / total as f64 * 100.0,
        };
        Ok(Some(Cell {
            action,
            hands,
            total,
            median_pct,
            by_pot: Self::bucket(conn, position, street, action, "COALESCE(pot_bucket, 'N/A')")?,
            by_bb: Self::bucket(conn, position, street, action, "COALESCE(bb_bucket, 'N/A')")?,
            by_phase: Self::bucket(
                conn,
                position,
                street,
                action,
                "COALESCE(tournament_stage, 'UNKNOWN')",
            )?,
        }))
    }

    fn bucket(
        conn: &Connection,
        position: Position,
        street: Street,
        action: ActionKind,
        expr: &str,
    ) -> Result<HashMap<String, Vec<(String, i64)>>, QueryError> {
        let sql = format!(
            "SELECT {} AS bucket, cards, COUNT(*) AS count FROM {} WHERE position = ? AND stage = ? AND action = ? GROUP BY bucket, cards",
            expr, RANGE_OCCURRENCES
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![position.to_string(), street.to_string(), action.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        )?;
        let mut buckets = HashMap::<String, Vec<(String, i64)>>::new();
        for row in rows {
            let (bucket, combo, count) = row?;
            buckets.entry(bucket).or_default().push((combo, count));
        }
        for combos in buckets.values_mut() {
            combos.sort_by_key(|(combo, _)| summary::combo_key(combo));
        }
        Ok(buckets)
    }
}

/// One non-empty (position, street, action) cell of the report grid.
struct Cell {
    action: ActionKind,
    hands: Vec<(String, i64)>,
    total: i64,
    median_pct: f64,
    by_pot: HashMap<String, Vec<(String, i64)>>,
    by_bb: HashMap<String, Vec<(String, i64)>>,
    by_phase: HashMap<String, Vec<(String, i64)>>,
}

impl Cell {
    fn render(&self, street: Street) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "\n  {}: {}",
            self.action.to_string().to_uppercase(),
            Self::combos(&self.hands)
        ));
        lines.push(format!(
            "    Total: {} unique combos, {} instances, median combo frequency: {:.2}%",
            self.hands.len(),
            self.total,
            self.median_pct
        ));
        if !self.by_pot.is_empty() {
            lines.push("    By Pot Size:".to_string());
            for bucket in Self::ordering(&POT_ORDER, &self.by_pot) {
                lines.push(Self::bucket_line(&bucket, &self.by_pot[&bucket], self.total));
            }
        }
        if !self.by_bb.is_empty() {
            lines.push("    By Big Blinds:".to_string());
            let known: &[&str] = match street.is_preflop() {
                true => &BB_ORDER_PRE,
                false => &BB_ORDER_POST,
            };
            for bucket in Self::ordering(known, &self.by_bb) {
                lines.push(Self::bucket_line(&bucket, &self.by_bb[&bucket], self.total));
            }
        }
        if !self.by_phase.is_empty() {
            lines.push("    By Tournament Stage:".to_string());
            let phases = Phase::all().map(|phase| phase.to_string());
            let known = phases.iter().map(String::as_str).collect::<Vec<&str>>();
            for bucket in Self::ordering(&known, &self.by_phase) {
                lines.push(Self::bucket_line(
                    &bucket,
                    &self.by_phase[&bucket],
                    self.total,
                ));
            }
        }
        lines
    }

    fn combos(rows: &[(String, i64)]) -> String {
        rows.iter()
            .map(|(combo, count)| format!("{}({})", combo, count))
            .collect::<Vec<String>>()
            .join(", ")
    }

    fn bucket_line(bucket: &str, rows: &[(String, i64)], total: i64) -> String {
        let bucket_total = rows.iter().map(|(_, count)| count).sum::<i64>();
        let pct = match total {
            0 => 0.0,
            _ => bucket_total as f64 / total as f64 * 100.0,
        };
        format!(
            "      {}: {} [{} instances, {:.1}%]",
            bucket,
            Self::combos(rows),
            bucket_total,
            pct
        )
    }

    /// Known buckets in their fixed order, then anything unexpected
    /// sorted lexicographically.
    fn ordering(known: &[&str], present: &HashMap<String, Vec<(String, i64)>>) -> Vec<String> {
        let mut ordered = known
            .iter()
            .filter(|bucket| present.contains_key(**bucket))
            .map(|bucket| bucket.to_string())
            .collect::<Vec<String>>();
        let mut extras = present
            .keys()
            .filter(|bucket| !known.contains(&bucket.as_str()))
            .cloned()
            .collect::<Vec<String>>();
        extras.sort();
        ordered.extend(extras);
        ordered
    }
}
