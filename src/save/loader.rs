use super::schema;
use crate::Chips;
use crate::ingest::RangeOccurrence;
use duckdb::Connection;
use duckdb::params;
use std::path::PathBuf;

/// Writes the aggregated occurrence vector into a fresh warehouse file.
///
/// The warehouse is an immutable snapshot: any existing file at the
/// target path is deleted and recreated, so a second run over the same
/// input produces an equivalent warehouse. Rows are staged column-major
/// in batches and moved with one bulk insert per batch; indexes land
/// after the final batch.
pub struct Loader {
    path: PathBuf,
}

impl From<PathBuf> for Loader {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Loader {
    pub fn export(&self, occurrences: &[RangeOccurrence]) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        let conn = Connection::open(&self.path)
            .map_err(|e| anyhow::anyhow!("open warehouse {}: {}", self.path.display(), e))?;
        conn.execute_batch(schema::CREATES)
            .map_err(|e| anyhow::anyhow!("create schema: {}", e))?;
        if occurrences.is_empty() {
            log::warn!("no occurrences to export, warehouse left empty");
            return Ok(());
        }
        conn.execute_batch(schema::BATCHES)
            .map_err(|e| anyhow::anyhow!("create staging table: {}", e))?;
        let mut batch = Batch::default();
        for occ in occurrences {
            batch.push(occ);
            if batch.len() >= crate::LOADER_BATCH_ROWS {
                Self::insert(&conn, &batch)?;
                batch = Batch::default();
            }
        }
        if batch.len() > 0 {
            Self::insert(&conn, &batch)?;
        }
        conn.execute_batch(schema::INDICES)
            .map_err(|e| anyhow::anyhow!("create indexes: {}", e))?;
        log::info!(
            "exported {} occurrences to {}",
            occurrences.len(),
            self.path.display()
        );
        Ok(())
    }

    fn insert(conn: &Connection, batch: &Batch) -> anyhow::Result<()> {
        let mut appender = conn
            .appender_to_db(schema::OCC_BATCH, "temp")
            .map_err(|e| anyhow::anyhow!("open staging appender: {}", e))?;
        for i in 0..batch.len() {
            appender
                .append_row(params![
                    batch.tournament_id[i],
                    batch.hand_id[i],
                    batch.chunk_index[i],
                    batch.order_index[i],
                    batch.player[i],
                    batch.position[i],
                    batch.stage[i],
                    batch.action[i],
                    batch.cards[i],
                    batch.tournament_stage[i],
                    batch.pot_bucket[i],
                    batch.bb_bucket[i],
                    batch.stack_bucket[i],
                    batch.action_amount[i],
                    batch.pot_before[i],
                    batch.stack_size[i],
                    batch.stack_size_bb[i],
                    batch.bb_size[i],
                    batch.amount_bb[i],
                    batch.pot_odds[i],
                    batch.showdown[i],
                    batch.source_file[i],
                ])
                .map_err(|e| anyhow::anyhow!("stage row: {}", e))?;
        }
        appender
            .flush()
            .map_err(|e| anyhow::anyhow!("flush staging batch: {}", e))?;
        drop(appender);
        conn.execute_batch(schema::TRANSFERS)
            .map_err(|e| anyhow::anyhow!("transfer staged batch: {}", e))?;
        Ok(())
    }
}

/// Column-major staging buffer for one insert batch.
#[derive(Default)]
struct Batch {
    tournament_id: Vec<String>,
    hand_id: Vec<String>,
    chunk_index: Vec<i32>,
    order_index: Vec<i32>,
    player: Vec<String>,
    position: Vec<String>,
    stage: Vec<String>,
    action: Vec<String>,
    cards: Vec<String>,
    tournament_stage: Vec<String>,
    pot_bucket: Vec<&'static str>,
    bb_bucket: Vec<&'static str>,
    stack_bucket: Vec<&'static str>,
    action_amount: Vec<Chips>,
    pot_before: Vec<Chips>,
    stack_size: Vec<Chips>,
    stack_size_bb: Vec<Chips>,
    bb_size: Vec<Chips>,
    amount_bb: Vec<Chips>,
    pot_odds: Vec<Chips>,
    showdown: Vec<bool>,
    source_file: Vec<String>,
}

impl Batch {
    fn push(&mut self, occ: &RangeOccurrence) {
        self.tournament_id.push(occ.tournament_id.clone());
        self.hand_id.push(occ.hand_id.clone());
        self.chunk_index.push(occ.chunk_index as i32);
        self.order_index.push(occ.order_index as i32);
        self.player.push(occ.player.clone());
        self.position.push(occ.position.to_string());
        self.stage.push(occ.street.to_string());
        self.action.push(occ.kind.to_string());
        self.cards.push(occ.cards.to_string());
        self.tournament_stage.push(occ.phase.to_string());
        self.pot_bucket.push(occ.pot_bucket);
        self.bb_bucket.push(occ.bb_bucket);
        self.stack_bucket.push(occ.stack_bucket);
        self.action_amount.push(occ.action_amount);
        self.pot_before.push(occ.pot_before);
        self.stack_size.push(occ.stack_size);
        self.stack_size_bb.push(occ.stack_size_bb);
        self.bb_size.push(occ.bb_size);
        self.amount_bb.push(occ.amount_bb);
        self.pot_odds.push(occ.pot_odds);
        self.showdown.push(occ.showdown);
        self.source_file.push(occ.source_file.clone());
    }

    fn len(&self) -> usize {
        self.tournament_id.len()
    }
}
