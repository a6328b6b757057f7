use const_format::concatcp;

/// Pure schema definitions for the warehouse fact table.
/// No I/O operations, just the SQL the loader and the query layers
/// share. Built with concatcp so the strings exist at compile time.

pub const RANGE_OCCURRENCES: &str = "range_occurrences";
pub const OCC_BATCH: &str = "occ_batch";

const COLUMNS: &str = "(
    tournament_id TEXT,
    hand_id TEXT,
    chunk_index INTEGER,
    order_index INTEGER,
    player TEXT,
    position TEXT,
    stage TEXT,
    action TEXT,
    cards TEXT,
    tournament_stage TEXT,
    pot_bucket TEXT,
    bb_bucket TEXT,
    stack_bucket TEXT,
    action_amount DOUBLE,
    pot_before DOUBLE,
    stack_size DOUBLE,
    stack_size_bb DOUBLE,
    bb_size DOUBLE,
    amount_bb DOUBLE,
    pot_odds DOUBLE,
    showdown BOOLEAN,
    source_file TEXT
)";

/// Fact table DDL.
pub const CREATES: &str = concatcp!("CREATE TABLE ", RANGE_OCCURRENCES, " ", COLUMNS, ";");

/// Session-scoped staging table with the identical column layout.
pub const BATCHES: &str = concatcp!("CREATE TEMPORARY TABLE ", OCC_BATCH, " ", COLUMNS, ";");

/// Move one staged batch into the fact table in a single bulk insert.
pub const TRANSFERS: &str = concatcp!(
    "INSERT INTO ",
    RANGE_OCCURRENCES,
    " SELECT * FROM ",
    OCC_BATCH,
    "; DELETE FROM ",
    OCC_BATCH,
    ";"
);

/// Read-path indexes, created only after the final batch lands.
pub const INDICES: &str = concatcp!(
    "CREATE INDEX idx_range_key ON ",
    RANGE_OCCURRENCES,
    " (position, stage, action);",
    "CREATE INDEX idx_range_buckets ON ",
    RANGE_OCCURRENCES,
    " (pot_bucket, bb_bucket, stack_bucket);",
    "CREATE INDEX idx_range_stage ON ",
    RANGE_OCCURRENCES,
    " (tournament_stage);"
);
