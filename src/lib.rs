pub mod analysis;
pub mod cards;
pub mod ingest;
pub mod parse;
pub mod save;
pub mod tourney;

/// dimensional analysis types
pub type Chips = f64;

/// rank alphabet shared by card normalization and combo ordering
pub const RANKS: &str = "AKQJT98765432";

// ingest parameters
pub const DEFAULT_BB: Chips = 1.0;
pub const MIN_HAND_LINES: usize = 5;
pub const PROGRESS_INTERVAL: usize = 50;
pub const LOADER_BATCH_ROWS: usize = 200_000;

// tournament phase parameters
pub const FINAL_TABLE_PLACES: u32 = 9;
pub const PRE_BUBBLE_LEVELS: usize = 3;

// output defaults
pub const DEFAULT_WAREHOUSE: &str = "range_analysis.duckdb";
pub const DEFAULT_REPORT: &str = "range_analysis_report.txt";

/// initialize logging
pub fn init() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
