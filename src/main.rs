use clap::Parser;
use clap::Subcommand;
use rangescan::analysis::API;
use rangescan::analysis::Filters;
use rangescan::analysis::Report;
use rangescan::analysis::Server;
use rangescan::ingest::Distributor;
use rangescan::save::Loader;
use rangescan::tourney::Tournament;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rangescan",
    about = "Showdown range extraction and analysis for tournament hand histories",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse hand histories under a directory and build the warehouse
    Ingest {
        dir: PathBuf,
        #[arg(long, default_value = rangescan::DEFAULT_WAREHOUSE)]
        db: PathBuf,
        #[arg(long, default_value = rangescan::DEFAULT_REPORT)]
        report: PathBuf,
    },
    /// Serve range queries over HTTP
    Serve {
        #[arg(long, default_value = rangescan::DEFAULT_WAREHOUSE)]
        db: PathBuf,
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Run a single range query and print the JSON payload
    Query {
        #[arg(long, default_value = rangescan::DEFAULT_WAREHOUSE)]
        db: PathBuf,
        #[command(flatten)]
        filters: Filters,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    rangescan::init();
    match Args::parse().command {
        Command::Ingest { dir, db, report } => ingest(dir, db, report),
        Command::Serve { db, host, port } => Server::run(db, host, port).await,
        Command::Query { db, filters } => query(db, filters),
    }
}

fn ingest(dir: PathBuf, db: PathBuf, report: PathBuf) -> anyhow::Result<()> {
    let files = Tournament::discover(&dir);
    anyhow::ensure!(
        !files.is_empty(),
        "no hand history files under {}",
        dir.display()
    );
    log::info!("found {} hand history files", files.len());
    let tournaments = Tournament::group(&files);
    let harvest = Distributor::from(tournaments).run();
    log::info!(
        "parsed {} hands, {} shown, {} actions tracked",
        harvest.hands_parsed,
        harvest.shown_hands,
        harvest.actions
    );
    Loader::from(db.clone()).export(&harvest.occurrences)?;
    let builder = Report::new(db)?;
    std::fs::write(&report, builder.generate()?)?;
    log::info!("report saved to {}", report.display());
    for (position, unique_combos, instances) in builder.preflop_open_summary()? {
        log::info!(
            "{} preflop opening range: {} unique combos, {} instances",
            position,
            unique_combos,
            instances
        );
    }
    Ok(())
}

fn query(db: PathBuf, filters: Filters) -> anyhow::Result<()> {
    let payload = API::new(db)?.query_ranges(&filters)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
