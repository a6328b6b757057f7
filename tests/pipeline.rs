use rangescan::analysis::API;
use rangescan::analysis::Filters;
use rangescan::analysis::Report;
use rangescan::ingest::Distributor;
use rangescan::save::Loader;
use rangescan::tourney::Tournament;
use std::path::Path;
use std::path::PathBuf;

const CHUNK_0: &str = "\
PokerStars Hand #9001: Tournament #777, Hold'em No Limit - Level I (10/20) - 2024/03/01 10:00:00 ET
Table '777 1' 9-max Seat #1 is the button
Seat 1: hero (2000 in chips)
Seat 2: villain (2000 in chips)
villain: posts big blind 20
hero: raises 20 to 40
villain: folds
*** SUMMARY ***
Seat 1: hero showed [As Ks] and won (60)

PokerStars Hand #9002: Tournament #777, Hold'em No Limit - Level I (10/20) - 2024/03/01 10:05:00 ET
Table '777 1' 9-max Seat #2 is the button
Seat 1: hero (2040 in chips)
Seat 2: villain (1960 in chips)
villain: raises 20 to 40
hero: folds
*** SUMMARY ***
Seat 2: villain showed [Kc Ac] and won (60)
";

const CHUNK_1: &str = "\
PokerStars Hand #9003: Tournament #777, Hold'em No Limit - Level II (15/30) - 2024/03/01 10:20:00 ET
Table '777 1' 9-max Seat #2 is the button
Seat 1: hero (3000 in chips)
Seat 2: villain (1000 in chips)
hero: raises 30 to 60
villain: calls 30
*** FLOP *** [7s 8d 2c]
villain: checks
hero: bets 60
villain: calls 60
*** SUMMARY ***
Seat 2: villain showed [7h 7d] and lost
";

// a second tournament whose only hand lacks a button marker, so it
// parses to nothing but still exercises the parallel dispatch path
const STRAY: &str = "\
PokerStars Hand #9100: Tournament #888, Hold'em No Limit - Level I (10/20) - 2024/03/01 11:00:00 ET
Table '888 1' 9-max
Seat 1: nobody (1500 in chips)
nobody: checks
";

fn build_warehouse(dir: &Path) -> PathBuf {
    let hands = dir.join("hands");
    std::fs::create_dir_all(&hands).unwrap();
    std::fs::write(hands.join("hhDealer.com_777-0_20240301.txt"), CHUNK_0).unwrap();
    std::fs::write(hands.join("hhDealer.com_777-1_20240301.txt"), CHUNK_1).unwrap();
    std::fs::write(hands.join("misc_session.txt"), STRAY).unwrap();
    let files = Tournament::discover(&hands);
    let harvest = Distributor::from(Tournament::group(&files)).run();
    assert!(harvest.hands_parsed == 4);
    assert!(harvest.shown_hands == 3);
    let db = dir.join("range_analysis.duckdb");
    Loader::from(db.clone()).export(&harvest.occurrences).unwrap();
    db
}

fn filters(position: &str, stage: &str, action: &str) -> Filters {
    Filters {
        position: Some(position.to_string()),
        stage: Some(stage.to_string()),
        action: Some(action.to_string()),
        ..Filters::default()
    }
}

#[test]
fn btn_preflop_raises_collapse_to_one_combo() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let api = API::new(db).unwrap();
    let payload = api.query_ranges(&filters("BTN", "preflop", "raise")).unwrap();
    assert!(payload.all.total_instances == 2);
    assert!(payload.all.unique_combos == 1);
    let aks = &payload.all.hands["AKs"];
    assert!(aks["count"].as_i64() == Some(2));
    assert!(aks["frequency_pct"].as_f64() == Some(100.0));
    assert!(payload.all.median_frequency_pct == 100.0);
}

#[test]
fn bucket_totals_reconcile_with_the_overall_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let api = API::new(db).unwrap();
    let payload = api.query_ranges(&filters("BTN", "preflop", "raise")).unwrap();
    for buckets in [
        &payload.by_pot_size,
        &payload.by_bb_size,
        &payload.by_stack_bucket,
        &payload.by_tournament_stage,
    ] {
        let mut across = 0;
        for summary in buckets.values() {
            let total = summary["total_instances"].as_i64().unwrap();
            let counted = summary["hands"]
                .as_object()
                .unwrap()
                .values()
                .map(|hand| hand["count"].as_i64().unwrap())
                .sum::<i64>();
            assert!(counted == total);
            across += total;
        }
        assert!(across == payload.all.total_instances);
    }
    // both raises went into an empty pot
    assert!(payload.by_pot_size.contains_key("OPEN"));
    assert!(payload.by_bb_size.contains_key("MINRAISE"));
    assert!(payload.by_tournament_stage.contains_key("start"));
}

#[test]
fn optional_filters_narrow_the_slice() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let api = API::new(db).unwrap();

    let mut narrowed = filters("BTN", "preflop", "raise");
    narrowed.player = Some("villain".to_string());
    let payload = api.query_ranges(&narrowed).unwrap();
    assert!(payload.all.total_instances == 1);

    let mut deep = filters("BTN", "preflop", "raise");
    deep.stack_bb_min = Some(150.0);
    let payload = api.query_ranges(&deep).unwrap();
    assert!(payload.all.total_instances == 0);
    assert!(payload.all.hands.is_empty());

    let mut carded = filters("BTN", "preflop", "call");
    carded.cards = Some("77".to_string());
    let payload = api.query_ranges(&carded).unwrap();
    assert!(payload.all.total_instances == 1);
}

#[test]
fn required_filters_are_enforced() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let api = API::new(db).unwrap();
    let mut missing = filters("BTN", "preflop", "raise");
    missing.action = None;
    let error = api.query_ranges(&missing).unwrap_err();
    assert!(error.to_string() == "position, stage, and action filters are required");
}

#[test]
fn absent_warehouse_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(API::new(tmp.path().join("nope.duckdb")).is_err());
    assert!(Report::new(tmp.path().join("nope.duckdb")).is_err());
}

#[test]
fn order_index_is_contiguous_within_a_tournament() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let conn = duckdb::Connection::open(&db).unwrap();
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT order_index FROM range_occurrences WHERE tournament_id = '777' ORDER BY order_index",
        )
        .unwrap();
    let orders = stmt
        .query_map([], |row| row.get::<_, i64>(0))
        .unwrap()
        .collect::<Result<Vec<i64>, duckdb::Error>>()
        .unwrap();
    assert!(orders == vec![0, 1, 2]);
    let mut stmt = conn
        .prepare("SELECT COUNT(DISTINCT tournament_stage) FROM range_occurrences GROUP BY hand_id")
        .unwrap();
    let labels = stmt
        .query_map([], |row| row.get::<_, i64>(0))
        .unwrap()
        .collect::<Result<Vec<i64>, duckdb::Error>>()
        .unwrap();
    assert!(labels.iter().all(|&n| n == 1));
}

#[test]
fn report_is_stable_across_rebuilds() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let first = Report::new(db.clone()).unwrap().generate().unwrap();
    let again = Report::new(db).unwrap().generate().unwrap();
    assert!(first == again);

    let db = build_warehouse(tmp.path());
    let rebuilt = Report::new(db).unwrap().generate().unwrap();
    assert!(first == rebuilt);
}

#[test]
fn report_renders_the_expected_cells() {
    let tmp = tempfile::tempdir().unwrap();
    let db = build_warehouse(tmp.path());
    let builder = Report::new(db).unwrap();
    let report = builder.generate().unwrap();
    assert!(report.contains("POKER RANGE ANALYSIS REPORT"));
    assert!(report.contains("POSITION: BTN"));
    assert!(report.contains("PREFLOP:"));
    assert!(report.contains("RAISE: AKs(2)"));
    assert!(report.contains("CALL: 77(1)"));
    // the BB seat never reached showdown, so it never appears
    assert!(!report.contains("POSITION: SB"));

    let opens = builder.preflop_open_summary().unwrap();
    assert!(opens == vec![("BTN".to_string(), 1, 2)]);
}
