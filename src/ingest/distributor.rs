use super::occurrence::Collector;
use super::occurrence::RangeOccurrence;
use crate::tourney::Tournament;
use rayon::prelude::*;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Everything one ingest run produces: the flat fact rows plus the
/// totals printed at the end.
#[derive(Debug, Default)]
pub struct Harvest {
    pub occurrences: Vec<RangeOccurrence>,
    pub hands_parsed: usize,
    pub shown_hands: usize,
    pub actions: usize,
}

impl Harvest {
    fn absorb(mut self, other: Self) -> Self {
        self.occurrences.extend(other.occurrences);
        self.hands_parsed += other.hands_parsed;
        self.shown_hands += other.shown_hands;
        self.actions += other.actions;
        self
    }
}

/// Fans tournament tasks out across a worker pool and concatenates the
/// per-tournament results serially.
///
/// Each worker owns its task's file handles and parser state; nothing
/// is shared except the completion counter. When the pool cannot be
/// built the same task list runs sequentially on the calling thread
/// with identical output.
pub struct Distributor(Vec<Tournament>);

impl From<Vec<Tournament>> for Distributor {
    fn from(tournaments: Vec<Tournament>) -> Self {
        Self(tournaments)
    }
}

impl Distributor {
    pub fn run(self) -> Harvest {
        let total = self.0.len();
        if total == 0 {
            return Harvest::default();
        }
        let workers = num_cpus::get().min(total).max(1);
        let done = AtomicUsize::new(0);
        let results = if workers > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => {
                    log::info!("processing {} tournaments across {} workers", total, workers);
                    pool.install(|| {
                        self.0
                            .par_iter()
                            .map(|t| Self::work(t, &done, total))
                            .collect::<Vec<Harvest>>()
                    })
                }
                Err(e) => {
                    log::warn!("worker pool unavailable ({}), falling back to sequential", e);
                    Self::sequential(&self.0, &done, total)
                }
            }
        } else {
            log::info!("processing {} tournaments sequentially", total);
            Self::sequential(&self.0, &done, total)
        };
        results.into_iter().fold(Harvest::default(), Harvest::absorb)
    }

    fn sequential(tournaments: &[Tournament], done: &AtomicUsize, total: usize) -> Vec<Harvest> {
        tournaments
            .iter()
            .map(|t| Self::work(t, done, total))
            .collect()
    }

    /// A crashed worker loses its tournament's contribution but never
    /// halts the pipeline.
    fn work(tournament: &Tournament, done: &AtomicUsize, total: usize) -> Harvest {
        let harvest = std::panic::catch_unwind(AssertUnwindSafe(|| Self::harvest(tournament)))
            .unwrap_or_else(|_| {
                log::error!("tournament {} failed; contribution lost", tournament.id);
                Harvest::default()
            });
        let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
        if completed % crate::PROGRESS_INTERVAL == 0 || completed == total {
            log::info!("processed {}/{} tournaments", completed, total);
        }
        harvest
    }

    fn harvest(tournament: &Tournament) -> Harvest {
        let (shown, hands_parsed) = tournament.showdowns();
        let mut collector = Collector::default();
        for hand in &shown {
            collector.add(hand);
        }
        Harvest {
            occurrences: collector.occurrences,
            hands_parsed,
            shown_hands: collector.shown_hands,
            actions: collector.actions,
        }
    }
}
