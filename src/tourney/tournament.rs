use super::classifier::Classifier;
use crate::parse::Hand;
use crate::parse::PlayerHand;
use crate::parse::patterns;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

/// One tournament's worth of hand-history files, ordered by chunk.
///
/// Files are matched to tournaments by the dealer naming convention
/// `hhDealer.com_{id}-{chunk}_`; anything else becomes a single-file
/// tournament keyed by its file name.
#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: String,
    pub files: Vec<(u32, PathBuf)>,
}

impl Tournament {
    /// Extract `(tournament_id, chunk)` from a file path.
    pub fn locate(path: &Path) -> (String, u32) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match patterns::TOURNAMENT_FILE.captures(&name) {
            Some(c) => (c[1].to_string(), c[2].parse().unwrap_or(0)),
            None => (name, 0),
        }
    }

    /// Group loose files into per-tournament tasks, chunks ascending.
    pub fn group(paths: &[PathBuf]) -> Vec<Self> {
        let mut grouped = HashMap::<String, Vec<(u32, PathBuf)>>::new();
        for path in paths {
            let (id, chunk) = Self::locate(path);
            grouped.entry(id).or_default().push((chunk, path.clone()));
        }
        let mut tournaments = grouped
            .into_iter()
            .map(|(id, mut files)| {
                files.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
                Self { id, files }
            })
            .collect::<Vec<Self>>();
        tournaments.sort_by(|a, b| a.id.cmp(&b.id));
        tournaments
    }

    /// Recursively collect `.txt` hand-history files under a directory.
    pub fn discover(dir: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        Self::walk(dir, &mut found);
        found.sort();
        found
    }

    fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            log::warn!("unreadable directory skipped: {}", dir.display());
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                Self::walk(&path, found);
            } else if path.extension().is_some_and(|ext| ext == "txt") {
                found.push(path);
            }
        }
    }

    /// Read every file in chunk order and split it into hand entries.
    /// Unreadable files are skipped; the rest of the tournament
    /// continues. `order` is contiguous across all of this tournament's
    /// hands.
    pub fn hands(&self) -> Vec<Hand> {
        let mut hands = Vec::new();
        let mut order = 0u32;
        for (chunk, path) in &self.files {
            let content = match std::fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
                Err(e) => {
                    log::warn!("skipping unreadable file {}: {}", path.display(), e);
                    continue;
                }
            };
            let source = path.to_string_lossy();
            for block in patterns::HAND_SPLIT.split(&content) {
                if block.trim().is_empty() {
                    continue;
                }
                hands.push(Hand::read(block, &self.id, *chunk, order, &source));
                order += 1;
            }
        }
        hands
    }

    /// Parse the whole tournament: classify every hand's phase, then
    /// collect each hand's showdown revelations. Returns the shown
    /// hands and the number of hands parsed.
    pub fn showdowns(&self) -> (Vec<PlayerHand>, usize) {
        let hands = self.hands();
        let classifier = Classifier::from(hands.as_slice());
        let shown = hands
            .iter()
            .flat_map(|hand| hand.showdowns(&self.id, classifier.phase(hand)))
            .collect::<Vec<PlayerHand>>();
        (shown, hands.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_convention_names_the_tournament() {
        let path = PathBuf::from("hands/hhDealer.com_123456-2_20240101.txt");
        let (id, chunk) = Tournament::locate(&path);
        assert!(id == "123456");
        assert!(chunk == 2);
    }

    #[test]
    fn unconventional_files_fall_back_to_their_name() {
        let path = PathBuf::from("hands/session_notes.txt");
        let (id, chunk) = Tournament::locate(&path);
        assert!(id == "session_notes.txt");
        assert!(chunk == 0);
    }

    #[test]
    fn grouping_orders_chunks() {
        let paths = vec![
            PathBuf::from("hhDealer.com_9-1_b.txt"),
            PathBuf::from("hhDealer.com_8-0_a.txt"),
            PathBuf::from("hhDealer.com_9-0_a.txt"),
        ];
        let tournaments = Tournament::group(&paths);
        assert!(tournaments.len() == 2);
        assert!(tournaments[0].id == "8");
        assert!(tournaments[1].id == "9");
        assert!(tournaments[1].files[0].0 == 0);
        assert!(tournaments[1].files[1].0 == 1);
    }
}
