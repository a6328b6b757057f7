use super::rank::Rank;

/// Whether the two hole cards share a suit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Suitedness {
    Paired,
    Suited,
    Offsuit,
}

/// A canonical two-card label, e.g. `AKs`, `QQ`, `72o`.
///
/// Ranks are sorted descending, so `Th Ac` and `Ac Th` normalize to the
/// same combo. Pairs carry no suffix; everything else is suited or
/// offsuit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Combo {
    hi: Rank,
    lo: Rank,
    suitedness: Suitedness,
}

impl Combo {
    /// Normalize a raw showdown string of the form `Xr Yr` (rank, suit,
    /// space, rank, suit). Any parse failure yields `None`; callers skip
    /// empty results.
    pub fn normalize(raw: &str) -> Option<Self> {
        let chars = raw.chars().collect::<Vec<char>>();
        if chars.len() < 5 {
            return None;
        }
        let mut first = (Rank::try_from(chars[0]).ok()?, chars[1]);
        let mut second = (Rank::try_from(chars[3]).ok()?, chars[4]);
        if first.0 > second.0 {
            std::mem::swap(&mut first, &mut second);
        }
        let suitedness = if first.0 == second.0 {
            Suitedness::Paired
        } else if first.1 == second.1 {
            Suitedness::Suited
        } else {
            Suitedness::Offsuit
        };
        Some(Self {
            hi: first.0,
            lo: second.0,
            suitedness,
        })
    }

    /// Report ordering: pairs first by rank descending, then non-pairs by
    /// high card descending, low card descending, suited before offsuit.
    pub fn key(&self) -> (u8, u8, u8, u8) {
        match self.suitedness {
            Suitedness::Paired => (0, self.hi.index() as u8, 0, 0),
            Suitedness::Suited => (1, self.hi.index() as u8, self.lo.index() as u8, 0),
            Suitedness::Offsuit => (1, self.hi.index() as u8, self.lo.index() as u8, 1),
        }
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.suitedness {
            Suitedness::Paired => write!(f, "{}{}", self.hi, self.lo),
            Suitedness::Suited => write!(f, "{}{}s", self.hi, self.lo),
            Suitedness::Offsuit => write!(f, "{}{}o", self.hi, self.lo),
        }
    }
}

impl TryFrom<&str> for Combo {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.chars().collect::<Vec<char>>();
        match chars.len() {
            2 => {
                let hi = Rank::try_from(chars[0])?;
                let lo = Rank::try_from(chars[1])?;
                match hi == lo {
                    true => Ok(Self {
                        hi,
                        lo,
                        suitedness: Suitedness::Paired,
                    }),
                    false => Err(format!("unpaired combo without suffix: {}", s)),
                }
            }
            3 => {
                let hi = Rank::try_from(chars[0])?;
                let lo = Rank::try_from(chars[1])?;
                let suitedness = match chars[2] {
                    's' => Suitedness::Suited,
                    'o' => Suitedness::Offsuit,
                    c => return Err(format!("invalid combo suffix: {}", c)),
                };
                Ok(Self { hi, lo, suitedness })
            }
            _ => Err(format!("invalid combo label: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_order_invariant() {
        let ab = Combo::normalize("Ac Th").unwrap();
        let ba = Combo::normalize("Th Ac").unwrap();
        assert!(ab == ba);
        assert!(ab.to_string() == "ATo");
    }

    #[test]
    fn normalize_pairs_and_suits() {
        assert!(Combo::normalize("7h 7d").unwrap().to_string() == "77");
        assert!(Combo::normalize("Kd Qd").unwrap().to_string() == "KQs");
        assert!(Combo::normalize("2c 3d").unwrap().to_string() == "32o");
    }

    #[test]
    fn normalize_rejects_junk() {
        assert!(Combo::normalize("").is_none());
        assert!(Combo::normalize("Ac").is_none());
        assert!(Combo::normalize("Xx Yy").is_none());
    }

    #[test]
    fn label_roundtrip() {
        for label in ["AA", "AKs", "AKo", "T9s", "22"] {
            assert!(Combo::try_from(label).unwrap().to_string() == label);
        }
        assert!(Combo::try_from("AK").is_err());
        assert!(Combo::try_from("AKx").is_err());
    }

    #[test]
    fn pairs_sort_before_unpaired() {
        let aa = Combo::try_from("AA").unwrap();
        let kk = Combo::try_from("KK").unwrap();
        let aks = Combo::try_from("AKs").unwrap();
        let ako = Combo::try_from("AKo").unwrap();
        let deuces = Combo::try_from("22").unwrap();
        assert!(aa.key() < kk.key());
        assert!(deuces.key() < aks.key());
        assert!(aks.key() < ako.key());
    }
}
