use super::*;
use dlm_gameplay::*;

/// The four lagged conditional statistics observed at a single offset.
///
/// Pairs `hero[i]` with `villain[i + offset]` over the aligned range,
/// truncated to the shorter length, and tallies the villain's lagged
/// response conditioned on the hero's move:
///
/// - `provoked`     — P(villain defects    | hero defected)
/// - `tolerated`    — P(villain cooperates | hero defected)
/// - `betrayed`     — P(villain defects    | hero cooperated)
/// - `reciprocated` — P(villain cooperates | hero cooperated)
///
/// A sequence shorter than `offset + 1` yields zero samples everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Lagged {
    pub provoked: Correlation,
    pub tolerated: Correlation,
    pub betrayed: Correlation,
    pub reciprocated: Correlation,
}

impl Lagged {
    /// Estimates the quadruple at the given offset.
    pub fn estimate(hero: &[Move], villain: &[Move], offset: usize) -> Self {
        let mut provoked = 0;
        let mut tolerated = 0;
        let mut betrayed = 0;
        let mut reciprocated = 0;
        let mut defected = 0;
        let mut cooperated = 0;
        for (h, v) in hero.iter().zip(villain.iter().skip(offset)) {
            match h {
                Move::Defect => {
                    defected += 1;
                    match v {
                        Move::Defect => provoked += 1,
                        Move::Cooperate => tolerated += 1,
                    }
                }
                Move::Cooperate => {
                    cooperated += 1;
                    match v {
                        Move::Defect => betrayed += 1,
                        Move::Cooperate => reciprocated += 1,
                    }
                }
            }
        }
        Self {
            provoked: Correlation::new(provoked, defected),
            tolerated: Correlation::new(tolerated, defected),
            betrayed: Correlation::new(betrayed, cooperated),
            reciprocated: Correlation::new(reciprocated, cooperated),
        }
    }
}

impl From<(&History, usize)> for Lagged {
    fn from((history, offset): (&History, usize)) -> Self {
        Self::estimate(history.hero(), history.villain(), offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(s: &str) -> Vec<Move> {
        s.chars()
            .map(|c| Move::try_from(c.to_string().as_str()).unwrap())
            .collect()
    }

    #[test]
    fn perfect_reciprocation_at_offset_one() {
        // villain copies hero one turn later
        let hero = moves("CCDCCDCC");
        let villain = moves("CCCDCCDC");
        let lagged = Lagged::estimate(&hero, &villain, 1);
        assert_eq!(lagged.reciprocated.strength(), 1.0);
        assert_eq!(lagged.betrayed.strength(), 0.0);
        assert_eq!(lagged.reciprocated.samples(), 5);
        // only two defections in the aligned range: below the floor
        assert_eq!(lagged.provoked.samples(), 2);
        assert_eq!(lagged.provoked.strength(), 0.0);
    }

    #[test]
    fn truncates_to_aligned_length() {
        let hero = moves("DDDDDDDD");
        let villain = moves("CCCCCCCC");
        let lagged = Lagged::estimate(&hero, &villain, 3);
        assert_eq!(lagged.tolerated.samples(), 5);
        assert_eq!(lagged.tolerated.strength(), 1.0);
    }

    #[test]
    fn short_sequences_yield_zero_samples() {
        let hero = moves("DD");
        let villain = moves("CC");
        let lagged = Lagged::estimate(&hero, &villain, 2);
        assert_eq!(lagged.provoked.samples(), 0);
        assert_eq!(lagged.tolerated.samples(), 0);
        assert_eq!(lagged.betrayed.samples(), 0);
        assert_eq!(lagged.reciprocated.samples(), 0);
        let empty = Lagged::estimate(&[], &[], 1);
        assert_eq!(empty.reciprocated.strength(), 0.0);
        assert_eq!(empty.reciprocated.samples(), 0);
    }

    #[test]
    fn relabeling_swaps_statistic_roles() {
        let hero = moves("CDCCDDCDCC");
        let villain = moves("DCCDCDDCCD");
        let flipped = |ms: &[Move]| ms.iter().map(Move::flip).collect::<Vec<_>>();
        let lagged = Lagged::estimate(&hero, &villain, 1);
        let mirror = Lagged::estimate(&flipped(&hero), &flipped(&villain), 1);
        assert_eq!(lagged.provoked, mirror.reciprocated);
        assert_eq!(lagged.tolerated, mirror.betrayed);
        assert_eq!(lagged.betrayed, mirror.tolerated);
        assert_eq!(lagged.reciprocated, mirror.provoked);
    }
}
