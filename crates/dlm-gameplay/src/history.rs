use super::*;
use dlm_core::Probability;

/// Joint move history of a single match, from the hero's perspective.
///
/// Two same-length ordered move sequences, indexed by turn number. The
/// harness owns and appends to the history; strategies only ever read a
/// borrowed snapshot. `push` appends one move per player, so the
/// equal-length invariant holds everywhere past the constructor boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    hero: Vec<Move>,
    villain: Vec<Move>,
}

impl History {
    /// Builds a history from raw move sequences.
    /// Fails fast on mismatched lengths rather than letting a skewed
    /// history reach the estimator.
    pub fn new(hero: Vec<Move>, villain: Vec<Move>) -> anyhow::Result<Self> {
        if hero.len() != villain.len() {
            return Err(anyhow::anyhow!(
                "invalid history: {} hero moves vs {} villain moves",
                hero.len(),
                villain.len()
            ));
        }
        Ok(Self { hero, villain })
    }
    /// Number of completed turns.
    pub fn len(&self) -> usize {
        self.hero.len()
    }
    /// True before the first turn has been played.
    pub fn is_empty(&self) -> bool {
        self.hero.is_empty()
    }
    /// The hero's moves, oldest first.
    pub fn hero(&self) -> &[Move] {
        &self.hero
    }
    /// The villain's moves, oldest first.
    pub fn villain(&self) -> &[Move] {
        &self.villain
    }
    /// Appends one completed turn.
    pub fn push(&mut self, hero: Move, villain: Move) {
        self.hero.push(hero);
        self.villain.push(villain);
    }
    /// The same match seen from the villain's side.
    pub fn mirrored(&self) -> Self {
        Self {
            hero: self.villain.clone(),
            villain: self.hero.clone(),
        }
    }
    /// Cooperation rates (hero, villain). Zero on an empty history.
    pub fn cooperation(&self) -> (Probability, Probability) {
        let rate = |moves: &[Move]| match moves.len() {
            0 => 0.0,
            n => moves.iter().filter(|m| m.is_coop()).count() as Probability / n as Probability,
        };
        (rate(&self.hero), rate(&self.villain))
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.hero {
            write!(f, "{}", m)?;
        }
        write!(f, " / ")?;
        for m in &self.villain {
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let hero = vec![Move::Defect, Move::Cooperate];
        let villain = vec![Move::Cooperate];
        assert!(History::new(hero, villain).is_err());
    }

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut history = History::default();
        history.push(Move::Defect, Move::Cooperate);
        history.push(Move::Cooperate, Move::Cooperate);
        assert_eq!(history.len(), 2);
        assert_eq!(history.hero(), &[Move::Defect, Move::Cooperate]);
        assert_eq!(history.villain(), &[Move::Cooperate, Move::Cooperate]);
    }

    #[test]
    fn mirrored_swaps_perspectives() {
        let mut history = History::default();
        history.push(Move::Defect, Move::Cooperate);
        let mirrored = history.mirrored();
        assert_eq!(mirrored.hero(), history.villain());
        assert_eq!(mirrored.villain(), history.hero());
    }

    #[test]
    fn cooperation_rates() {
        let mut history = History::default();
        assert_eq!(history.cooperation(), (0.0, 0.0));
        history.push(Move::Defect, Move::Cooperate);
        history.push(Move::Cooperate, Move::Cooperate);
        history.push(Move::Defect, Move::Defect);
        history.push(Move::Defect, Move::Cooperate);
        let (hero, villain) = history.cooperation();
        assert_eq!(hero, 0.25);
        assert_eq!(villain, 0.75);
    }
}
