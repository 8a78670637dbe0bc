use dlm_gameplay::*;

/// Grim trigger. Cooperates until the villain's first defection, then
/// defects for the rest of the match.
pub struct Grudge;

impl Strategy for Grudge {
    type Memory = ();
    fn decide(&self, history: &History, _: Option<()>) -> (Move, Option<()>) {
        match history.villain().iter().any(Move::is_defect) {
            true => (Move::Defect, None),
            false => (Move::Cooperate, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_forgives() {
        let mut history = History::default();
        history.push(Move::Cooperate, Move::Defect);
        history.push(Move::Defect, Move::Cooperate);
        history.push(Move::Defect, Move::Cooperate);
        let (decision, memory) = Grudge.decide(&history, None);
        assert_eq!(decision, Move::Defect);
        assert!(memory.is_none());
    }
}
