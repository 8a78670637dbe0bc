use dlm_gameplay::*;

/// The classic reciprocal strategy.
///
/// Opens with cooperation, then returns whatever the villain played last.
/// Pure function of the history; serves both as a baseline opponent and
/// as the opening policy other strategies fall back on.
pub struct TitForTat;

impl TitForTat {
    /// The tit-for-tat rule as a free function, for strategies that
    /// delegate to it without constructing a player.
    pub fn echo(history: &History) -> Move {
        match history.villain().last() {
            Some(Move::Defect) => Move::Defect,
            _ => Move::Cooperate,
        }
    }
}

impl Strategy for TitForTat {
    type Memory = ();
    fn decide(&self, history: &History, _: Option<()>) -> (Move, Option<()>) {
        (Self::echo(history), None)
    }
}
