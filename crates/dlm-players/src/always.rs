use dlm_gameplay::*;

/// Unconditional player that repeats the same move every turn.
/// `Always(Move::Cooperate)` is the fully exploitable opponent;
/// `Always(Move::Defect)` the fully hostile one.
pub struct Always(pub Move);

impl Strategy for Always {
    type Memory = ();
    fn decide(&self, _: &History, _: Option<()>) -> (Move, Option<()>) {
        (self.0, None)
    }
}
