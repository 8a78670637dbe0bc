use dlm_gameplay::*;
use rand::seq::IndexedRandom;

/// Baseline player that moves uniformly at random.
/// Useful as the non-reactive control: nothing it does depends on history.
pub struct Fish;

impl Strategy for Fish {
    type Memory = ();
    fn decide(&self, _: &History, _: Option<()>) -> (Move, Option<()>) {
        let ref mut rng = rand::rng();
        let decision = [Move::Defect, Move::Cooperate]
            .choose(rng)
            .copied()
            .expect("non empty move alphabet");
        (decision, None)
    }
}
