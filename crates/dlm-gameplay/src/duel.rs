use super::*;

/// Synchronous head-to-head match between two strategies.
///
/// Maintains the joint history and threads each side's memory channel
/// between turns. Both strategies decide simultaneously each turn: the
/// hero sees the history as-is, the villain sees the mirrored perspective,
/// and neither sees the other's move for the current turn.
pub struct Duel<A, B>
where
    A: Strategy,
    B: Strategy,
{
    hero: A,
    villain: B,
    history: History,
    memory: (Option<A::Memory>, Option<B::Memory>),
}

impl<A, B> Duel<A, B>
where
    A: Strategy,
    B: Strategy,
{
    /// Pairs two strategies over an empty history.
    pub fn new(hero: A, villain: B) -> Self {
        Self {
            hero,
            villain,
            history: History::default(),
            memory: (None, None),
        }
    }
    /// Plays a single simultaneous turn.
    pub fn turn(&mut self) {
        let ref mirrored = self.history.mirrored();
        let (a, ma) = self.hero.decide(&self.history, self.memory.0.take());
        let (b, mb) = self.villain.decide(mirrored, self.memory.1.take());
        self.memory = (ma, mb);
        self.history.push(a, b);
        log::debug!("turn {:>4}  {} {}", self.history.len(), a, b);
    }
    /// Plays out a fixed number of turns and returns the final history.
    pub fn play(mut self, turns: usize) -> History {
        for _ in 0..turns {
            self.turn();
        }
        self.history
    }
    /// The match so far.
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hawk;
    impl Strategy for Hawk {
        type Memory = ();
        fn decide(&self, _: &History, _: Option<()>) -> (Move, Option<()>) {
            (Move::Defect, None)
        }
    }

    struct Echo;
    impl Strategy for Echo {
        type Memory = ();
        fn decide(&self, history: &History, _: Option<()>) -> (Move, Option<()>) {
            match history.villain().last() {
                Some(Move::Defect) => (Move::Defect, None),
                _ => (Move::Cooperate, None),
            }
        }
    }

    #[test]
    fn plays_requested_turns() {
        let history = Duel::new(Hawk, Hawk).play(16);
        assert_eq!(history.len(), 16);
        assert_eq!(history.cooperation(), (0.0, 0.0));
    }

    #[test]
    fn villain_sees_mirrored_history() {
        // Echo copies its opponent's previous move: against Hawk it
        // cooperates on the opening turn and defects ever after.
        let history = Duel::new(Hawk, Echo).play(8);
        assert_eq!(history.villain()[0], Move::Cooperate);
        assert!(history.villain()[1..].iter().all(Move::is_defect));
    }
}
