use super::*;

/// Trait for entities that decide moves in the iterated dilemma.
/// Implementations can be fixed rules, statistical policies, remote players, etc.
///
/// The harness calls `decide` once per turn with an immutable snapshot of
/// the joint history, in which the implementor is always the hero. Nothing
/// may be retained across calls except through the `Memory` channel: the
/// harness hands back whatever the previous call returned, untouched.
///
/// Decisions take `&self` so one strategy value can serve many concurrent
/// matches without synchronization; the `Send + Sync` bounds make that
/// contract explicit.
pub trait Strategy: Send + Sync {
    /// Opaque cross-turn state threaded through the harness.
    /// Stateless strategies use `()` and return `None` forever.
    type Memory: Send;

    /// Choose the next move given the match so far.
    /// Returns the move together with the memory to carry into next turn.
    fn decide(
        &self,
        history: &History,
        memory: Option<Self::Memory>,
    ) -> (Move, Option<Self::Memory>);
}

/// References delegate, so heterogeneous rosters of `&dyn Strategy`
/// plug into [`Duel`](crate::Duel) without wrapper types.
impl<S> Strategy for &S
where
    S: Strategy + ?Sized,
{
    type Memory = S::Memory;
    fn decide(
        &self,
        history: &History,
        memory: Option<Self::Memory>,
    ) -> (Move, Option<Self::Memory>) {
        (**self).decide(history, memory)
    }
}
