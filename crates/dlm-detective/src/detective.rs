use super::*;
use dlm_core::*;
use dlm_gameplay::*;
use dlm_players::TitForTat;

/// Correlation-inference strategy.
///
/// Opens with tit-for-tat for the trial period, then each turn re-estimates
/// how the villain's moves respond to our own at every tested lag offset,
/// aggregates the strongest signals into a [`Forecast`], and picks a move
/// by ordered threshold rules. Stateless across turns: every call works
/// from the borrowed history alone and the memory channel stays empty.
#[derive(Debug, Default)]
pub struct Detective;

impl Detective {
    /// Estimates correlations at offsets `1..=min(turns, HISTORY_TEST_DEPTH)`
    /// and combines them into prediction scores.
    pub fn forecast(history: &History) -> Forecast {
        let depth = history.len().min(HISTORY_TEST_DEPTH);
        let lags = (1..=depth)
            .map(|offset| Lagged::from((history, offset)))
            .collect::<Vec<_>>();
        Forecast::from(lags.as_slice())
    }
}

impl Strategy for Detective {
    type Memory = ();
    fn decide(&self, history: &History, _: Option<()>) -> (Move, Option<()>) {
        // not enough evidence yet: play the opening policy
        if history.len() < TRIAL_PERIOD {
            return (TitForTat::echo(history), None);
        }
        let forecast = Self::forecast(history);
        // villain cooperates when we defect: take full advantage
        if forecast.exploit > CERTAINTY_THRESHOLD {
            return (Move::Defect, None);
        }
        // villain cooperates when we cooperate: work together
        if forecast.reciprocate > CERTAINTY_THRESHOLD {
            return (Move::Cooperate, None);
        }
        // villain punishes us either way: defect in return
        if forecast.exploit < -CERTAINTY_THRESHOLD || forecast.reciprocate < -CERTAINTY_THRESHOLD {
            return (Move::Defect, None);
        }
        // villain is watching us but the pattern is ambiguous: hedge
        if forecast.exploit.abs() > CORRELATION_THRESHOLD
            || forecast.reciprocate.abs() > CORRELATION_THRESHOLD
        {
            return (TitForTat::echo(history), None);
        }
        // villain looks unpredictable: treat them like a random agent
        (Move::Defect, None)
    }
}
