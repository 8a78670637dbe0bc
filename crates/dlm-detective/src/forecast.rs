use super::*;
use dlm_core::*;

/// The strongest observation of one statistic across all tested offsets.
#[derive(Debug, Clone, Copy)]
pub struct Strongest {
    pub correlation: Correlation,
    pub offset: usize,
}

/// Directional prediction scores combined from the per-offset quadruples.
///
/// `exploit` is high when defecting seems not to provoke retaliation and
/// negative when it reliably does; `reciprocate` is high when cooperating
/// reliably yields cooperation back. Each lies in [-1, 1]: sign is the
/// predicted direction, magnitude the confidence.
///
/// A direct cooperation signal stronger than [`PRIORITY_THRESHOLD`] is
/// trusted outright instead of being differenced against the competing
/// bad-outcome statistic for the same action; the downstream threshold
/// rules look specifically for such strong positive signals. This
/// hand-tuned combination is preserved as observed, asymmetries included.
#[derive(Debug, Clone, Copy)]
pub struct Forecast {
    pub exploit: Prediction,
    pub reciprocate: Prediction,
}

impl Forecast {
    /// Picks the strictly strongest correlation for one statistic slot.
    /// Offsets are scanned in increasing order, so ties keep the lowest.
    fn strongest<F>(lags: &[Lagged], slot: F) -> Strongest
    where
        F: Fn(&Lagged) -> Correlation,
    {
        lags.iter()
            .zip(1..)
            .map(|(lag, offset)| Strongest {
                correlation: slot(lag),
                offset,
            })
            .fold(None, |best: Option<Strongest>, candidate| match best {
                Some(b) if candidate.correlation.strength() <= b.correlation.strength() => Some(b),
                _ => Some(candidate),
            })
            .expect("at least one offset is always tested")
    }
    /// Combines one action's direct signal with its competing bad outcome.
    fn score(good: Strongest, bad: Strongest) -> Prediction {
        match good.correlation.strength() > PRIORITY_THRESHOLD {
            true => good.correlation.strength(),
            false => good.correlation.strength() - bad.correlation.strength(),
        }
    }
}

impl From<&[Lagged]> for Forecast {
    fn from(lags: &[Lagged]) -> Self {
        let provoked = Self::strongest(lags, |l| l.provoked);
        let tolerated = Self::strongest(lags, |l| l.tolerated);
        let betrayed = Self::strongest(lags, |l| l.betrayed);
        let reciprocated = Self::strongest(lags, |l| l.reciprocated);
        Self {
            exploit: Self::score(tolerated, provoked),
            reciprocate: Self::score(reciprocated, betrayed),
        }
    }
}
