use dlm_core::*;

/// An observed conditional frequency together with its evidence count.
///
/// Strength is `hits / samples`, floored to zero at or below
/// [`MIN_SAMPLE_SIZE`] so that sparse evidence never reads as signal.
/// The sample count is always reported, even below the floor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Correlation {
    strength: Probability,
    samples: usize,
}

impl Correlation {
    /// Applies the shared ratio rule.
    pub fn new(hits: usize, samples: usize) -> Self {
        let strength = match samples > MIN_SAMPLE_SIZE {
            true => hits as Probability / samples as Probability,
            false => 0.0,
        };
        Self { strength, samples }
    }
    /// Observed conditional frequency in [0, 1]. Zero below the floor.
    pub fn strength(&self) -> Probability {
        self.strength
    }
    /// Number of observations the frequency is conditioned on.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Any hit count is floored to zero strength at small sample sizes.
    macro_rules! floored {
        ($name:ident, $samples:expr) => {
            paste::paste! {
                #[test]
                fn [<floored_at_ $name _samples>]() {
                    let correlation = Correlation::new($samples, $samples);
                    assert_eq!(correlation.strength(), 0.0);
                    assert_eq!(correlation.samples(), $samples);
                }
            }
        };
    }
    floored!(zero, 0);
    floored!(one, 1);
    floored!(two, 2);
    floored!(three, 3);

    #[test]
    fn exact_ratio_above_floor() {
        assert_eq!(Correlation::new(4, 4).strength(), 1.0);
        assert_eq!(Correlation::new(2, 4).strength(), 0.5);
        assert_eq!(Correlation::new(3, 12).strength(), 0.25);
        assert_eq!(Correlation::new(0, 100).strength(), 0.0);
    }
}
