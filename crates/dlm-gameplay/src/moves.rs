use dlm_core::Arbitrary;

/// A single turn's choice in the iterated dilemma.
///
/// The move alphabet is binary by construction: there is no third option,
/// so malformed moves are unrepresentable downstream of the harness boundary.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Defect,
    Cooperate,
}

impl Move {
    /// True if this move is a defection.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect)
    }
    /// True if this move is a cooperation.
    pub fn is_coop(&self) -> bool {
        matches!(self, Self::Cooperate)
    }
    /// The other move. Relabels Defect as Cooperate and vice versa.
    pub fn flip(&self) -> Self {
        match self {
            Self::Defect => Self::Cooperate,
            Self::Cooperate => Self::Defect,
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        match rand::random_range(0..2) {
            0 => Self::Defect,
            _ => Self::Cooperate,
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "D" => Ok(Self::Defect),
            "C" => Ok(Self::Cooperate),
            _ => Err(anyhow::anyhow!("invalid move string: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defect => write!(f, "D"),
            Self::Cooperate => write!(f, "C"),
        }
    }
}
