//! Letter grades for a finished quiz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from the score/total ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 90% and above
    A,
    /// 80% to below 90%
    B,
    /// 70% to below 80%
    C,
    /// 60% to below 70%
    D,
    /// Below 60%, or a quiz worth no points
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::F => write!(f, "F"),
        }
    }
}

/// Lower percentage bound of each passing band, best first.
const BANDS: [(u128, Grade); 4] = [(90, Grade::A), (80, Grade::B), (70, Grade::C), (60, Grade::D)];

/// Map a score to its grade band.
///
/// Bounds are inclusive and compared with integer arithmetic, so exactly 90%
/// is an A. A total of zero yields `F`.
pub fn calculate_grade(score: u64, total_points: u64) -> Grade {
    if total_points == 0 {
        return Grade::F;
    }

    let scaled = u128::from(score) * 100;
    let total = u128::from(total_points);
    BANDS
        .iter()
        .find(|(bound, _)| scaled >= bound * total)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}
