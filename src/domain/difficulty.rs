use serde::{Deserialize, Serialize};

/// Difficulty level of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl Difficulty {
    /// All levels in ascending order
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }

    /// Points earned per correct answer at this level
    pub fn points_per_correct(&self) -> u64 {
        match self {
            Difficulty::Beginner => 10,
            Difficulty::Intermediate => 15,
            Difficulty::Expert => 20,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!(
                "unknown difficulty '{}' (expected Beginner, Intermediate or Expert)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        assert_eq!(Difficulty::Beginner.points_per_correct(), 10);
        assert_eq!(Difficulty::Intermediate.points_per_correct(), 15);
        assert_eq!(Difficulty::Expert.points_per_correct(), 20);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("expert".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!(" Beginner ".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_is_intermediate() {
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);
    }

    #[test]
    fn test_serializes_as_title_case() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
    }
}
