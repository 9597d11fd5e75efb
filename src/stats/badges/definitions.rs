//! Badge definitions and metadata
//!
//! The catalog is static; a learner's progress is only the list of earned ids
//! stored in `UserStats::badges`.

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    NoviceJurist,
    Perfectionist,
    Consistent3Day,
    Consistent7Day,
    DifficultyMaster,
    TopicDabbler,
    TopicExpert,
    Bookworm,
    Points1000,
    Points5000,
}

impl BadgeId {
    /// Get the string ID used in persisted stats
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoviceJurist => "novice_jurist",
            Self::Perfectionist => "perfectionist",
            Self::Consistent3Day => "consistent_3_day",
            Self::Consistent7Day => "consistent_7_day",
            Self::DifficultyMaster => "difficulty_master",
            Self::TopicDabbler => "topic_dabbler",
            Self::TopicExpert => "topic_expert",
            Self::Bookworm => "bookworm",
            Self::Points1000 => "points_1000",
            Self::Points5000 => "points_5000",
        }
    }

    /// Parse from a persisted string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "novice_jurist" => Some(Self::NoviceJurist),
            "perfectionist" => Some(Self::Perfectionist),
            "consistent_3_day" => Some(Self::Consistent3Day),
            "consistent_7_day" => Some(Self::Consistent7Day),
            "difficulty_master" => Some(Self::DifficultyMaster),
            "topic_dabbler" => Some(Self::TopicDabbler),
            "topic_expert" => Some(Self::TopicExpert),
            "bookworm" => Some(Self::Bookworm),
            "points_1000" => Some(Self::Points1000),
            "points_5000" => Some(Self::Points5000),
            _ => None,
        }
    }
}

/// Badge category for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Milestone,
    Skill,
    Streak,
    Exploration,
    Collection,
    Points,
}

impl BadgeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milestone => "Milestones",
            Self::Skill => "Skill",
            Self::Streak => "Streaks",
            Self::Exploration => "Exploration",
            Self::Collection => "Collection",
            Self::Points => "Points",
        }
    }
}

/// Badge definition (data only, no presentation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: BadgeCategory,
}

/// All badge definitions, in evaluation order
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::NoviceJurist,
        name: "Novice Jurist",
        description: "Complete your first quiz.",
        category: BadgeCategory::Milestone,
    },
    Badge {
        id: BadgeId::Perfectionist,
        name: "Perfectionist",
        description: "Get a perfect score on any quiz.",
        category: BadgeCategory::Skill,
    },
    Badge {
        id: BadgeId::Consistent3Day,
        name: "Consistent Learner",
        description: "Complete a quiz on 3 consecutive days.",
        category: BadgeCategory::Streak,
    },
    Badge {
        id: BadgeId::Consistent7Day,
        name: "Dedicated Scholar",
        description: "Complete a quiz on 7 consecutive days.",
        category: BadgeCategory::Streak,
    },
    Badge {
        id: BadgeId::DifficultyMaster,
        name: "Difficulty Master",
        description: "Complete a quiz on all three difficulty levels.",
        category: BadgeCategory::Exploration,
    },
    Badge {
        id: BadgeId::TopicDabbler,
        name: "Topic Dabbler",
        description: "Play quizzes in 3 different topics.",
        category: BadgeCategory::Exploration,
    },
    Badge {
        id: BadgeId::TopicExpert,
        name: "Topic Expert",
        description: "Play quizzes in 5 different topics.",
        category: BadgeCategory::Exploration,
    },
    Badge {
        id: BadgeId::Bookworm,
        name: "Bookworm",
        description: "Bookmark 10 questions for review.",
        category: BadgeCategory::Collection,
    },
    Badge {
        id: BadgeId::Points1000,
        name: "Point Collector",
        description: "Accumulate a total of 1,000 points.",
        category: BadgeCategory::Points,
    },
    Badge {
        id: BadgeId::Points5000,
        name: "Point Mogul",
        description: "Accumulate a total of 5,000 points.",
        category: BadgeCategory::Points,
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> Option<&'static Badge> {
        BADGES.iter().find(|b| b.id == id)
    }

    /// Look up a badge by its persisted string id
    pub fn by_str(id: &str) -> Option<&'static Badge> {
        BadgeId::from_str(id).and_then(Self::get)
    }

    pub fn total_count() -> usize {
        BADGES.len()
    }
}
