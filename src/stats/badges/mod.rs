//! Gamification badges: the static catalog and the rules that award them

mod checker;
mod definitions;

pub use checker::{
    check_completion_badges, check_exploration_badges, check_milestone_badges,
    check_points_badges, check_skill_badges, check_streak_badges,
};
pub use definitions::{BADGES, Badge, BadgeCategory, BadgeId};
