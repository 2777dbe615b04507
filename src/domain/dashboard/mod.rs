//! Dashboard module - Training and memory snapshot of a twin.
//!
//! The values are fixed; the dashboard shows the same twin to everyone.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// New memories recorded on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyMemories {
    pub day: &'static str,
    pub memories: u32,
}

/// A named share of the whole, e.g. a memory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Share {
    pub name: &'static str,
    pub percentage: Percentage,
}

/// Progress of one training module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingModule {
    pub name: &'static str,
    pub progress: Percentage,
}

/// Number of memories from one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySource {
    pub name: &'static str,
    pub count: u32,
}

/// Kind of a stored memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryKind {
    Conversation,
    Document,
    Personal,
}

/// A recently added memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentMemory {
    pub kind: MemoryKind,
    pub title: &'static str,
    pub added: &'static str,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub training_progress: Percentage,
    pub weekly_memories: Vec<DailyMemories>,
    pub memory_categories: Vec<Share>,
    pub training_modules: Vec<TrainingModule>,
    pub memory_sources: Vec<MemorySource>,
    pub recent_memories: Vec<RecentMemory>,
}

impl DashboardOverview {
    /// The snapshot shown on the dashboard page.
    pub fn sample() -> Self {
        let daily = |day, memories| DailyMemories { day, memories };
        let share = |name, pct| Share {
            name,
            percentage: Percentage::new(pct),
        };
        let module = |name, pct| TrainingModule {
            name,
            progress: Percentage::new(pct),
        };
        let source = |name, count| MemorySource { name, count };
        let recent = |kind, title, added| RecentMemory { kind, title, added };

        Self {
            training_progress: Percentage::new(67),
            weekly_memories: vec![
                daily("Mon", 12),
                daily("Tue", 19),
                daily("Wed", 7),
                daily("Thu", 15),
                daily("Fri", 22),
                daily("Sat", 8),
                daily("Sun", 14),
            ],
            memory_categories: vec![
                share("Personal experiences", 35),
                share("Professional knowledge", 28),
                share("Preferences & tastes", 20),
                share("Relationships", 17),
            ],
            training_modules: vec![
                module("Personality Modeling", 78),
                module("Language Patterns", 82),
                module("Memory Integration", 53),
                module("Knowledge Processing", 65),
                module("Behavioral Analysis", 41),
                module("Reasoning Capabilities", 59),
            ],
            memory_sources: vec![
                source("Personal Experiences", 86),
                source("Conversations", 124),
                source("Uploaded Documents", 37),
            ],
            recent_memories: vec![
                recent(MemoryKind::Conversation, "Discussion about career goals", "Today"),
                recent(MemoryKind::Document, "Resume.pdf", "Yesterday"),
                recent(MemoryKind::Personal, "Travel preferences and bucket list", "3 days ago"),
                recent(MemoryKind::Conversation, "Favorite books and authors", "1 week ago"),
            ],
        }
    }

    /// Memories recorded across the week.
    pub fn weekly_total(&self) -> u32 {
        self.weekly_memories.iter().map(|d| d.memories).sum()
    }

    /// Day with the most new memories.
    pub fn busiest_day(&self) -> Option<&DailyMemories> {
        self.weekly_memories.iter().max_by_key(|d| d.memories)
    }

    /// Memories stored across all sources.
    pub fn total_memories(&self) -> u32 {
        self.memory_sources.iter().map(|s| s.count).sum()
    }

    /// Least trained module, the natural next training target.
    pub fn weakest_module(&self) -> Option<&TrainingModule> {
        self.training_modules.iter().min_by_key(|m| m.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_shows_sixty_seven_percent_training() {
        assert_eq!(DashboardOverview::sample().training_progress.value(), 67);
    }

    #[test]
    fn weekly_memories_cover_seven_days() {
        let overview = DashboardOverview::sample();
        assert_eq!(overview.weekly_memories.len(), 7);
        assert_eq!(overview.weekly_total(), 97);
        assert_eq!(overview.busiest_day().map(|d| d.day), Some("Fri"));
    }

    #[test]
    fn memory_categories_sum_to_one_hundred() {
        let total: u32 = DashboardOverview::sample()
            .memory_categories
            .iter()
            .map(|c| u32::from(c.percentage.value()))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn memory_sources_total() {
        assert_eq!(DashboardOverview::sample().total_memories(), 247);
    }

    #[test]
    fn weakest_module_is_behavioral_analysis() {
        let overview = DashboardOverview::sample();
        assert_eq!(
            overview.weakest_module().map(|m| m.name),
            Some("Behavioral Analysis")
        );
    }

    #[test]
    fn serializes_memory_kind_snake_case() {
        let json = serde_json::to_value(DashboardOverview::sample()).unwrap();
        assert_eq!(json["recent_memories"][1]["kind"], "document");
        assert_eq!(json["training_progress"], 67);
    }
}
