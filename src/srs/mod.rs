pub mod analytics;
pub mod insights;
pub mod priority;
pub mod quiz;
pub mod word_selector;

pub use analytics::{build_analytics, Analytics, CategoryStats, WordSummary};
pub use insights::{dashboard_status, performance_insights, CategoryInsight, DashboardStatus, PerformanceInsights};
pub use priority::{word_priority, PriorityWeights};
pub use quiz::{generate_question, random_question, QuizKind, QuizQuestion, QuizScore};
pub use word_selector::{PickerConfig, SessionPhase, SessionStats, StudySession};
