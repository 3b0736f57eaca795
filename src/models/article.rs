use super::enums::ArticleLevel;

/// Illustrations bundled with some articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infographic {
    DailyRoutine,
    GumDisease,
}

/// Read-only educational article compiled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub level: ArticleLevel,
    pub read_time_minutes: u32,
    pub body: &'static str,
    pub infographic: Option<Infographic>,
}
