use crate::model::stats::StatsDto;

/// Row counts of both history tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_payouts: u64,
    pub total_messages: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_payouts: self.total_payouts,
            total_messages: self.total_messages,
        }
    }
}
