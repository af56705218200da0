pub mod json_api;

#[cfg(test)]
mod json_api_test;

pub use json_api::{
    plan_match_day, plan_match_day_json, ranking_table, season_ranking, season_ranking_json,
    season_top_scorers, snapshot_schema, top_scorers_json, ApiError, MatchDayPlan, PlanBody, RankingRow, SeasonSnapshot, SkillSums,
    SCHEMA_VERSION,
};
