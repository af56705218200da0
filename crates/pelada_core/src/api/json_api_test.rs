use super::json_api::*;
use crate::scorers::ScorerRow;
use serde_json::{json, Value};

/// Two goalkeepers, `field` field players and one social member. Field player `fN` played
/// the last N Wednesdays of May 2024 (capped at 5), so lower numbers rank lower.
fn snapshot(field: usize, players_per_side: u32) -> Value {
    let wednesdays = ["2024-05-01", "2024-05-08", "2024-05-15", "2024-05-22", "2024-05-29"];

    let mut players = vec![
        json!({"id": "g1", "name": "Goleiro 1", "position": "goalkeeper", "skill_rating": 6}),
        json!({"id": "g2", "name": "Goleiro 2", "position": "goalkeeper", "skill_rating": 4}),
        json!({"id": "so", "name": "Social", "position": "social", "skill_rating": 1}),
    ];
    let mut presence = serde_json::Map::new();
    presence.insert("g1".into(), json!("full"));
    presence.insert("g2".into(), json!("first_half"));
    presence.insert("so".into(), json!("dinner_only"));

    for i in 1..=field {
        let id = format!("f{i}");
        players.push(json!({
            "id": id,
            "name": format!("Player {i}"),
            "position": "midfielder",
            "skill_rating": (i % 10) + 1,
            "base_points": i,
        }));
        presence.insert(id, json!("full"));
    }

    let rounds: Vec<Value> = wednesdays
        .iter()
        .enumerate()
        .map(|(w, date)| {
            let mut attendance = serde_json::Map::new();
            for i in 1..=field {
                // fN played on the last min(N, 5) Wednesdays
                let played = 5 - w <= i;
                let tags = if played { json!(["played", "dined"]) } else { json!(["absent"]) };
                attendance.insert(format!("f{i}"), tags);
            }
            attendance.insert("ghost".into(), json!(["played"]));
            json!({"id": format!("r{w}"), "date": date, "attendance": attendance})
        })
        .collect();

    json!({
        "schema_version": 1,
        "year": 2024,
        "players": players,
        "rounds": rounds,
        "presence": presence,
        "overdue": [],
        "matches": [
            {"id": "m1", "date": "2024-05-22", "goals": [{"player_id": "f3"}, {"player_id": "f1", "minute": 30}]},
            {"id": "m2", "date": "2024-05-29", "goals": [{"player_id": "f1"}, {"player_id": "ghost"}]},
        ],
        "config": {"game": {"players_per_side": players_per_side}},
    })
}

#[test]
fn test_ranking_json() {
    let result = season_ranking_json(&snapshot(6, 3).to_string()).unwrap();
    let rows: Vec<RankingRow> = serde_json::from_str(&result).unwrap();

    assert_eq!(rows.len(), 9);
    // f5 and f6 both played every window date, f6 has more base points
    assert_eq!(rows[0].player_id.as_str(), "f6");
    assert_eq!(rows[0].rank, Some(1));
    assert_eq!(rows[1].player_id.as_str(), "f5");
    assert_eq!(rows[0].stats.window_points, 12);
    let social = rows.iter().find(|r| r.player_id.as_str() == "so").unwrap();
    assert_eq!(social.rank, None);
}

#[test]
fn test_plan_exact_capacity() {
    let result = plan_match_day_json(&snapshot(16, 8).to_string()).unwrap();
    let plan: MatchDayPlan = serde_json::from_str(&result).unwrap();

    assert_eq!(plan.body.starters.len(), 18);
    assert!(plan.body.reserves.is_empty());
    assert!(plan.body.substitutions.is_empty());
    assert_eq!(plan.body.teams.len(), 18);
    assert_eq!(plan.body.presence.dinner_total(), 19);
    assert_eq!(plan.digest.len(), 64);
}

#[test]
fn test_plan_with_reserves_plans_substitutions() {
    let result = plan_match_day_json(&snapshot(8, 3).to_string()).unwrap();
    let plan: MatchDayPlan = serde_json::from_str(&result).unwrap();

    assert_eq!(plan.body.starters.len(), 8);
    let reserves: Vec<&str> = plan.body.reserves.iter().map(|id| id.as_str()).collect();
    assert_eq!(reserves, vec!["f2", "f1"]);
    assert_eq!(plan.body.substitutions.len(), 2);
    for sub in plan.body.substitutions.iter() {
        assert!(plan.body.starters.contains(&sub.outgoing));
        assert_ne!(sub.outgoing.as_str(), "g1");
        assert_ne!(sub.outgoing.as_str(), "g2");
    }
}

#[test]
fn test_plan_is_deterministic() {
    let request = snapshot(10, 4).to_string();
    let first = plan_match_day_json(&request).unwrap();
    let second = plan_match_day_json(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_selection_error_payload() {
    let mut request = snapshot(16, 8);
    request["presence"]["g2"] = json!("second_half");

    let err = plan_match_day_json(&request.to_string()).unwrap_err();
    let api_error: ApiError = serde_json::from_str(&err).unwrap();
    assert_eq!(api_error.code, "WRONG_GOALKEEPER_COUNT");

    let err = plan_match_day_json(&snapshot(15, 8).to_string()).unwrap_err();
    let api_error: ApiError = serde_json::from_str(&err).unwrap();
    assert_eq!(api_error.code, "INSUFFICIENT_FIELD_PLAYERS");
    assert!(api_error.message.contains("16"));
}

#[test]
fn test_rejects_unknown_schema_version() {
    let mut request = snapshot(16, 8);
    request["schema_version"] = json!(2);

    let err = plan_match_day_json(&request.to_string()).unwrap_err();
    let api_error: ApiError = serde_json::from_str(&err).unwrap();
    assert_eq!(api_error.code, "UNSUPPORTED_SCHEMA_VERSION");
}

#[test]
fn test_rejects_malformed_snapshot() {
    let err = season_ranking_json("{\"schema_version\": 1").unwrap_err();
    let api_error: ApiError = serde_json::from_str(&err).unwrap();
    assert_eq!(api_error.code, "INVALID_SNAPSHOT");
}

#[test]
fn test_snapshot_schema_names_fields() {
    let schema = snapshot_schema();
    let properties = &schema["properties"];
    assert!(properties.get("players").is_some());
    assert!(properties.get("presence").is_some());
}

#[test]
fn test_top_scorers_json() {
    let result = top_scorers_json(&snapshot(6, 3).to_string(), 3).unwrap();
    let rows: Vec<ScorerRow> = serde_json::from_str(&result).unwrap();

    let tally: Vec<(&str, u32)> = rows.iter().map(|r| (r.player_id.as_str(), r.goals)).collect();
    assert_eq!(tally, vec![("f1", 2), ("f3", 1)]);
    assert_eq!(rows[0].name, "Player 1");
}
