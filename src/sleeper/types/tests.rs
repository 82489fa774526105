//! Deserialization tests against payloads shaped like live Sleeper responses

use super::*;
use crate::cli::types::PlayerId;
use serde_json::json;

#[test]
fn test_user_ignores_extra_fields() {
    let user: User = serde_json::from_value(json!({
        "username": "alice",
        "user_id": "100",
        "display_name": "Alice",
        "avatar": "abc123",
        "is_bot": false
    }))
    .unwrap();

    assert_eq!(user.user_id, UserId::new("100"));
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
}

#[test]
fn test_null_user_body_is_none() {
    let user: Option<User> = serde_json::from_str("null").unwrap();
    assert!(user.is_none());
}

#[test]
fn test_league_display_name_falls_back_to_id() {
    let named: League = serde_json::from_value(json!({
        "league_id": "L1", "name": "Dynasty Degenerates", "season": "2025"
    }))
    .unwrap();
    let unnamed: League = serde_json::from_value(json!({ "league_id": 555, "name": "  " })).unwrap();

    assert_eq!(named.display_name(), "Dynasty Degenerates");
    assert_eq!(named.season, Some(Season::new(2025)));
    assert_eq!(unnamed.display_name(), "555");
}

#[test]
fn test_roster_null_co_owners_and_owner() {
    let roster: Roster = serde_json::from_value(json!({
        "roster_id": 3,
        "owner_id": null,
        "co_owners": null,
        "players": ["4046"]
    }))
    .unwrap();

    assert_eq!(roster.roster_id, RosterId::new(3));
    assert!(roster.owner_id.is_none());
    assert!(roster.co_owners.is_empty());
    assert!(!roster.is_controlled_by(&UserId::new("100")));
}

#[test]
fn test_roster_co_owner_controls() {
    let roster: Roster = serde_json::from_value(json!({
        "roster_id": 1,
        "owner_id": "200",
        "co_owners": ["100"]
    }))
    .unwrap();

    assert!(roster.is_controlled_by(&UserId::new("100")));
    assert!(roster.is_controlled_by(&UserId::new("200")));
    assert!(!roster.is_controlled_by(&UserId::new("300")));
}

#[test]
fn test_member_label_prefers_team_name() {
    let with_team: LeagueMember = serde_json::from_value(json!({
        "user_id": "100",
        "display_name": "alice",
        "metadata": { "team_name": "Alice's Aces", "avatar": "x" }
    }))
    .unwrap();
    let without_team: LeagueMember = serde_json::from_value(json!({
        "user_id": "200",
        "display_name": "bob",
        "metadata": null
    }))
    .unwrap();

    assert_eq!(with_team.label().as_deref(), Some("Alice's Aces"));
    assert_eq!(without_team.label().as_deref(), Some("bob"));
}

#[test]
fn test_trade_transaction_full_shape() {
    let tx: Transaction = serde_json::from_value(json!({
        "type": "trade",
        "transaction_id": "900",
        "status": "complete",
        "status_updated": 1_700_000_000_000_i64,
        "created": 1_699_999_000_000_i64,
        "roster_ids": [1, 2],
        "adds": { "4046": 2, "6794": 1 },
        "drops": { "4046": 1, "6794": 2 },
        "draft_picks": [
            { "season": "2026", "round": 1, "roster_id": 1, "previous_owner_id": 1, "owner_id": 2 }
        ],
        "waiver_budget": [ { "sender": 2, "receiver": 1, "amount": 15 } ],
        "consenter_ids": [1, 2],
        "leg": 4,
        "metadata": null
    }))
    .unwrap();

    assert!(tx.is_trade());
    assert!(!tx.is_failed());
    assert_eq!(tx.timestamp_ms(), Some(1_700_000_000_000));
    assert_eq!(tx.adds.get("4046"), Some(&RosterId::new(2)));
    assert_eq!(tx.draft_picks[0].season, Season::new(2026));
    assert_eq!(tx.waiver_budget[0].amount, 15);
    assert!(tx.involves(RosterId::new(1)));
    assert!(!tx.involves(RosterId::new(9)));
}

#[test]
fn test_waiver_transaction_with_nulls() {
    let tx: Transaction = serde_json::from_value(json!({
        "type": "waiver",
        "transaction_id": "901",
        "status": "failed",
        "created": 1_000,
        "roster_ids": [3],
        "adds": null,
        "drops": null,
        "draft_picks": [],
        "waiver_budget": []
    }))
    .unwrap();

    assert!(!tx.is_trade());
    assert!(tx.is_failed());
    assert_eq!(tx.timestamp_ms(), Some(1_000));
    assert!(tx.adds.is_empty());
}

#[test]
fn test_unknown_transaction_type_is_other() {
    let tx: Transaction = serde_json::from_value(json!({
        "type": "something_new",
        "transaction_id": 77
    }))
    .unwrap();

    assert_eq!(tx.kind, TransactionKind::Other);
    assert_eq!(tx.transaction_id.as_str(), "77");
    assert_eq!(tx.timestamp_ms(), None);
}

#[test]
fn test_nfl_state_prefers_league_season() {
    let state: NflState = serde_json::from_value(json!({
        "season": "2025", "league_season": "2026", "week": 0, "season_type": "off"
    }))
    .unwrap();
    assert_eq!(state.effective_season(), Some(Season::new(2026)));

    let partial: NflState = serde_json::from_value(json!({ "season": "2025" })).unwrap();
    assert_eq!(partial.effective_season(), Some(Season::new(2025)));
}

#[test]
fn test_player_record_display_names() {
    let payload: PlayerPayload = serde_json::from_value(json!({
        "4046": { "full_name": "Patrick Mahomes", "position": "QB", "team": "KC" },
        "KC": { "first_name": "Kansas City", "last_name": "Chiefs", "position": "DEF", "team": "KC" },
        "9999": { "first_name": "Practice", "last_name": "Squad", "position": "WR", "team": null },
        "0000": { "position": "RB" }
    }))
    .unwrap();

    assert_eq!(
        payload["4046"].display_name().as_deref(),
        Some("Patrick Mahomes (QB KC)")
    );
    assert_eq!(
        payload["KC"].display_name().as_deref(),
        Some("Kansas City Chiefs (DEF KC)")
    );
    assert_eq!(
        payload["9999"].display_name().as_deref(),
        Some("Practice Squad (WR)")
    );
    assert_eq!(payload["0000"].display_name(), None);

    // keys double as player IDs
    assert!(payload.contains_key(PlayerId::new("4046").as_str()));
}
