//! Test utilities for building API fixtures

use serde_json::{Value, json};

/// Builds a ranking page with `len` users whose ids start at `first_id`.
/// Usernames are `player{id}`.
pub fn ranking_page_json(first_id: u64, len: u64) -> Value {
    let ranking: Vec<Value> = (first_id..first_id + len)
        .map(|id| {
            json!({
                "pp": 10_000.0 - id as f64,
                "user": { "id": id, "username": format!("player{id}") }
            })
        })
        .collect();

    json!({ "ranking": ranking, "total": 10_000 })
}

/// Builds a best-scores page, one play per mod list.
pub fn plays_json(plays: &[&[&str]]) -> Value {
    let plays: Vec<Value> = plays
        .iter()
        .enumerate()
        .map(|(i, mods)| json!({ "id": i, "pp": 500.0, "mods": mods }))
        .collect();

    Value::Array(plays)
}

/// Mounts one best-scores page for `user_id` at `offset` and expects it to be
/// requested exactly `expected_calls` times.
#[cfg(test)]
pub async fn mount_best_scores_page(
    mock_server: &wiremock::MockServer,
    user_id: u64,
    offset: u32,
    body: Value,
    expected_calls: u64,
) {
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    Mock::given(method("GET"))
        .and(path(format!("/api/v2/users/{user_id}/scores/best")))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}
