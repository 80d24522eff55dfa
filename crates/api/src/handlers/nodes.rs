use crate::{dto::NodesResponse, state::AppState};
use axum::{extract::State, Json};

pub async fn get_nodes(State(state): State<AppState>) -> Json<NodesResponse> {
    let nodes = state
        .proxy
        .nodes()
        .nodes()
        .iter()
        .map(|node| node.base_url().to_string())
        .collect::<Vec<_>>();

    Json(NodesResponse {
        count: nodes.len(),
        nodes,
    })
}
