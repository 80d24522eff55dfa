use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct NodesResponse {
    pub count: usize,
    pub nodes: Vec<String>,
}
