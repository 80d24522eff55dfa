mod proxy_rpc;

pub use proxy_rpc::{ProxyRpcUseCase, Route};
