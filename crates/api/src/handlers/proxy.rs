use crate::state::AppState;
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header::HOST, request::Parts, uri::Scheme, HeaderMap, Uri};
use axum::response::Response;
use std::any::Any;
use tezcache_application::services::error_responses;
use tezcache_domain::{ProxyError, RpcRequest, RpcResponse};
use tracing::{error, warn};

/// Largest request body the proxy will buffer.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Authority used when a request carries neither an absolute URI nor a
/// Host header.
const FALLBACK_AUTHORITY: &str = "localhost";

pub async fn proxy_rpc(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    // Rejections need only the request line: no URL building, no body read.
    if let Err(err) = state.proxy.validate(&parts.method, parts.uri.path()) {
        return into_http_response(state.proxy.reject(err));
    }

    let rpc_request = match into_rpc_request(parts, body).await {
        Ok(rpc_request) => rpc_request,
        Err(err) => {
            warn!(error = %err, "Could not read inbound request");
            return into_http_response(error_responses::render(&err));
        }
    };

    into_http_response(state.proxy.execute(rpc_request).await)
}

/// Buffers the body and resolves the absolute URL the cache key is built
/// from.
pub async fn into_rpc_request(parts: Parts, body: Body) -> Result<RpcRequest, ProxyError> {
    let url = absolute_url(&parts.uri, &parts.headers)?;

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::UnhandledFault {
            detail: format!("Failed to read request body: {e}"),
        })?;

    Ok(RpcRequest::new(parts.method, url, parts.headers, body))
}

/// Origin-form URIs get `http://` plus the Host header in front.
///
/// The scheme is always `http` here, even behind a TLS terminator: the URL
/// only feeds the internal cache key and is never sent anywhere.
pub fn absolute_url(uri: &Uri, headers: &HeaderMap) -> Result<Uri, ProxyError> {
    if uri.scheme().is_some() && uri.authority().is_some() {
        return Ok(uri.clone());
    }

    let authority = headers
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(FALLBACK_AUTHORITY);
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    Uri::builder()
        .scheme(Scheme::HTTP)
        .authority(authority)
        .path_and_query(path_and_query)
        .build()
        .map_err(|e| ProxyError::UnhandledFault {
            detail: format!("Invalid request URL: {e}"),
        })
}

pub fn into_http_response(response: RpcResponse) -> Response {
    let RpcResponse {
        status,
        headers,
        body,
    } = response;

    let mut out = Response::new(Body::from(body));
    *out.status_mut() = status;
    *out.headers_mut() = headers;
    out
}

/// Turns a panic inside the dispatcher into the generic 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "Internal error".to_string()
    };

    error!(detail = %detail, "Handler panicked");
    into_http_response(error_responses::render(&ProxyError::UnhandledFault { detail }))
}
