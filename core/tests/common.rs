use hyper::header::CONTENT_TYPE;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode, Uri};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::convert::Infallible;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use url::Url;

pub type Responder =
    Arc<dyn Fn(&Method, &Uri, JsonValue) -> (StatusCode, JsonValue) + Send + Sync>;

/// Serves `responder` on a random local port, returns the base url.
pub fn serve(responder: Responder) -> Url {
    let make_service = make_service_fn(move |_| {
        let responder = responder.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| respond(responder.clone(), req))) }
    });

    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
    let addr = server.local_addr();
    tokio::spawn(server);

    Url::parse(&format!("http://{}/", addr)).unwrap()
}

async fn respond(
    responder: Responder,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = hyper::body::to_bytes(body).await.unwrap_or_default();
    let body = serde_json::from_slice(&body).unwrap_or(JsonValue::Null);

    let (status, resp) = responder(&parts.method, &parts.uri, body);

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(resp.to_string()))
        .unwrap())
}

/// Url on which nothing is listening.
pub fn closed_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{}/", addr)).unwrap()
}

pub fn query_params(uri: &Uri) -> HashMap<String, String> {
    url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

pub fn rpc_result(req: &JsonValue, result: JsonValue) -> JsonValue {
    json!({
        "jsonrpc": "2.0",
        "id": req["id"],
        "result": result,
    })
}

pub fn block_json(number: &str, timestamp: &str, tx_count: usize) -> JsonValue {
    let transactions = (0..tx_count)
        .map(|i| {
            let to = if i % 2 == 0 {
                json!("0xdac17f958d2ee523a2206206994597c13d831ec7")
            } else {
                JsonValue::Null
            };
            json!({
                "hash": format!("0x{:064x}", i + 1),
                "from": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
                "to": to,
                "value": "0xde0b6b3a7640000",
                "nonce": format!("0x{:x}", i),
                "transactionIndex": format!("0x{:x}", i),
                "input": "0x",
            })
        })
        .collect::<Vec<_>>();

    json!({
        "number": number,
        "hash": "0x6c0f1d1e1b5c1a9a8a1c2a1c3e2e5a6f7d0c9d8e7f6a5b4c3d2e1f0a9b8c7d6e",
        "parentHash": "0x9b83c12c69edb74f6c8dd5d052765c1adf940e320bd1291696e6fa07829eee71",
        "miner": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0xe4e1c0",
        "baseFeePerGas": "0x3b9aca00",
        "timestamp": timestamp,
        "transactions": transactions,
    })
}
