//! Minimal HTTP/1.1 front end for the four routes. One connection per task,
//! one request per connection. No shared mutable state: handlers see only
//! the immutable `AppState`.

use std::sync::Arc;

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::ai::client::GeminiClient;
use crate::api::{analyze, assemble, variants};
use crate::studio::preset;

const MAX_HEAD_BYTES: usize = 16 * 1024;

pub struct AppState {
    pub client: GeminiClient,
    pub max_body_bytes: usize,
}

pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, state).await {
                log::debug!("connection from {peer} ended early: {e}");
            }
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum Route {
    Assemble,
    Analyze,
    Variants,
    Presets,
}

#[derive(Debug)]
struct Reply {
    status: u16,
    body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Reply { status: 200, body }
    }

    fn error(status: u16, category: &str, details: &str) -> Self {
        Reply { status, body: json!({ "error": category, "details": details }) }
    }
}

#[derive(Debug, PartialEq)]
struct RequestHead {
    method: String,
    path: String,
    content_length: usize,
    expect_continue: bool,
}

fn parse_head(head: &str) -> Result<RequestHead, &'static str> {
    let mut lines = head.lines();
    let request_line = lines.next().ok_or("empty request")?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next().ok_or("malformed request line")?.to_string();
    let target = parts.next().ok_or("malformed request line")?;
    let version = parts.next().ok_or("malformed request line")?;
    if !version.starts_with("HTTP/1.") {
        return Err("unsupported protocol version");
    }
    let path = target.split('?').next().unwrap_or(target).to_string();

    let mut content_length = 0;
    let mut expect_continue = false;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else { continue };
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value.parse().map_err(|_| "invalid Content-Length")?;
        } else if name.eq_ignore_ascii_case("expect") {
            expect_continue = value.eq_ignore_ascii_case("100-continue");
        }
    }

    Ok(RequestHead { method, path, content_length, expect_continue })
}

fn resolve_route(method: &str, path: &str) -> Result<Route, Reply> {
    match (method, path) {
        ("POST", "/api/generate-prompt") => Ok(Route::Assemble),
        ("POST", "/api/analyze-image") => Ok(Route::Analyze),
        ("POST", "/api/generate-variants") => Ok(Route::Variants),
        ("GET", "/api/presets") => Ok(Route::Presets),
        (_, "/api/generate-prompt" | "/api/analyze-image" | "/api/generate-variants" | "/api/presets") => {
            Err(Reply::error(405, "method_not_allowed", "Method Not Allowed"))
        }
        _ => Err(Reply::error(404, "not_found", "No such route")),
    }
}

async fn handle_connection(stream: TcpStream, state: Arc<AppState>) -> std::io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let mut head = String::new();
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Ok(());
        }
        if line == "\r\n" || line == "\n" {
            break;
        }
        head.push_str(&line);
        if head.len() > MAX_HEAD_BYTES {
            let reply = Reply::error(431, "bad_request", "Request header too large");
            return write_reply(&mut write_half, &reply).await;
        }
    }

    let parsed = match parse_head(&head) {
        Ok(parsed) => parsed,
        Err(msg) => {
            return write_reply(&mut write_half, &Reply::error(400, "bad_request", msg)).await;
        }
    };

    let route = match resolve_route(&parsed.method, &parsed.path) {
        Ok(route) => route,
        Err(reply) => return write_reply(&mut write_half, &reply).await,
    };

    // Reject oversized payloads from the declared length, before buffering
    // a single body byte.
    if parsed.content_length > state.max_body_bytes {
        let reply = Reply::error(
            413,
            "payload_too_large",
            &format!("request body exceeds the {} byte limit", state.max_body_bytes),
        );
        return write_reply(&mut write_half, &reply).await;
    }

    if parsed.expect_continue && parsed.content_length > 0 {
        write_half.write_all(b"HTTP/1.1 100 Continue\r\n\r\n").await?;
        write_half.flush().await?;
    }

    let mut body = vec![0u8; parsed.content_length];
    reader.read_exact(&mut body).await?;

    let reply = dispatch(route, &body, &state).await;
    write_reply(&mut write_half, &reply).await
}

async fn dispatch(route: Route, body: &[u8], state: &AppState) -> Reply {
    if let Route::Presets = route {
        return Reply::ok(preset::listing());
    }

    // An empty body flows through as null so the operations report which
    // required field is missing, rather than a generic JSON error.
    let parsed: Value = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                return Reply::error(400, "bad_request", &format!("request body is not valid JSON: {e}"));
            }
        }
    };

    let result = match route {
        Route::Assemble => assemble::run(&state.client, &parsed).await,
        Route::Analyze => analyze::run(&state.client, &parsed).await,
        Route::Variants => variants::run(&state.client, &parsed).await,
        Route::Presets => unreachable!("handled above"),
    };

    match result {
        Ok(body) => Reply::ok(body),
        Err(err) => {
            log::warn!("request failed ({}): {err}", err.category());
            Reply::error(err.status_code(), err.category(), &err.to_string())
        }
    }
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &Reply) -> std::io::Result<()> {
    let body = serde_json::to_vec(&reply.body).unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        body.len()
    );
    writer.write_all(head.as_bytes()).await?;
    writer.write_all(&body).await?;
    writer.flush().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        431 => "Request Header Fields Too Large",
        504 => "Gateway Timeout",
        _ => "Internal Server Error",
    }
}
