//! Local server for the rendered site and the lead-capture endpoint.
//!
//! Built on `tiny_http`:
//!
//! - Static file serving from the build output directory
//! - Automatic `index.html` resolution for directories
//! - `POST /submit` lead capture into the configured lead document
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Main Thread   │   one request at a time, end to end
//! │  (HTTP Server)  │
//! └────────┬────────┘
//!          │
//!    ┌─────┴───────────────────────┐
//!    ▼                             ▼
//! GET/HEAD                    POST /submit
//! serve_static()              handle_submission()
//!    │                             │
//!    ▼                             ▼
//! config.build.output         JsonFileStore (leads.path)
//! ```

use crate::{
    capture::{SubmissionOutcome, handle_submission},
    config::SiteConfig,
    leads::{JsonFileStore, LeadStore},
    log,
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::Read,
    net::{IpAddr, SocketAddr},
    path::{Component, Path},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Lead form endpoint
pub const SUBMIT_PATH: &str = "/submit";

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Largest form body read from a submission
const MAX_BODY_BYTES: u64 = 64 * 1024;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Serve the output directory and the lead endpoint until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let interface: IpAddr = config.serve.interface.parse()?;
    let root = &config.build.output;
    if !root.exists() {
        fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    }

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    let store = JsonFileStore::new(&config.leads.path);
    let endpoint = format!("http://{addr}{SUBMIT_PATH}");

    match config.config_file() {
        Some(path) => log!("serve"; "config {}", path.display()),
        None => log!("serve"; "no config file, using defaults"),
    }
    log!("serve"; "{} at http://{}", root.display(), addr);
    log!("leads"; "{} -> {}", endpoint, store.path().display());
    log!("serve"; "render with: vitrine build <template> --leads-action {endpoint}");

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, root, &store) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_err = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Route a single HTTP request and log its outcome.
fn handle_request(request: Request, root: &Path, store: &dyn LeadStore) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or(&url);

    let status = match (&method, path) {
        (Method::Post, SUBMIT_PATH) => handle_submit(request, store)?,
        (Method::Get | Method::Head, _) => serve_static(request, root, path)?,
        (Method::Post, _) => respond_text(request, 404, "404 Not Found")?,
        _ => respond_text(request, 405, "405 Method Not Allowed")?,
    };

    log!("serve"; "{method} {url} -> {status}");
    Ok(())
}

/// Handle a lead form submission.
///
/// Accepted → 303 back to `/`; rejected → 400; body over the cap → 413;
/// store failure → 500.
fn handle_submit(mut request: Request, store: &dyn LeadStore) -> Result<u16> {
    if request
        .body_length()
        .is_some_and(|len| len as u64 > MAX_BODY_BYTES)
    {
        return respond_text(request, 413, "Payload Too Large");
    }

    // Chunked bodies carry no length up front; read one byte past the cap
    let mut body = Vec::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .context("Failed to read request body")?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return respond_text(request, 413, "Payload Too Large");
    }
    let body = String::from_utf8_lossy(&body);

    match handle_submission(&body, store) {
        Ok(SubmissionOutcome::Accepted) => {
            log!("leads"; "captured");
            redirect(request, "/")
        }
        Ok(SubmissionOutcome::Rejected(reason)) => {
            log!("leads"; "rejected: {}", reason.code());
            respond_text(request, 400, reason.message())
        }
        Err(err) => {
            log!("error"; "{err}");
            respond_text(request, 500, "Failed to save")
        }
    }
}

/// Serve a file from `root`.
///
/// Resolution order:
/// 1. Exact file match → serve file
/// 2. Directory with index.html → serve index.html
/// 3. Nothing found → 404
fn serve_static(request: Request, root: &Path, path: &str) -> Result<u16> {
    // Decode URL-encoded characters (e.g., %20 → space)
    let decoded = urlencoding::decode(path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    let request_path = Path::new(decoded.trim_matches('/'));

    if request_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return respond_text(request, 404, "404 Not Found");
    }

    let local_path = root.join(request_path);
    if local_path.is_file() {
        return serve_file(request, &local_path);
    }

    let index_path = local_path.join("index.html");
    if local_path.is_dir() && index_path.is_file() {
        return serve_file(request, &index_path);
    }

    respond_text(request, 404, "404 Not Found")
}

// ============================================================================
// Response Helpers
// ============================================================================

fn header(field: &str, value: &str) -> Header {
    Header::from_bytes(field, value).expect("static header is valid")
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<u16> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = Response::from_data(content)
        .with_header(header("Content-Type", guess_content_type(path)));
    request.respond(response)?;
    Ok(200)
}

/// Respond with a short plain-text body.
fn respond_text(request: Request, status: u16, text: &str) -> Result<u16> {
    let response = Response::from_string(text)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", "text/plain; charset=utf-8"));
    request.respond(response)?;
    Ok(status)
}

/// Respond with `303 See Other`.
fn redirect(request: Request, location: &str) -> Result<u16> {
    let response = Response::empty(StatusCode(303)).with_header(header("Location", location));
    request.respond(response)?;
    Ok(303)
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        _ => "application/octet-stream",
    }
}
