//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes, one request per connection, and records
//! every request it receives.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How a route writes its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// `Content-Length` matches the body.
    Sized,
    /// No `Content-Length`; the body ends when the connection closes.
    CloseDelimited,
    /// `Content-Length` claims this many bytes but fewer are sent.
    Truncated(usize),
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub mode: BodyMode,
}

impl Route {
    pub fn ok(path: &str, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: body.into(),
            mode: BodyMode::Sized,
        }
    }

    pub fn html(path: &str, body: &str) -> Self {
        Self::ok(path, "text/html; charset=utf-8", body)
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            status,
            headers: Vec::new(),
            body: Vec::new(),
            mode: BodyMode::Sized,
        }
    }

    pub fn redirect(path: &str, location: &str) -> Self {
        Self {
            headers: vec![("Location".to_string(), location.to_string())],
            ..Self::status(path, 302)
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.headers.clear();
        self
    }

    pub fn with_mode(mut self, mode: BodyMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct MockServer {
    /// Base URL with a trailing slash, e.g. `http://127.0.0.1:12345/`.
    pub base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<Route>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });

    MockServer {
        base: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<Recorded>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    let Some(request) = read_head(&mut stream) else {
        return;
    };
    let Some(recorded) = parse_request(&request) else {
        return;
    };

    let route_path = recorded.path.split('?').next().unwrap_or("").to_string();
    log.lock().unwrap().push(recorded);

    let not_found = Route::status(&route_path, 404);
    let route = routes
        .iter()
        .find(|route| route.path == route_path)
        .unwrap_or(&not_found);

    let mut head = format!("HTTP/1.1 {} {}\r\n", route.status, reason(route.status));
    for (name, value) in &route.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    let body: &[u8] = match route.mode {
        BodyMode::Sized => {
            head.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
            &route.body
        }
        BodyMode::CloseDelimited => &route.body,
        BodyMode::Truncated(claimed) => {
            head.push_str(&format!("Content-Length: {}\r\n", claimed));
            &route.body
        }
    };
    head.push_str("Connection: close\r\n\r\n");

    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if data.len() > 64 * 1024 {
            return None;
        }
    }
    String::from_utf8(data).ok()
}

fn parse_request(request: &str) -> Option<Recorded> {
    let mut lines = request.split("\r\n");
    let path = lines.next()?.split_whitespace().nth(1)?.to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();
    Some(Recorded { path, headers })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
