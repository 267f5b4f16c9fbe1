//! Minimal HTTP/1.1 server standing in for the Zendesk API in integration tests.
//!
//! Replies are registered per (method, path). Each path keeps a queue of
//! replies; the last one repeats once the queue is drained. Unregistered paths
//! get 404. Every request is recorded before the reply is sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target as sent: path plus optional `?query`.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.raw_query().unwrap_or("").as_bytes())
            .into_owned()
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    /// Sleep before answering (for deadline/cancel tests).
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Routes = HashMap<(String, String), Vec<Reply>>;

pub struct ApiServer {
    /// e.g. `http://127.0.0.1:12345/api/v2`
    pub base_url: String,
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ApiServer {
    /// Starts the server in a background thread. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<Mutex<Routes>> = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
        {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                for stream in listener.incoming().flatten() {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    thread::spawn(move || handle(stream, &routes, &requests));
                }
            });
        }
        Self {
            base_url: format!("http://127.0.0.1:{}/api/v2", port),
            routes,
            requests,
        }
    }

    /// Queue `reply` for `method` on `path` (path relative to the API root, e.g. `/job_statuses.json`).
    pub fn reply(&self, method: &str, path: &str, reply: Reply) {
        let key = (method.to_uppercase(), format!("/api/v2{}", path));
        self.routes
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("server received at least one request")
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &Mutex<Routes>,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(req) = read_request(&mut stream) else {
        return;
    };

    let key = (req.method.clone(), req.path().to_string());
    requests.lock().unwrap().push(req);

    let reply = {
        let mut routes = routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => Some(queue.remove(0)),
            Some(queue) => queue.first().cloned(),
            None => None,
        }
    };
    let reply = reply.unwrap_or_else(|| Reply::json(404, r#"{"error":"RecordNotFound"}"#));

    if let Some(d) = reply.delay {
        thread::sleep(d);
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        reply.body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(reply.body.as_bytes());
}

/// Reads head and `Content-Length` body. None on malformed input or timeout.
fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 8192];
    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = std::str::from_utf8(&buf[..head_end]).ok()?;
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[head_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
