//! Minimal HTTP/1.1 server imitating `GET /orgs/{org}/repos?page=N` for integration tests.
//!
//! Page N is answered from a script (1-based); pages past the end of the
//! script return `[]`. Every request is recorded so tests can assert on the
//! number of requests, query parameters and headers.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How the server answers one page.
#[derive(Debug, Clone)]
pub enum PageReply {
    /// 200 with this JSON body.
    Json(String),
    /// Given status with an error-shaped JSON body.
    Status(u16),
    /// 200 with a body that is not JSON.
    Garbage,
    /// Close the connection without answering.
    Drop,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub struct GithubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl GithubServer {
    /// Base URL to use as `api_base`, e.g. `http://127.0.0.1:12345/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering pages from `script`.
/// The server runs until the process exits.
pub fn start(script: Vec<PageReply>) -> GithubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let script = Arc::new(script);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let script = Arc::clone(&script);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &script, &recorded));
        }
    });
    GithubServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// JSON array of `count` repos named `{prefix}{i}`; `inactive(i)` gives (archived, disabled).
pub fn repos_json<F>(org: &str, prefix: &str, count: usize, inactive: F) -> String
where
    F: Fn(usize) -> (bool, bool),
{
    let repos: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let (archived, disabled) = inactive(i);
            serde_json::json!({
                "id": i,
                "name": format!("{}{}", prefix, i),
                "full_name": format!("{}/{}{}", org, prefix, i),
                "clone_url": format!("https://github.com/{}/{}{}.git", org, prefix, i),
                "archived": archived,
                "disabled": disabled,
            })
        })
        .collect();
    serde_json::Value::Array(repos).to_string()
}

fn handle(mut stream: TcpStream, script: &[PageReply], recorded: &Mutex<Vec<RecordedRequest>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = match std::str::from_utf8(&buf) {
        Ok(s) => parse_request(s),
        Err(_) => return,
    };
    let page = request
        .query_param("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);
    recorded.lock().unwrap().push(request);

    let reply = script
        .get(page.saturating_sub(1))
        .cloned()
        .unwrap_or_else(|| PageReply::Json("[]".to_string()));
    let (status, body) = match reply {
        PageReply::Json(body) => ("200 OK".to_string(), body),
        PageReply::Status(code) => (
            format!("{} Error", code),
            r#"{"message":"error"}"#.to_string(),
        ),
        PageReply::Garbage => ("200 OK".to_string(), "<html>oops</html>".to_string()),
        PageReply::Drop => return,
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(request: &str) -> RecordedRequest {
    let mut lines = request.lines();
    let mut start = lines.next().unwrap_or("").split_whitespace();
    let method = start.next().unwrap_or("").to_string();
    let target = start.next().unwrap_or("");
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let query = query
        .split('&')
        .filter(|kv| !kv.is_empty())
        .map(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    let headers = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    RecordedRequest {
        method,
        path: path.to_string(),
        query,
        headers,
    }
}
