#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tempfile::TempDir;

pub fn movieseek_binary() -> &'static str {
    env!("CARGO_BIN_EXE_movieseek")
}

/// Runs the binary against an isolated MOVIESEEK_HOME with TMDB variables cleared
pub struct MovieSeekTest {
    pub home: TempDir,
    env: Vec<(String, String)>,
}

impl MovieSeekTest {
    pub fn new() -> Self {
        MovieSeekTest {
            home: TempDir::new().expect("Failed to create temp directory"),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Point the binary at a mock server with a bearer token
    pub fn against(self, server: &MockTmdb) -> Self {
        self.with_env("TMDB_BASE_URL", &server.base_url)
            .with_env("TMDB_ACCESS_TOKEN", "test-token")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(movieseek_binary());
        cmd.args(args)
            .current_dir(self.home.path())
            .env("MOVIESEEK_HOME", self.home.path())
            .env_remove("TMDB_ACCESS_TOKEN")
            .env_remove("TMDB_API_KEY")
            .env_remove("TMDB_BASE_URL")
            .env_remove("MOVIESEEK_LOG");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to execute movieseek command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("invalid JSON from {args:?}: {e}\n{stdout}"))
    }
}

/// A canned HTTP reply
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"status_message":"nope"}"#.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One-connection-per-reply HTTP server standing in for the TMDB API.
///
/// Replies are served in order; the raw request head of each connection is
/// recorded.
pub struct MockTmdb {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    _thread: JoinHandle<()>,
}

impl MockTmdb {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        let thread = thread::spawn(move || {
            for reply in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let head = read_head(&mut stream);
                recorded.lock().unwrap().push(head);

                thread::sleep(reply.delay);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status,
                    reason(reply.status),
                    reply.body.len(),
                    reply.body
                );
                // The client may have hung up on a delayed reply
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        MockTmdb {
            base_url: format!("http://{addr}/3"),
            requests,
            _thread: thread,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Wait until at least `count` requests arrived
    pub fn wait_for_requests(&self, count: usize) -> Vec<String> {
        for _ in 0..200 {
            let seen = self.requests();
            if seen.len() >= count {
                return seen;
            }
            thread::sleep(Duration::from_millis(10));
        }
        self.requests()
    }
}

fn read_head(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// A TMDB search page body
pub fn page_body(titles: &[&str], page: u32, total_pages: u32) -> serde_json::Value {
    let results: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "id": page as i64 * 100 + i as i64,
                "title": title,
                "release_date": "1979-05-25",
                "overview": format!("{title} overview"),
                "vote_average": 8.1,
                "poster_path": "/poster.jpg",
            })
        })
        .collect();
    serde_json::json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * 20,
    })
}
