//! Shared test fixtures: a one-shot stub of the GitHub API and recording
//! stand-ins for the forge and git.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use ml_bootstrap::forge::{ForgeError, RemoteRepo, RepoCreator, RepoDescriptor};
use ml_bootstrap::git::{GitError, GitRunner, GitStep};

// =============================================================================
// Stub HTTP server
// =============================================================================

/// Request as seen by the stub server
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

/// Serve exactly one request with `status` and `body`, then stop.
///
/// Returns the endpoint URL and a handle yielding the captured request.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let url = format!("http://{}/user/repos", listener.local_addr().unwrap());
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);

        let reason = match status {
            201 => "Created",
            401 => "Unauthorized",
            422 => "Unprocessable Entity",
            _ => "Unknown",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        request
    });

    (url, handle)
}

/// Endpoint nothing listens on
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/user/repos", addr)
}

fn read_request(stream: &mut impl Read) -> CapturedRequest {
    let mut header_buf = Vec::new();
    let mut byte = [0u8; 1];
    while !header_buf.ends_with(b"\r\n\r\n") {
        let n = stream.read(&mut byte).expect("read request");
        assert!(n > 0, "connection closed mid-request");
        header_buf.push(byte[0]);
    }

    let mut parsed = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut parsed);
    let status = req.parse(&header_buf).expect("parse request");
    assert!(status.is_complete());

    let headers: Vec<(String, String)> = req
        .headers
        .iter()
        .map(|h| (h.name.to_string(), String::from_utf8_lossy(h.value).to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = vec![0u8; content_length];
    stream.read_exact(&mut body).expect("read body");

    CapturedRequest {
        method: req.method.unwrap_or("").to_string(),
        path: req.path.unwrap_or("").to_string(),
        headers,
        body,
    }
}

// =============================================================================
// Recording collaborators
// =============================================================================

/// Forge stand-in returning a canned result and recording what it was asked
pub struct FakeCreator {
    result: Result<String, (String, String)>,
    pub calls: RefCell<Vec<(RepoDescriptor, String)>>,
}

impl FakeCreator {
    pub fn returning(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: &str, body: &str) -> Self {
        Self {
            result: Err((status.to_string(), body.to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RepoCreator for FakeCreator {
    fn create_repo(&self, repo: &RepoDescriptor, token: &str) -> Result<RemoteRepo, ForgeError> {
        self.calls
            .borrow_mut()
            .push((repo.clone(), token.to_string()));
        match &self.result {
            Ok(url) => Ok(RemoteRepo { url: url.clone() }),
            Err((status, body)) => Err(ForgeError::Api {
                status: status.clone(),
                body: body.clone(),
            }),
        }
    }
}

/// Git stand-in recording each invocation, optionally failing at one step
#[derive(Default)]
pub struct RecordingGit {
    pub calls: RefCell<Vec<(GitStep, Vec<String>)>>,
    fail_at: Option<GitStep>,
}

impl RecordingGit {
    pub fn failing_at(step: GitStep) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_at: Some(step),
        }
    }

    pub fn steps(&self) -> Vec<GitStep> {
        self.calls.borrow().iter().map(|(s, _)| *s).collect()
    }

    pub fn args_for(&self, step: GitStep) -> Option<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, a)| a.clone())
    }
}

impl GitRunner for RecordingGit {
    fn run(&self, step: GitStep, args: &[&str]) -> Result<(), GitError> {
        self.calls
            .borrow_mut()
            .push((step, args.iter().map(|a| a.to_string()).collect()));
        if self.fail_at == Some(step) {
            return Err(GitError::StepFailed {
                step,
                status: "exit code 128".to_string(),
                stderr: "fatal: unable to access remote".to_string(),
            });
        }
        Ok(())
    }
}
