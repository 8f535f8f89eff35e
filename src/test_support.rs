//! Canned HTTP server for client tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A response to serve: status line (e.g. `"404 Not Found"`) and JSON body
pub struct Canned {
    pub status: &'static str,
    pub body: String,
}

impl Canned {
    pub fn new(status: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Serve each response to one connection, in order
///
/// Returns the base URL and a handle yielding the raw requests received.
pub fn serve(responses: Vec<Canned>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for canned in responses {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream));

            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                canned.status,
                canned.body.len(),
                canned.body
            );
            stream.write_all(reply.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        requests
    });

    (base_url, handle)
}

/// Read one request: headers, then `Content-Length` bytes of body
fn read_request<R: Read>(stream: &mut R) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&raw).into_owned()
}
