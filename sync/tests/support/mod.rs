//! Throwaway HTTP responder for exercising the REST host client.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// A canned response for the next request.
pub struct Reply {
    pub status: u16,
    pub body: Option<String>,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}

/// A request as seen by the responder.
#[derive(Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Serves one reply per incoming connection, in order, then stops.
pub struct Responder {
    pub url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl Responder {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind responder");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let mut recorded = Vec::new();
            for reply in replies {
                let (stream, _) = listener.accept().expect("accept");
                let mut reader = BufReader::new(stream);
                recorded.push(read_request(&mut reader));
                write_reply(reader.get_mut(), &reply);
            }
            recorded
        });
        Self { url, handle }
    }

    /// Waits for every reply to be served and returns the requests.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("responder thread panicked")
    }
}

fn read_request<R: BufRead>(reader: &mut R) -> Recorded {
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).unwrap();
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "authorization" => authorization = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    Recorded {
        method,
        path,
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

fn write_reply<W: Write>(stream: &mut W, reply: &Reply) {
    let reason = match reply.status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        _ => "Error",
    };
    let mut head = format!("HTTP/1.1 {} {}\r\nConnection: close\r\n", reply.status, reason);
    if let Some(body) = &reply.body {
        head.push_str("Content-Type: application/json\r\n");
        head.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    head.push_str("\r\n");
    stream.write_all(head.as_bytes()).unwrap();
    if let Some(body) = &reply.body {
        stream.write_all(body.as_bytes()).unwrap();
    }
    stream.flush().unwrap();
}
