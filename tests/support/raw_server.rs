//! Hand-written HTTP/1.1 server for responses wiremock cannot produce,
//! such as a body shorter than its declared Content-Length.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Starts a server that answers every request with `200 OK`, `Content-Type: video/mp4`,
/// an optional `Content-Length: declared`, and (for non-HEAD requests) `sent` body bytes,
/// then closes the connection.
///
/// Returns the base URL (`http://127.0.0.1:PORT`).
pub async fn spawn_raw_server(declared: Option<usize>, sent: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind raw test server");
    let addr = listener.local_addr().expect("raw server address");

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(serve_one(socket, declared, sent));
        }
    });

    format!("http://{addr}")
}

async fn serve_one(mut socket: TcpStream, declared: Option<usize>, sent: usize) {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let mut head = String::from("HTTP/1.1 200 OK\r\nContent-Type: video/mp4\r\nConnection: close\r\n");
    if let Some(len) = declared {
        head.push_str(&format!("Content-Length: {len}\r\n"));
    }
    head.push_str("\r\n");

    if socket.write_all(head.as_bytes()).await.is_err() {
        return;
    }
    if !request.starts_with(b"HEAD") {
        let _ = socket.write_all(&vec![b'x'; sent]).await;
    }
    let _ = socket.shutdown().await;
}
