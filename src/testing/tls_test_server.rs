use reqwest::Url;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::rustls::crypto::ring::default_provider;

/// A request as seen on the wire by [`TlsTestServer`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    /// e.g. `PUT /org1/meters/7/tags/production HTTP/1.1`
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// HTTPS server on a random local port answering every request with one canned HTTP/1.1 response
pub struct TlsTestServer {
    address: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl TlsTestServer {
    pub async fn start(certificate_pem: &str, private_key_pem: &str, response: &str) -> Self {
        let certificates = rustls_pemfile::certs(&mut Cursor::new(certificate_pem.as_bytes()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let private_key = rustls_pemfile::private_key(&mut Cursor::new(private_key_pem.as_bytes()))
            .unwrap()
            .unwrap();
        let config = ServerConfig::builder_with_provider(Arc::new(default_provider()))
            .with_safe_default_protocol_versions()
            .unwrap()
            .with_no_client_auth()
            .with_single_cert(certificates, private_key)
            .unwrap();
        let acceptor = TlsAcceptor::from(Arc::new(config));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let response = response.to_string();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                // Handshakes the client refuses end here
                let Ok(mut stream) = acceptor.accept(stream).await else {
                    continue;
                };
                if let Some(request) = read_request(&mut stream).await {
                    captured.lock().unwrap().push(request);
                }
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        TlsTestServer { address, requests }
    }

    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("https://{}{}", self.address, path)).unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request<S: AsyncRead + Unpin>(stream: &mut S) -> Option<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break position;
        }
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..read]);
    };

    let mut request = CapturedRequest {
        head: String::from_utf8_lossy(&buffer[..head_end]).to_string(),
        body: String::new(),
    };
    let content_length = request
        .header("content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buffer[head_end + 4..].to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..read]);
    }
    request.body = String::from_utf8_lossy(&body).to_string();
    Some(request)
}
