//! Minimal HTTP/1 host for response handlers.
//!
//! Each request gets a fresh [`ResponseRecorder`]; the handler fills it
//! (usually through a [`ResponseBuilder`](crate::ResponseBuilder)) and the
//! recording is sent back through hyper.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http::request::Parts;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::logging::{self, AccessRecord};
use crate::sink::ResponseRecorder;

/// Body sent when a recorded response cannot be represented.
static INTERNAL_ERROR_BODY: Bytes = Bytes::from_static(b"Internal Server Error");

/// Request handler: fills the recorder for one request.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, request: &Parts, response: &mut ResponseRecorder);
}

impl<F> Handler for F
where
    F: Fn(&Parts, &mut ResponseRecorder) + Send + Sync + 'static,
{
    #[inline]
    fn handle(&self, request: &Parts, response: &mut ResponseRecorder) {
        self(request, response)
    }
}

/// HTTP/1 server driving a [`Handler`].
pub struct Server<H> {
    listener: TcpListener,
    handler: Arc<H>,
    access_log: bool,
    service_name: Arc<str>,
}

impl<H: Handler> Server<H> {
    /// Bind to `config.listen_addr`.
    pub async fn bind(config: &ServerConfig, handler: H) -> std::io::Result<Self> {
        let listener = TcpListener::bind(config.listen_addr).await?;
        Ok(Self::from_listener(listener, handler).with_access_log(config.access_log))
    }

    /// Serve on an already bound listener.
    pub fn from_listener(listener: TcpListener, handler: H) -> Self {
        Self {
            listener,
            handler: Arc::new(handler),
            access_log: false,
            service_name: Arc::from("emit"),
        }
    }

    /// Enable or disable access logging.
    pub fn with_access_log(mut self, enabled: bool) -> Self {
        self.access_log = enabled;
        self
    }

    /// Service name written to access log lines.
    pub fn with_service_name(mut self, name: impl AsRef<str>) -> Self {
        self.service_name = Arc::from(name.as_ref());
        self
    }

    /// Address the server is listening on.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until the task is dropped or accept fails.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(addr = %self.local_addr()?, "listening");

        loop {
            let (stream, peer) = self.listener.accept().await?;
            let _ = stream.set_nodelay(true);
            let handler = Arc::clone(&self.handler);
            let service_name = Arc::clone(&self.service_name);
            let access_log = self.access_log;

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let handler = Arc::clone(&handler);
                    let service_name = Arc::clone(&service_name);
                    async move { respond(&*handler, req, access_log, &service_name) }
                });

                let io = TokioIo::new(stream);
                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!(%peer, error = %e, "connection closed with error");
                }
            });
        }
    }
}

/// Run the handler for one request and turn the recording into a response.
fn respond<H: Handler + ?Sized, B>(
    handler: &H,
    req: Request<B>,
    access_log: bool,
    service_name: &str,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let start = Instant::now();
    let (parts, _body) = req.into_parts();

    let mut recorder = ResponseRecorder::new();
    handler.handle(&parts, &mut recorder);
    let bytes = recorder.body().len() as u64;

    let response = recorder.into_response().unwrap_or_else(|e| {
        error!(error = %e, path = parts.uri.path(), "handler produced an invalid response");
        internal_error()
    });

    if access_log {
        let request_id = uuid::Uuid::new_v4().simple().to_string();
        logging::log_access(
            service_name,
            &AccessRecord {
                request_id: &request_id,
                method: parts.method.as_str(),
                path: parts.uri.path(),
                status: response.status().as_u16(),
                bytes,
                duration_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        );
    }

    Ok(response)
}

fn internal_error() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(INTERNAL_ERROR_BODY.clone()));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
