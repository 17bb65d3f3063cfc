//! Test doubles for the server side of the NSID middleware.
#![allow(dead_code)]

use std::future::{ready, Future};
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use domain_nsid::base::opt::OptRecord;
use domain_nsid::base::EdnsMessage;
use domain_nsid::net::server::middleware::nsid::info::{InfoPair, InfoSource};
use domain_nsid::net::server::{
    Handler, RequestContext, ResponseWriter, Transport,
};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

//------------ Logging -------------------------------------------------------

/// Setup logging of events reported by the crate and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Log output collected for the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Starts capturing all events on the current thread.
    ///
    /// Capturing stops when the returned guard is dropped.
    pub fn start() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//------------ Message -------------------------------------------------------

/// A stand-in for the message type of a DNS library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub id: u16,
    pub opt: Option<OptRecord>,
}

impl Message {
    pub fn new(id: u16, opt: Option<OptRecord>) -> Self {
        Self { id, opt }
    }
}

impl EdnsMessage for Message {
    fn opt(&self) -> Option<&OptRecord> {
        self.opt.as_ref()
    }

    fn opt_mut(&mut self) -> Option<&mut OptRecord> {
        self.opt.as_mut()
    }
}

//------------ RecordingWriter -----------------------------------------------

/// A writer that keeps every response it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingWriter {
    sent: Arc<Mutex<Vec<Message>>>,
    closed: Arc<AtomicUsize>,
    fail_with: Option<io::ErrorKind>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a writer failing every send with an error of `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ResponseWriter<Message> for RecordingWriter {
    fn local_addr(&self) -> SocketAddr {
        "192.0.2.53:53".parse().unwrap()
    }

    fn remote_addr(&self) -> SocketAddr {
        "198.51.100.7:4711".parse().unwrap()
    }

    fn transport(&self) -> Transport {
        Transport::Udp
    }

    fn write_msg(
        &mut self,
        response: Message,
    ) -> impl Future<Output = Result<(), io::Error>> + Send {
        let res = match self.fail_with {
            Some(kind) => Err(io::Error::new(kind, "send failed")),
            None => {
                self.sent.lock().unwrap().push(response);
                Ok(())
            }
        };
        ready(res)
    }

    fn close(&mut self) -> Result<(), io::Error> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

//------------ Responder -----------------------------------------------------

/// The last stage of a pipeline, answering every request.
///
/// The response carries the request's ID and a copy of the configured OPT
/// record. The type name of each writer received is recorded.
#[derive(Clone, Default)]
pub struct Responder {
    response_opt: Option<OptRecord>,
    writers: Arc<Mutex<Vec<&'static str>>>,
    close_after_send: bool,
}

impl Responder {
    pub fn new(response_opt: Option<OptRecord>) -> Self {
        Self {
            response_opt,
            ..Default::default()
        }
    }

    /// Makes the responder close the writer after sending.
    pub fn closing(mut self) -> Self {
        self.close_after_send = true;
        self
    }

    pub fn writer_types(&self) -> Vec<&'static str> {
        self.writers.lock().unwrap().clone()
    }
}

impl Handler<Message> for Responder {
    type Output = u16;
    type Error = io::Error;

    fn name(&self) -> &'static str {
        "responder"
    }

    fn serve<W>(
        &self,
        mut writer: W,
        request: Arc<Message>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send
    where
        W: ResponseWriter<Message> + Send + 'static,
    {
        self.writers
            .lock()
            .unwrap()
            .push(std::any::type_name::<W>());
        let response = Message::new(request.id, self.response_opt.clone());
        let close = self.close_after_send;
        async move {
            writer.write_msg(response).await?;
            if close {
                writer.close()?;
            }
            Ok(request.id)
        }
    }
}

//------------ Failing -------------------------------------------------------

/// A stage that fails every request without sending anything.
#[derive(Clone, Copy, Default)]
pub struct Failing;

impl Handler<Message> for Failing {
    type Output = u16;
    type Error = &'static str;

    fn name(&self) -> &'static str {
        "failing"
    }

    fn serve<W>(
        &self,
        _writer: W,
        _request: Arc<Message>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send
    where
        W: ResponseWriter<Message> + Send + 'static,
    {
        ready(Err("SERVFAIL"))
    }
}

//------------ CountingInfo --------------------------------------------------

/// An information source counting how often it was asked.
#[derive(Default)]
pub struct CountingInfo {
    pairs: Vec<InfoPair>,
    calls: AtomicUsize,
}

impl CountingInfo {
    pub fn new(pairs: Vec<InfoPair>) -> Self {
        Self {
            pairs,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InfoSource<Message> for CountingInfo {
    fn info(&self, _ctx: &RequestContext<'_, Message>) -> Vec<InfoPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pairs.clone()
    }
}
