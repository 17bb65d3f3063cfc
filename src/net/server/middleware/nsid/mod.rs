//! Name Server Identifier (NSID) support.
//!
//! A client may ask a server to identify itself by including an empty NSID
//! option in the OPT record of its query. This is useful when many servers
//! answer under the same address, e.g., behind anycast or a load balancer,
//! as it lets operators tell which instance produced a given answer. The
//! option is defined in [RFC 5001].
//!
//! [`NsidMiddleware`] is a [`Handler`] that checks each request for the
//! option. If it is present, the [`ResponseWriter`] handed to the next
//! handler is wrapped in an [`NsidResponseWriter`] which appends an NSID
//! option carrying the server's identity to the response when it is sent.
//! Requests without the option pass through untouched.
//!
//! What identity to report is up to an [`InfoSource`]. The pairs it returns
//! are encoded by the [`codec`] as the hex of their space separated
//! `key=value` rendering.
//!
//! ```
//! use domain_nsid::net::server::middleware::nsid::{
//!     NsidConfig, NsidMiddleware,
//! };
//! use domain_nsid::net::server::middleware::nsid::info::InfoPair;
//!
//! # fn wrap<Next>(next: Next) {
//! let config = NsidConfig {
//!     identity: vec![InfoPair::new("host", "ns1")],
//!     ..Default::default()
//! };
//! let _svc = NsidMiddleware::from_config(next, &config);
//! # }
//! ```
//!
//! [RFC 5001]: https://tools.ietf.org/html/rfc5001
//! [`Handler`]: crate::net::server::handler::Handler
//! [`ResponseWriter`]: crate::net::server::writer::ResponseWriter
use core::future::Future;

use std::sync::Arc;

use tracing::trace;

use crate::base::iana::OptionCode;
use crate::base::message::EdnsMessage;
use crate::net::server::handler::Handler;
use crate::net::server::writer::ResponseWriter;

pub use self::config::NsidConfig;
pub use self::info::{InfoPair, InfoSource, SharedInfo, StaticInfo};
pub use self::writer::NsidResponseWriter;

pub mod codec;
pub mod config;
pub mod info;
pub mod writer;

//------------ requests_nsid -------------------------------------------------

/// Returns whether `request` asks for the server's identity.
///
/// This is the case if the request has an OPT record containing at least
/// one NSID option.
#[must_use]
pub fn requests_nsid<Msg: EdnsMessage + ?Sized>(request: &Msg) -> bool {
    request
        .opt()
        .is_some_and(|opt| opt.has_option(OptionCode::NSID))
}

//------------ NsidMiddleware ------------------------------------------------

/// A middleware handler answering NSID requests.
///
/// Requests carrying an NSID option are passed to the next handler with the
/// writer wrapped into an [`NsidResponseWriter`]. All other requests are
/// passed on with the original writer. Either way, the request itself is
/// not modified and the result of the next handler is returned as is.
#[derive(Debug)]
pub struct NsidMiddleware<Next, Src> {
    /// The handler to pass requests to.
    next: Next,

    /// The source of identity information for decorated responses.
    info: Arc<Src>,

    /// Is the middleware enabled?
    ///
    /// Defaults to true. If false, all requests are passed through with the
    /// original writer.
    enabled: bool,
}

impl<Next, Src> NsidMiddleware<Next, Src> {
    /// Creates a new middleware using `info` as its identity source.
    #[must_use]
    pub fn new(next: Next, info: Src) -> Self {
        Self::with_shared_source(next, Arc::new(info))
    }

    /// Creates a new middleware with an identity source shared elsewhere.
    #[must_use]
    pub fn with_shared_source(next: Next, info: Arc<Src>) -> Self {
        Self {
            next,
            info,
            enabled: true,
        }
    }

    /// Enables or disables the middleware.
    #[must_use]
    pub fn enable(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns whether the middleware is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<Next> NsidMiddleware<Next, StaticInfo> {
    /// Creates a new middleware from configuration.
    #[must_use]
    pub fn from_config(next: Next, config: &NsidConfig) -> Self {
        Self::new(next, config.info_source()).enable(config.enabled)
    }
}

//--- impl Handler

impl<Next, Src, Msg> Handler<Msg> for NsidMiddleware<Next, Src>
where
    Next: Handler<Msg> + Sync,
    Src: InfoSource<Msg> + Send + Sync + 'static,
    Msg: EdnsMessage + Send + Sync + 'static,
{
    type Output = Next::Output;
    type Error = Next::Error;

    fn name(&self) -> &'static str {
        "nsid"
    }

    fn serve<W>(
        &self,
        writer: W,
        request: Arc<Msg>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send
    where
        W: ResponseWriter<Msg> + Send + 'static,
    {
        let decorate = self.enabled && requests_nsid(request.as_ref());
        async move {
            if decorate {
                trace!("Request asks for NSID, wrapping response writer");
                let writer = NsidResponseWriter::new(
                    writer,
                    self.info.clone(),
                    request.clone(),
                );
                self.next.serve(writer, request).await
            } else {
                self.next.serve(writer, request).await
            }
        }
    }
}

//============ Testing =======================================================
