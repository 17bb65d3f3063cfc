//! The response writer adding the NSID option.
use core::future::Future;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::base::iana::OptionCode;
use crate::base::message::EdnsMessage;
use crate::base::opt::EdnsOption;
use crate::net::server::message::RequestContext;
use crate::net::server::writer::{ResponseWriter, Transport};

use super::codec;
use super::info::InfoSource;

//------------ NsidResponseWriter --------------------------------------------

/// A [`ResponseWriter`] that adds an NSID option to the response it sends.
///
/// The writer wraps the writer of a request that asked for NSID. When the
/// response is sent, it asks the information source for the identity of the
/// server, encodes it and appends it as an NSID option to the OPT record of
/// the response. Options already present stay untouched.
///
/// The response is always sent. If it doesn't have an OPT record, an error
/// is logged and it is sent as is. The same happens if the option doesn't
/// fit into the OPT record.
#[derive(Debug)]
pub struct NsidResponseWriter<W, Src, Msg> {
    /// The writer actually sending the response.
    inner: W,

    /// Where the identity information comes from.
    info: Arc<Src>,

    /// The request the response is for.
    request: Arc<Msg>,
}

impl<W, Src, Msg> NsidResponseWriter<W, Src, Msg> {
    /// Creates a new writer wrapping `inner`.
    #[must_use]
    pub fn new(inner: W, info: Arc<Src>, request: Arc<Msg>) -> Self {
        Self {
            inner,
            info,
            request,
        }
    }
}

impl<W, Src, Msg> NsidResponseWriter<W, Src, Msg>
where
    W: ResponseWriter<Msg>,
    Src: InfoSource<Msg>,
    Msg: EdnsMessage,
{
    fn decorate(&self, response: &mut Msg) {
        let Some(opt) = response.opt_mut() else {
            error!("Response has no OPT record, unable to add NSID");
            return;
        };

        let ctx = RequestContext::from_writer(&self.inner, &*self.request);
        let pairs = self.info.info(&ctx);
        let encoded = codec::encode(&pairs);

        // The hex string is the presentation form, the option carries the
        // decoded payload.
        let option = match EdnsOption::from_hex(OptionCode::NSID, &encoded) {
            Ok(option) => option,
            Err(err) => {
                warn!("Unable to create NSID option: {err}");
                return;
            }
        };

        match opt.push(option) {
            Ok(()) => {
                debug!("Added NSID option with {} pair(s)", pairs.len());
            }
            Err(err) => {
                warn!("Unable to add NSID option to OPT record: {err}");
            }
        }
    }
}

//--- impl ResponseWriter

impl<W, Src, Msg> ResponseWriter<Msg> for NsidResponseWriter<W, Src, Msg>
where
    W: ResponseWriter<Msg>,
    Src: InfoSource<Msg>,
    Msg: EdnsMessage,
{
    fn local_addr(&self) -> SocketAddr {
        self.inner.local_addr()
    }

    fn remote_addr(&self) -> SocketAddr {
        self.inner.remote_addr()
    }

    fn transport(&self) -> Transport {
        self.inner.transport()
    }

    fn write_msg(
        &mut self,
        mut response: Msg,
    ) -> impl Future<Output = Result<(), io::Error>> + Send {
        self.decorate(&mut response);
        self.inner.write_msg(response)
    }

    fn close(&mut self) -> Result<(), io::Error> {
        self.inner.close()
    }
}
