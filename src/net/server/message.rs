//! Request context handed to request processing logic.
use std::net::SocketAddr;

use super::writer::{ResponseWriter, Transport};

//------------ RequestContext ------------------------------------------------

/// A request together with the facts about how it was received.
///
/// This only borrows the request. It exists for the duration of a single
/// call into request processing logic.
#[derive(Debug)]
pub struct RequestContext<'a, Msg> {
    request: &'a Msg,
    local_addr: SocketAddr,
    remote_addr: SocketAddr,
    transport: Transport,
}

impl<'a, Msg> RequestContext<'a, Msg> {
    /// Creates a new context from its parts.
    #[must_use]
    pub fn new(
        request: &'a Msg,
        local_addr: SocketAddr,
        remote_addr: SocketAddr,
        transport: Transport,
    ) -> Self {
        Self {
            request,
            local_addr,
            remote_addr,
            transport,
        }
    }

    /// Creates a context for `request` received via `writer`.
    #[must_use]
    pub fn from_writer<W>(writer: &W, request: &'a Msg) -> Self
    where
        W: ResponseWriter<Msg> + ?Sized,
    {
        Self::new(
            request,
            writer.local_addr(),
            writer.remote_addr(),
            writer.transport(),
        )
    }

    /// Returns the request message.
    #[must_use]
    pub fn request(&self) -> &'a Msg {
        self.request
    }

    /// Returns the local address the request was received on.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns the address of the client.
    #[must_use]
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// Returns the transport the request was received over.
    #[must_use]
    pub fn transport(&self) -> Transport {
        self.transport
    }
}
