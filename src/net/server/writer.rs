//! Sending responses back to the client.
use core::fmt;
use core::future::Future;

use std::io;
use std::net::SocketAddr;

//------------ Transport -----------------------------------------------------

/// The transport over which a request was received.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Transport {
    /// Plain DNS over UDP.
    Udp,

    /// Plain DNS over TCP.
    Tcp,

    /// DNS over TLS.
    Tls,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
            Transport::Tls => "tls",
        })
    }
}

//------------ ResponseWriter ------------------------------------------------

/// The capability to send a finalized response to the client.
///
/// A writer is created by the server for each request and handed through
/// the handler pipeline. Handlers may wrap it in order to change how
/// responses are sent; any wrapper has to forward everything it doesn't
/// change to the writer it wraps.
pub trait ResponseWriter<Msg> {
    /// Returns the local address the request was received on.
    fn local_addr(&self) -> SocketAddr;

    /// Returns the address of the client.
    fn remote_addr(&self) -> SocketAddr;

    /// Returns the transport the request was received over.
    fn transport(&self) -> Transport;

    /// Sends `response` to the client.
    fn write_msg(
        &mut self,
        response: Msg,
    ) -> impl Future<Output = Result<(), io::Error>> + Send;

    /// Closes the connection to the client.
    ///
    /// This is a no-op for datagram transports.
    fn close(&mut self) -> Result<(), io::Error>;
}
