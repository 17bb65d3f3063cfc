//! Building blocks for DNS servers.
//!
//! A server receives requests over some transport and passes each of them
//! through a chain of [`Handler`]s together with a [`ResponseWriter`] that
//! sends the eventual response back to the client. Handlers are either
//! application logic producing responses or middleware that alters requests
//! or responses on their way through the chain.
//!
//! The transports themselves and the server loop are not part of this
//! crate. Only the interfaces at which middleware plugs in are defined here,
//! together with the middleware in the [`middleware`] module.

pub use self::handler::Handler;
pub use self::message::RequestContext;
pub use self::writer::{ResponseWriter, Transport};

pub mod handler;
pub mod message;
pub mod middleware;
pub mod writer;
