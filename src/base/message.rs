//! Access to the EDNS part of DNS messages.
//!
//! Parsing and composing whole messages is left to the DNS message library
//! used by the server. All that is needed here is the message's OPT record,
//! which [`EdnsMessage`] provides.

use super::opt::OptRecord;

//------------ EdnsMessage ---------------------------------------------------

/// A DNS message that may carry an OPT record.
///
/// Implement this for the message type of the server's message library.
/// Both requests and responses are accessed through it.
pub trait EdnsMessage {
    /// Returns the OPT record of the message, if present.
    fn opt(&self) -> Option<&OptRecord>;

    /// Returns mutable access to the OPT record of the message, if present.
    fn opt_mut(&mut self) -> Option<&mut OptRecord>;
}

impl<T: EdnsMessage + ?Sized> EdnsMessage for Box<T> {
    fn opt(&self) -> Option<&OptRecord> {
        (**self).opt()
    }

    fn opt_mut(&mut self) -> Option<&mut OptRecord> {
        (**self).opt_mut()
    }
}
