//! Name Server Identifier (NSID) support for DNS servers.
//!
//! This crate provides a middleware for a DNS server's request pipeline
//! that implements the NSID extension defined in [RFC 5001]. When a query
//! carries an EDNS0 NSID option, the response is annotated with information
//! identifying the server instance that produced it before it is sent back
//! to the client. Queries without the option are passed through unchanged.
//!
//! The crate doesn't contain a DNS server or a message parser. Instead it
//! defines the interfaces at which it plugs into those:
//!
//! * [base] contains the EDNS option codes, the OPT record and the
//!   [`EdnsMessage`][base::EdnsMessage] trait through which the OPT record
//!   of the server's message type is accessed, and
//! * [net::server] contains the request pipeline interfaces, i.e., the
//!   [`Handler`][net::server::Handler] trait for pipeline stages and the
//!   [`ResponseWriter`][net::server::ResponseWriter] trait for sending
//!   responses, as well as the NSID middleware itself in
//!   [net::server::middleware::nsid].
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables deserializing the
//!   [`NsidConfig`][net::server::middleware::nsid::NsidConfig] via
//!   [serde](https://serde.rs/). This feature is enabled by default.
//!
//! [RFC 5001]: https://tools.ietf.org/html/rfc5001

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod net;
