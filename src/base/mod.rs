//! Handling of DNS data.
//!
//! This module provides the small part of DNS data handling needed for
//! working with EDNS options: option codes, the OPT record and access to it
//! from within a message.

pub use self::iana::OptionCode;
pub use self::message::EdnsMessage;
pub use self::opt::{EdnsOption, OptRecord};

pub mod iana;
pub mod message;
pub mod opt;
