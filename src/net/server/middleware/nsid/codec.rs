//! Encoding identity information into NSID option data.
//!
//! The identity pairs are rendered as `key=value`, joined by single spaces
//! in the order given. [RFC 5001] asks user interfaces to present the NSID
//! payload as hexadecimal digits, so the encoded form handed to the option
//! is the lowercase hex of that text.
//!
//! [RFC 5001]: https://tools.ietf.org/html/rfc5001

use std::string::String;

use super::info::InfoPair;

/// Returns the NSID payload text for `pairs`.
///
/// An empty slice results in an empty string.
#[must_use]
pub fn compose_payload(pairs: &[InfoPair]) -> String {
    let mut res = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            res.push(' ');
        }
        res.push_str(pair.key());
        res.push('=');
        res.push_str(pair.value());
    }
    res
}

/// Returns the hex encoded NSID payload for `pairs`.
#[must_use]
pub fn encode(pairs: &[InfoPair]) -> String {
    hex::encode(compose_payload(pairs))
}

//============ Testing =======================================================
