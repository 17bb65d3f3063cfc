//! EDNS0 option codes.

use core::fmt;

//------------ OptionCode ----------------------------------------------------

/// DNS EDNS0 option codes.
///
/// The record data of OPT records is a sequence of options. The type of each
/// of these options is given through a 16 bit value called *option code.*
///
/// Only the codes this crate deals with receive an associated constant. Any
/// other value of the [IANA registry] can still be represented via
/// [`from_int`][Self::from_int].
///
/// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OptionCode(u16);

impl OptionCode {
    /// Name server identifier (NSID, 3).
    ///
    /// The NSID option allows a name server to include an identifier in an
    /// answer for diagnostic purposes. The option is defined in [RFC 5001].
    ///
    /// [RFC 5001]: https://tools.ietf.org/html/rfc5001
    pub const NSID: Self = Self(3);

    /// DNS cookie (10).
    pub const COOKIE: Self = Self(10);

    /// Padding (12).
    pub const PADDING: Self = Self(12);

    /// Creates an option code from its integer value.
    #[must_use]
    pub const fn from_int(value: u16) -> Self {
        Self(value)
    }

    /// Returns the integer value of the option code.
    #[must_use]
    pub const fn to_int(self) -> u16 {
        self.0
    }

    /// Returns the mnemonic for this option code if there is one.
    #[must_use]
    pub fn to_mnemonic(self) -> Option<&'static str> {
        let res = match self {
            Self::NSID => "NSID",
            Self::COOKIE => "COOKIE",
            Self::PADDING => "Padding",
            _ => return None,
        };
        Some(res)
    }
}

//--- From

impl From<u16> for OptionCode {
    fn from(value: u16) -> Self {
        Self::from_int(value)
    }
}

impl From<OptionCode> for u16 {
    fn from(value: OptionCode) -> Self {
        value.to_int()
    }
}

//--- Display and Debug

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic() {
            Some(m) => f.write_str(m),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic() {
            Some(m) => write!(f, "OptionCode::{m}({})", self.0),
            None => write!(f, "OptionCode({})", self.0),
        }
    }
}

//============ Testing =======================================================
