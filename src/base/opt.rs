//! The option list of the OPT pseudo-record.
//!
//! In order to provide an extensible means to transmit additional
//! information, [RFC 6891] introduces a resource record called OPT that can
//! be added to the additional section of a message. Its record data is a
//! sequence of options, each consisting of a 16 bit option code and opaque
//! option data.
//!
//! The record itself, i.e., its header fields and its place in the message,
//! is owned by the server's message type. This module only models the
//! option list as found in [`OptRecord`] and doesn't interpret the data of
//! individual options.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use core::fmt;

use bytes::Bytes;
use octseq::builder::OctetsBuilder;

use super::iana::OptionCode;

//------------ Constants -----------------------------------------------------

/// The length of the code and length fields preceding each option's data.
const OPTION_HEADER_LEN: usize = 4;

//------------ EdnsOption ----------------------------------------------------

/// A single EDNS option.
///
/// The option data is kept as opaque octets. Its length is guaranteed not
/// to exceed 65,535 octets so that it can always be composed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EdnsOption {
    code: OptionCode,
    data: Bytes,
}

impl EdnsOption {
    /// Creates a new option from its code and data.
    ///
    /// The function returns an error if `data` is longer than 65,535 octets.
    pub fn new(
        code: OptionCode,
        data: impl Into<Bytes>,
    ) -> Result<Self, LongOptData> {
        let data = data.into();
        LongOptData::check_len(data.len())?;
        Ok(Self { code, data })
    }

    /// Creates a new option from its data in presentation format.
    ///
    /// Some options, NSID among them, are read and written by user
    /// interfaces as a sequence of hexadecimal digits, two digits per
    /// octet. This function decodes such a sequence into the option data.
    pub fn from_hex(
        code: OptionCode,
        hex: &str,
    ) -> Result<Self, BuildDataError> {
        let data = hex::decode(hex)?;
        Ok(Self::new(code, data)?)
    }

    /// Creates a new option with empty data.
    #[must_use]
    pub fn empty(code: OptionCode) -> Self {
        Self { code, data: Bytes::new() }
    }

    /// Returns the option code.
    #[must_use]
    pub fn code(&self) -> OptionCode {
        self.code
    }

    /// Returns the option data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Returns the option data as lowercase hexadecimal digits.
    #[must_use]
    pub fn data_hex(&self) -> String {
        hex::encode(&self.data)
    }

    /// Returns the length of the composed option in octets.
    #[must_use]
    pub fn compose_len(&self) -> usize {
        OPTION_HEADER_LEN + self.data.len()
    }

    /// Appends the wire format of the option to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // The length was checked on construction.
        let len = self.data.len() as u16;
        target.append_slice(&self.code.to_int().to_be_bytes())?;
        target.append_slice(&len.to_be_bytes())?;
        target.append_slice(self.data.as_ref())
    }
}

//--- Display

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.code, self.data_hex())
    }
}

//------------ OptRecord -----------------------------------------------------

/// The option list of a message's OPT pseudo-record.
///
/// The record keeps its options in the order they were received or added.
/// Options with the same code may appear more than once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OptRecord {
    options: Vec<EdnsOption>,
}

impl OptRecord {
    /// Creates a new record without any options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the options in message order.
    #[must_use]
    pub fn options(&self) -> &[EdnsOption] {
        &self.options
    }

    /// Returns an iterator over all options with the given code.
    pub fn iter_code(
        &self,
        code: OptionCode,
    ) -> impl Iterator<Item = &EdnsOption> + '_ {
        self.options.iter().filter(move |opt| opt.code == code)
    }

    /// Returns whether the record contains at least one option with `code`.
    #[must_use]
    pub fn has_option(&self, code: OptionCode) -> bool {
        self.options.iter().any(|opt| opt.code == code)
    }

    /// Appends an option after all existing options.
    ///
    /// Fails if the record data would grow beyond 65,535 octets. The record
    /// is left unchanged in this case.
    pub fn push(&mut self, option: EdnsOption) -> Result<(), LongOptData> {
        LongOptData::check_len(self.rdata_len() + option.compose_len())?;
        self.options.push(option);
        Ok(())
    }

    /// Returns the length of the record data in octets.
    #[must_use]
    pub fn rdata_len(&self) -> usize {
        self.options.iter().map(EdnsOption::compose_len).sum()
    }

    /// Appends the record data, i.e., the option list, to `target`.
    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for option in &self.options {
            option.compose(target)?;
        }
        Ok(())
    }
}

//------------ LongOptData ---------------------------------------------------

/// The octets sequence to be used for option data is too long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongOptData(());

impl LongOptData {
    /// Checks that `len` fits into the 16 bit length field.
    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(Self(()))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for LongOptData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("option data too long")
    }
}

impl std::error::Error for LongOptData {}

//------------ BuildDataError ------------------------------------------------

/// An error happened while constructing an option from external data.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildDataError {
    /// The option data would exceed 65,535 octets.
    LongOptData,

    /// The presentation format of the option data was not valid hex.
    Hex(hex::FromHexError),
}

impl From<LongOptData> for BuildDataError {
    fn from(_: LongOptData) -> Self {
        Self::LongOptData
    }
}

impl From<hex::FromHexError> for BuildDataError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err)
    }
}

impl fmt::Display for BuildDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LongOptData => f.write_str("long option data"),
            Self::Hex(err) => write!(f, "invalid hex option data: {err}"),
        }
    }
}

impl std::error::Error for BuildDataError {}

//============ Testing =======================================================
