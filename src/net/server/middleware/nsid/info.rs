//! Sources of server identity information.
use core::fmt;

use std::string::String;
use std::sync::Arc;
use std::vec::Vec;

use arc_swap::ArcSwap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::net::server::message::RequestContext;

//------------ InfoPair ------------------------------------------------------

/// A single piece of information identifying the responding server.
///
/// Examples are the host name or the ID of the shard the server belongs to.
/// Neither key nor value are checked or escaped in any way. Since pairs are
/// rendered as `key=value` and separated by spaces, a source that wants its
/// output to be unambiguous must not use `=` or spaces in them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct InfoPair {
    key: String,
    value: String,
}

impl InfoPair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for InfoPair {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl fmt::Display for InfoPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

//------------ InfoSource ----------------------------------------------------

/// Provides the identity information for a response.
///
/// The source is asked once for every response that gets decorated and
/// should answer quickly as the response is held back until it returns. The
/// order of the returned pairs is kept in the encoded option.
///
/// A source is shared by all requests. It has to take care of its own
/// synchronization if it keeps state and of its own caching if some of the
/// information is expensive to come by. The caller never caches what a
/// source returns.
///
/// Functions and closures taking a [`RequestContext`] reference implement
/// this trait, as do [`StaticInfo`] and [`SharedInfo`].
pub trait InfoSource<Msg> {
    /// Returns the identity information to add to the response.
    fn info(&self, ctx: &RequestContext<'_, Msg>) -> Vec<InfoPair>;
}

impl<Msg, F> InfoSource<Msg> for F
where
    F: Fn(&RequestContext<'_, Msg>) -> Vec<InfoPair>,
{
    fn info(&self, ctx: &RequestContext<'_, Msg>) -> Vec<InfoPair> {
        (self)(ctx)
    }
}

//------------ StaticInfo ----------------------------------------------------

/// An information source returning the same pairs for every request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticInfo {
    pairs: Vec<InfoPair>,
}

impl StaticInfo {
    /// Creates a source always returning `pairs`.
    #[must_use]
    pub fn new(pairs: Vec<InfoPair>) -> Self {
        Self { pairs }
    }

    /// Returns the pairs of this source.
    #[must_use]
    pub fn pairs(&self) -> &[InfoPair] {
        &self.pairs
    }
}

impl<P: Into<InfoPair>> FromIterator<P> for StaticInfo {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<Msg> InfoSource<Msg> for StaticInfo {
    fn info(&self, _ctx: &RequestContext<'_, Msg>) -> Vec<InfoPair> {
        self.pairs.clone()
    }
}

//------------ SharedInfo ----------------------------------------------------

/// An information source whose pairs can be replaced at runtime.
///
/// Clones share the same pairs, so a clone kept by whatever refreshes the
/// identity information, e.g., on a configuration reload, can update the
/// source used by a running server. Requests in flight keep the pairs they
/// already loaded.
#[derive(Clone, Debug, Default)]
pub struct SharedInfo {
    pairs: Arc<ArcSwap<Vec<InfoPair>>>,
}

impl SharedInfo {
    /// Creates a source initially returning `pairs`.
    #[must_use]
    pub fn new(pairs: Vec<InfoPair>) -> Self {
        Self {
            pairs: Arc::new(ArcSwap::from_pointee(pairs)),
        }
    }

    /// Replaces the pairs returned from now on.
    pub fn store(&self, pairs: Vec<InfoPair>) {
        self.pairs.store(Arc::new(pairs));
    }

    /// Returns the current pairs.
    #[must_use]
    pub fn load(&self) -> Arc<Vec<InfoPair>> {
        self.pairs.load_full()
    }
}

impl<Msg> InfoSource<Msg> for SharedInfo {
    fn info(&self, _ctx: &RequestContext<'_, Msg>) -> Vec<InfoPair> {
        (**self.pairs.load()).clone()
    }
}

//============ Testing =======================================================
