//! Stages of the request handling pipeline.
use core::future::Future;

use std::sync::Arc;

use super::writer::ResponseWriter;

//------------ Handler -------------------------------------------------------

/// A stage in the pipeline a server passes each request through.
///
/// Handlers are arranged in a chain. A handler that doesn't itself produce
/// the response passes the request on to the next handler, possibly after
/// substituting the writer with one that alters how the response is sent.
/// Because [`serve`] is generic over the writer, later stages don't need to
/// know whether they received the original or a wrapped writer.
///
/// The outcome of the chain is reported through [`Output`] and [`Error`].
/// A handler that forwards to the next stage returns that stage's result.
///
/// [`serve`]: Self::serve
/// [`Output`]: Self::Output
/// [`Error`]: Self::Error
pub trait Handler<Msg> {
    /// The result of successfully handling a request.
    type Output;

    /// The error returned if handling a request failed.
    type Error;

    /// Returns the name of the handler for logging.
    fn name(&self) -> &'static str;

    /// Handles `request`, sending any response via `writer`.
    fn serve<W>(
        &self,
        writer: W,
        request: Arc<Msg>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send
    where
        W: ResponseWriter<Msg> + Send + 'static;
}
