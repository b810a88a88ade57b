//! Built-in protocol messages.
//!
//! `Show`, `Run` and `Complete` travel through `Value::message` like any
//! other argument, so host values and closures see them the same way.

use std::fmt;
use std::sync::Arc;

/// Callback fed one completion candidate at a time. Returning `false` asks
/// the sender to stop enumerating.
pub type CompletionReceiver = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A built-in message.
#[derive(Clone, Debug)]
pub enum Protocol {
    /// Answer with a `Value::String` holding the display text.
    Show,
    /// Perform deferred effects and answer with the result.
    Run,
    /// Offer completion candidates to the request's receiver.
    Complete(CompleteRequest),
}

impl Protocol {
    /// Display name of the message itself.
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Show => ":show",
            Protocol::Run => ":run",
            Protocol::Complete(_) => ":complete",
        }
    }
}

/// Payload of the `Complete` message.
#[derive(Clone)]
pub struct CompleteRequest {
    query: Arc<str>,
    receiver: CompletionReceiver,
}

impl CompleteRequest {
    pub fn new(
        query: impl Into<Arc<str>>,
        receiver: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        CompleteRequest {
            query: query.into(),
            receiver: Arc::new(receiver),
        }
    }

    /// The partial text typed so far. Receivers filter on it; senders may
    /// ignore it and offer everything.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Offer one candidate. `false` means stop.
    #[inline]
    pub fn offer(&self, candidate: &str) -> bool {
        (self.receiver)(candidate)
    }
}

impl fmt::Debug for CompleteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteRequest")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
