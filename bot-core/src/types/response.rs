//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the reply body so other handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Stop the chain; a reply with this text was sent.
    Reply(String),
}
