//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Message not handled; pass to the next handler.
    Continue,
    /// Message handled; stop the chain.
    Stop,
}
