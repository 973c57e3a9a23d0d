//! # Handler chain
//!
//! Runs handlers in order until one reports the message handled. Unmatched
//! messages fall through the whole chain and are ignored.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Ordered chain of handlers; dispatch stops at the first `Stop`.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in order until one returns `Stop` or fails.
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(user_id = message.user.id, handler = %name, response = ?response, "Handler processed");

            if response == HandlerResponse::Stop {
                return Ok(HandlerResponse::Stop);
            }
        }

        debug!(
            user_id = message.user.id,
            message_id = %message.id,
            "No handler matched; message ignored"
        );
        Ok(HandlerResponse::Continue)
    }
}
