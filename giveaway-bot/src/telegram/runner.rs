//! REPL runner: converts teloxide messages to core messages and dispatches
//! them through the handler chain. Dispatch errors become user notices via the
//! presentation layer; details go to the log only.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info};

use crate::chain::HandlerChain;
use crate::core::{Bot as CoreBot, ToCoreMessage};
use crate::presentation;

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot, core Bot adapter, and chain.
/// Each update is converted to a core message and handled in a spawned task so
/// the REPL returns immediately.
pub async fn run_repl(
    bot: teloxide::Bot,
    adapter: Arc<dyn CoreBot>,
    handler_chain: HandlerChain,
) -> anyhow::Result<()> {
    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let chain = handler_chain.clone();
            let adapter = adapter.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    kind = ?core_msg.kind,
                    "Received update"
                );

                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                        let text = presentation::notice(&e);
                        if let Err(send_err) = adapter.send_message(&core_msg.chat, text).await {
                            error!(error = %send_err, chat_id = core_msg.chat.id, "Failed to deliver notice");
                        }
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
