//! Messaging command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use venuesync_core::{Conversation, MarketStore, SenderRole};

use crate::cli::{GlobalOpts, MessagesArgs, MessagesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConversationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "With")]
    with: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Messages")]
    messages: usize,
    #[tabled(rename = "Unread")]
    unread: String,
    #[tabled(rename = "Last activity")]
    last_activity: String,
    #[tabled(rename = "Last message")]
    last_message: String,
}

impl From<&Conversation> for ConversationRow {
    fn from(c: &Conversation) -> Self {
        Self {
            id: c.id.clone(),
            with: c.with.clone(),
            host: c.with_name.clone(),
            messages: c.messages.len(),
            unread: if c.unread { "yes".into() } else { String::new() },
            last_activity: c.last_activity.format("%Y-%m-%d %H:%M").to_string(),
            last_message: truncate(&c.last_message, 40),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let cut: String = text.chars().take(max - 1).collect();
        format!("{cut}\u{2026}")
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(store: &MarketStore, args: MessagesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        MessagesCommand::List => {
            let conversations = store.conversations();
            let out = output::render_list(
                &global.output,
                &conversations,
                |c| ConversationRow::from(c),
                |c| c.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MessagesCommand::Show { conversation } => {
            let thread = store.conversation(&conversation)?;
            let color = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &thread,
                |t| render_thread(t, color),
                |t| t.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MessagesCommand::Send { venue, text } => {
            let venue = util::resolve_venue(store, &venue)?;
            let message = store.send_message(&venue.id, &text)?;
            if !global.quiet {
                eprintln!("Message sent to {} ({})", message.with_name, message.conversation_id);
            }
            Ok(())
        }
    }
}

fn render_thread(thread: &Conversation, color: bool) -> String {
    let mut out = format!("{} with {} ({})\n", thread.id, thread.with, thread.with_name);
    for message in &thread.messages {
        let sender = match message.sender {
            SenderRole::Guest => {
                if color {
                    "guest".cyan().to_string()
                } else {
                    "guest".to_owned()
                }
            }
            SenderRole::Host => {
                if color {
                    "host".magenta().to_string()
                } else {
                    "host".to_owned()
                }
            }
        };
        out.push_str(&format!(
            "  [{}] {sender}: {}\n",
            message.timestamp.format("%Y-%m-%d %H:%M"),
            message.text
        ));
    }
    out.trim_end().to_owned()
}
