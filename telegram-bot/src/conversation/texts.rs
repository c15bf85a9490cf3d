//! Fixed reply texts.

use rich_text::{RichText, RichTextBuilder, SpanKind};

pub const ASK_CHANNEL_FOR_ADD: &str =
    "Send me the channel username (for example @my_channel) where I should add the signature.";
pub const ASK_CHANNEL_FOR_EDIT: &str =
    "Send me the channel username (for example @my_channel) whose signature you want to change.";
pub const ASK_CHANNEL_FOR_DELETE: &str =
    "Send me the channel username (for example @my_channel) that you want to remove.";
pub const ASK_NEW_SIGNATURE: &str = "Send the new signature.";
pub const ASK_SIGNATURE_AS_TEXT: &str =
    "Please send the signature as a text message, formatted the way it should appear.";
pub const SIGNATURE_SAVED: &str = "The signature for the channel has been saved.";
pub const UNKNOWN_COMMAND: &str = "I don't understand this command. Use /start to see the list of commands.";
pub const NO_CHANNELS: &str = "You have no registered channels.";

pub fn channel_accepted(title: &str) -> String {
    format!(
        "Channel '{}' added. Now send the signature text, formatted the way you want it to appear.",
        title
    )
}

pub fn channel_deleted(title: &str) -> String {
    format!("Channel '{}' has been removed.", title)
}

/// Header placed before the current signature in the `/edit` preview.
pub fn current_signature_header(title: &str) -> String {
    format!("Current signature for channel '{}':", title)
}

pub fn usage(bot_username: Option<&str>) -> String {
    let mut text = String::from(
        "Hi!\nI add signatures to the posts in your channels. To start, add me to your channel as an administrator allowed to edit messages.\n\n\
         Available commands:\n\
         /add - register a channel and its signature\n\
         /edit - change the signature of a registered channel\n\
         /delete - remove a channel and its signature\n\
         /list - show your channels\n\
         /info - show post length limits\n\
         /help - show this help",
    );
    if let Some(username) = bot_username {
        text.push_str(&format!(
            "\n\nMy link: https://t.me/{0}\nMy username: @{0}",
            username
        ));
    }
    text
}

/// Length limits for text posts and media captions, with bold emphasis.
pub fn limits_info() -> RichText {
    RichTextBuilder::new()
        .push_styled("Post and signature length limits:", SpanKind::Bold)
        .newline()
        .newline()
        .push("The signature is joined to the text of your post, so Telegram's limits apply to the result.")
        .newline()
        .newline()
        .push("• Text posts: the whole text must not exceed ")
        .push_styled("4096 characters", SpanKind::Bold)
        .push(".")
        .newline()
        .push("• Media posts: the caption must not exceed ")
        .push_styled("1024 characters", SpanKind::Bold)
        .push(".")
        .newline()
        .newline()
        .push_styled(
            "If a post goes over these limits, the signature cannot be added.",
            SpanKind::Bold,
        )
        .build()
}
