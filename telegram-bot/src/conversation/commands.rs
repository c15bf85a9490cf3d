//! Admin commands.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show usage")]
    Start,
    #[command(description = "show usage")]
    Help,
    #[command(description = "register a channel and its signature")]
    Add,
    #[command(description = "change the signature of a registered channel")]
    Edit,
    #[command(description = "remove a channel and its signature")]
    Delete,
    #[command(description = "list your channels")]
    List,
    #[command(description = "show post length limits")]
    Info,
}

impl Command {
    /// Parses `text` as a command, accepting an `@bot_username` suffix when the username is known.
    /// Anything else, including commands with arguments, is None.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        Command::parse(text.trim(), bot_username.unwrap_or_default()).ok()
    }
}
