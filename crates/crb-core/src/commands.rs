//! Static command dispatch table.
//!
//! Every registered command resolves to either a catalog entry or the menu;
//! the lookup is total over this set, and anything else never gets a reply.

use crate::catalog::{self, Topic};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Menu,
    Help,
    About,
    Examples,
    Categories,
    Settings,
}

/// What a command resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandReply {
    /// Send this catalog text as-is.
    Static(&'static str),
    /// Send the root menu with its keyboard.
    OpenMenu,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Start,
        Command::Menu,
        Command::Help,
        Command::About,
        Command::Examples,
        Command::Categories,
        Command::Settings,
    ];

    /// Parse a raw message like `/cmd@botname arg1 ...`.
    ///
    /// Returns `None` for non-commands and for tokens outside the registered
    /// set; arguments are ignored (no command takes any).
    pub fn parse(text: &str) -> Option<Command> {
        let first = text.trim().split_whitespace().next()?;
        let name = first
            .strip_prefix('/')?
            .split('@')
            .next()
            .unwrap_or("")
            .to_lowercase();

        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Menu => "menu",
            Command::Help => "help",
            Command::About => "about",
            Command::Examples => "examples",
            Command::Categories => "categories",
            Command::Settings => "settings",
        }
    }

    /// Description surfaced in the platform command menu.
    pub fn description(self) -> &'static str {
        match self {
            Command::Start => "Start working with the bot",
            Command::Menu => "Open the interactive menu",
            Command::Help => "Show the command list",
            Command::About => "About the bot",
            Command::Examples => "Example questions",
            Command::Categories => "Question categories",
            Command::Settings => "Bot settings",
        }
    }

    /// The full registration list, in menu order.
    pub fn descriptions() -> [(&'static str, &'static str); 7] {
        Command::ALL.map(|c| (c.name(), c.description()))
    }

    pub fn reply(self) -> CommandReply {
        match self {
            Command::Start => CommandReply::Static(catalog::WELCOME),
            Command::Menu => CommandReply::OpenMenu,
            Command::Help => CommandReply::Static(Topic::Help.text()),
            Command::About => CommandReply::Static(Topic::About.text()),
            Command::Examples => CommandReply::Static(Topic::Examples.text()),
            Command::Categories => CommandReply::Static(Topic::Categories.text()),
            Command::Settings => CommandReply::Static(Topic::Settings.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_addressed_forms() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/menu@relay_bot"), Some(Command::Menu));
        assert_eq!(Command::parse("  /HELP extra args  "), Some(Command::Help));
    }

    #[test]
    fn rejects_non_commands_and_unregistered_tokens() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("/unknown"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("/"), None);
    }

    #[test]
    fn every_command_resolves() {
        for cmd in Command::ALL {
            match cmd.reply() {
                CommandReply::Static(text) => assert!(!text.is_empty()),
                CommandReply::OpenMenu => assert_eq!(cmd, Command::Menu),
            }
        }
    }

    #[test]
    fn registration_list_matches_the_dispatch_table() {
        let descs = Command::descriptions();
        assert_eq!(descs.len(), Command::ALL.len());
        for (cmd, (name, desc)) in Command::ALL.into_iter().zip(descs) {
            assert_eq!(cmd.name(), name);
            assert!(!desc.is_empty());
        }
    }
}
