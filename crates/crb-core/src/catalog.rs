//! Static message catalog: one preformatted text block per topic.

/// Prompt shown above the root menu keyboard.
pub const MENU_PROMPT: &str = "Choose a section:";

pub const WELCOME: &str = "\
🌟 Welcome to the ChatGPT Telegram Bot! 🌟

You now have direct access to the power of ChatGPT right inside Telegram:

✨ No VPN required
✨ No separate ChatGPT subscription
✨ Everything works right here, in Telegram
✨ Instant answers to any question

Use the /menu command to open the interactive menu.
Or just type your question and I will answer! 🚀";

pub const HELP: &str = "\
📚 Available commands:

/start - Start working with the bot
/menu - Open the interactive menu
/help - Show this message
/about - About the bot
/examples - Example questions
/categories - Question categories
/settings - Bot settings

Just type your question in the chat and I will answer! 💬";

pub const ABOUT: &str = "\
ℹ️ About the bot:

This bot is powered by ChatGPT, OpenAI's advanced language model.

🔑 Highlights:
• Access to ChatGPT without a VPN
• No OpenAI account required
• Works in your favourite messenger
• Fast and accurate answers

🛡 Privacy:
We do not store your request history.
Every conversation starts from a clean slate.

🚀 Version: 1.0";

pub const EXAMPLES: &str = "\
💡 Example questions:

1️⃣ General knowledge:
• \"What is quantum physics?\"
• \"Tell me about the causes of World War I\"

2️⃣ Programming:
• \"How do I build a simple web server in Python?\"
• \"Explain how garbage collection works\"

3️⃣ Mathematics:
• \"Help me solve a quadratic equation\"
• \"Explain the Pythagorean theorem\"

4️⃣ Creative writing:
• \"Make up a story about a space journey\"
• \"Write a poem about spring\"

Copy any question you like, or ask your own! 🎯";

pub const CATEGORIES: &str = "\
🗂 Question categories:

🎓 Education
• Mathematics and physics
• History and geography
• Languages and literature

💻 Technology
• Programming
• Computer science
• Artificial intelligence

🎨 Creativity
• Writing
• Idea generation
• Poems and short stories

💼 Business
• Marketing
• Management
• Data analysis

🌍 Other
• Travel
• Cooking
• Health

Pick a category you are interested in and ask away! 🎯";

pub const SETTINGS: &str = "\
⚙️ Settings:

Current bot settings:
📝 Model: GPT-3.5-turbo
🌐 Language: Auto-detect
✨ Creativity: Standard

❗️ Settings cannot be changed yet.
In future versions you will be able to:
• Choose the reply language
• Tune the reply length
• Adjust creativity

Stay tuned for updates! 🔄";

/// A topic screen reachable from the root menu.
///
/// The menu topology is reconstructed from these keys on every render; there
/// is no stored menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    About,
    Help,
    Examples,
    Categories,
    Settings,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::About,
        Topic::Help,
        Topic::Examples,
        Topic::Categories,
        Topic::Settings,
    ];

    /// Stable key, also used as button callback data.
    pub fn key(self) -> &'static str {
        match self {
            Topic::About => "about",
            Topic::Help => "help",
            Topic::Examples => "examples",
            Topic::Categories => "categories",
            Topic::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Button label shown on the root menu.
    pub fn label(self) -> &'static str {
        match self {
            Topic::About => "ℹ️ About",
            Topic::Help => "❓ Help",
            Topic::Examples => "💡 Examples",
            Topic::Categories => "🗂 Categories",
            Topic::Settings => "⚙️ Settings",
        }
    }

    /// The catalog entry for this topic, verbatim.
    pub fn text(self) -> &'static str {
        match self {
            Topic::About => ABOUT,
            Topic::Help => HELP,
            Topic::Examples => EXAMPLES,
            Topic::Categories => CATEGORIES,
            Topic::Settings => SETTINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_key(topic.key()), Some(topic));
        }
        assert_eq!(Topic::from_key("back_to_menu"), None);
        assert_eq!(Topic::from_key("About"), None);
    }

    #[test]
    fn entries_are_distinct_and_non_empty() {
        let texts: Vec<&str> = Topic::ALL.iter().map(|t| t.text()).collect();
        for (i, a) in texts.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn entries_fit_the_platform_message_limit() {
        for topic in Topic::ALL {
            assert!(topic.text().chars().count() <= 4096);
        }
        assert!(WELCOME.chars().count() <= 4096);
    }
}
