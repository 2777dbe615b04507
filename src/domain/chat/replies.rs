//! Fixed texts the twin speaks.

/// Greeting that opens every chat session.
pub const GREETING: &str = "Hello! I'm your Cryptex AI twin. How can I assist you today?";

/// Replies the twin picks from, independent of what the user wrote.
pub const CANNED_REPLIES: [&str; 5] = [
    "I remember you mentioned something like this before. Let me build on that...",
    "Based on our previous conversations, I think you'll find this interesting...",
    "I've analyzed this with the context of your preferences and history...",
    "This aligns with your personality traits that I've learned...",
    "Given your interests, I think you'd appreciate this perspective...",
];

/// Returns true if `text` is one of the canned replies.
pub fn is_canned_reply(text: &str) -> bool {
    CANNED_REPLIES.contains(&text)
}
