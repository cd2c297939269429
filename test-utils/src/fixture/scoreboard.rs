//! Scoreboard embed fields as posted after a war.
//!
//! Each field name starts with how many attacks the players listed in its value
//! missed. Values list one player per line behind a town hall emoji, with Markdown
//! escapes the posting bot adds around underscores and asterisks.

/// A typical post: two missed-attack groups and a non-count footer field.
///
/// Tallied, this gives `Sir_Lancelot: 2`, `*Nova*: 2`, `bob: 1`, `Kai: 1`.
pub fn fields() -> Vec<(String, String)> {
    vec![
        (
            "2 missed attacks".to_string(),
            "<:th15:1190612345678901234> Sir\\_Lancelot\n<:th14:1190612345678901235> \\*Nova\\*"
                .to_string(),
        ),
        (
            "1 missed attack".to_string(),
            "<:th12:1190612345678901236> bob\n<:th9:1190612345678901237> Kai\n<:th9:1190612345678901237> x"
                .to_string(),
        ),
        (
            "War ended".to_string(),
            "Stars 42 - 39".to_string(),
        ),
    ]
}
