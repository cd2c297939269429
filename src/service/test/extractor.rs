use super::*;
use crate::{
    model::tally::MIN_USERNAME_CHARS,
    service::extractor::{clean_username, extract_tally, parse_leading_count},
};

/// Tests tallying a field with emoji-prefixed usernames.
///
/// Expected: every listed player receives the field's count
#[test]
fn tallies_emoji_prefixed_lines() {
    let messages = vec![scoreboard(
        1,
        now(),
        &[("3 missed", "<:icon:123> alice\n<:icon:456> bob")],
    )];

    let tally = extract_tally(&messages);

    assert_eq!(tally.len(), 2);
    assert_eq!(tally.get("alice"), Some(3));
    assert_eq!(tally.get("bob"), Some(3));
}

/// Tests that counts for the same player add up across fields and messages.
///
/// Expected: alice = 3 + 1 + 2, bob = 3
#[test]
fn sums_counts_across_fields_and_messages() {
    let messages = vec![
        scoreboard(
            2,
            now(),
            &[("3 missed", "<:a:1> alice\n<:a:1> bob"), ("1 missed", "<:b:2> alice")],
        ),
        scoreboard(1, now() - Duration::days(1), &[("2 missed", "alice")]),
    ];

    let tally = extract_tally(&messages);

    assert_eq!(tally.get("alice"), Some(6));
    assert_eq!(tally.get("bob"), Some(3));
}

/// Tests that names too short after cleanup are dropped.
///
/// Expected: "a" and the bare emoji line are not counted, "ab" is
#[test]
fn drops_short_usernames() {
    let messages = vec![scoreboard(
        1,
        now(),
        &[("2 missed", "a\n<:icon:9>\n<:icon:9> ab\n \\ ")],
    )];

    let tally = extract_tally(&messages);

    assert_eq!(tally.len(), 1);
    assert_eq!(tally.get("ab"), Some(2));
    assert_eq!(tally.get("a"), None);
}

/// Tests that no key shorter than the minimum ever reaches the tally.
///
/// Expected: all keys have at least MIN_USERNAME_CHARS characters
#[test]
fn tally_never_holds_short_names() {
    let value = ["x", "<:e:1>y", "\\z\\", "  ", "<:e:1> ok", "é", "ü\\ö"].join("\n");
    let messages = vec![scoreboard(1, now(), &[("4", value.as_str())])];

    let tally = extract_tally(&messages);

    for (name, _) in tally.sorted_desc() {
        assert!(name.chars().count() >= MIN_USERNAME_CHARS, "{:?} kept", name);
    }
    assert_eq!(tally.get("ok"), Some(4));
    assert_eq!(tally.get("üö"), Some(4));
}

/// Tests that fields without a leading number are ignored entirely.
///
/// Expected: empty tally
#[test]
fn skips_fields_without_leading_count() {
    let messages = vec![scoreboard(
        1,
        now(),
        &[
            ("Missed 3", "alice"),
            ("Summary", "bob"),
            (" 2 missed", "carol"),
        ],
    )];

    let tally = extract_tally(&messages);

    assert!(tally.is_empty());
}

/// Tests that only the first embed of a message is read.
///
/// Expected: only the first embed's player is counted
#[test]
fn reads_only_first_embed() {
    let mut message = scoreboard(1, now(), &[("1 missed", "alice")]);
    message.embeds.push(RetrievedEmbed {
        fields: vec![RetrievedField {
            name: "5 missed".to_string(),
            value: "mallory".to_string(),
        }],
    });

    let tally = extract_tally(&[message]);

    assert_eq!(tally.get("alice"), Some(1));
    assert_eq!(tally.get("mallory"), None);
}

/// Tests that messages without embeds are skipped.
///
/// Expected: empty tally
#[test]
fn skips_messages_without_embeds() {
    let tally = extract_tally(&hourly_history(5));

    assert!(tally.is_empty());
}

/// Tests that extraction is repeatable and independent of message order.
///
/// Expected: identical tallies for the same set in two orders
#[test]
fn extraction_is_order_independent() {
    let mut messages = vec![
        scoreboard(3, now(), &[("2 missed", "alice\nbob")]),
        scoreboard(2, now(), &[("1 missed", "bob\ncarol")]),
        scoreboard(1, now(), &[("4 missed", "<:x:1> dave")]),
    ];

    let first = extract_tally(&messages);
    let again = extract_tally(&messages);
    messages.reverse();
    let reversed = extract_tally(&messages);

    assert_eq!(first, again);
    assert_eq!(first, reversed);
}

/// Tests parsing the leading count from field names.
///
/// Expected: Some for names starting with digits, None otherwise
#[test]
fn parses_leading_count() {
    assert_eq!(parse_leading_count("3 missed"), Some(3));
    assert_eq!(parse_leading_count("12"), Some(12));
    assert_eq!(parse_leading_count("007 attacks"), Some(7));
    assert_eq!(parse_leading_count("missed 3"), None);
    assert_eq!(parse_leading_count(""), None);
    assert_eq!(parse_leading_count("99999999999999999999999 missed"), None);
}

/// Tests cleaning a single field line down to a username.
///
/// Expected: leading tag removed, backslashes removed, whitespace trimmed
#[test]
fn cleans_username_lines() {
    assert_eq!(clean_username("<:th14:123456> some\\_player"), "some_player");
    assert_eq!(clean_username("<a:spin:42>   bob  "), "bob");
    assert_eq!(clean_username("  plain_name"), "plain_name");
    assert_eq!(clean_username("name <:icon:1>"), "name <:icon:1>");
    assert_eq!(clean_username("<:icon:1>"), "");
}
