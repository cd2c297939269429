//! Test factory for creating Serenity Embed objects.

use serenity::all::Embed;

/// Creates a rich Serenity Embed with the given fields.
///
/// # Arguments
/// - `fields` - (name, value) pairs, added in order as non-inline fields
///
/// # Returns
/// - `Embed` - A valid Serenity Embed struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an Embed (indicates invalid test data)
pub fn create_test_embed<N, V>(fields: &[(N, V)]) -> Embed
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, value)| {
            serde_json::json!({
                "name": name.as_ref(),
                "value": value.as_ref(),
                "inline": false,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "rich",
        "title": "Missed Attacks",
        "fields": fields,
    }))
    .expect("Failed to create test embed - invalid JSON structure")
}
