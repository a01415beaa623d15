/// Canonicalizes a user-supplied MAC string into the prefix form the
/// API expects: separators stripped, uppercased, truncated to the
/// longest of 9, 7 or 6 characters the input reaches. Shorter input
/// is returned as-is so the server can produce its own diagnostics.
pub(crate) fn clean_mac(mac: &str) -> String {
    let cleaned: String = mac
        .trim()
        .chars()
        .filter(|c| !matches!(*c, ':' | '.' | '-' | ' '))
        .flat_map(char::to_uppercase)
        .collect();

    let len = cleaned.chars().count();
    let keep = if len >= 9 {
        9
    } else if len >= 7 {
        7
    } else if len >= 6 {
        6
    } else {
        len
    };

    cleaned.chars().take(keep).collect()
}
