//! Lexical intake: free text to raw `(kind, quantity)` pairs.
//!
//! Tokens are separated by commas and/or whitespace. A token is a kind symbol
//! followed by an integer (`A1`, `c10`). Tokens shorter than two characters or
//! whose remainder is not an integer are dropped. Quantities are not checked
//! for sign here; the depot drops non-positive ones.

/// Split `line` into `(kind, quantity)` pairs, kind upper-cased.
pub fn parse_pairs(line: &str) -> Vec<(char, i64)> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Option<(char, i64)> {
    let mut chars = token.chars();
    let kind = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        tracing::debug!(token, "dropping token: too short");
        return None;
    }
    match rest.parse::<i64>() {
        Ok(quantity) => Some((kind.to_ascii_uppercase(), quantity)),
        Err(_) => {
            tracing::debug!(token, "dropping token: quantity is not an integer");
            None
        }
    }
}
