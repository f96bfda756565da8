//! Expected-status specification matching.
//!
//! A specification is a comma-separated list of tokens. Each token is either
//! an exact status code (`"204"`) or a two-sided inclusive range
//! (`"200-399"`). Tokens that do not parse are skipped so one typo in a
//! monitor's configuration degrades matching instead of failing the probe.

/// Returns true when `observed` satisfies at least one token of `spec`.
///
/// An empty spec, or a spec whose tokens are all malformed, matches nothing.
/// A reversed range (`"399-200"`) is valid syntax that never matches.
pub fn status_matches(observed: u16, spec: &str) -> bool {
    let observed = u64::from(observed);
    spec.split(',').map(str::trim).any(|token| {
        if let Some((low, high)) = token.split_once('-') {
            match (parse_code(low), parse_code(high)) {
                (Some(low), Some(high)) => low <= observed && observed <= high,
                _ => false,
            }
        } else {
            parse_code(token) == Some(observed)
        }
    })
}

/// Parse a token bound. Only unsigned decimal digits are accepted; anything
/// else (including signs and embedded whitespace) disqualifies the token.
fn parse_code(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
