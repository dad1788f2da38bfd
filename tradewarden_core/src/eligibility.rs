/// Allocation-light text heuristics over titles and bodies.
///
/// Kept byte/char based on purpose: the trade-listing rule needs a
/// "does not also mention a price check" exclusion that regex-style
/// scanning cannot express in one pattern, and the inputs are short.

/// True when `title` opens with a platform trade tag such as `[PC]`,
/// `(ps4)` or `{XB1}`. Bracket styles are interchangeable and the token is
/// matched case-insensitively. With `exclude_price_checks`, a title that
/// mentions a price check anywhere is never a listing.
pub fn is_trade_listing(title: &str, exclude_price_checks: bool) -> bool {
    if exclude_price_checks && mentions_price_check(title) {
        return false;
    }

    let b = title.as_bytes();
    if b.len() < 4 || !matches!(b[0], b'[' | b'(' | b'{') {
        return false;
    }

    let rest = &b[1..];
    let token_len = if rest[..2].eq_ignore_ascii_case(b"pc") {
        2
    } else if rest.len() >= 3
        && (rest[..3].eq_ignore_ascii_case(b"ps4") || rest[..3].eq_ignore_ascii_case(b"xb1"))
    {
        3
    } else {
        return false;
    };

    matches!(rest.get(token_len), Some(b']' | b')' | b'}'))
}

/// "price check" with an optional single whitespace, case-insensitive,
/// anywhere in the text.
pub fn mentions_price_check(text: &str) -> bool {
    let lo = text.to_ascii_lowercase();
    let mut start = 0;
    while let Some(off) = lo[start..].find("price") {
        let after = start + off + "price".len();
        let rest = &lo[after..];
        let rest = rest.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(rest);
        if rest.starts_with("check") {
            return true;
        }
        start = after;
    }
    false
}

/// A `!PROFILE` request found in a comment body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileRequest {
    /// Handle named via `u/...`; when absent, the requester is the target.
    pub target: Option<String>,
}

/// Parse a profile request from a comment body: the body must start with
/// `!PROFILE` or `PROFILE!` (case-insensitive), optionally followed by a
/// `u/<handle>` mention anywhere in the text.
pub fn parse_profile_request(body: &str) -> Option<ProfileRequest> {
    let s = body.trim();
    let lead = s.get(..8)?;
    if !(lead.eq_ignore_ascii_case("!profile") || lead.eq_ignore_ascii_case("profile!")) {
        return None;
    }

    let lo = s.to_ascii_lowercase();
    let target = lo.find("u/").and_then(|pos| {
        let rest = &s[pos + 2..];
        let end = rest
            .find(|c: char| c.is_whitespace() || c == ']')
            .unwrap_or(rest.len());
        let t = &rest[..end];
        (!t.is_empty()).then(|| t.to_string())
    });

    Some(ProfileRequest { target })
}
