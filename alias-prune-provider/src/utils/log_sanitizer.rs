//! Log size limits
//!
//! SDK error chains and serialized change batches can run to hundreds of
//! kilobytes. Anything headed for a log line goes through here first.

/// Byte budget for a single logged payload.
const MAX_LOG_BYTES: usize = 4096;

/// Names listed before [`summarize_names`] collapses the rest into a count.
const MAX_LISTED_NAMES: usize = 10;

/// Cut `s` to at most [`MAX_LOG_BYTES`] bytes on a char boundary.
///
/// 如: 超长的 change batch JSON -> 前 4096 字节 + "... [truncated, total N bytes]"
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= MAX_LOG_BYTES {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= MAX_LOG_BYTES)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Comma-separated record names, with a `(+N more)` tail past the first few.
///
/// 如: ["a.", "b."] -> "a., b."
pub fn summarize_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut listed = Vec::with_capacity(MAX_LISTED_NAMES);
    let mut rest = 0usize;
    for name in names {
        if listed.len() < MAX_LISTED_NAMES {
            listed.push(name);
        } else {
            rest += 1;
        }
    }

    let mut out = listed.join(", ");
    if rest > 0 {
        out.push_str(&format!(" (+{rest} more)"));
    }
    out
}
