// src/core/html.rs
//
// Low-level HTML string scanning, tailored to the booking portal's
// markup. Deliberately naive: no DOM, no nesting support — the listing
// blocks we read are flat. Tag matching is ASCII case-insensitive.

/// Find the next complete tag block from `from` onwards.
///
/// `open_pat` is a prefix of the opening tag (attributes included), e.g.
/// `<div class="item"`; the block runs from that opening tag through the
/// end of the first subsequent `close_pat`. Returns byte offsets into `s`.
pub fn next_tag_block_ci(s: &str, open_pat: &str, close_pat: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_lc = to_lower(open_pat);
    let close_lc = to_lower(close_pat);

    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_pat.len();
    Some((start, end))
}

/// Inner content of a complete block like `<p ...>INNER</p>` (the INNER
/// may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return s!(&block[open_end + 1..close_start]);
            }
        }
    }
    s!()
}

/// Drop every `<...>` tag and collapse the remaining whitespace.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    crate::core::sanitize::normalize_ws(&out)
}

/// ASCII-only lowercasing; multi-byte characters (the Korean text) pass
/// through untouched so byte offsets stay aligned with the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_case_insensitively() {
        let doc = r#"x<DIV Class="item">inner</DIV>y"#;
        let (s, e) = next_tag_block_ci(doc, r#"<div class="item""#, "</div>", 0).unwrap();
        assert_eq!(&doc[s..e], r#"<DIV Class="item">inner</DIV>"#);
    }

    #[test]
    fn inner_and_strip() {
        let block = "<p class=\"txt\"> 이용대상 <b>제한없음</b> </p>";
        assert_eq!(strip_tags(&inner_after_open_tag(block)), "이용대상 제한없음");
    }

    #[test]
    fn missing_close_yields_none() {
        assert!(next_tag_block_ci("<div>open forever", "<div", "</div>", 0).is_none());
    }
}
