//! Locate an amplitude list inside free text (notebook output, web pages)
//!
//! A match is `[` + two or more entries separated by commas + `]`, with
//! whitespace allowed around every entry. An entry is a run of `-`, digits and
//! `.`, optionally followed by a signed imaginary part ending in `j`
//! (`0.5`, `-1`, `0.7071+0j`, `0-0.5j`, `1+j`).

/// First amplitude list in `text`, brackets included
pub fn find_state_vector(text: &str) -> Option<&str> {
    text.match_indices('[')
        .find_map(|(start, _)| match_list(text, start).map(|end| &text[start..end]))
}

/// End offset (one past `]`) of a list opening at `start`
fn match_list(text: &str, start: usize) -> Option<usize> {
    let mut pos = skip_whitespace(text, start + 1);
    let mut entries = 0;

    loop {
        pos = skip_whitespace(text, match_entry(text, pos)?);
        entries += 1;

        match text.as_bytes().get(pos) {
            Some(b',') => pos = skip_whitespace(text, pos + 1),
            Some(b']') if entries >= 2 => return Some(pos + 1),
            _ => return None,
        }
    }
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(offset, _)| pos + offset)
}

/// End offset of the entry starting at `pos`, if it is well formed
fn match_entry(text: &str, pos: usize) -> Option<usize> {
    let len = text[pos..].find(|c: char| c.is_whitespace() || c == ',' || c == ']')?;
    is_entry(&text[pos..pos + len]).then_some(pos + len)
}

fn is_entry(entry: &str) -> bool {
    match entry.strip_suffix('j') {
        Some(body) => match body.rfind(|c: char| c == '+' || c == '-') {
            Some(split) if split > 0 => {
                is_real_part(&body[..split])
                    && body[split + 1..].bytes().all(|b| b.is_ascii_digit() || b == b'.')
            }
            _ => false,
        },
        None => is_real_part(entry),
    }
}

fn is_real_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'-' || b == b'.')
}
