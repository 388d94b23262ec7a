/// Derive the URL slug for an article title.
///
/// Lowercases the trimmed title, drops everything except `[a-z0-9]`, CJK
/// ideographs (U+4E00..=U+9FA5), whitespace and `-`, then turns whitespace
/// runs into a single `-` and collapses repeated hyphens. The output is a
/// fixed point: `slugify(&slugify(t)) == slugify(t)`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.trim().to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
            continue;
        }
        if !is_slug_char(ch) {
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        slug.push(ch);
    }

    if pending_hyphen {
        slug.push('-');
    }

    slug
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ('\u{4E00}'..='\u{9FA5}').contains(&ch)
}
