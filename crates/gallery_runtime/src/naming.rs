//! Display-name and size-label helpers.

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const MAX_SUFFIX_COUNTER_DIGITS: usize = 2;

/// Derives a display title from a raw filename.
///
/// Removes the extension, a trailing copy counter (`Plan-2`, `Plan_2`, `Plan (2)`), turns runs of
/// `_`/`-` into single spaces, and trims.
pub fn normalize_name(name: &str) -> String {
    let stem = strip_extension(name);
    let stem = strip_paren_counter(stem);
    let stem = strip_suffix_counter(stem);
    collapse_separators(stem).trim().to_string()
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}

fn strip_paren_counter(stem: &str) -> &str {
    let trimmed = stem.trim_end();
    let Some(body) = trimmed.strip_suffix(')') else {
        return stem;
    };
    let Some(open) = body.rfind('(') else {
        return stem;
    };
    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return stem;
    }
    body[..open].trim_end()
}

// `-N`/`_N` with at most two digits, only when preceded by a non-digit (`Survey_2024-05` stays).
fn strip_suffix_counter(stem: &str) -> &str {
    let without_digits = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let digit_count = stem.len() - without_digits.len();
    if digit_count == 0 || digit_count > MAX_SUFFIX_COUNTER_DIGITS {
        return stem;
    }
    let Some(prefix) = without_digits
        .strip_suffix('-')
        .or_else(|| without_digits.strip_suffix('_'))
    else {
        return stem;
    };
    match prefix.chars().last() {
        Some(c) if !c.is_ascii_digit() && c != '-' && c != '_' => prefix,
        _ => stem,
    }
}

fn collapse_separators(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;
    for c in stem.chars() {
        if c == '_' || c == '-' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Formats a byte count as `B`/`KB`/`MB`/`GB`.
///
/// Missing or zero sizes produce an empty string. Values below 10 in a scaled unit keep one
/// decimal unless it is `.0`.
pub fn format_bytes(size: Option<u64>) -> String {
    let Some(bytes) = size.filter(|bytes| *bytes > 0) else {
        return String::new();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Halves round away from zero before formatting; `{:.1}` alone rounds ties to even.
    let number = if value >= 10.0 || unit == 0 {
        format!("{:.0}", value.round())
    } else {
        let fixed = format!("{:.1}", (value * 10.0).round() / 10.0);
        match fixed.strip_suffix(".0") {
            Some(whole) => whole.to_string(),
            None => fixed,
        }
    };
    format!("{number} {}", SIZE_UNITS[unit])
}

/// Returns `"1 item"` or `"{n} items"`.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
