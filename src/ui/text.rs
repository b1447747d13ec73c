//! Fixed-width text cells.

/// Make user text safe to print: control characters never reach the terminal.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\t' => ' ',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

/// Right-pad `value` with spaces to `width` chars. Longer values are returned as is.
pub fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut padded = value.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Sanitize and split into lines of exactly `width` chars.
///
/// Nothing is dropped: the lines, with trailing padding removed from the
/// last one, concatenate back to the sanitized value.
pub fn wrap(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = sanitize(value).chars().collect();

    if chars.is_empty() {
        return vec![pad("", width)];
    }

    chars
        .chunks(width)
        .map(|chunk| pad(&chunk.iter().collect::<String>(), width))
        .collect()
}
