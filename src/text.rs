//! Text clamping for fixed-width terminal cells

/// Truncate to at most `max_len` characters, ending with "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Word-wrap `text` to `width` columns and keep at most `max_lines` lines.
///
/// Words longer than `width` are split. When text is dropped, the last kept
/// line ends with "...".
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    let pieces = text.split_whitespace().flat_map(|word| split_long(word, width));
    for piece in pieces {
        let needed = if current.is_empty() {
            piece.chars().count()
        } else {
            current.chars().count() + 1 + piece.chars().count()
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                return with_ellipsis(lines, width);
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&piece);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

fn with_ellipsis(mut lines: Vec<String>, width: usize) -> Vec<String> {
    if let Some(last) = lines.last_mut() {
        let room = width.saturating_sub(3);
        if last.chars().count() > room {
            *last = last.chars().take(room).collect::<String>().trim_end().to_string();
        }
        last.push_str("...");
    }
    lines
}
