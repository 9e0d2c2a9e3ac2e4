//! Helpers for logging model output

/// Single-line excerpt of raw model text for log messages.
///
/// Runs of whitespace (newlines included) collapse to one space. Text longer
/// than `max_chars` characters is cut and marked with `...`.
pub fn log_preview(raw: &str, max_chars: usize) -> String {
    let mut preview = String::new();
    let mut taken = 0;

    for word in raw.split_whitespace() {
        if taken > 0 {
            if taken == max_chars {
                preview.push_str("...");
                return preview;
            }
            preview.push(' ');
            taken += 1;
        }
        for c in word.chars() {
            if taken == max_chars {
                preview.push_str("...");
                return preview;
            }
            preview.push(c);
            taken += 1;
        }
    }
    preview
}
