use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// `m:ss`, seconds rounded to the nearest whole second.
pub fn duration_ms(ms: u64) -> String {
    let total_secs = (ms + 500) / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// `h:mm:ss` for playlist totals.
pub fn long_duration_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Cuts `text` to at most `width` terminal columns, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(duration_ms(0), "0:00");
        assert_eq!(duration_ms(61_000), "1:01");
        assert_eq!(duration_ms(59_600), "1:00");
        assert_eq!(duration_ms(215_300), "3:35");
        assert_eq!(long_duration_ms(3_723_000), "1:02:03");
    }

    #[test]
    fn truncation_respects_columns() {
        assert_eq!(truncate("Chill", 10), "Chill");
        assert_eq!(truncate("Chill vibes", 6), "Chill…");
        assert_eq!(truncate("日本語の歌", 5), "日本…");
        assert_eq!(truncate("abc", 0), "");
    }
}
