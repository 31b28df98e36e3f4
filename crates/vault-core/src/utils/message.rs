/// Character the host uses to start a colour code
pub const COLOR_CHAR: char = '\u{00A7}';

/// Character operators type instead of [`COLOR_CHAR`]
pub const ALT_COLOR_CHAR: char = '&';

fn is_color_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Replace `&x` with the host colour code for every valid code `x`
pub fn colorize(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == ALT_COLOR_CHAR && is_color_code(next) => {
                out.push(COLOR_CHAR);
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Remove colour codes in either spelling
pub fn strip_colors(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if (c == COLOR_CHAR || c == ALT_COLOR_CHAR) && is_color_code(next) => {
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
