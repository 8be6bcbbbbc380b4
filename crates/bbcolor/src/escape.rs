//! Escape-sequence assembly.
//!
//! Everything here is pure: resolved colors and a style fragment in, a
//! terminal-ready string out. Deciding *which* values to use is the
//! formatter's job.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Resets every attribute after the painted message.
pub const RESET: &str = "\x1b[0m";

/// The foreground SGR parameter: `39` for the terminal default, otherwise
/// the 256-color form `38;5;N`.
#[inline]
pub fn foreground_param(color: Option<u8>) -> String {
    match color {
        Some(idx) => format!("38;5;{idx}"),
        None => "39".to_string(),
    }
}

/// The background SGR parameter: `49` or `48;5;N`.
#[inline]
pub fn background_param(color: Option<u8>) -> String {
    match color {
        Some(idx) => format!("48;5;{idx}"),
        None => "49".to_string(),
    }
}

/// Wraps `message` as `ESC[<fg>;<bg>;<style>m<message>ESC[0m`.
pub fn paint(message: &str, foreground: Option<u8>, background: Option<u8>, style: &str) -> String {
    format!(
        "{CSI}{};{};{style}m{message}{RESET}",
        foreground_param(foreground),
        background_param(background),
    )
}

/// Wraps `message` with only a foreground color: `ESC[38;5;Nm…ESC[0m`.
pub fn paint_foreground(message: &str, color: u8) -> String {
    format!("{CSI}{}m{message}{RESET}", foreground_param(Some(color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_params() {
        assert_eq!(foreground_param(None), "39");
        assert_eq!(background_param(None), "49");
    }

    #[test]
    fn palette_params() {
        assert_eq!(foreground_param(Some(0)), "38;5;0");
        assert_eq!(foreground_param(Some(255)), "38;5;255");
        assert_eq!(background_param(Some(17)), "48;5;17");
    }

    #[test]
    fn paint_full_sequence() {
        assert_eq!(paint("X", Some(160), None, "1"), "\x1b[38;5;160;49;1mX\x1b[0m");
        assert_eq!(paint("hi", None, Some(4), "22"), "\x1b[39;48;5;4;22mhi\x1b[0m");
    }

    #[test]
    fn paint_keeps_empty_style_slot() {
        assert_eq!(paint("text", None, None, ""), "\x1b[39;49;mtext\x1b[0m");
    }

    #[test]
    fn paint_foreground_only() {
        assert_eq!(paint_foreground("ok", 112), "\x1b[38;5;112mok\x1b[0m");
    }
}
