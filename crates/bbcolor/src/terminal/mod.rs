use std::io::IsTerminal;

use once_cell::sync::Lazy;

static IS_STDOUT_TTY: Lazy<bool> = Lazy::new(|| std::io::stdout().is_terminal());

/// Whether the process's standard output is an interactive terminal.
///
/// Probed on first call and cached for the rest of the process.
pub fn is_stdout_tty() -> bool {
    *IS_STDOUT_TTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_tty_is_stable() {
        assert_eq!(is_stdout_tty(), is_stdout_tty());
    }
}
