//! Simple 256-color terminal formatting.
//!
//! A [`ColorFormatter`] holds one color scheme: default foreground,
//! background and style, plus the sink that [`ColorFormatter::print`]
//! writes to. Every setter resets its field when given `None`.
//!
//! ```no_run
//! use bbcolor::ColorFormatter;
//!
//! let mut bbc = ColorFormatter::default();
//! bbc.set_foreground(Some(160))?;
//! bbc.print("Hello, World!", None, None, None, None)?;
//! # Ok::<(), bbcolor::AnyError>(())
//! ```

use anyhow::Context;

mod config;
mod error;
pub mod escape;
mod sink;
mod style;
pub mod terminal;

pub use config::FormatterConfig;
pub use error::get_error_class;
pub use error::validate_color;
pub use error::AnyError;
pub use error::BadColor;
pub use sink::default_sink;
pub use sink::init_default_sink;
pub use sink::Sink;
pub use style::parse_style;
pub use style::Style;

/// Palette index of the "terminal detected" setup line.
const DETECTED_GREEN: u8 = 112;

#[derive(Debug, Clone)]
pub struct ColorFormatter {
    color_enabled: bool,
    foreground: Option<u8>,
    background: Option<u8>,
    style: Option<String>,
    sink: Sink,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ColorFormatter {
    /// Creates a formatter, enabling color when stdout is a terminal.
    ///
    /// Unless `quiet`, a few setup lines describing the detection result are
    /// written to stdout.
    pub fn new(quiet: bool) -> Self {
        let color_enabled = terminal::is_stdout_tty();
        log::debug!("stdout is a terminal: {color_enabled}");

        if !quiet {
            let stdout = Sink::stdout();
            for line in Self::setup_lines(color_enabled) {
                if let Err(err) = stdout.write_line(&line) {
                    log::warn!("failed to write setup line: {err}");
                }
            }
        }

        let mut formatter = Self {
            color_enabled,
            foreground: None,
            background: None,
            style: None,
            sink: default_sink(),
        };
        formatter.reset_defaults();
        formatter
    }

    /// Creates a formatter and applies every field present in `config`.
    pub fn from_config(config: &FormatterConfig, quiet: bool) -> Result<Self, AnyError> {
        let mut formatter = Self::new(quiet);
        if let Some(color) = config.color {
            formatter.set_color_enabled(color);
        }
        formatter
            .set_foreground(config.foreground)
            .context("Invalid foreground in formatter config")?;
        formatter
            .set_background(config.background)
            .context("Invalid background in formatter config")?;
        formatter.set_style(config.style.as_deref());
        Ok(formatter)
    }

    /// Snapshot of the current defaults.
    pub fn config(&self) -> FormatterConfig {
        FormatterConfig {
            color: Some(self.color_enabled),
            foreground: self.foreground.map(i64::from),
            background: self.background.map(i64::from),
            style: self.style.clone(),
        }
    }

    /// Lines describing the terminal detection result, the "detected" one
    /// painted green.
    fn setup_lines(color_enabled: bool) -> Vec<String> {
        let detection = if color_enabled {
            escape::paint_foreground("+ Detected terminal, using color", DETECTED_GREEN)
        } else {
            "+ No terminal detected, not using color".to_string()
        };
        vec!["+ Initializing bbcolor object".to_string(), detection]
    }

    fn reset_defaults(&mut self) {
        self.foreground = None;
        self.background = None;
        self.set_style(None);
        self.set_sink(None);
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        log::debug!("using color: {enabled}");
        self.color_enabled = enabled;
    }

    pub fn foreground(&self) -> Option<u8> {
        self.foreground
    }

    /// Sets the default foreground palette index, or clears it with `None`.
    ///
    /// Out-of-range values are rejected and the previous default is kept.
    pub fn set_foreground(&mut self, foreground: Option<i64>) -> Result<(), BadColor> {
        self.foreground = foreground.map(validate_color).transpose()?;
        Ok(())
    }

    pub fn background(&self) -> Option<u8> {
        self.background
    }

    /// Sets the default background palette index, or clears it with `None`.
    pub fn set_background(&mut self, background: Option<i64>) -> Result<(), BadColor> {
        self.background = background.map(validate_color).transpose()?;
        Ok(())
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Stores a raw comma-separated style spec. Tokens are only interpreted
    /// when formatting; see [`parse_style`].
    pub fn set_style(&mut self, style: Option<&str>) {
        self.style = style.map(str::to_string);
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Sets the sink used by [`print`](Self::print). `None` goes back to the
    /// process-wide [`default_sink`].
    pub fn set_sink(&mut self, sink: Option<Sink>) {
        self.sink = sink.unwrap_or_else(default_sink);
    }

    /// Renders `message` with the given attributes.
    ///
    /// Each `None` argument falls back to the stored default. With color
    /// disabled the message is returned untouched.
    pub fn format(
        &self,
        message: &str,
        foreground: Option<u8>,
        background: Option<u8>,
        style: Option<&str>,
    ) -> String {
        if !self.color_enabled {
            return message.to_string();
        }

        let style = parse_style(style.or(self.style.as_deref()));
        escape::paint(
            message,
            foreground.or(self.foreground),
            background.or(self.background),
            &style,
        )
    }

    /// Formats `message` and writes it plus a newline to `sink`, or to the
    /// stored sink when `sink` is `None`.
    pub fn print(
        &self,
        message: &str,
        foreground: Option<u8>,
        background: Option<u8>,
        style: Option<&str>,
        sink: Option<&Sink>,
    ) -> Result<(), AnyError> {
        let line = self.format(message, foreground, background, style);
        sink.unwrap_or(&self.sink)
            .write_line(&line)
            .context("Failed to write to output sink")
    }
}
