use std::str::FromStr;

/// SGR parameter used when no style is configured.
pub const NORMAL_CODE: &str = "22";

/// A single token of a comma-separated style spec.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Style {
    Normal,
    Bold,
    Underline,
    Reverse,
    /// Clears every attribute and overrides all other tokens in a spec.
    Reset,
}

impl Style {
    /// The SGR parameter for this style.
    pub fn code(self) -> &'static str {
        match self {
            Style::Normal => NORMAL_CODE,
            Style::Bold => "1",
            Style::Underline => "4",
            Style::Reverse => "7",
            Style::Reset => "0",
        }
    }
}

impl FromStr for Style {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "normal" => Ok(Style::Normal),
            "bold" => Ok(Style::Bold),
            "underline" => Ok(Style::Underline),
            "reverse" => Ok(Style::Reverse),
            "reset" => Ok(Style::Reset),
            _ => Err(()),
        }
    }
}

/// Turns a style spec such as `"bold,underline"` into the SGR parameter
/// fragment `"1;4"`.
///
/// Tokens keep their order. Unknown tokens are dropped, so a spec made only
/// of unknown tokens yields an empty string. A `reset` token anywhere wins
/// and the result is exactly `"0"`.
pub fn parse_style(spec: Option<&str>) -> String {
    let Some(spec) = spec else {
        return NORMAL_CODE.to_string();
    };

    let mut codes = Vec::new();
    for style in spec.split(',').filter_map(|token| token.parse::<Style>().ok()) {
        if style == Style::Reset {
            return Style::Reset.code().to_string();
        }
        codes.push(style.code());
    }
    codes.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_spec_is_normal() {
        assert_eq!(parse_style(None), "22");
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(parse_style(Some("bold,underline")), "1;4");
        assert_eq!(parse_style(Some("underline,bold")), "4;1");
        assert_eq!(parse_style(Some("normal,reverse")), "22;7");
    }

    #[test]
    fn reset_short_circuits() {
        assert_eq!(parse_style(Some("bold,reset,underline")), "0");
        assert_eq!(parse_style(Some("reset")), "0");
        assert_eq!(parse_style(Some("underline,bold,reset")), "0");
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        assert_eq!(parse_style(Some("nonsense")), "");
        assert_eq!(parse_style(Some("")), "");
        assert_eq!(parse_style(Some("bold,italic,reverse")), "1;7");
        // Matching is exact.
        assert_eq!(parse_style(Some("Bold, underline")), "");
    }

    #[test]
    fn tokens_parse_exactly() {
        assert_eq!("normal".parse::<Style>(), Ok(Style::Normal));
        assert_eq!("bold".parse::<Style>(), Ok(Style::Bold));
        assert_eq!("underline".parse::<Style>(), Ok(Style::Underline));
        assert_eq!("reverse".parse::<Style>(), Ok(Style::Reverse));
        assert_eq!("reset".parse::<Style>(), Ok(Style::Reset));
        assert_eq!("BOLD".parse::<Style>(), Err(()));
        assert_eq!(" bold".parse::<Style>(), Err(()));
    }
}
