//! Styled terminal text: colors and SGR modifiers for plain-text output
//! printed around or next to a frame.

use crate::buffer::Rgb;
use crate::error::{Error, Result};
use bitflags::bitflags;
use std::convert::Infallible;
use std::io::Write;
use std::str::FromStr;

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use halfblock::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert_eq!("italic bold".parse::<Modifiers>().unwrap(), style);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

/// SGR parameter of each modifier, in emission order.
const SGR_CODES: [(Modifiers, u8); 8] = [
    (Modifiers::BOLD, 1),
    (Modifiers::DIM, 2),
    (Modifiers::ITALIC, 3),
    (Modifiers::UNDERLINE, 4),
    (Modifiers::BLINK, 5),
    (Modifiers::REVERSED, 7),
    (Modifiers::HIDDEN, 8),
    (Modifiers::STRIKETHROUGH, 9),
];

/// Words that cancel all styling.
const RESET_WORDS: [&str; 4] = ["reset", "regular", "none", "default"];

impl Modifiers {
    /// Modifier named by a single style word, case-insensitive.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "bold" => Some(Self::BOLD),
            "dim" => Some(Self::DIM),
            "italic" => Some(Self::ITALIC),
            "underline" => Some(Self::UNDERLINE),
            "blink" => Some(Self::BLINK),
            "reversed" | "reverse" => Some(Self::REVERSED),
            "hidden" => Some(Self::HIDDEN),
            "strikethrough" => Some(Self::STRIKETHROUGH),
            _ => None,
        }
    }

    /// Emit one SGR sequence per set modifier.
    pub fn write_sgr(self, output: &mut Vec<u8>) {
        for (flag, code) in SGR_CODES {
            if self.contains(flag) {
                let _ = write!(output, "\x1b[{code}m");
            }
        }
    }
}

impl FromStr for Modifiers {
    type Err = Infallible;

    /// Space-separated style words; unknown words are ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(s
            .split_whitespace()
            .filter_map(Self::from_word)
            .fold(Self::empty(), |acc, m| acc | m))
    }
}

/// Style portion of [`text_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Drop all colors and modifiers.
    Reset,
    /// Apply these modifiers.
    Apply(Modifiers),
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::Apply(Modifiers::empty())
    }
}

impl From<Modifiers> for TextStyle {
    fn from(modifiers: Modifiers) -> Self {
        Self::Apply(modifiers)
    }
}

impl FromStr for TextStyle {
    type Err = Infallible;

    /// Any of `reset`, `regular`, `none` or `default` anywhere in `s` wins
    /// over every other word.
    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        let reset = s
            .split_whitespace()
            .any(|w| RESET_WORDS.iter().any(|r| r.eq_ignore_ascii_case(w)));
        if reset {
            return Ok(Self::Reset);
        }
        s.parse().map(Self::Apply)
    }
}

/// A color for styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// A concrete color.
    Color(Rgb),
    /// Leave the terminal's current color alone.
    Transparent,
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        Self::Color(color)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Self::Color(rgb.into())
    }
}

impl FromStr for ColorSpec {
    type Err = Error;

    /// `transparent`, a predefined name, or a hex color.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("transparent") {
            Ok(Self::Transparent)
        } else {
            s.parse().map(Self::Color)
        }
    }
}

/// Escape string that styles the text printed after it.
///
/// Colors that are `None` or [`ColorSpec::Transparent`] emit nothing. A
/// [`TextStyle::Reset`] overrides everything and yields just `ESC[0m`.
///
/// ```
/// use halfblock::{text_style, ColorSpec, TextStyle};
///
/// let fg: ColorSpec = "ff00ff".parse()?;
/// let style: TextStyle = "bold".parse().unwrap();
/// assert_eq!(text_style(Some(fg), None, style), "\x1b[38;2;255;0;255m\x1b[1m");
/// # Ok::<(), halfblock::Error>(())
/// ```
pub fn text_style(fg: Option<ColorSpec>, bg: Option<ColorSpec>, style: TextStyle) -> String {
    let modifiers = match style {
        TextStyle::Reset => return "\x1b[0m".to_string(),
        TextStyle::Apply(modifiers) => modifiers,
    };

    let mut out = Vec::with_capacity(48);
    if let Some(ColorSpec::Color(c)) = fg {
        let _ = write!(out, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b);
    }
    if let Some(ColorSpec::Color(c)) = bg {
        let _ = write!(out, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b);
    }
    modifiers.write_sgr(&mut out);

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_from_words() {
        let m: Modifiers = "Bold underline sparkly".parse().unwrap();
        assert_eq!(m, Modifiers::BOLD | Modifiers::UNDERLINE);
        assert_eq!("".parse::<Modifiers>().unwrap(), Modifiers::empty());
    }

    #[test]
    fn test_modifiers_sgr() {
        let mut out = Vec::new();
        (Modifiers::ITALIC | Modifiers::BOLD | Modifiers::BLINK).write_sgr(&mut out);
        assert_eq!(out, b"\x1b[1m\x1b[3m\x1b[5m");
    }

    #[test]
    fn test_reset_overrides_everything() {
        let style: TextStyle = "bold none italic".parse().unwrap();
        assert_eq!(style, TextStyle::Reset);
        let out = text_style(Some(Rgb::WHITE.into()), Some(Rgb::BLACK.into()), style);
        assert_eq!(out, "\x1b[0m");
    }

    #[test]
    fn test_text_style_colors() {
        let fg: ColorSpec = "#cd3".parse().unwrap();
        let bg: ColorSpec = "navy".parse().unwrap();
        assert_eq!(
            text_style(Some(fg), Some(bg), TextStyle::default()),
            "\x1b[38;2;204;221;51m\x1b[48;2;0;0;128m"
        );
    }

    #[test]
    fn test_transparent_background_emits_nothing() {
        let bg: ColorSpec = "Transparent".parse().unwrap();
        assert_eq!(bg, ColorSpec::Transparent);
        let out = text_style(Some((255, 255, 0).into()), Some(bg), Modifiers::DIM.into());
        assert_eq!(out, "\x1b[38;2;255;255;0m\x1b[2m");
    }

    #[test]
    fn test_invalid_color() {
        assert!(matches!("#12345".parse::<ColorSpec>(), Err(Error::InvalidColor(_))));
    }
}
