use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn score_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn link_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn label_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Red at 0 %, green at 100 %
pub fn progress_color(percentage: f64) -> Color {
    let scaled = percentage.clamp(0.0, 100.0) * 2.55;
    Color::Rgb {
        r: (255.0 - scaled) as u8,
        g: scaled as u8,
        b: 0,
    }
}

/// SGR parameters selecting `color` as the foreground.
/// True colours use `38;2`, everything else the 256-colour palette.
pub fn foreground_sequence(color: Color, fallback: u8) -> String {
    match color {
        Color::Rgb { r, g, b } => format!("38;2;{r};{g};{b}"),
        other => format!("38;5;{}", get_ansi_code(other, fallback)),
    }
}

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
