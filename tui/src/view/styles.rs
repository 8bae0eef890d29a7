use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

// Freebies palette: pastel on dark, Epic-ish blue for the brand color
pub const BRAND_PRIMARY: Color = Color::Rgb(140, 190, 255); // Pastel sky blue
pub const BRAND_LIGHT: Color = Color::Rgb(190, 220, 255); // Labels and headings
pub const BRAND_ACCENT: Color = Color::Rgb(110, 160, 240); // Borders
pub const SHORTCUT_KEY: Color = Color::Rgb(255, 120, 200); // btop-style key hints
pub const ACCENT_GREEN: Color = Color::Rgb(150, 230, 150); // "Free Now"
pub const ACCENT_YELLOW: Color = Color::Rgb(255, 230, 150); // "Coming Soon"
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_DIMMED: Color = Color::Rgb(90, 90, 90);
pub const BG_DARK: Color = Color::Rgb(15, 18, 30);
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 55, 90);
pub const ERROR_RED: Color = Color::Rgb(255, 120, 120);

/// Build a title with btop-style brackets
pub fn build_title(text: &str, border_color: Color, title_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("┐", Style::default().fg(border_color)),
        Span::styled(text.to_string(), Style::default().fg(title_color)),
        Span::styled("┌", Style::default().fg(border_color)),
    ])
}

/// Calculate vertical padding to center text within an area
pub fn vertical_padding(area_height: u16, text_lines: u16) -> String {
    let inner_height = area_height.saturating_sub(2); // Account for borders
    let padding = inner_height.saturating_sub(text_lines) / 2;
    "\n".repeat(padding as usize)
}

/// Status bar built from `(key, label)` pairs, joined by `└┘` separators
pub fn build_status_line(hints: &[(&str, &str)]) -> Line<'static> {
    let border = Style::default().fg(BRAND_ACCENT);
    let mut spans = vec![Span::styled("┘", border)];

    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("└┘", border));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(SHORTCUT_KEY)));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(TEXT_PRIMARY),
        ));
    }

    spans.push(Span::styled("└", border));
    Line::from(spans)
}

pub fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(BRAND_LIGHT)
            .add_modifier(Modifier::BOLD),
    ))
}
