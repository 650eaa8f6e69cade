use crate::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

/// The styles used to draw a game in a given [`Theme`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    /// Style for empty cells of the board
    pub(crate) board: Style,
    pub(crate) snake_head: Style,
    pub(crate) snake_body: Style,
    pub(crate) food: Style,
    pub(crate) obstacle: Style,
    /// Style for the snake's head after it's run into something
    pub(crate) collision: Style,
    /// Style for the score bar at the top of the screen
    pub(crate) score_bar: Style,
    /// Style for the title and the final score
    pub(crate) highlight: Style,
    /// Style for pop-up borders & the board border
    pub(crate) frame: Style,
}

impl Palette {
    pub(crate) const fn new(theme: Theme) -> Palette {
        match theme {
            Theme::Night => Palette::build(
                Color::Rgb(0x18, 0x39, 0x2B),
                Color::Rgb(50, 205, 50),
                Color::Rgb(46, 125, 50),
                Color::Rgb(220, 53, 69),
                Color::Rgb(63, 81, 181),
                Color::Rgb(0, 255, 127),
            ),
            Theme::Day => Palette::build(
                Color::Rgb(0xB2, 0x86, 0x8E),
                Color::Rgb(218, 112, 214),
                Color::Rgb(0xFB, 0x93, 0xC4),
                Color::Rgb(255, 105, 180),
                Color::Rgb(221, 160, 221),
                Color::Rgb(255, 192, 203),
            ),
        }
    }

    const fn build(
        background: Color,
        head: Color,
        body: Color,
        food: Color,
        obstacle: Color,
        accent: Color,
    ) -> Palette {
        let board = Style::new().bg(background);
        Palette {
            board,
            snake_head: board.fg(head).add_modifier(Modifier::BOLD),
            snake_body: board.fg(body),
            food: board.fg(food),
            obstacle: board.fg(obstacle),
            collision: Style::new()
                .fg(Color::LightRed)
                .add_modifier(Modifier::REVERSED),
            score_bar: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            highlight: Style::new().fg(GOLD).add_modifier(Modifier::BOLD),
            frame: Style::new().fg(accent),
        }
    }
}

const GOLD: Color = Color::Rgb(255, 215, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ() {
        assert_ne!(Palette::new(Theme::Night), Palette::new(Theme::Day));
    }

    #[test]
    fn cell_styles_share_background() {
        for theme in [Theme::Night, Theme::Day] {
            let palette = Palette::new(theme);
            for style in [
                palette.snake_head,
                palette.snake_body,
                palette.food,
                palette.obstacle,
            ] {
                assert_eq!(style.bg, palette.board.bg);
            }
        }
    }
}
