use super::palette::Palette;
use crate::consts;
use crate::game::EndCause;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::fmt;

/// A pop-up shown over the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PausedPopup {
    pub(super) palette: Palette,
}

impl PausedPopup {
    pub(super) const SIZE: Size = Size {
        width: 24,
        height: 5,
    };
}

impl Widget for PausedPopup {
    /*
     * ┌─────── PAUSED ───────┐
     * │ Resume (p)           │
     * │ Toggle theme (t)     │
     * │ Quit (q)             │
     * └──────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = popup_block(" PAUSED ", self.palette);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            key_line("Resume (", "p", ")"),
            key_line("Toggle theme (", "t", ")"),
            key_line("Quit (", "q", ")"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

/// A pop-up shown over the board once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverPopup {
    pub(super) score: u32,
    pub(super) cause: Option<EndCause>,
    pub(super) palette: Palette,
}

impl GameOverPopup {
    pub(super) const SIZE: Size = Size {
        width: 32,
        height: 8,
    };
}

impl Widget for GameOverPopup {
    /*
     * ┌────────── GAME OVER ─────────┐
     * │ FINAL SCORE: 12              │
     * │ RANK: SKILLED                │
     * │ snake ran into a wall        │
     * │                              │
     * │ Play again (Enter)           │
     * │ Toggle theme (t) / Quit (q)  │
     * └──────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = popup_block(" GAME OVER ", self.palette);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let cause = self.cause.map(|c| c.to_string()).unwrap_or_default();
        let lines = [
            Line::styled(format!("FINAL SCORE: {}", self.score), self.palette.highlight),
            Line::styled(
                format!("RANK: {}", Rank::for_score(self.score)),
                self.palette.score_bar,
            ),
            Line::raw(cause),
            Line::default(),
            key_line("Play again (", "Enter", ")"),
            Line::from_iter([
                Span::raw("Toggle theme ("),
                Span::styled("t", consts::KEY_STYLE),
                Span::raw(") / Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

fn popup_block(title: &'static str, palette: Palette) -> Block<'static> {
    Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1))
        .border_style(palette.frame)
        .style(Style::reset())
}

fn key_line(before: &'static str, key: &'static str, after: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(before),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(after),
    ])
}

/// A label for how well the player did
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum Rank {
    Novice,
    Skilled,
    Expert,
    Master,
}

impl Rank {
    pub(crate) fn for_score(score: u32) -> Rank {
        match score {
            0..5 => Rank::Novice,
            5..15 => Rank::Skilled,
            15..25 => Rank::Expert,
            _ => Rank::Master,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Novice => "NOVICE",
            Rank::Skilled => "SKILLED",
            Rank::Expert => "EXPERT",
            Rank::Master => "MASTER",
        };
        f.pad(name)
    }
}
