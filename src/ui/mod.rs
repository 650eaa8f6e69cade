//! Drawing a game snapshot on the terminal
mod palette;
mod popup;
pub(crate) use self::palette::Palette;
use self::popup::{GameOverPopup, PausedPopup};
use crate::consts;
use crate::game::{Direction, EndCause, Grid, Point, SessionState, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Minimum width of the drawing area, enough for the score bar & key hints
const MIN_DISPLAY_WIDTH: u16 = 44;

/// Return the size of the area needed to draw a game on `grid`: a score bar,
/// the bordered board, and a line of key hints
pub(crate) fn display_size(grid: Grid) -> Size {
    Size {
        width: grid.columns().saturating_add(2).max(MIN_DISPLAY_WIDTH),
        height: grid.rows().saturating_add(4),
    }
}

/// Test whether a game on `grid` can be drawn in full within `area`
pub(crate) fn fits(area: Rect, grid: Grid) -> bool {
    let size = display_size(grid);
    area.width >= size.width && area.height >= size.height
}

/// A widget that draws a [`Snapshot`] of a game, centered in the area it's
/// given
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameView<'a> {
    snapshot: Snapshot<'a>,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(snapshot: Snapshot<'a>) -> GameView<'a> {
        GameView { snapshot }
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        if !fits(area, snap.grid) {
            too_small(area, display_size(snap.grid), buf);
            return;
        }
        let palette = Palette::new(snap.theme);
        let display = center_rect(area, display_size(snap.grid));
        let [score_area, board_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::from(Span::styled(
            format!(" Score: {}", snap.score),
            palette.score_bar,
        ))
        .render(score_area, buf);
        Line::from_iter([Span::styled(consts::TITLE, palette.highlight), Span::raw(" ")])
            .right_aligned()
            .render(score_area, buf);

        let block_size = Size {
            width: snap.grid.columns().saturating_add(2),
            height: snap.grid.rows().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered()
            .border_style(palette.frame)
            .render(block_area, buf);
        let level_area = block_area.inner(Margin::new(1, 1));
        buf.set_style(level_area, palette.board);

        let mut canvas = Canvas {
            origin: level_area.as_position(),
            clip: block_area,
            cell_size: i32::from(snap.grid.cell_size()),
            buf,
        };
        for &pos in snap.obstacles {
            canvas.draw_cell(pos, consts::OBSTACLE_SYMBOL, palette.obstacle);
        }
        if let Some(food) = snap.food {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, palette.food);
        }
        for &pos in snap.snake.body() {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, palette.snake_body);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with.  A head that has gone through a wall
        // lands on the border.
        let head = snap.snake.head();
        match snap.end_cause {
            Some(EndCause::SelfCollision | EndCause::Obstacle | EndCause::Wall) => {
                canvas.draw_cell(head, consts::COLLISION_SYMBOL, palette.collision);
            }
            Some(EndCause::OutOfSpace) | None => {
                canvas.draw_cell(
                    head,
                    head_symbol(snap.snake.heading()),
                    palette.snake_head,
                );
            }
        }

        hints().render(hints_area, buf);

        match snap.state {
            SessionState::Running => (),
            SessionState::Paused => {
                PausedPopup { palette }.render(center_rect(display, PausedPopup::SIZE), buf);
            }
            SessionState::Ended => {
                GameOverPopup {
                    score: snap.score,
                    cause: snap.end_cause,
                    palette,
                }
                .render(center_rect(display, GameOverPopup::SIZE), buf);
            }
        }
    }
}

/// Draw a notice in place of a board that would not fit
fn too_small(area: Rect, needed: Size, buf: &mut Buffer) {
    let lines = [
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {}×{}, have {}×{}",
            needed.width, needed.height, area.width, area.height
        )),
    ];
    let notice = center_rect(
        area,
        Size {
            width: area.width,
            height: 2,
        },
    );
    for (line, row) in lines.into_iter().zip(notice.rows()) {
        line.centered().render(row, buf);
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

fn hints() -> Line<'static> {
    Line::from_iter([
        Span::raw(" Move ("),
        Span::styled("←↓↑→", consts::KEY_STYLE),
        Span::raw(") Pause ("),
        Span::styled("p", consts::KEY_STYLE),
        Span::raw(") Theme ("),
        Span::styled("t", consts::KEY_STYLE),
        Span::raw(") Quit ("),
        Span::styled("q", consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

/// Maps grid positions to terminal cells, one cell per grid square
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    /// Terminal position of the grid's top-left cell
    origin: Position,
    /// Nothing is drawn outside this area
    clip: Rect,
    cell_size: i32,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Point, symbol: char, style: Style) {
        let Some(x) = offset(self.origin.x, pos.x.div_euclid(self.cell_size)) else {
            return;
        };
        let Some(y) = offset(self.origin.y, pos.y.div_euclid(self.cell_size)) else {
            return;
        };
        if !self.clip.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}

fn offset(base: u16, delta: i32) -> Option<u16> {
    u16::try_from(i32::from(base).checked_add(delta)?).ok()
}
