//! Assorted constants & hard-coded configuration
use ratatui::style::{Modifier, Style};

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_MILLIS: u64 = 150;

/// Default size of a grid cell, in game units
pub(crate) const DEFAULT_CELL_SIZE: u16 = 30;

/// Default number of columns in the grid
pub(crate) const DEFAULT_COLUMNS: u16 = 40;

/// Default number of rows in the grid
pub(crate) const DEFAULT_ROWS: u16 = 20;

/// Default snake length at the start of a game
pub(crate) const DEFAULT_INITIAL_LENGTH: usize = 6;

/// Default number of obstacles placed at the start of a game
pub(crate) const DEFAULT_OBSTACLES: usize = 12;

/// When placing obstacles for a new game, keep this many cells in front of
/// the snake's head free.
pub(crate) const FORWARD_CLEARANCE: usize = 3;

/// Title shown in the score bar
pub(crate) const TITLE: &str = "CLASSIC SNAKE GAME";

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with something
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
