mod direction;
mod grid;
mod placement;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, Point};
use self::placement::{place_food, place_obstacles, OutOfSpaceError};
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::theme::Theme;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Parameters that stay fixed for the lifetime of a [`Session`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid: Grid,
    pub(crate) initial_length: usize,
    pub(crate) obstacles: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid: Grid::default(),
            initial_length: consts::DEFAULT_INITIAL_LENGTH,
            obstacles: consts::DEFAULT_OBSTACLES,
        }
    }
}

/// A game of Snake: the snake, the food, the obstacles, the score, and
/// whether the game is running, paused, or over.
///
/// Every operation is infallible.  Commands that make no sense in the
/// current state (resuming a running game, restarting one that hasn't ended,
/// reversing direction) are silently ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::StdRng> {
    rng: R,
    settings: Settings,
    state: SessionState,
    score: u32,
    snake: Snake,
    /// Direction the snake will move in on the next tick
    pending: Direction,
    /// `None` only when no free cell was left to put it in
    food: Option<Point>,
    obstacles: HashSet<Point>,
    theme: Theme,
    end_cause: Option<EndCause>,
}

impl<R: Rng> Session<R> {
    pub(crate) fn new(settings: Settings, theme: Theme, rng: R) -> Session<R> {
        let snake = Snake::new(settings.grid, settings.initial_length);
        let mut session = Session {
            rng,
            settings,
            state: SessionState::Running,
            score: 0,
            pending: snake.heading(),
            snake,
            food: None,
            obstacles: HashSet::new(),
            theme,
            end_cause: None,
        };
        session.populate();
        session
    }

    /// Advance the game by one tick.  Does nothing unless the game is
    /// running.
    pub(crate) fn tick(&mut self) -> Tick {
        if self.state != SessionState::Running {
            return Tick::Idle;
        }
        let grid = self.settings.grid;
        let head = self.snake.advance(self.pending, grid.cell_size());
        let ate = self.food == Some(head);
        let vacated = if ate { None } else { self.snake.drop_tail() };
        if ate {
            self.score = self.score.saturating_add(1);
            debug!(
                "Ate food at {head}; score is now {}, length {}",
                self.score,
                self.snake.len()
            );
            let occupied = self.occupied();
            match place_food(&mut self.rng, grid, &occupied) {
                Ok(food) => self.food = Some(food),
                Err(e) => {
                    self.food = None;
                    warn!("Could not place new food: {e}");
                    return self.end(EndCause::OutOfSpace);
                }
            }
        }
        if let Some(cause) = self.collision(head, vacated) {
            return self.end(cause);
        }
        if ate {
            Tick::Ate
        } else {
            Tick::Moved
        }
    }

    /// Start a new game after the previous one has ended
    pub(crate) fn restart(&mut self) {
        if self.state != SessionState::Ended {
            return;
        }
        debug!("Restarting game");
        self.snake = Snake::new(self.settings.grid, self.settings.initial_length);
        self.pending = self.snake.heading();
        self.score = 0;
        self.food = None;
        self.obstacles.clear();
        self.end_cause = None;
        self.state = SessionState::Running;
        self.populate();
    }

    /// Place the food and then the obstacles for a fresh game, ending the game
    /// at once if the grid is too crowded for them.
    fn populate(&mut self) {
        if let Err(e) = self.try_populate() {
            warn!("Could not set up level: {e}");
            let _ = self.end(EndCause::OutOfSpace);
        }
    }

    fn try_populate(&mut self) -> Result<(), OutOfSpaceError> {
        let grid = self.settings.grid;
        let clearance = self.clearance();
        let mut occupied = self.occupied();
        let food = place_food(&mut self.rng, grid, &occupied)?;
        self.food = Some(food);
        occupied.insert(food);
        occupied.extend(clearance);
        self.obstacles = place_obstacles(&mut self.rng, grid, self.settings.obstacles, &occupied)?;
        Ok(())
    }
}

impl<R> Session<R> {
    /// Change the direction the snake will move in on the next tick.  Turning
    /// back the way the snake just came is ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction != self.snake.heading().reverse() {
            self.pending = direction;
        }
    }

    pub(crate) fn pause(&mut self) {
        if self.state == SessionState::Running {
            debug!("Pausing game");
            self.state = SessionState::Paused;
        }
    }

    pub(crate) fn resume(&mut self) {
        if self.state == SessionState::Paused {
            debug!("Resuming game");
            self.state = SessionState::Running;
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Switched to {} theme", self.theme);
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.settings.grid,
            state: self.state,
            snake: &self.snake,
            food: self.food,
            obstacles: &self.obstacles,
            score: self.score,
            theme: self.theme,
            end_cause: self.end_cause,
        }
    }

    /// Check the snake's freshly-moved head against everything it can run
    /// into.  Self-collision is checked first, then obstacles, then walls.
    fn collision(&self, head: Point, vacated: Option<Point>) -> Option<EndCause> {
        if self.snake.bites_itself(vacated) {
            Some(EndCause::SelfCollision)
        } else if self.obstacles.contains(&head) {
            Some(EndCause::Obstacle)
        } else if !self.settings.grid.contains(head) {
            Some(EndCause::Wall)
        } else {
            None
        }
    }

    fn end(&mut self, cause: EndCause) -> Tick {
        info!("Game over: {cause}; final score {}", self.score);
        self.state = SessionState::Ended;
        self.end_cause = Some(cause);
        Tick::Ended(cause)
    }

    /// Cells that food may not be placed on
    fn occupied(&self) -> HashSet<Point> {
        self.snake
            .segments()
            .iter()
            .chain(&self.obstacles)
            .copied()
            .collect()
    }

    /// Cells directly in front of the snake's head that are kept free of
    /// obstacles when a game starts
    fn clearance(&self) -> Vec<Point> {
        let heading = self.snake.heading();
        let step = self.settings.grid.cell_size();
        std::iter::successors(Some(self.snake.head()), |&p| Some(heading.advance(p, step)))
            .skip(1)
            .take(consts::FORWARD_CLEARANCE)
            .filter(|&p| self.settings.grid.contains(p))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionState {
    Running,
    Paused,
    Ended,
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndCause {
    SelfCollision,
    Obstacle,
    Wall,
    /// There was no free cell left for the food (or, at the start of a game,
    /// for the obstacles)
    OutOfSpace,
}

impl fmt::Display for EndCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndCause::SelfCollision => "snake ran into itself",
            EndCause::Obstacle => "snake ran into an obstacle",
            EndCause::Wall => "snake ran into a wall",
            EndCause::OutOfSpace => "no room left on the grid",
        };
        f.write_str(s)
    }
}

/// What happened during a call to [`Session::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game wasn't running
    Idle,
    Moved,
    Ate,
    Ended(EndCause),
}

/// Read-only view of a [`Session`] for drawing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,
    pub(crate) state: SessionState,
    pub(crate) snake: &'a Snake,
    pub(crate) food: Option<Point>,
    pub(crate) obstacles: &'a HashSet<Point>,
    pub(crate) score: u32,
    pub(crate) theme: Theme,
    pub(crate) end_cause: Option<EndCause>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_session() -> Session<ChaCha12Rng> {
        Session::new(
            Settings::default(),
            Theme::Night,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    /// A session with the snake, food, and obstacles replaced by the given
    /// values
    fn staged<I: IntoIterator<Item = Point>>(
        segments: I,
        heading: Direction,
        food: Point,
        obstacles: &[Point],
    ) -> Session<ChaCha12Rng> {
        let mut session = new_session();
        session.snake = Snake::from_segments(segments, heading);
        session.pending = heading;
        session.food = Some(food);
        session.obstacles = obstacles.iter().copied().collect();
        session
    }

    fn assert_food_is_free(session: &Session<ChaCha12Rng>) {
        let food = session.food.expect("food should be placed");
        assert!(session.settings.grid.contains(food), "{food} is off the grid");
        assert!(
            !session.snake.segments().contains(&food),
            "{food} is on the snake"
        );
        assert!(
            !session.obstacles.contains(&food),
            "{food} is on an obstacle"
        );
    }

    #[test]
    fn new_game() {
        let session = new_session();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake.len(), 6);
        assert_eq!(session.snake.heading(), Direction::Right);
        assert_eq!(session.snake.head(), Point::new(150, 300));
        assert_eq!(session.obstacles.len(), 12);
        assert_eq!(session.end_cause, None);
        assert_food_is_free(&session);
        for p in session.snake.segments() {
            assert!(!session.obstacles.contains(p), "obstacle on snake at {p}");
        }
        for p in [
            Point::new(180, 300),
            Point::new(210, 300),
            Point::new(240, 300),
        ] {
            assert!(!session.obstacles.contains(&p), "obstacle in front of snake at {p}");
        }
    }

    #[test]
    fn eat_food() {
        let mut session = staged(
            [
                Point::new(60, 60),
                Point::new(30, 60),
                Point::new(0, 60),
                Point::new(0, 90),
                Point::new(0, 120),
                Point::new(0, 150),
            ],
            Direction::Right,
            Point::new(90, 60),
            &[Point::new(300, 300)],
        );
        assert_eq!(session.tick(), Tick::Ate);
        assert_eq!(session.snake.head(), Point::new(90, 60));
        assert_eq!(session.snake.len(), 7);
        assert_eq!(session.score(), 1);
        assert_eq!(session.state(), SessionState::Running);
        assert_ne!(session.food, Some(Point::new(90, 60)));
        assert_food_is_free(&session);
    }

    #[test]
    fn move_without_eating() {
        let mut session = staged(
            [Point::new(60, 60), Point::new(30, 60), Point::new(0, 60)],
            Direction::Right,
            Point::new(600, 450),
            &[],
        );
        assert_eq!(session.tick(), Tick::Moved);
        assert_eq!(
            session.snake.segments().iter().copied().collect::<Vec<_>>(),
            vec![Point::new(90, 60), Point::new(60, 60), Point::new(30, 60)]
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.food, Some(Point::new(600, 450)));
    }

    #[test]
    fn head_moves_one_cell_per_tick() {
        let mut session = new_session();
        session.obstacles.clear();
        session.food = None;
        let turns = [
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
        ];
        for d in turns {
            session.set_direction(d);
            let before = session.snake.head();
            let len = session.snake.len();
            assert_eq!(session.tick(), Tick::Moved);
            assert_eq!(session.snake.head(), d.advance(before, 30));
            assert_eq!(session.snake.len(), len);
        }
    }

    #[test]
    fn hit_left_wall() {
        let mut session = staged(
            [
                Point::new(0, 60),
                Point::new(30, 60),
                Point::new(60, 60),
                Point::new(90, 60),
                Point::new(120, 60),
                Point::new(150, 60),
            ],
            Direction::Left,
            Point::new(600, 450),
            &[],
        );
        assert_eq!(session.tick(), Tick::Ended(EndCause::Wall));
        assert_eq!(session.snake.head(), Point::new(-30, 60));
        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.snapshot().end_cause, Some(EndCause::Wall));
    }

    #[test]
    fn hit_bottom_wall() {
        let mut session = staged(
            [Point::new(60, 570), Point::new(60, 540)],
            Direction::Down,
            Point::new(600, 450),
            &[],
        );
        assert_eq!(session.tick(), Tick::Ended(EndCause::Wall));
        assert_eq!(session.snake.head(), Point::new(60, 600));
    }

    #[test]
    fn hit_obstacle() {
        let mut session = staged(
            [Point::new(60, 60), Point::new(30, 60)],
            Direction::Right,
            Point::new(600, 450),
            &[Point::new(90, 60)],
        );
        assert_eq!(session.tick(), Tick::Ended(EndCause::Obstacle));
    }

    #[test]
    fn hit_self() {
        let mut session = staged(
            [
                Point::new(60, 60),
                Point::new(90, 60),
                Point::new(90, 90),
                Point::new(60, 90),
                Point::new(30, 90),
                Point::new(30, 60),
            ],
            Direction::Left,
            Point::new(600, 450),
            &[],
        );
        session.set_direction(Direction::Down);
        assert_eq!(session.tick(), Tick::Ended(EndCause::SelfCollision));
    }

    #[test]
    fn chasing_tail_is_a_collision() {
        let mut session = staged(
            [
                Point::new(0, 30),
                Point::new(30, 30),
                Point::new(30, 0),
                Point::new(0, 0),
            ],
            Direction::Left,
            Point::new(600, 450),
            &[],
        );
        session.set_direction(Direction::Up);
        assert_eq!(session.tick(), Tick::Ended(EndCause::SelfCollision));
    }

    #[test]
    fn reverse_is_ignored() {
        let mut session = new_session();
        session.set_direction(Direction::Left);
        assert_eq!(session.pending, Direction::Right);
        let head = session.snake.head();
        session.tick();
        assert_eq!(session.snake.head(), Direction::Right.advance(head, 30));
    }

    #[test]
    fn double_turn_cannot_reverse() {
        let mut session = new_session();
        session.set_direction(Direction::Up);
        session.set_direction(Direction::Left);
        assert_eq!(session.pending, Direction::Up);
    }

    #[test]
    fn ended_ticks_change_nothing() {
        let mut session = staged(
            [Point::new(0, 60), Point::new(30, 60)],
            Direction::Left,
            Point::new(600, 450),
            &[],
        );
        session.tick();
        assert_eq!(session.state(), SessionState::Ended);
        let before = session.clone();
        for _ in 0..5 {
            assert_eq!(session.tick(), Tick::Idle);
        }
        pretty_assertions::assert_eq!(session, before);
    }

    #[test]
    fn pause_and_resume() {
        let mut session = new_session();
        session.resume();
        assert_eq!(session.state(), SessionState::Running);
        session.pause();
        assert_eq!(session.state(), SessionState::Paused);
        let before = session.clone();
        assert_eq!(session.tick(), Tick::Idle);
        assert_eq!(session, before);
        session.pause();
        assert_eq!(session.state(), SessionState::Paused);
        session.resume();
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn cannot_pause_ended_game() {
        let mut session = new_session();
        let _ = session.end(EndCause::Wall);
        session.pause();
        assert_eq!(session.state(), SessionState::Ended);
        session.resume();
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn restart_only_when_ended() {
        let mut session = new_session();
        session.tick();
        let before = session.clone();
        session.restart();
        assert_eq!(session, before);
        session.pause();
        session.restart();
        assert_eq!(session.state(), SessionState::Paused);
    }

    #[test]
    fn restart_resets_game() {
        let mut session = staged(
            [
                Point::new(60, 60),
                Point::new(30, 60),
                Point::new(0, 60),
                Point::new(0, 90),
                Point::new(0, 120),
                Point::new(0, 150),
            ],
            Direction::Right,
            Point::new(90, 60),
            &[Point::new(120, 60)],
        );
        session.set_direction(Direction::Right);
        assert_eq!(session.tick(), Tick::Ate);
        assert_eq!(session.tick(), Tick::Ended(EndCause::Obstacle));
        assert_eq!(session.score(), 1);
        session.restart();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake.len(), 6);
        assert_eq!(session.snake.heading(), Direction::Right);
        assert_eq!(session.pending, Direction::Right);
        assert_eq!(session.end_cause, None);
        assert_eq!(session.obstacles.len(), 12);
        assert_food_is_free(&session);
    }

    #[test]
    fn filling_the_grid_ends_the_game() {
        let settings = Settings {
            grid: Grid::new(30, 3, 1).unwrap(),
            initial_length: 2,
            obstacles: 0,
        };
        let mut session = Session::new(
            settings,
            Theme::Night,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        assert_eq!(session.food, Some(Point::new(60, 0)));
        assert_eq!(session.tick(), Tick::Ended(EndCause::OutOfSpace));
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.food, None);
    }

    #[test]
    fn no_room_to_start() {
        let settings = Settings {
            grid: Grid::new(30, 3, 1).unwrap(),
            initial_length: 2,
            obstacles: 2,
        };
        let session = Session::new(
            settings,
            Theme::Night,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.end_cause, Some(EndCause::OutOfSpace));
    }

    #[test]
    fn toggle_theme_in_any_state() {
        let mut session = new_session();
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Day);
        let _ = session.end(EndCause::Wall);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Night);
        assert_eq!(session.snapshot().theme, Theme::Night);
    }
}
