use crate::clock::Clock;
use crate::command::Command;
use crate::config::Config;
use crate::game::{Direction, Session, SessionState, Tick};
use crate::ui::{self, GameView};
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The running program: one game session plus the clock that drives it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::StdRng> {
    session: Session<R>,
    clock: Clock,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: Config, rng: R) -> App<R> {
        App {
            session: Session::new(config.settings, config.theme, rng),
            clock: Clock::new(config.tick_period),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        info!("Quitting with score {}", self.session.score());
        Ok(())
    }

    /// Draw the game.  If the terminal is too small to show the whole board,
    /// the game is paused so that the snake never moves out of sight.
    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut fits = true;
        terminal.draw(|frame| {
            let snapshot = self.session.snapshot();
            fits = ui::fits(frame.area(), snapshot.grid);
            frame.render_widget(GameView::new(snapshot), frame.area());
        })?;
        if !fits && self.session.state() == SessionState::Running {
            info!("Terminal too small for the board; pausing");
            self.session.pause();
        }
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it.  While the game isn't running, the clock is
    /// stopped and this just blocks on input.
    fn process_input(&mut self) -> io::Result<()> {
        self.sync_clock();
        if let Some(wait) = self.clock.remaining(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                if self.clock.fire(Instant::now()) {
                    self.tick();
                }
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn tick(&mut self) {
        if let Tick::Ended(_) = self.session.tick() {
            self.clock.disarm();
        }
    }

    /// Arm the clock while the game is running and stop it otherwise
    fn sync_clock(&mut self) {
        if self.session.state() == SessionState::Running {
            self.clock.arm(Instant::now());
        } else if self.clock.armed() {
            debug!("Stopping tick clock");
            self.clock.disarm();
        }
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            self.session.pause();
            return;
        }
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        if let Some(cmd) = Command::from_key_event(ev, self.session.state()) {
            self.apply(cmd);
        }
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::MoveUp => self.session.set_direction(Direction::Up),
            Command::MoveDown => self.session.set_direction(Direction::Down),
            Command::MoveLeft => self.session.set_direction(Direction::Left),
            Command::MoveRight => self.session.set_direction(Direction::Right),
            Command::Pause => self.session.pause(),
            Command::Resume => self.session.resume(),
            Command::Restart => self.session.restart(),
            Command::ToggleTheme => self.session.toggle_theme(),
            Command::Quit => self.quitting = true,
        }
        self.sync_clock();
    }
}
