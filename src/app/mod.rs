pub mod input;

use std::io::{stdout, Stdout};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::cli::Args;
use crate::ui::{draw_game, LayoutPref, ScreenLayout};
use crate::{Game, POLL_INTERVAL};

use self::input::{map_key, map_mouse, move_cursor, Action};

type Term = Terminal<CrosstermBackend<Stdout>>;

const CENTER: usize = 4;

/// Game plus everything the UI layer keeps between frames.
pub struct App {
    pub game: Game,
    pub cursor: usize,
    pub pref: LayoutPref,
    pub viewport: Rect,
    pub quit: bool,
}

impl App {
    pub fn new(pref: LayoutPref) -> Self {
        Self {
            game: Game::new(),
            cursor: CENTER,
            pref,
            viewport: Rect::default(),
            quit: false,
        }
    }

    pub fn layout(&self) -> Option<ScreenLayout> {
        ScreenLayout::compute(self.viewport, self.pref)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, "input");
        match action {
            Action::Activate(index) => {
                self.cursor = index;
                self.game.apply_move(index)?;
            }
            Action::ActivateCursor => {
                self.game.apply_move(self.cursor)?;
            }
            Action::MoveCursor(dir) => {
                self.cursor = move_cursor(self.cursor, dir);
            }
            Action::Reset => {
                self.game.reset();
                self.cursor = CENTER;
            }
            Action::Quit => self.quit = true,
        }
        Ok(())
    }

    fn handle_event(&mut self, ev: Event) -> Result<()> {
        let action = match ev {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => map_mouse(mouse, self.layout().as_ref()),
            Event::Resize(width, height) => {
                debug!(width, height, "resize");
                None
            }
            _ => None,
        };
        match action {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    info!(layout = ?args.layout, mouse = !args.no_mouse, "starting");
    let mut tui = TuiGuard::new(!args.no_mouse)?;
    let result = run_loop(tui.terminal_mut(), App::new(args.layout));
    info!("exiting");
    result
}

fn run_loop(terminal: &mut Term, mut app: App) -> Result<()> {
    while !app.quit {
        let mut area = app.viewport;
        terminal.draw(|frame| {
            area = frame.size();
            draw_game(frame, &app.game, app.cursor, app.pref);
        })?;
        app.viewport = area;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?)?;
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
    mouse: bool,
}

impl TuiGuard {
    fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal, mouse })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
