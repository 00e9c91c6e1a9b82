// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]
#![cfg_attr(test, allow(clippy::indexing_slicing, clippy::unwrap_used))]

mod app;
mod cli;
mod config;
mod logging;
mod position;
mod record;
mod services;
mod ui;

use app::{App, AppMode};
use cli::CliCommand;
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use record::Game;
use std::path::{Path, PathBuf};
use std::{io, time::Duration};
use ui::layout::ViewerLayout;

/// Rows moved per mouse wheel notch over the move list
const WHEEL_ROWS: usize = 3;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load config
    let (config, config_created) = config::Config::load()?;
    if let Err(error) = logging::init(&config) {
        eprintln!("Logging disabled: {}", error);
    }
    if config_created {
        tracing::info!("created default config");
    }

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map_or("replay", String::as_str);
    let record_path = |path: Option<PathBuf>| path.or_else(|| config.game.record_path());

    match cli::parse_args(&args)? {
        CliCommand::Help => cli::print_help(program_name),
        CliCommand::Version => println!("Replay v{}", env!("CARGO_PKG_VERSION")),
        CliCommand::Fen { path, index } => {
            print_fen(record_path(path).as_deref(), index)?;
        }
        CliCommand::Moves(path) => print_moves(record_path(path).as_deref())?,
        CliCommand::View(path) => {
            let path = record_path(path);
            run_viewer(&config, Game::load(path.as_deref()))?;
        }
    }
    Ok(())
}

fn print_fen(path: Option<&Path>, index: usize) -> Result<()> {
    let game = Game::load(path)?;
    let ply = app::Ply::new(index, game.moves.len()).ok_or_else(|| {
        color_eyre::eyre::eyre!(
            "Move index {} is outside 0..={}",
            index,
            game.moves.len()
        )
    })?;
    println!("{}", position::position_at(&game.moves, ply));
    Ok(())
}

fn print_moves(path: Option<&Path>) -> Result<()> {
    let game = Game::load(path)?;
    println!("{}  {}", game.title(), game.result);
    for mv in &game.moves {
        println!("{}", mv.label());
    }
    Ok(())
}

fn run_viewer(
    config: &config::Config,
    record: Result<Game, record::RecordError>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(record, config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "viewer stopped");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_status_toast();

        let size = terminal.size()?;
        let layout = ViewerLayout::new(Rect::new(0, 0, size.width, size.height));
        app.sync_move_list_scroll(layout.viewport());
        app.tick_scroll_animation();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Redraw faster while the move list is animating
        let timeout = if app.is_scroll_animating() { 16 } else { 100 };
        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                        continue;
                    }

                    match app.mode {
                        AppMode::Viewer => handle_viewer_mode(app, key.code, &layout),
                        AppMode::Help => handle_help_mode(app, key.code),
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse, &layout),
                Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_viewer_mode(app: &mut App, key_code: KeyCode, layout: &ViewerLayout) {
    if app.viewer().is_none() {
        if matches!(key_code, KeyCode::Esc | KeyCode::Char('q')) {
            app.quit();
        }
        return;
    }

    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.advance()
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => app.retreat(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_start(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_end(),
        KeyCode::PageUp => app.scroll_move_list_up(layout.viewport()),
        KeyCode::PageDown => app.scroll_move_list_down(layout.viewport(), layout.viewport()),
        KeyCode::Char('f') => app.toggle_board_flip(),
        KeyCode::Char('n') => app.toggle_notation(),
        KeyCode::Char('y') => app.copy_current_fen(),
        KeyCode::Char(_)
        | KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_help(),
        KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent, layout: &ViewerLayout) {
    if app.mode != AppMode::Viewer {
        return;
    }
    let Some((progress, offset)) = app.viewer().map(|viewer| {
        (
            viewer.progress(),
            viewer
                .scroll
                .visible_offset(viewer.game.moves.len(), layout.viewport()),
        )
    }) else {
        return;
    };

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(control) = layout.control_at(column, row, &progress) {
                app.activate(control);
            } else if let Some(move_row) = layout.row_at(column, row, offset) {
                app.select_row(move_row);
            }
        }
        MouseEventKind::ScrollUp if layout.is_in_moves(column, row) => {
            app.scroll_move_list_up(WHEEL_ROWS);
        }
        MouseEventKind::ScrollDown if layout.is_in_moves(column, row) => {
            app.scroll_move_list_down(WHEEL_ROWS, layout.viewport());
        }
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight
        | MouseEventKind::Down(_)
        | MouseEventKind::Up(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::Moved => {}
    }
}
