mod board;
mod components;
mod controls;
mod help;
pub mod layout;
mod moves;
mod utils;
mod viewer;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Viewer => viewer::render_viewer(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}
