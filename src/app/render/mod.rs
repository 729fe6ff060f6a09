//! Rendering methods for the App.
//!
//! - **Main screen**: header, document slots, trigger, result region, footer
//! - **Picker**: modal overlay with the path input and suggestions
//! - **Notice**: modal overlay with a blocking message

mod main_view;
mod notice;
mod picker;
pub mod result;

use ratatui::Frame;
use ratatui::widgets::Block;

use super::{App, AppMode};

impl App {
    /// Renders the application UI.
    ///
    /// The main screen is always drawn; modals are overlaid on top of it.
    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Block::default().style(self.theme.base_style()), frame.area());
        self.render_main(frame);

        match self.mode {
            AppMode::Main => {}
            AppMode::Picker => self.render_picker(frame),
            AppMode::Notice => self.render_notice(frame),
        }
    }
}
