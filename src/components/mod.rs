pub mod account_menu;
pub mod account_name;
pub mod auth;
pub mod avatar;
pub mod balance;
pub mod connect_wallet;
pub mod dropdown;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::tui::Frame;

/// A component is a reusable UI element that can handle events and render itself.
pub trait Component {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()>;
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<()> {
        Ok(())
    }
    fn draw(&mut self, f: &mut Frame, area: Rect);
}
