use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::tui::Frame;

pub type SignOutCallback = Box<dyn Fn() + Send>;

/// Render frames a full fade in or out takes.
pub const FADE_FRAMES: u8 = 6;

pub const DROPDOWN_WIDTH: u16 = 28;

const PANEL_BG: (u8, u8, u8) = (0x18, 0x18, 0x1b);
const BORDER_FG: (u8, u8, u8) = (0x52, 0x52, 0x5b);
const DISCONNECT_FG: (u8, u8, u8) = (0xd4, 0x00, 0x1a);
const RETRY_FG: (u8, u8, u8) = (0xea, 0xb3, 0x08);

/// Overlay under the account menu with a single "Disconnect" action.
pub struct DisconnectDropdown {
    show: bool,
    level: u8,
    failed: bool,
    on_sign_out: Option<SignOutCallback>,
    area: Rect,
    action_area: Rect,
}

impl DisconnectDropdown {
    pub fn new(on_sign_out: Option<SignOutCallback>) -> Self {
        Self {
            show: false,
            level: 0,
            failed: false,
            on_sign_out,
            area: Rect::default(),
            action_area: Rect::default(),
        }
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }

    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Show a retry hint after a failed disconnect.
    pub fn set_failed(&mut self, failed: bool) {
        self.failed = failed;
    }

    /// Area the panel occupies, as of the last draw.
    pub fn area(&self) -> Rect {
        self.area
    }

    #[cfg(test)]
    pub fn action_area(&self) -> Rect {
        self.action_area
    }

    /// Advance the fade by one frame towards the current visibility.
    pub fn step(&mut self) {
        if self.show {
            self.level = (self.level + 1).min(FADE_FRAMES);
        } else {
            self.level = self.level.saturating_sub(1);
        }
    }

    pub fn opacity(&self) -> f32 {
        self.effective_level() as f32 / FADE_FRAMES as f32
    }

    fn effective_level(&self) -> u8 {
        if self.show {
            self.level.max(1)
        } else {
            self.level
        }
    }

    /// Run the action if the panel is shown. Without a callback this does nothing.
    pub fn click(&self) {
        if !self.show {
            return;
        }
        if let Some(on_sign_out) = &self.on_sign_out {
            on_sign_out();
        }
    }

    /// Handle a click at `position`. Returns true if it hit the action.
    pub fn handle_click(&self, position: Position) -> bool {
        if self.show && self.action_area.contains(position) {
            self.click();
            true
        } else {
            false
        }
    }

    /// Draw the panel right-aligned beneath `anchor`.
    pub fn draw(&mut self, f: &mut Frame, anchor: Rect) {
        let height = if self.failed { 4 } else { 3 };
        let width = DROPDOWN_WIDTH.max(anchor.width);
        let panel = Rect {
            x: anchor.right().saturating_sub(width),
            y: anchor.bottom(),
            width,
            height,
        }
        .intersection(f.area());

        self.area = panel;
        self.action_area = Rect {
            x: panel.x.saturating_add(1),
            y: panel.y.saturating_add(1),
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };

        if self.effective_level() == 0 || panel.is_empty() {
            return;
        }

        let t = self.opacity();
        let mut lines = vec![Line::from(vec![
            Span::styled("⏻ ", Style::default().fg(blend(PANEL_BG, DISCONNECT_FG, t))),
            Span::styled(
                "Disconnect",
                Style::default()
                    .fg(blend(PANEL_BG, DISCONNECT_FG, t))
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        if self.failed {
            lines.push(Line::from(Span::styled(
                "Disconnect failed, retry",
                Style::default().fg(blend(PANEL_BG, RETRY_FG, t)),
            )));
        }

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(rgb(PANEL_BG)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(blend(PANEL_BG, BORDER_FG, t))),
            );

        f.render_widget(Clear, panel);
        f.render_widget(widget, panel);
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn counting_dropdown() -> (DisconnectDropdown, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let dropdown = DisconnectDropdown::new(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));
        (dropdown, count)
    }

    fn draw(dropdown: &mut DisconnectDropdown) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| dropdown.draw(f, Rect::new(20, 0, 34, 4)))
            .unwrap();
        terminal
    }

    #[test]
    fn test_click_invokes_callback_once() {
        let (mut dropdown, count) = counting_dropdown();
        dropdown.set_show(true);
        draw(&mut dropdown);

        let action = dropdown.action_area();
        assert!(dropdown.handle_click(Position::new(action.x, action.y)));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(dropdown.handle_click(Position::new(action.x + 1, action.y)));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_click_ignored_while_hidden() {
        let (mut dropdown, count) = counting_dropdown();
        draw(&mut dropdown);

        let action = dropdown.action_area();
        assert!(!dropdown.handle_click(Position::new(action.x, action.y)));
        dropdown.click();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_click_outside_action() {
        let (mut dropdown, count) = counting_dropdown();
        dropdown.set_show(true);
        draw(&mut dropdown);

        assert!(!dropdown.handle_click(Position::new(0, 0)));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_click_without_callback_is_noop() {
        let mut dropdown = DisconnectDropdown::new(None);
        dropdown.set_show(true);
        draw(&mut dropdown);

        let action = dropdown.action_area();
        assert!(dropdown.handle_click(Position::new(action.x, action.y)));
    }

    #[test]
    fn test_panel_sits_below_anchor() {
        let (mut dropdown, _) = counting_dropdown();
        dropdown.set_show(true);
        draw(&mut dropdown);

        assert_eq!(dropdown.area(), Rect::new(20, 4, 34, 3));
    }

    #[test]
    fn test_fade_steps() {
        let (mut dropdown, _) = counting_dropdown();
        assert_eq!(dropdown.opacity(), 0.0);

        dropdown.set_show(true);
        assert!(dropdown.opacity() > 0.0);
        for _ in 0..FADE_FRAMES * 2 {
            dropdown.step();
        }
        assert_eq!(dropdown.opacity(), 1.0);

        dropdown.set_show(false);
        dropdown.step();
        assert!(dropdown.opacity() < 1.0 && dropdown.opacity() > 0.0);
        for _ in 0..FADE_FRAMES {
            dropdown.step();
        }
        assert_eq!(dropdown.opacity(), 0.0);
    }

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let (mut dropdown, _) = counting_dropdown();
        let terminal = draw(&mut dropdown);
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains("Disconnect"));
    }

    #[test]
    fn test_shown_panel_draws_action() {
        let (mut dropdown, _) = counting_dropdown();
        dropdown.set_show(true);
        dropdown.set_failed(true);
        let terminal = draw(&mut dropdown);
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Disconnect"));
        assert!(text.contains("retry"));
    }
}
