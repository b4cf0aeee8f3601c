use color_eyre::eyre::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{action::Action, domain::user::User, tui::Frame};

use super::Component;

const FORM_WIDTH: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectField {
    Address,
    Username,
}

/// "Connect wallet" button, expanding into an address form.
pub struct ConnectWalletComponent {
    action_tx: UnboundedSender<Action>,
    pub is_editing: bool,
    pub focused_field: ConnectField,
    pub address_input: String,
    pub username_input: String,
    pub error_message: Option<String>,
    button_area: Rect,
}

impl ConnectWalletComponent {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            is_editing: false,
            focused_field: ConnectField::Address,
            address_input: String::new(),
            username_input: String::new(),
            error_message: None,
            button_area: Rect::default(),
        }
    }

    /// Back to the bare button with an empty form.
    pub fn reset(&mut self) {
        self.is_editing = false;
        self.focused_field = ConnectField::Address;
        self.address_input.clear();
        self.username_input.clear();
        self.error_message = None;
    }

    pub fn paste(&mut self, text: &str) {
        if !self.is_editing {
            return;
        }
        let text = text.trim();
        self.focused_input().push_str(text);
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focused_field {
            ConnectField::Address => &mut self.address_input,
            ConnectField::Username => &mut self.username_input,
        }
    }

    fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            ConnectField::Address => ConnectField::Username,
            ConnectField::Username => ConnectField::Address,
        };
    }

    fn submit(&mut self) -> Result<()> {
        let username = Some(self.username_input.as_str());
        match User::new(&self.address_input, username) {
            Ok(user) => {
                debug!("Connecting wallet {}", user.address);
                self.action_tx.send(Action::WalletConnected(user))?;
                self.reset();
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
        Ok(())
    }

    fn draw_form(&self, f: &mut Frame, anchor: Rect) {
        let width = FORM_WIDTH.max(anchor.width);
        let form = Rect {
            x: anchor.right().saturating_sub(width),
            y: anchor.bottom(),
            width,
            height: 7,
        }
        .intersection(f.area());
        if form.is_empty() {
            return;
        }

        let field_line = |label: &'static str, value: &str, field: ConnectField| {
            let focused = self.focused_field == field;
            let value_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(label, Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}{}", value, cursor), value_style),
            ])
        };

        let mut lines = vec![
            field_line("Address:  ", &self.address_input, ConnectField::Address),
            field_line("Username: ", &self.username_input, ConnectField::Username),
            Line::from(""),
        ];
        match &self.error_message {
            Some(err) => lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Tab: Switch field | Enter: Connect | Esc: Cancel",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        let widget = Paragraph::new(lines).block(
            Block::default()
                .title("Connect wallet")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(Clear, form);
        f.render_widget(widget, form);
    }
}

impl Component for ConnectWalletComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if !self.is_editing {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('c')) {
                self.is_editing = true;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.reset(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_field(),
            KeyCode::Enter => self.submit()?,
            KeyCode::Backspace => {
                self.focused_input().pop();
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.error_message = None;
                self.focused_input().push(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self
                .button_area
                .contains(Position::new(mouse.column, mouse.row))
        {
            self.is_editing = true;
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        self.button_area = area;

        let button = Paragraph::new(Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Connect wallet",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(button, area);

        if self.is_editing {
            self.draw_form(f, area);
        }
    }
}
