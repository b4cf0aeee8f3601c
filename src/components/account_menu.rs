use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info, warn};

use crate::{
    action::Action,
    domain::{
        collaborators::{AddressProvider, Session},
        fetch::Fetch,
        presence::PresenceStore,
    },
    tui::Frame,
};

use super::{
    Component, account_name::AccountName, avatar::avatar, balance::Balance,
    dropdown::DisconnectDropdown,
};

/// Avatar, name and balance of the connected account, with a disconnect
/// dropdown revealed on hover.
pub struct AccountMenu {
    session: Arc<dyn Session>,
    presence: PresenceStore,
    pub address: String,
    pub username: Option<String>,
    pub names: Fetch<Vec<String>>,
    pub balance: Fetch<Option<u128>>,
    pub is_hovered: bool,
    pub sign_out_failed: bool,
    symbol: String,
    dropdown: DisconnectDropdown,
    area: Rect,
}

impl AccountMenu {
    pub fn new(
        action_tx: UnboundedSender<Action>,
        session: Arc<dyn Session>,
        presence: PresenceStore,
        address_provider: &dyn AddressProvider,
        symbol: &str,
    ) -> Self {
        let address = address_provider.current_address().unwrap_or_default();
        let username = presence.current().and_then(|user| user.username);
        let dropdown = DisconnectDropdown::new(Some(Box::new(move || {
            if action_tx.send(Action::SignOut).is_err() {
                warn!("Action channel closed, sign-out dropped");
            }
        })));

        Self {
            session,
            presence,
            address,
            username,
            names: Fetch::Pending,
            balance: Fetch::Pending,
            is_hovered: false,
            sign_out_failed: false,
            symbol: symbol.to_string(),
            dropdown,
            area: Rect::default(),
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.is_hovered = hovered;
        self.dropdown.set_show(hovered);
    }

    pub fn set_names(&mut self, result: Result<Vec<String>, String>) {
        if let Err(e) = &result {
            warn!("Name lookup for {} failed: {}", self.address, e);
        }
        self.names = Fetch::from_result(result);
    }

    pub fn set_balance(&mut self, result: Result<Option<u128>, String>) {
        if let Err(e) = &result {
            warn!("Balance lookup for {} failed: {}", self.address, e);
        }
        self.balance = Fetch::from_result(result);
    }

    /// Whether name and balance are both settled.
    pub fn is_loaded(&self) -> bool {
        !self.names.is_pending() && !self.balance.is_pending()
    }

    #[cfg(test)]
    pub fn dropdown(&self) -> &DisconnectDropdown {
        &self.dropdown
    }

    /// Advance per-frame animation.
    pub fn step(&mut self) {
        self.dropdown.step();
    }

    /// Invalidate the session, then clear the presence signal.
    ///
    /// Presence is only cleared once the session reports success, so a failed
    /// invalidation leaves the menu signed in with a retry hint. Returns true
    /// when signed out.
    pub fn sign_out(&mut self) -> bool {
        self.set_hovered(false);
        match self.session.sign_user_out() {
            Ok(()) => {
                self.sign_out_failed = false;
                self.dropdown.set_failed(false);
                self.presence.clear();
                info!("Signed out {}", self.address);
                true
            }
            Err(e) => {
                error!("Failed to sign out {}: {:?}", self.address, e);
                self.sign_out_failed = true;
                self.dropdown.set_failed(true);
                false
            }
        }
    }

    fn contains(&self, position: Position) -> bool {
        self.area.contains(position)
            || (self.dropdown.is_shown() && self.dropdown.area().contains(position))
    }

    fn display_label(&self) -> String {
        AccountName {
            names: &self.names,
            username: self.username.as_deref(),
            address: &self.address,
        }
        .text()
        .unwrap_or_default()
    }
}

impl Component for AccountMenu {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter if self.is_hovered => {
                self.dropdown.click();
            }
            KeyCode::Char('d') if self.is_hovered => {
                self.dropdown.click();
            }
            KeyCode::Enter | KeyCode::Down => {
                self.set_hovered(true);
            }
            KeyCode::Esc | KeyCode::Up => {
                self.set_hovered(false);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let inside = self.contains(position);
                if inside != self.is_hovered {
                    self.set_hovered(inside);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.dropdown.handle_click(position);
            }
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        self.area = area;

        let border_color = if self.is_hovered {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [avatar_area, details_area] =
            Layout::horizontal([Constraint::Length(4), Constraint::Min(0)]).areas(inner);

        let label = self.display_label();
        f.render_widget(
            Paragraph::new(Line::from(avatar(&self.address, &label))),
            avatar_area,
        );

        // Name and balance share one placeholder: nothing renders until both settle.
        if self.is_loaded() {
            let name = AccountName {
                names: &self.names,
                username: self.username.as_deref(),
                address: &self.address,
            }
            .line()
            .unwrap_or_default();

            let mut balance_spans = Balance {
                balance: &self.balance,
                symbol: &self.symbol,
            }
            .spans()
            .unwrap_or_default();
            balance_spans.push(Span::styled(" ▾", Style::default().fg(Color::DarkGray)));

            f.render_widget(
                Paragraph::new(vec![name, Line::from(balance_spans)]),
                details_area,
            );
        }

        self.dropdown.draw(f, area);
    }
}
