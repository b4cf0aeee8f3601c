use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::{mpsc::UnboundedSender, watch};
use tracing::debug;

use crate::{
    action::Action,
    domain::{collaborators::Session, presence::PresenceStore, user::User},
    tui::Frame,
};

use super::{Component, account_menu::AccountMenu, connect_wallet::ConnectWalletComponent};

/// Shows the account menu while a user is present, otherwise the connect button.
pub struct AuthRoot {
    action_tx: UnboundedSender<Action>,
    presence: PresenceStore,
    presence_rx: watch::Receiver<Option<User>>,
    session: Arc<dyn Session>,
    symbol: String,
    pub menu: Option<AccountMenu>,
    pub connect: ConnectWalletComponent,
}

impl AuthRoot {
    pub fn new(
        action_tx: UnboundedSender<Action>,
        presence: PresenceStore,
        session: Arc<dyn Session>,
        symbol: &str,
    ) -> Self {
        let connect = ConnectWalletComponent::new(action_tx.clone());
        let presence_rx = presence.subscribe();
        Self {
            action_tx,
            presence,
            presence_rx,
            session,
            symbol: symbol.to_string(),
            menu: None,
            connect,
        }
    }

    /// Mount or drop the account menu to match the presence signal.
    ///
    /// A newly mounted menu requests its name and balance via `LoadAccount`.
    pub fn sync(&mut self) -> Result<()> {
        let current = self.presence_rx.borrow_and_update().clone();
        match current {
            Some(user) => {
                let mounted = self.menu.as_ref().is_some_and(|menu| {
                    menu.address == user.address && menu.username == user.username
                });
                if !mounted {
                    let menu = AccountMenu::new(
                        self.action_tx.clone(),
                        self.session.clone(),
                        self.presence.clone(),
                        &self.presence,
                        &self.symbol,
                    );
                    debug!("Mounting account menu for {}", menu.address);
                    self.action_tx.send(Action::LoadAccount(menu.address.clone()))?;
                    self.menu = Some(menu);
                }
            }
            None => {
                if self.menu.take().is_some() {
                    debug!("Unmounting account menu");
                    self.connect.reset();
                }
            }
        }
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        self.menu.is_some()
    }

    /// Whether keyboard input should go straight to the connect form.
    pub fn is_editing(&self) -> bool {
        self.menu.is_none() && self.connect.is_editing
    }

    pub fn paste(&mut self, text: &str) {
        if self.menu.is_none() {
            self.connect.paste(text);
        }
    }

    pub fn on_names_loaded(&mut self, address: &str, result: Result<Vec<String>, String>) {
        match &mut self.menu {
            Some(menu) if menu.address == address => menu.set_names(result),
            _ => debug!("Dropping stale names for {}", address),
        }
    }

    pub fn on_balance_loaded(&mut self, address: &str, result: Result<Option<u128>, String>) {
        match &mut self.menu {
            Some(menu) if menu.address == address => menu.set_balance(result),
            _ => debug!("Dropping stale balance for {}", address),
        }
    }

    /// Run the menu's sign-out and settle the tree.
    pub fn sign_out(&mut self) -> Result<()> {
        if let Some(menu) = &mut self.menu {
            menu.sign_out();
        }
        self.sync()
    }

    pub fn step(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.step();
        }
    }

    /// The terminal lost focus, so the pointer is no longer over the menu.
    pub fn focus_lost(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.set_hovered(false);
        }
    }
}

impl Component for AuthRoot {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match &mut self.menu {
            Some(menu) => menu.handle_key_event(key),
            None => self.connect.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        match &mut self.menu {
            Some(menu) => menu.handle_mouse_event(mouse),
            None => self.connect.handle_mouse_event(mouse),
        }
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        match &mut self.menu {
            Some(menu) => menu.draw(f, area),
            None => self.connect.draw(f, area),
        }
    }
}
