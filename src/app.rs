use std::{path::Path, sync::Arc};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::Action,
    cli::Args,
    components::{Component, auth::AuthRoot},
    config::Config,
    domain::{
        collaborators::{BalanceService, NameResolver},
        presence::PresenceStore,
        user::User,
    },
    infra::{rpc::StacksApi, store::SessionStore},
    tui::{Event, Tui},
};

/// Width of the account menu / connect button in the header.
const MENU_WIDTH: u16 = 36;

pub struct App {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub config: Config,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
    pub tui: Tui,
    pub presence: PresenceStore,
    pub session: Arc<SessionStore>,
    pub names: Arc<dyn NameResolver>,
    pub balances: Arc<dyn BalanceService>,
    pub auth: AuthRoot,
    pub status_message: String,
}

impl App {
    pub fn new(args: &Args, data_dir: &Path) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = Config::new(
            &args.network,
            args.api_url.as_deref(),
            args.token_contract.as_deref(),
        );
        let session = Arc::new(SessionStore::open(data_dir, &config.network.name)?);
        let api = Arc::new(StacksApi::new(&config));
        let presence = PresenceStore::new();
        let auth = AuthRoot::new(
            action_tx.clone(),
            presence.clone(),
            session.clone(),
            &config.token.symbol,
        );

        let tui = Tui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate)
            .mouse(!args.no_mouse)
            .paste(true)
            .focus(true);

        Ok(Self {
            should_quit: false,
            should_suspend: false,
            config,
            action_tx,
            action_rx,
            tui,
            presence,
            session,
            names: api.clone(),
            balances: api,
            auth,
            status_message: "Ready".to_string(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // A stored session counts as a successful connection
        match self.session.load_user() {
            Ok(Some(user)) => {
                info!("Restored session for {}", user.address);
                self.presence.connect(user);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to load stored session: {:?}", e);
            }
        }
        self.auth.sync()?;

        loop {
            // Handle events
            if let Some(event) = self.tui.next().await {
                self.handle_event(event)?;
            }

            // Handle actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.handle_action(action)?;
            }

            if self.should_suspend {
                self.tui.suspend()?;
                self.should_suspend = false;
                self.tui.resume()?;
            }

            if self.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Tick => {
                self.action_tx.send(Action::Tick)?;
            }
            Event::Render => {
                self.auth.step();
                self.draw_ui()?;
            }
            Event::Key(key_event) => {
                self.handle_key_event(key_event)?;
            }
            Event::Mouse(mouse_event) => {
                self.auth.handle_mouse_event(mouse_event)?;
            }
            Event::Resize(w, h) => {
                self.action_tx.send(Action::Resize(w, h))?;
            }
            Event::Paste(text) => {
                self.auth.paste(&text);
            }
            Event::FocusLost => {
                self.auth.focus_lost();
            }
            Event::Init => {
                info!("Application initialized");
            }
            Event::Closed => {
                self.should_quit = true;
            }
            Event::Error => {
                debug!("Terminal event error");
            }
            Event::FocusGained => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.action_tx.send(Action::Quit)?;
            return Ok(());
        }

        if self.auth.is_editing() {
            return self.auth.handle_key_event(key);
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.action_tx.send(Action::Quit)?;
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.action_tx.send(Action::Suspend)?;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.action_tx.send(Action::ClearScreen)?;
            }
            _ => {
                self.auth.handle_key_event(key)?;
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<()> {
        if action != Action::Tick {
            debug!("Handling action: {}", action);
        }
        match action {
            Action::Tick => {}
            Action::Resize(w, h) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.draw_ui()?;
            }
            Action::Suspend => {
                self.should_suspend = true;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ClearScreen => {
                self.tui.clear()?;
            }
            Action::Error(msg) => {
                error!("{}", msg);
                self.status_message = msg;
            }
            Action::WalletConnected(user) => {
                self.connect_wallet(user);
            }
            Action::SignOut => {
                self.auth.sign_out()?;
                self.status_message = if self.auth.is_signed_in() {
                    "Disconnect failed".to_string()
                } else {
                    "Disconnected".to_string()
                };
            }
            Action::LoadAccount(address) => {
                self.load_account(address);
            }
            Action::NamesLoaded { address, result } => {
                self.auth.on_names_loaded(&address, result);
            }
            Action::BalanceLoaded { address, result } => {
                self.auth.on_balance_loaded(&address, result);
            }
        }
        self.auth.sync()
    }

    fn connect_wallet(&mut self, user: User) {
        if let Err(e) = self.session.save_user(&user) {
            // Still connected for this run, just not remembered
            error!("Failed to persist session: {:?}", e);
        }
        info!("Wallet connected: {}", user.address);
        self.status_message = "Connected".to_string();
        self.presence.connect(user);
    }

    /// Look up names and balance in the background; results come back as actions.
    fn load_account(&self, address: String) {
        tokio::spawn(resolve_names(
            self.names.clone(),
            self.action_tx.clone(),
            address.clone(),
        ));
        tokio::spawn(fetch_balance(
            self.balances.clone(),
            self.action_tx.clone(),
            address,
        ));
    }

    fn draw_ui(&mut self) -> Result<()> {
        let network_name = self.config.network.name.clone();
        let api_url = self.config.network.api_url.clone();
        let token = self.config.token.asset_identifier();
        let status_message = self.status_message.clone();
        let signed_in = self.auth.is_signed_in();
        let auth = &mut self.auth;

        self.tui.draw(|f| {
            let chunks = Layout::vertical([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status
            ])
            .split(f.area());

            let header_chunks =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(MENU_WIDTH)])
                    .split(chunks[0]);

            let title = Paragraph::new(vec![Line::from(vec![
                Span::styled(
                    "HEY",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", network_name),
                    Style::default().fg(Color::Yellow),
                ),
            ])])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(title, header_chunks[0]);

            let hint = if signed_in {
                "Hover the account menu (or press Enter) to disconnect."
            } else {
                "Click \"Connect wallet\" (or press Enter) to connect a Stacks address."
            };
            let content = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("API:   ", Style::default().fg(Color::DarkGray)),
                    Span::styled(api_url, Style::default().fg(Color::White)),
                ]),
                Line::from(vec![
                    Span::styled("Token: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(token, Style::default().fg(Color::White)),
                ]),
                Line::from(""),
                Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(content, chunks[1]);

            let status = Paragraph::new(vec![Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
                Span::styled(status_message, Style::default().fg(Color::Green)),
                Span::raw("  |  "),
                Span::styled("[q]Quit", Style::default().fg(Color::DarkGray)),
            ])])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(status, chunks[2]);

            // Last, so the dropdown overlays the content
            auth.draw(f, header_chunks[1]);
        })?;
        Ok(())
    }
}

async fn resolve_names(
    names: Arc<dyn NameResolver>,
    tx: UnboundedSender<Action>,
    address: String,
) {
    let result = names.names(&address).await.map_err(|e| format!("{e:#}"));
    if let Err(e) = &result {
        let _ = tx.send(Action::Error(format!("Name lookup failed: {e}")));
    }
    if tx.send(Action::NamesLoaded { address, result }).is_err() {
        debug!("App gone before names resolved");
    }
}

async fn fetch_balance(
    balances: Arc<dyn BalanceService>,
    tx: UnboundedSender<Action>,
    address: String,
) {
    let result = balances.balance(&address).await.map_err(|e| format!("{e:#}"));
    if let Err(e) = &result {
        let _ = tx.send(Action::Error(format!("Balance lookup failed: {e}")));
    }
    if tx.send(Action::BalanceLoaded { address, result }).is_err() {
        debug!("App gone before balance resolved");
    }
}
