use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::domain::{display::account_name, fetch::Fetch};

/// Resolved name, username or truncated address for the active account.
pub struct AccountName<'a> {
    pub names: &'a Fetch<Vec<String>>,
    pub username: Option<&'a str>,
    pub address: &'a str,
}

impl AccountName<'_> {
    /// Text to show, or `None` while names are still resolving.
    pub fn text(&self) -> Option<String> {
        match self.names {
            Fetch::Pending => None,
            Fetch::Ready(names) => Some(account_name(names, self.username, self.address)),
            Fetch::Failed(_) => Some(account_name(&[], self.username, self.address)),
        }
    }

    pub fn line(&self) -> Option<Line<'static>> {
        self.text().map(|name| {
            Line::from(Span::styled(
                name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "SP123...XYZ9";

    fn name<'a>(names: &'a Fetch<Vec<String>>, username: Option<&'a str>) -> AccountName<'a> {
        AccountName {
            names,
            username,
            address: ADDRESS,
        }
    }

    #[test]
    fn test_pending_renders_nothing() {
        let names = Fetch::Pending;
        assert_eq!(name(&names, Some("bob")).text(), None);
    }

    #[test]
    fn test_precedence() {
        let names = Fetch::Ready(vec!["alice.btc".to_string()]);
        assert_eq!(name(&names, Some("bob")).text().as_deref(), Some("alice.btc"));

        let names = Fetch::Ready(vec![]);
        assert_eq!(name(&names, Some("bob")).text().as_deref(), Some("bob"));
        assert_eq!(name(&names, None).text().as_deref(), Some("SP12…XYZ9"));
    }

    #[test]
    fn test_failed_lookup_falls_back() {
        let names = Fetch::Failed("connection refused".to_string());
        assert_eq!(name(&names, None).text().as_deref(), Some("SP12…XYZ9"));
    }
}
