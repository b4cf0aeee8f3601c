use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::domain::{display::balance_label, fetch::Fetch};

/// Token balance of the active account.
pub struct Balance<'a> {
    pub balance: &'a Fetch<Option<u128>>,
    pub symbol: &'a str,
}

impl Balance<'_> {
    /// Text to show, or `None` while the balance is loading.
    pub fn text(&self) -> Option<String> {
        match self.balance {
            Fetch::Pending => None,
            Fetch::Ready(amount) => Some(balance_label(*amount, self.symbol)),
            Fetch::Failed(_) => Some(balance_label(None, self.symbol)),
        }
    }

    pub fn spans(&self) -> Option<Vec<Span<'static>>> {
        let text = self.text()?;
        let mut spans = vec![Span::styled(text, Style::default().fg(Color::Green))];
        if self.balance.is_failed() {
            spans.push(Span::styled(" !", Style::default().fg(Color::Yellow)));
        }
        Some(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hey(balance: &Fetch<Option<u128>>) -> Balance<'_> {
        Balance {
            balance,
            symbol: "HEY",
        }
    }

    #[test]
    fn test_balance_text() {
        assert_eq!(hey(&Fetch::Ready(None)).text().as_deref(), Some("0 HEY"));
        assert_eq!(hey(&Fetch::Ready(Some(42))).text().as_deref(), Some("42 HEY"));
        assert_eq!(hey(&Fetch::Pending).text(), None);
    }

    #[test]
    fn test_failed_balance_is_flagged() {
        let fetch = Fetch::Failed("503".to_string());
        let balance = hey(&fetch);
        assert_eq!(balance.text().as_deref(), Some("0 HEY"));
        assert_eq!(balance.spans().unwrap().len(), 2);
    }
}
