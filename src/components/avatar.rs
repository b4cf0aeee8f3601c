use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

const PALETTE: [Color; 6] = [
    Color::Rgb(0x6c, 0x5c, 0xe7),
    Color::Rgb(0x00, 0xb8, 0x94),
    Color::Rgb(0xfd, 0x79, 0xa8),
    Color::Rgb(0xe1, 0x70, 0x55),
    Color::Rgb(0x09, 0x84, 0xe3),
    Color::Rgb(0xfd, 0xcb, 0x6e),
];

/// Background colour for an address. Stable across runs.
pub fn avatar_color(address: &str) -> Color {
    // FNV-1a
    let mut hash: u32 = 0x811c_9dc5;
    for byte in address.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    PALETTE[hash as usize % PALETTE.len()]
}

/// Three-cell badge with the first letter of `label` on the address colour.
pub fn avatar(address: &str, label: &str) -> Span<'static> {
    let initial = label
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');
    Span::styled(
        format!(" {} ", initial),
        Style::default()
            .fg(Color::Black)
            .bg(avatar_color(address))
            .add_modifier(Modifier::BOLD),
    )
}
