//! TUI widgets.

mod drawer;
mod help;
mod login;
mod news_feed;
mod notifications;
mod placeholder;
mod status_bar;
mod stock_details;
mod stock_list;
mod tab_bar;

pub use drawer::DrawerMenu;
pub use help::HelpPanel;
pub use login::LoginScreen;
pub use news_feed::NewsFeed;
pub use notifications::{render_error, render_notification};
pub use placeholder::Placeholder;
pub use status_bar::StatusBar;
pub use stock_details::StockDetails;
pub use stock_list::StockList;
pub use tab_bar::TabBar;

/// Shorten `s` to `n - 1` characters plus `".."` when longer than `n`.
pub fn truncate(s: &str, n: usize) -> String {
    if s.chars().count() > n {
        let head: String = s.chars().take(n.saturating_sub(1)).collect();
        format!("{head}..")
    } else {
        s.to_string()
    }
}

/// Render into an in-memory terminal and return its rows as text.
#[cfg(test)]
pub(crate) fn render_text(
    width: u16,
    height: u16,
    render: impl FnOnce(&mut ratatui::Frame),
) -> String {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
