use std::io;
use crossterm::{execute, terminal::{EnterAlternateScreen, LeaveAlternateScreen, enable_raw_mode, disable_raw_mode}};
use ratatui::{backend::CrosstermBackend, Terminal, Frame};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

/// Set up the terminal in raw mode and enter the alternate screen
pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restore the terminal to its previous state
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Leave raw mode and the alternate screen before the panic message prints
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}

/// Centered rectangle of at most `width` x `height` inside `area`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    popup
}

/// Draw a modal alert over whatever is on screen
pub fn draw_alert(f: &mut Frame, message: &str) {
    let area = popup_area(f.area(), 44, 5);
    let block = Block::bordered()
        .title(Line::from(" Alert ".bold()).centered())
        .title_bottom(Line::from(vec![" OK ".bold(), "<Enter> ".blue().bold()]).centered());
    let para = Paragraph::new(message)
        .centered()
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
