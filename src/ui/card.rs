use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    symbols::border,
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::terminal::draw_alert;

/// Text of the feedback element while it is shown
pub const FEEDBACK_TEXT: &str = "Copied!";

/// Draw the contact card, the console, and any pending alert
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(f.area());

    let title = Line::from(" Contact ".bold());
    let instructions = Line::from(vec![
        " Copy ".bold(),
        "<C>".blue().bold(),
        " Quit ".bold(),
        "<Q> ".blue().bold(),
    ]);
    let block = Block::bordered()
        .title(title.centered())
        .title_bottom(instructions.centered())
        .border_set(border::THICK);

    let feedback = if app.feedback_visible() {
        Line::from(FEEDBACK_TEXT.green().bold())
    } else {
        Line::default()
    };
    let lines = vec![
        Line::from("Email"),
        Line::from(app.email().to_string().yellow()),
        Line::default(),
        feedback,
    ];
    let card = Paragraph::new(Text::from(lines)).centered().block(block);
    f.render_widget(card, chunks[0]);

    // Console: newest diagnostics at the bottom
    let items: Vec<ListItem> = app
        .console_lines()
        .into_iter()
        .map(|l| ListItem::new(format!("{} {}", l.at.format("%H:%M:%S"), l.text)))
        .collect();
    let console = List::new(items).block(Block::default().title("Console").borders(Borders::ALL));
    f.render_widget(console, chunks[1]);

    if let Some(message) = app.current_alert() {
        draw_alert(f, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with;
    use crate::feedback::{AlertSink, Display, Document, FEEDBACK_ELEMENT_ID};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn card_shows_email_without_feedback() {
        let app = app_with(Ok(()));
        let screen = render(&app);
        assert!(screen.contains("zlhh3842@gmail.com"));
        assert!(!screen.contains(FEEDBACK_TEXT));
    }

    #[tokio::test]
    async fn feedback_text_follows_element_display() {
        let app = app_with(Ok(()));
        app.page.set_display(FEEDBACK_ELEMENT_ID, Display::Inline).unwrap();
        assert!(render(&app).contains(FEEDBACK_TEXT));

        app.page.set_display(FEEDBACK_ELEMENT_ID, Display::None).unwrap();
        assert!(!render(&app).contains(FEEDBACK_TEXT));
    }

    #[tokio::test]
    async fn pending_alert_is_drawn_as_popup() {
        let app = app_with(Ok(()));
        app.page.alert("Copy failed.");
        let screen = render(&app);
        assert!(screen.contains("Alert"));
        assert!(screen.contains("Copy failed."));
    }

    #[tokio::test]
    async fn console_lines_are_listed() {
        let app = app_with(Ok(()));
        app.page.push_console("clipboard unavailable");
        assert!(render(&app).contains("clipboard unavailable"));
    }
}
