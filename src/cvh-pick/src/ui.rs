//! Frame rendering: the ranked list with the cursor row highlighted, and the
//! query line underneath it.

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::session::Session;

/// Prompt printed in front of the query
pub const PROMPT: &str = "find: ";

/// Rows of the ranked list visible in a viewport `height` rows tall.
///
/// One row is kept for the query line. The window starts at the top of the
/// list and only scrolls once the cursor would fall below its last row.
pub fn visible_window(len: usize, height: usize, cursor: usize) -> Range<usize> {
    let rows = len.min(height.saturating_sub(1));
    if rows == 0 {
        return 0..0;
    }

    let offset = cursor.saturating_sub(rows - 1).min(len - rows);
    offset..offset + rows
}

pub fn draw(frame: &mut Frame, session: &Session, max_height: u16) {
    let full = frame.area();
    let area = Rect {
        height: full.height.min(max_height),
        ..full
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // List
            Constraint::Length(1), // Query
        ])
        .split(area);

    let window = visible_window(session.ranked().len(), area.height as usize, session.cursor());
    let scorer = session.scorer();
    let highlight = Style::default().add_modifier(Modifier::REVERSED);

    let lines: Vec<Line> = session.ranked()[window.clone()]
        .iter()
        .zip(window)
        .map(|(entry, row)| {
            let text = format!(
                "{} {}",
                scorer.display(entry.score),
                session.candidate(entry).text
            );
            if row == session.cursor() {
                Line::from(Span::styled(text, highlight))
            } else {
                Line::raw(text)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(Paragraph::new(format!("{}{}", PROMPT, session.query())), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{Jaro, Levenshtein};
    use crate::rank::Candidate;
    use crate::session::Action;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row(buffer: &Buffer, y: u16) -> String {
        let width = buffer.area.width as usize;
        let start = y as usize * width;
        buffer.content[start..start + width]
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn is_highlighted(buffer: &Buffer, y: u16) -> bool {
        let start = y as usize * buffer.area.width as usize;
        buffer.content[start].modifier.contains(Modifier::REVERSED)
    }

    fn render(session: &Session, width: u16, height: u16, max_height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, session, max_height)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_window_fits_short_list() {
        assert_eq!(visible_window(3, 10, 0), 0..3);
        assert_eq!(visible_window(3, 10, 2), 0..3);
    }

    #[test]
    fn test_window_reserves_query_row() {
        assert_eq!(visible_window(10, 5, 0), 0..4);
        assert_eq!(visible_window(10, 5, 3), 0..4);
    }

    #[test]
    fn test_window_scrolls_to_cursor() {
        assert_eq!(visible_window(10, 5, 4), 1..5);
        assert_eq!(visible_window(10, 5, 9), 6..10);
    }

    #[test]
    fn test_window_degenerate_sizes() {
        assert_eq!(visible_window(0, 10, 0), 0..0);
        assert_eq!(visible_window(5, 1, 0), 0..0);
        assert_eq!(visible_window(5, 0, 0), 0..0);
    }

    #[test]
    fn test_draws_scores_and_query() {
        let mut session =
            Session::new(Candidate::from_texts(["Hello", "World", "Foo"]), Box::new(Jaro));
        for c in "wor".chars() {
            session.handle(Action::Insert(c));
        }
        session.rerank();

        let buffer = render(&session, 30, 6, 40);
        assert_eq!(row(&buffer, 0), "0.866667 World");
        assert_eq!(row(&buffer, 1), "0.555556 Foo");
        assert_eq!(row(&buffer, 2), "0.000000 Hello");
        assert_eq!(row(&buffer, 5), "find: wor");
    }

    #[test]
    fn test_highlight_tracks_cursor() {
        let mut session = Session::new(Candidate::from_texts(["a", "b", "c"]), Box::new(Jaro));
        session.handle(Action::MoveDown);

        let buffer = render(&session, 20, 5, 40);
        assert!(!is_highlighted(&buffer, 0));
        assert!(is_highlighted(&buffer, 1));
        assert!(!is_highlighted(&buffer, 2));
    }

    #[test]
    fn test_list_is_cut_to_viewport() {
        let texts: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
        let session = Session::new(Candidate::from_texts(texts), Box::new(Levenshtein));

        // a 4-row viewport inside a taller terminal: 3 list rows + the query line
        let buffer = render(&session, 20, 8, 4);
        assert_eq!(row(&buffer, 0), "5 item0");
        assert_eq!(row(&buffer, 2), "5 item2");
        assert_eq!(row(&buffer, 3), "find:");
        assert_eq!(row(&buffer, 4), "");
    }

    #[test]
    fn test_scrolled_highlight_stays_visible() {
        let texts: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
        let mut session = Session::new(Candidate::from_texts(texts), Box::new(Levenshtein));
        for _ in 0..5 {
            session.handle(Action::MoveDown);
        }

        let buffer = render(&session, 20, 4, 40);
        assert_eq!(row(&buffer, 0), "5 item3");
        assert_eq!(row(&buffer, 2), "5 item5");
        assert!(is_highlighted(&buffer, 2));
    }
}
