//! Window chrome around the play field: outer frame, status bar, info panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Endless Runner ";
const INFO_PANEL_WIDTH: u16 = 22;
const PLAY_FIELD_MIN_HEIGHT: u16 = 10;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Message, colour and key hints shown under the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub message: &'static str,
    pub color: Color,
    pub controls: &'static [(&'static str, &'static str)],
}

pub const RUNNING_STATUS: StatusLine = StatusLine {
    message: "Run!",
    color: Color::LightCyan,
    controls: &[("[Space]", "Jump"), ("[q]", "Quit")],
};

pub const GAME_OVER_STATUS: StatusLine = StatusLine {
    message: "Game Over!",
    color: Color::LightRed,
    controls: &[("[Enter/Click]", "Retry"), ("[q]", "Quit")],
};

impl StatusLine {
    pub fn for_phase(game_over: bool) -> Self {
        if game_over {
            GAME_OVER_STATUS
        } else {
            RUNNING_STATUS
        }
    }
}

/// Split `area` into play field, status bar and info panel under the titled
/// border. The border takes the status colour, so it turns red on game over.
///
/// ```text
/// ┌─ Endless Runner ────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(frame: &mut Frame, area: Rect, status: &StatusLine) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status.color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(PLAY_FIELD_MIN_HEIGHT),
            Constraint::Length(2),
        ])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Centered status message, then the key hints on the line below.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusLine) {
    if area.height < 1 {
        return;
    }

    let message = Paragraph::new(status.message)
        .style(Style::default().fg(status.color))
        .alignment(Alignment::Center);
    frame.render_widget(message, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }

    let hints: Vec<Span> = status
        .controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let separator = if i > 0 { "  " } else { "" };
            [
                Span::raw(separator),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Bordered " Info " box holding `lines`; anything past the bottom is clipped.
pub fn render_info_panel(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw_chrome(status: StatusLine) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.size();
                let layout = create_game_layout(frame, area, &status);
                render_status_bar(frame, layout.status_bar, &status);
                render_info_panel(frame, layout.info_panel, vec![Line::from("Score: 12")]);
            })
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_status_line_follows_phase() {
        assert_eq!(StatusLine::for_phase(false), RUNNING_STATUS);
        assert_eq!(StatusLine::for_phase(true), GAME_OVER_STATUS);
    }

    #[test]
    fn test_border_takes_status_color() {
        let running = draw_chrome(RUNNING_STATUS);
        let over = draw_chrome(GAME_OVER_STATUS);

        assert_eq!(running.get(0, 0).fg, Color::LightCyan);
        assert_eq!(over.get(0, 0).fg, Color::LightRed);
    }

    #[test]
    fn test_chrome_shows_hints_and_info_lines() {
        let screen = text(&draw_chrome(GAME_OVER_STATUS));

        assert!(screen.contains("Endless Runner"));
        assert!(screen.contains("Game Over!"));
        assert!(screen.contains("[Enter/Click] Retry  [q] Quit"));
        assert!(screen.contains("Info"));
        assert!(screen.contains("Score: 12"));
    }
}
