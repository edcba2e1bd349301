pub mod game_common;
pub mod runner_scene;

use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::core::session::GameSession;
use game_common::{create_game_layout, render_info_panel, render_status_bar, StatusLine};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Draw one full frame. Returns the retry control's screen area while the
/// game-over overlay is up, for mouse hit-testing.
pub fn draw_ui<R: Rng>(frame: &mut Frame, session: &GameSession, rng: &mut R) -> Option<Rect> {
    let status = StatusLine::for_phase(session.game_over);
    let area = frame.size();
    let layout = create_game_layout(frame, area, &status);

    let retry_button = runner_scene::render_play_field(frame, layout.content, session, rng);
    render_status_bar(frame, layout.status_bar, &status);
    render_info_panel(frame, layout.info_panel, info_lines(session));

    retry_button
}

fn info_lines(session: &GameSession) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(session.score.to_string(), value.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Gap: ", label),
            Span::styled(session.spawn_gap().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Obstacles: ", label),
            Span::styled(session.obstacles.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} ({})", BUILD_DATE, BUILD_COMMIT),
            label,
        )),
    ]
}
