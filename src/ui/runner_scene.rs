//! Endless runner scene rendering.
//!
//! The 800×400 logical play area is scaled onto whatever cells the play
//! field gets. Everything is painted into a cell buffer first (sky, ground,
//! clouds, obstacles, player, HUD) and then stamped row-by-row as Paragraph
//! widgets, so each cell keeps its own colors.

use crate::core::constants::*;
use crate::core::entities::{Bounded, Bounds, Obstacle, Player};
use crate::core::session::GameSession;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SKY_COLOR: Color = Color::Rgb(135, 206, 235);
pub const GROUND_COLOR: Color = Color::Rgb(34, 139, 34);
pub const CLOUD_COLOR: Color = Color::White;
pub const PLAYER_COLOR: Color = Color::Rgb(200, 150, 100);
pub const OBSTACLE_COLOR: Color = Color::Rgb(0, 100, 0);
pub const TEXT_COLOR: Color = Color::Black;

const GROUND_TEXTURE: char = '░';
const SPINE_CHAR: char = '\\';
const RETRY_LABEL: &str = "[ Retry ]";
const GAME_OVER_TEXT: &str = "Game Over!";

/// One terminal cell with its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

/// Maps logical play-area units onto a grid of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// Half-open cell range `[left, right) × [top, bottom)`. May lie partly off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn column(&self, x: i32) -> i32 {
        scale_floor(x, self.cols, PLAY_WIDTH)
    }

    pub fn row(&self, y: i32) -> i32 {
        scale_floor(y, self.rows, PLAY_HEIGHT)
    }

    /// Cells covered by `bounds`, at least one cell in each direction.
    pub fn cells(&self, bounds: Bounds) -> CellRect {
        let left = self.column(bounds.x);
        let top = self.row(bounds.y);
        let right = scale_ceil(bounds.right(), self.cols, PLAY_WIDTH).max(left + 1);
        let bottom = scale_ceil(bounds.bottom(), self.rows, PLAY_HEIGHT).max(top + 1);
        CellRect {
            left,
            top,
            right,
            bottom,
        }
    }
}

fn scale_floor(value: i32, cells: u16, extent: i32) -> i32 {
    (value as i64 * cells as i64).div_euclid(extent as i64) as i32
}

fn scale_ceil(value: i32, cells: u16, extent: i32) -> i32 {
    let scaled = value as i64 * cells as i64;
    (scaled + extent as i64 - 1).div_euclid(extent as i64) as i32
}

/// Cell grid for one frame of the play field.
pub struct SceneBuffer {
    viewport: Viewport,
    cells: Vec<Vec<Cell>>,
}

impl SceneBuffer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cells: vec![vec![Cell::default(); viewport.cols as usize]; viewport.rows as usize],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize)
    }

    fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get_mut(row as usize)?.get_mut(col as usize)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Text of one row, for assertions and debugging.
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    /// Paint a background over a cell range, clearing any glyphs.
    fn fill(&mut self, rect: CellRect, bg: Color) {
        for row in rect.top..rect.bottom {
            for col in rect.left..rect.right {
                if let Some(cell) = self.get_mut(col, row) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Like `fill`, but knocks out the four corners when there is room.
    fn fill_rounded(&mut self, rect: CellRect, bg: Color) {
        let rounded = rect.right - rect.left > 2 && rect.bottom - rect.top > 1;
        for row in rect.top..rect.bottom {
            for col in rect.left..rect.right {
                let corner = (row == rect.top || row == rect.bottom - 1)
                    && (col == rect.left || col == rect.right - 1);
                if rounded && corner {
                    continue;
                }
                if let Some(cell) = self.get_mut(col, row) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Draw a glyph, keeping the cell's background.
    fn put_char(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if let Some(cell) = self.get_mut(col, row) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    /// Draw text starting at `col`, clipped to the grid.
    fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color, bold: bool) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.get_mut(col + i as i32, row) {
                cell.ch = ch;
                cell.fg = fg;
                cell.bold = bold;
            }
        }
    }

    /// Stamp the buffer into `area`, merging runs of same-styled cells into spans.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.bottom() {
                break;
            }

            let mut spans: Vec<Span> = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for cell in row_data {
                let style = cell_style(cell);
                if style != current_style && !current_text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
                }
                current_style = style;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            let row_area = Rect::new(area.x, y, self.viewport.cols.min(area.width), 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

fn cell_style(cell: &Cell) -> Style {
    let style = Style::default().fg(cell.fg).bg(cell.bg);
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Paint the whole play field for `session`.
///
/// Returns where the retry control landed (in buffer cells) when the session
/// is over. Cloud positions and cactus spines are drawn from `rng` on every
/// call, so they shift from frame to frame.
pub fn paint_scene<R: Rng>(
    buffer: &mut SceneBuffer,
    session: &GameSession,
    rng: &mut R,
) -> Option<CellRect> {
    paint_background(buffer, session.background_offset);
    paint_clouds(buffer, session.config().cloud_count, rng);
    for obstacle in &session.obstacles {
        paint_obstacle(buffer, obstacle, rng);
    }
    paint_player(buffer, &session.player);
    paint_score(buffer, session.score);

    if session.game_over {
        Some(paint_game_over(buffer))
    } else {
        None
    }
}

fn paint_background(buffer: &mut SceneBuffer, background_offset: i32) {
    let viewport = buffer.viewport();
    let ground_row = viewport.row(GROUND_TOP);

    buffer.fill(
        CellRect {
            left: 0,
            top: 0,
            right: viewport.cols as i32,
            bottom: ground_row,
        },
        SKY_COLOR,
    );
    buffer.fill(
        CellRect {
            left: 0,
            top: ground_row,
            right: viewport.cols as i32,
            bottom: viewport.rows as i32,
        },
        GROUND_COLOR,
    );

    // Ground texture scrolls with the background offset
    let shift = viewport.column(-background_offset);
    for col in 0..viewport.cols as i32 {
        if (col + shift).rem_euclid(5) == 0 {
            buffer.put_char(col, ground_row, GROUND_TEXTURE, Color::Rgb(20, 100, 20));
        }
    }
}

fn paint_clouds<R: Rng>(buffer: &mut SceneBuffer, count: usize, rng: &mut R) {
    let viewport = buffer.viewport();
    for _ in 0..count {
        let x = rng.gen_range(0..PLAY_WIDTH);
        let y = rng.gen_range(0..CLOUD_BAND_HEIGHT);
        let rect = viewport.cells(Bounds::new(x, y, CLOUD_WIDTH, CLOUD_HEIGHT));
        buffer.fill_rounded(rect, CLOUD_COLOR);
    }
}

fn paint_obstacle<R: Rng>(buffer: &mut SceneBuffer, obstacle: &Obstacle, rng: &mut R) {
    let viewport = buffer.viewport();
    let body = obstacle.bounds();

    // Arms first so the trunk paints over their inner ends
    let left_arm = Bounds::new(body.x - 10, body.y + 15, 15, 10);
    let right_arm = Bounds::new(body.right() - 5, body.y + 25, 15, 10);
    buffer.fill(viewport.cells(left_arm), OBSTACLE_COLOR);
    buffer.fill(viewport.cells(right_arm), OBSTACLE_COLOR);
    buffer.fill(viewport.cells(body), OBSTACLE_COLOR);

    for _ in 0..SPINES_PER_OBSTACLE {
        let x = body.x + rng.gen_range(0..body.width);
        let y = body.y + rng.gen_range(0..body.height);
        buffer.put_char(viewport.column(x), viewport.row(y), SPINE_CHAR, Color::White);
    }
}

fn paint_player(buffer: &mut SceneBuffer, player: &Player) {
    let viewport = buffer.viewport();
    let body = player.bounds();
    let rect = viewport.cells(body);
    buffer.fill_rounded(rect, PLAYER_COLOR);

    // Ear pokes out above the head
    let ear = viewport.cells(Bounds::new(body.x + 5, body.y - 10, 20, 10));
    for col in ear.left..ear.right {
        buffer.put_char(col, ear.bottom - 1, '▲', PLAYER_COLOR);
    }

    let eye_row = viewport.row(body.y + 5);
    buffer.put_char(viewport.column(body.x + 10), eye_row, '●', Color::Black);
    buffer.put_char(viewport.column(body.x + 25), eye_row, '●', Color::Black);

    let mouth_row = viewport.row(body.y + 15);
    if mouth_row != eye_row {
        for col in viewport.column(body.x + 15)..viewport.column(body.x + 25) {
            buffer.put_char(col, mouth_row, '─', Color::Black);
        }
    }
}

/// Row for text whose baseline sits at logical `y`.
fn text_row(viewport: Viewport, y: i32) -> i32 {
    (viewport.row(y) - 1).max(0)
}

fn paint_score(buffer: &mut SceneBuffer, score: u64) {
    let viewport = buffer.viewport();
    buffer.put_str(
        viewport.column(SCORE_TEXT_X),
        text_row(viewport, SCORE_TEXT_Y),
        &format!("Score: {}", score),
        TEXT_COLOR,
        true,
    );
}

/// Overlay text plus the retry control. Returns the control's cells.
fn paint_game_over(buffer: &mut SceneBuffer) -> CellRect {
    let viewport = buffer.viewport();
    let cols = viewport.cols as i32;

    let text_col = viewport
        .column(GAME_OVER_TEXT_X)
        .min(cols - GAME_OVER_TEXT.len() as i32)
        .max(0);
    buffer.put_str(
        text_col,
        text_row(viewport, GAME_OVER_TEXT_Y),
        GAME_OVER_TEXT,
        TEXT_COLOR,
        true,
    );

    // Widen the control so its label always fits
    let mut button = viewport.cells(Bounds::new(
        RETRY_BUTTON_X,
        RETRY_BUTTON_Y,
        RETRY_BUTTON_WIDTH,
        RETRY_BUTTON_HEIGHT,
    ));
    let label_len = RETRY_LABEL.chars().count() as i32;
    if button.right - button.left < label_len {
        let center = (button.left + button.right) / 2;
        button.left = (center - label_len / 2).max(0);
        button.right = button.left + label_len;
    }

    buffer.fill(button, Color::Gray);
    let label_col = button.left + (button.right - button.left - label_len) / 2;
    let label_row = button.top + (button.bottom - button.top - 1) / 2;
    buffer.put_str(label_col, label_row, RETRY_LABEL, TEXT_COLOR, true);

    button
}

/// Render the play field into `area`. Returns the retry control's screen
/// rectangle while the session is over.
pub fn render_play_field<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    rng: &mut R,
) -> Option<Rect> {
    if area.height < 2 || area.width < 10 {
        return None;
    }

    let mut buffer = SceneBuffer::new(Viewport::new(area.width, area.height));
    let button = paint_scene(&mut buffer, session, rng);
    buffer.render(frame, area);

    button.map(|cells| to_screen(cells, area))
}

/// Clip a buffer-relative cell range to `area` and translate it to screen coordinates.
fn to_screen(cells: CellRect, area: Rect) -> Rect {
    let left = cells.left.clamp(0, area.width as i32) as u16;
    let right = cells.right.clamp(0, area.width as i32) as u16;
    let top = cells.top.clamp(0, area.height as i32) as u16;
    let bottom = cells.bottom.clamp(0, area.height as i32) as u16;
    Rect::new(area.x + left, area.y + top, right - left, bottom - top)
}
