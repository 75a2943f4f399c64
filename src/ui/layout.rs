//! Geometry for the page, the trigger and the overlay.
//!
//! Both the renderer and pointer hit-testing read positions from here, so a
//! press is always attributed to the element drawn under it. All coordinates
//! are 1-indexed terminal cells, matching [`Layer::move_to`].
//!
//! [`Layer::move_to`]: crate::ui::portal::Layer::move_to
//!
//! # Overlay layout
//!
//! ```text
//! ┌───────────────────────────── backdrop ─────────────────────────────┐
//! │                      spacer (non-interactive)                      │
//! │  ┌─────────────────────────── panel ─────────────────────── [x] ┐  │
//! │  │ recent      │ trending cards                │ suggestions    │  │
//! │  │ searches    │ ┌──────┐ ┌──────┐ ┌──────┐    │                │  │
//! │  │             │ └──────┘ └──────┘ └──────┘    │                │  │
//! │  │ ┌──────────────────── overlay input ───────────────────────┐ │  │
//! │  │ └──────────────────────────────────────────────────────────┘ │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

use crate::app::props::ContainerStyle;

/// Rows used by the header (title line and separator).
pub const HEADER_ROWS: usize = 2;

/// Height of a bordered single-line input box.
pub const INPUT_BOX_ROWS: usize = 3;

/// Default maximum width of the trigger container.
pub const DEFAULT_TRIGGER_WIDTH: usize = 48;

/// Default number of rows between the trigger and the bottom edge.
pub const DEFAULT_TRIGGER_OFFSET: usize = 2;

const PANEL_MARGIN: usize = 2;
const RECENT_COLUMN_MAX: usize = 24;
const SUGGESTION_COLUMN_MAX: usize = 32;
const CARD_WIDTH: usize = 22;
const CARD_HEIGHT: usize = 5;
const CARD_GAP: usize = 1;
const CLOSE_CONTROL_WIDTH: usize = 3;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Leftmost column (1-indexed).
    pub x: usize,
    /// Top row (1-indexed).
    pub y: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the cell at `(row, col)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        !self.is_empty()
            && row >= self.y
            && row < self.y + self.height
            && col >= self.x
            && col < self.x + self.width
    }

    /// Shrinks the rectangle by `n` cells on every side.
    #[must_use]
    pub const fn inset(&self, n: usize) -> Self {
        let width = self.width.saturating_sub(n * 2);
        let height = self.height.saturating_sub(n * 2);
        Self::new(self.x + n, self.y + n, width, height)
    }

    /// Bottom row covered by the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        (self.y + self.height).saturating_sub(1)
    }

    /// Rightmost column covered by the rectangle.
    #[must_use]
    pub const fn right(&self) -> usize {
        (self.x + self.width).saturating_sub(1)
    }
}

/// Positions of the always-mounted page elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Whole pane.
    pub viewport: Rect,
    /// Header title line.
    pub header: Rect,
    /// Bordered trigger container.
    pub trigger: Rect,
}

impl PageLayout {
    /// Computes the page layout for a pane of `rows` x `cols`.
    ///
    /// The trigger is horizontally centred, at most `container_width` wide
    /// (never wider than the pane minus a two-column margin), and sits
    /// `container_offset` rows above the bottom edge without overlapping the
    /// header when the pane is tall enough.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, style: &ContainerStyle) -> Self {
        let viewport = Rect::new(1, 1, cols, rows);
        let header = Rect::new(1, 1, cols, rows.min(1));

        let max_width = style.width.unwrap_or(DEFAULT_TRIGGER_WIDTH);
        let width = max_width.min(cols.saturating_sub(4)).max(cols.min(12));
        let offset = style.offset.unwrap_or(DEFAULT_TRIGGER_OFFSET);

        let lowest_top = rows.saturating_sub(offset + INPUT_BOX_ROWS) + 1;
        let highest_top = HEADER_ROWS + 1;
        let y = if rows >= HEADER_ROWS + INPUT_BOX_ROWS {
            lowest_top.max(highest_top).min(rows + 1 - INPUT_BOX_ROWS)
        } else {
            1
        };
        let height = INPUT_BOX_ROWS.min(rows);
        let x = cols.saturating_sub(width) / 2 + 1;

        Self {
            viewport,
            header,
            trigger: Rect::new(x, y, width, height),
        }
    }
}

/// Positions of every overlay element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Full-pane click target behind everything else.
    pub backdrop: Rect,
    /// Top band of the backdrop. Presses fall through to the backdrop.
    pub spacer: Rect,
    /// Bordered content panel.
    pub panel: Rect,
    /// Close control drawn on the panel's top border.
    pub close_control: Rect,
    /// Bordered overlay search input at the bottom of the panel.
    pub input: Rect,
    /// Recent searches column.
    pub recent: Rect,
    /// One row per visible recent search.
    pub recent_rows: Vec<Rect>,
    /// Trending grid area.
    pub trending: Rect,
    /// One card per visible trending product.
    pub cards: Vec<Rect>,
    /// Suggested queries column.
    pub suggestions: Rect,
    /// One row per visible suggested query.
    pub suggestion_rows: Vec<Rect>,
}

impl OverlayLayout {
    /// Computes the overlay layout for a pane of `rows` x `cols`.
    ///
    /// `recent`, `trending` and `suggested` are the number of entries of each
    /// list. Entries that do not fit are not given a rectangle and are not
    /// rendered.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, recent: usize, trending: usize, suggested: usize) -> Self {
        let backdrop = Rect::new(1, 1, cols, rows);

        let spacer_rows = if rows >= 16 { rows / 4 } else { 0 };
        let spacer = Rect::new(1, 1, cols, spacer_rows);

        let margin = if cols >= 40 { PANEL_MARGIN } else { 0 };
        let bottom_gap = usize::from(rows > spacer_rows + INPUT_BOX_ROWS + 2);
        let panel = Rect::new(
            1 + margin,
            spacer_rows + 1,
            cols.saturating_sub(margin * 2),
            rows.saturating_sub(spacer_rows + bottom_gap),
        );

        let close_control = if panel.width > CLOSE_CONTROL_WIDTH + 2 && panel.height > 0 {
            Rect::new(panel.right() - CLOSE_CONTROL_WIDTH - 1, panel.y, CLOSE_CONTROL_WIDTH, 1)
        } else {
            Rect::default()
        };

        let inner = panel.inset(1);
        let input_rows = INPUT_BOX_ROWS.min(inner.height);
        let input = Rect::new(
            inner.x,
            (inner.y + inner.height).saturating_sub(input_rows),
            inner.width,
            input_rows,
        );

        let content = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(input_rows));

        let recent_width = RECENT_COLUMN_MAX.min(content.width / 4);
        let suggestion_width = SUGGESTION_COLUMN_MAX.min(content.width / 3);
        let recent_col = Rect::new(content.x, content.y, recent_width, content.height);
        let suggestions_col = Rect::new(
            (content.x + content.width).saturating_sub(suggestion_width),
            content.y,
            suggestion_width,
            content.height,
        );
        let trending_area = Rect::new(
            content.x + recent_width + usize::from(recent_width > 0),
            content.y,
            content
                .width
                .saturating_sub(recent_width + suggestion_width + 2 * usize::from(recent_width > 0)),
            content.height,
        );

        Self {
            recent_rows: list_rows(recent_col, recent),
            cards: card_grid(trending_area, trending),
            suggestion_rows: list_rows(suggestions_col, suggested),
            backdrop,
            spacer,
            panel,
            close_control,
            input,
            recent: recent_col,
            trending: trending_area,
            suggestions: suggestions_col,
        }
    }
}

/// One row per entry below a heading line, clipped to the column height.
fn list_rows(column: Rect, count: usize) -> Vec<Rect> {
    let available = column.height.saturating_sub(1);
    (0..count.min(available))
        .map(|i| Rect::new(column.x, column.y + 1 + i, column.width, 1))
        .collect()
}

/// Cards laid out left to right, top to bottom, below a heading line.
fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    if area.width < CARD_WIDTH || area.height < CARD_HEIGHT + 1 {
        return vec![];
    }

    let per_row = ((area.width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1);
    let grid_rows = (area.height - 1) / CARD_HEIGHT;
    let visible = count.min(per_row * grid_rows);

    (0..visible)
        .map(|i| {
            let col = i % per_row;
            let row = i / per_row;
            Rect::new(
                area.x + col * (CARD_WIDTH + CARD_GAP),
                area.y + 1 + row * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            )
        })
        .collect()
}
