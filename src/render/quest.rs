//! Quest UI rendering (tracker, quest log, detail panel, session overlays)

use macroquad::prelude::*;

use super::theme::*;
use super::widgets::{DetailPanelWidget, QuestWidget, QuestWidgetFactory};
use crate::session::GameSession;
use crate::ui::{QuestLog, QuestLogInput, QuestLogTab, QuestViewRegistry};

pub type WidgetLog = QuestLog<QuestWidgetFactory, DetailPanelWidget>;

const PANEL_WIDTH: f32 = 380.0;
const PANEL_HEIGHT: f32 = 420.0;
const DETAIL_WIDTH: f32 = 260.0;
const ENTRY_HEIGHT: f32 = 26.0;

/// Clickable regions of the quest log for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct QuestLogLayout {
    pub panel: Rect,
    pub tabs: [(QuestLogTab, Rect); 2],
    /// One rect per visible entry, top to bottom
    pub entries: Vec<Rect>,
    /// Entries that did not fit
    pub overflow: usize,
}

impl QuestLogLayout {
    /// Lay out the log centered on a `sw` x `sh` screen
    pub fn compute(sw: f32, sh: f32, entry_count: usize) -> Self {
        let panel = Rect::new(
            (sw - PANEL_WIDTH - DETAIL_WIDTH) / 2.0,
            (sh - PANEL_HEIGHT) / 2.0,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );

        let tab_y = panel.y + FRAME_THICKNESS + HEADER_HEIGHT + 6.0;
        let tab_w = (panel.w - FRAME_THICKNESS * 2.0 - 24.0) / 2.0;
        let tabs = [
            (QuestLogTab::Active, Rect::new(panel.x + FRAME_THICKNESS + 8.0, tab_y, tab_w, TAB_HEIGHT)),
            (QuestLogTab::Completed, Rect::new(panel.x + FRAME_THICKNESS + 16.0 + tab_w, tab_y, tab_w, TAB_HEIGHT)),
        ];

        let content_top = tab_y + TAB_HEIGHT + 8.0;
        let content_bottom = panel.y + panel.h - FRAME_THICKNESS - FOOTER_HEIGHT - 8.0;
        let capacity = ((content_bottom - content_top) / ENTRY_HEIGHT).max(0.0) as usize;
        let visible = entry_count.min(capacity);

        let entries = (0..visible)
            .map(|i| {
                Rect::new(
                    panel.x + FRAME_THICKNESS + 8.0,
                    content_top + i as f32 * ENTRY_HEIGHT,
                    panel.w - FRAME_THICKNESS * 2.0 - 16.0,
                    ENTRY_HEIGHT - 2.0,
                )
            })
            .collect();

        Self {
            panel,
            tabs,
            entries,
            overflow: entry_count - visible,
        }
    }

    /// Input triggered by a click at (x, y), if any
    pub fn hit_test(&self, x: f32, y: f32) -> Option<QuestLogInput> {
        let point = Vec2::new(x, y);
        if let Some((tab, _)) = self.tabs.iter().find(|(_, r)| r.contains(point)) {
            return Some(QuestLogInput::SwitchTab(*tab));
        }
        self.entries
            .iter()
            .position(|r| r.contains(point))
            .map(QuestLogInput::Select)
    }
}

pub struct QuestUiRenderer {
    max_trackers: usize,
}

impl QuestUiRenderer {
    pub fn new(max_trackers: usize) -> Self {
        Self { max_trackers }
    }

    pub fn render_quest_tracker(&self, trackers: &QuestViewRegistry<QuestWidgetFactory>) {
        if trackers.is_empty() {
            return;
        }

        let tracker_x = 10.0;
        let line_height = 18.0;
        let mut y = 20.0;

        draw_text("QUESTS", tracker_x, y, FONT_SIZE, Color::from_rgba(255, 220, 100, 255));
        y += line_height + 5.0;

        for (_, widget) in trackers.iter().take(self.max_trackers) {
            draw_rectangle(tracker_x, y - 10.0, 4.0, 12.0, widget.tint);
            draw_text(&widget.title, tracker_x + 10.0, y, FONT_SIZE, WHITE);
            draw_text(widget.category.as_str(), tracker_x + 10.0, y + line_height - 2.0, FONT_SIZE, widget.tint);
            y += line_height * 2.0 + 4.0;
        }

        if trackers.len() > self.max_trackers {
            let more = format!("...and {} more (Q to view)", trackers.len() - self.max_trackers);
            draw_text(&more, tracker_x, y, FONT_SIZE, GRAY);
        }
    }

    /// Draw the quest log and return its layout for hit testing
    pub fn render_quest_log(&self, log: &WidgetLog) -> QuestLogLayout {
        let (sw, sh) = (screen_width(), screen_height());
        let list = log.current_list();
        let layout = QuestLogLayout::compute(sw, sh, list.len());
        let panel = layout.panel;

        draw_rectangle(0.0, 0.0, sw, sh, OVERLAY_DIM);
        self.draw_panel_frame(panel.x, panel.y, panel.w, panel.h);
        self.draw_corner_accents(panel.x, panel.y, panel.w, panel.h);

        // ===== HEADER =====
        let header_x = panel.x + FRAME_THICKNESS;
        let header_y = panel.y + FRAME_THICKNESS;
        let header_w = panel.w - FRAME_THICKNESS * 2.0;
        draw_rectangle(header_x, header_y, header_w, HEADER_HEIGHT, HEADER_BG);
        draw_line(header_x + 10.0, header_y + HEADER_HEIGHT, header_x + header_w - 10.0, header_y + HEADER_HEIGHT, 2.0, HEADER_BORDER);
        draw_text("QUEST LOG", header_x + 12.0, header_y + 26.0, FONT_SIZE, TEXT_TITLE);
        draw_text("[Q] Close", header_x + header_w - 80.0, header_y + 26.0, FONT_SIZE, TEXT_DIM);

        // ===== TABS =====
        for (tab, rect) in &layout.tabs {
            let selected = *tab == log.tab();
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, if selected { SLOT_HOVER_BG } else { SLOT_BG_EMPTY });
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, if selected { SLOT_SELECTED_BORDER } else { SLOT_BORDER });
            let label = match tab {
                QuestLogTab::Active => format!("Active ({})", log.active_list().len()),
                QuestLogTab::Completed => format!("Completed ({})", log.completed_list().len()),
            };
            draw_text(&label, rect.x + 10.0, rect.y + 19.0, FONT_SIZE, if selected { TEXT_TITLE } else { TEXT_DIM });
        }

        // ===== ENTRIES =====
        if list.is_empty() {
            let empty = match log.tab() {
                QuestLogTab::Active => "No Active Quests",
                QuestLogTab::Completed => "No Completed Quests",
            };
            draw_text(empty, panel.x + 20.0, panel.y + HEADER_HEIGHT + TAB_HEIGHT + 40.0, FONT_SIZE, TEXT_DIM);
        }

        let selected = log.selected();
        for (index, ((_, widget), rect)) in list.iter().zip(&layout.entries).enumerate() {
            let is_selected = selected.as_ref().is_some_and(|q| q.code_name == widget.code_name);
            self.draw_entry(index, widget, *rect, is_selected);
        }

        if layout.overflow > 0 {
            let y = layout.entries.last().map_or(panel.y, |r| r.y + r.h) + 14.0;
            draw_text(&format!("...and {} more quests", layout.overflow), panel.x + 20.0, y, FONT_SIZE, TEXT_DIM);
        }

        // ===== FOOTER =====
        let footer_y = panel.y + panel.h - FRAME_THICKNESS - FOOTER_HEIGHT;
        draw_rectangle(header_x, footer_y, header_w, FOOTER_HEIGHT, FOOTER_BG);
        draw_line(header_x + 10.0, footer_y, header_x + header_w - 10.0, footer_y, 1.0, HEADER_BORDER);
        draw_text("[Tab] Switch  [1-9] Select", header_x + 10.0, footer_y + 20.0, FONT_SIZE, TEXT_DIM);

        if let Some(quest) = log.detail().quest() {
            self.render_detail_panel(&quest.display_name, quest.category.as_str(), &quest.code_name, panel);
        }

        layout
    }

    fn draw_entry(&self, index: usize, widget: &QuestWidget, rect: Rect, is_selected: bool) {
        if is_selected {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, SLOT_HOVER_BG);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, SLOT_SELECTED_BORDER);
        }
        draw_rectangle(rect.x + 2.0, rect.y + 4.0, 4.0, rect.h - 8.0, widget.tint);
        let name_color = if is_selected { TEXT_TITLE } else { TEXT_NORMAL };
        draw_text(&format!("{}.", index + 1), rect.x + 12.0, rect.y + 17.0, FONT_SIZE, TEXT_GOLD);
        draw_text(&widget.title, rect.x + 34.0, rect.y + 17.0, FONT_SIZE, name_color);
    }

    fn render_detail_panel(&self, title: &str, category: &str, code_name: &str, log_panel: Rect) {
        let x = log_panel.x + log_panel.w + 6.0;
        let y = log_panel.y;
        let w = DETAIL_WIDTH - 6.0;
        let h = log_panel.h;

        self.draw_panel_frame(x, y, w, h);
        draw_rectangle(x + FRAME_THICKNESS, y + FRAME_THICKNESS, w - FRAME_THICKNESS * 2.0, HEADER_HEIGHT, HEADER_BG);
        draw_text(title, x + 12.0, y + 26.0, FONT_SIZE, TEXT_TITLE);
        draw_text(&format!("Category: {}", category), x + 12.0, y + HEADER_HEIGHT + 30.0, FONT_SIZE, TEXT_NORMAL);
        draw_text(&format!("Id: {}", code_name), x + 12.0, y + HEADER_HEIGHT + 50.0, FONT_SIZE, TEXT_DIM);
    }

    pub fn render_session_overlay(&self, session: &GameSession) {
        let title = if session.game_over_panel_visible() {
            "GAME OVER"
        } else if session.pause_panel_visible() {
            "PAUSED"
        } else {
            return;
        };

        let (sw, sh) = (screen_width(), screen_height());
        draw_rectangle(0.0, 0.0, sw, sh, OVERLAY_DIM);

        let size = 32.0;
        let dims = measure_text(title, None, size as u16, 1.0);
        draw_text(title, (sw - dims.width) / 2.0, sh / 2.0, size, TEXT_GOLD);

        let hint = if session.is_game_over() { "[R] Restart" } else { "[P] Resume" };
        let hint_dims = measure_text(hint, None, FONT_SIZE as u16, 1.0);
        draw_text(hint, (sw - hint_dims.width) / 2.0, sh / 2.0 + 30.0, FONT_SIZE, TEXT_DIM);
    }

    fn draw_panel_frame(&self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, FRAME_OUTER);
        draw_rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0, FRAME_MID);
        draw_rectangle(x + 2.0, y + 2.0, w - 4.0, h - 4.0, FRAME_INNER);
        draw_rectangle(
            x + FRAME_THICKNESS,
            y + FRAME_THICKNESS,
            w - FRAME_THICKNESS * 2.0,
            h - FRAME_THICKNESS * 2.0,
            PANEL_BG_DARK,
        );
    }

    fn draw_corner_accents(&self, x: f32, y: f32, w: f32, h: f32) {
        let s = CORNER_ACCENT_SIZE;
        for (cx, cy) in [(x, y), (x + w - s, y), (x, y + h - s), (x + w - s, y + h - s)] {
            draw_rectangle(cx, cy, s, s, FRAME_ACCENT);
        }
    }
}
