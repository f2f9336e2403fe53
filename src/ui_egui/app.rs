//! Demo week view hosting the dragging overlay.

use chrono::{Duration, Local, NaiveDate, TimeZone};
use egui::{Align2, Color32, FontId, Painter, Rect, Sense, Vec2};

use super::drag::{DragContext, DragManager};
use super::render_props::{ContentSize, OverlayFrame};
use super::theme::OverlayTheme;
use super::time_grid::{event_rect, hit_test, paint_event, paint_time_grid, pointer_to_slot};
use super::wrapper::DraggingEventWrapper;
use crate::models::drag_state::DragState;
use crate::models::event::Event;
use crate::models::settings::OverlaySettings;
use crate::models::visible_dates::VisibleDateIndex;
use crate::services::geometry::OverlayLayout;
use crate::services::overlay::OverlayController;
use crate::utils::date::{date_from_day_unix, day_unix, get_week_start};

const HEADER_HEIGHT: f32 = 24.0;
/// Longest frame step fed to the offset animation
const MAX_FRAME_STEP: f32 = 0.1;

pub struct DragOverlayApp {
    settings: OverlaySettings,
    theme: OverlayTheme,
    events: Vec<Event>,
    window_start: NaiveDate,
    drag_state: DragState,
    drag_manager: DragManager,
    /// Index into `events` of the event being dragged
    dragged_index: Option<usize>,
    overlay: OverlayController,
    show_time_range: bool,
}

impl DragOverlayApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: OverlaySettings, theme: OverlayTheme) -> Self {
        theme.apply_to_context(&cc.egui_ctx);

        let window_start = home_window_start(settings.visible_days);

        Self {
            overlay: OverlayController::new(settings.offset_animation()),
            events: sample_events(window_start),
            window_start,
            settings,
            theme,
            drag_state: DragState::idle(),
            drag_manager: DragManager::new(),
            dragged_index: None,
            show_time_range: false,
        }
    }

    fn visible_index(&self) -> VisibleDateIndex {
        VisibleDateIndex::from_start_date(self.window_start, self.settings.visible_days)
    }

    fn shift_window(&mut self, days: i64) {
        self.window_start += Duration::days(days);
        log::debug!("Window moved to {}", self.window_start);
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let step = self.settings.visible_days as i64;
            if ui.button("◀").clicked() {
                self.shift_window(-step);
            }
            if ui.button("Today").clicked() {
                self.window_start = home_window_start(self.settings.visible_days);
            }
            if ui.button("▶").clicked() {
                self.shift_window(step);
            }
            ui.separator();
            ui.checkbox(&mut self.show_time_range, "Show time range while dragging");
        });
    }

    fn render_week(&mut self, ui: &mut egui::Ui, dt: f32) {
        let index = self.visible_index();
        let first_day = index.first().unwrap_or_else(|| day_unix(self.window_start));
        let columns = self.settings.visible_days;

        let width = ui.available_width();
        let column_width = ((width - self.settings.hour_axis_width) / columns as f32).max(20.0);
        let layout = OverlayLayout {
            minute_height: self.settings.minute_height,
            column_width,
            hour_axis_width: self.settings.hour_axis_width,
            day_start_minutes: self.settings.day_start_minutes,
            visible_days: columns,
            columns,
        };

        let (header, _) = ui.allocate_exact_size(Vec2::new(width, HEADER_HEIGHT), Sense::hover());
        paint_header(ui.painter(), header, &index, &layout, &self.theme);

        egui::ScrollArea::vertical().show(ui, |ui| {
            let size = Vec2::new(width, self.settings.grid_height());
            let (body, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
            let origin = body.min;
            let painter = ui.painter_at(body);

            paint_time_grid(&painter, body, &layout, self.settings.day_end_minutes, &self.theme);
            for (i, event) in self.events.iter().enumerate() {
                if let Some(rect) = event_rect(event, &index, origin, &layout) {
                    paint_event(&painter, rect, event, &self.theme, self.dragged_index == Some(i));
                }
            }

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((i, event)) = hit_test(&self.events, pos, &index, origin, &layout) {
                        let (day, minutes) = pointer_to_slot(pos, origin, &layout, first_day);
                        let context = DragContext::from_event(event.clone(), minutes);
                        self.drag_manager.begin(&mut self.drag_state, context, day);
                        self.dragged_index = Some(i);
                    }
                }
            }

            if response.dragged() && self.drag_manager.is_active() {
                match ui.ctx().pointer_latest_pos() {
                    Some(pos) => {
                        let (day, minutes) = pointer_to_slot(pos, origin, &layout, first_day);
                        self.drag_manager.update_hover(&mut self.drag_state, day, minutes);
                    }
                    None => self.drag_manager.clear_hover(&mut self.drag_state),
                }
            }

            if response.drag_stopped() {
                if let Some(moved) = self.drag_manager.finish(&mut self.drag_state) {
                    if let Some(slot) = self.dragged_index.and_then(|i| self.events.get_mut(i)) {
                        *slot = moved;
                    }
                }
                self.dragged_index = None;
            }

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) && self.drag_manager.is_active() {
                self.drag_manager.cancel(&mut self.drag_state);
                self.dragged_index = None;
            }

            let step = std::time::Duration::from_secs_f32(dt.clamp(0.0, MAX_FRAME_STEP));
            let offset = self
                .overlay
                .update(&self.drag_state, &index, first_day, columns, step)
                .unwrap_or_default();

            let frame = OverlayFrame {
                drag: &self.drag_state,
                layout,
                offset,
                origin,
                theme: &self.theme,
                settings: &self.settings,
            };
            let time_range = |painter: &Painter, rect: Rect, event: Option<&Event>, size: ContentSize| {
                paint_time_range(painter, rect, event, size, &frame)
            };
            let mut wrapper = DraggingEventWrapper::new();
            if self.show_time_range {
                wrapper = wrapper.render_event(&time_range);
            }
            wrapper.show(ui.painter(), &frame);
        });
    }
}

impl eframe::App for DragOverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.render_toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_week(ui, dt));

        if self.drag_state.active || self.overlay.is_animating() {
            ctx.request_repaint();
        }
    }
}

/// Weeks start on Monday; shorter windows start today.
fn home_window_start(visible_days: usize) -> NaiveDate {
    let today = Local::now().date_naive();
    if visible_days >= 7 {
        get_week_start(today, 1)
    } else {
        today
    }
}

fn paint_header(
    painter: &Painter,
    header: Rect,
    index: &VisibleDateIndex,
    layout: &OverlayLayout,
    theme: &OverlayTheme,
) {
    for (column, day) in index.dates().iter().enumerate() {
        let Some(date) = date_from_day_unix(*day) else {
            continue;
        };
        let x = header.left() + layout.hour_axis_width + (column as f32 + 0.5) * layout.column_width;
        painter.text(
            egui::pos2(x, header.center().y),
            Align2::CENTER_CENTER,
            date.format("%a %d").to_string(),
            FontId::proportional(13.0),
            theme.text_primary,
        );
    }
}

/// Content renderer showing the dragged title and the time range it would drop at.
fn paint_time_range(
    painter: &Painter,
    rect: Rect,
    event: Option<&Event>,
    size: ContentSize,
    frame: &OverlayFrame<'_>,
) -> bool {
    if size.height < 14.0 {
        return false;
    }
    let start = frame.drag.start_minutes;
    let end = start + frame.drag.duration_minutes;
    let label = |m: f32| format!("{:02}:{:02}", (m as u32) / 60, (m as u32) % 60);

    let title = event.filter(|e| e.has_title()).map(|e| e.title.as_str()).unwrap_or("New event");
    painter.text(
        rect.left_top() + Vec2::new(3.0, 2.0),
        Align2::LEFT_TOP,
        format!("{}\n{} - {}", title, label(start), label(end)),
        FontId::proportional(11.0),
        Color32::WHITE,
    );
    true
}

fn sample_events(week_start: NaiveDate) -> Vec<Event> {
    let at = |day: i64, hour: u32, minutes: i64| {
        let naive = (week_start + Duration::days(day)).and_hms_opt(hour, 0, 0)?;
        let start = Local.from_local_datetime(&naive).single()?;
        Some((start, start + Duration::minutes(minutes)))
    };

    [
        (0, 9, 60, "Standup", "#3B82F6"),
        (1, 13, 90, "Design review", "#10B981"),
        (3, 10, 45, "1:1", "#F59E0B"),
        (4, 15, 120, "Focus time", "#8B5CF6"),
    ]
    .into_iter()
    .filter_map(|(day, hour, minutes, title, color)| {
        let (start, end) = at(day, hour, minutes)?;
        Event::new(title, start, end)
            .and_then(|event| event.with_color(color))
            .ok()
    })
    .collect()
}
