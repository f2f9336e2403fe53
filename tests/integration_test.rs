// Integration tests for the dragging overlay
// Runs real egui frames headlessly and checks what the overlay draws

mod fixtures;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use egui::{Painter, Pos2, Rect};
use fixtures::{dates, events, grid};
use pretty_assertions::assert_eq;
use rust_calendar_drag::models::drag_state::DragState;
use rust_calendar_drag::models::event::Event;
use rust_calendar_drag::models::settings::OverlaySettings;
use rust_calendar_drag::services::overlay::OverlayController;
use rust_calendar_drag::services::visibility::OverlayVisibility;
use rust_calendar_drag::ui_egui::drag::{DragContext, DragManager};
use rust_calendar_drag::ui_egui::theme::OverlayTheme;
use rust_calendar_drag::ui_egui::{
    ContentSize, DraggingEvent, DraggingEventWrapper, EventContentRenderer, OverlayContent,
    OverlayFrame,
};

/// Run one headless frame and return how many shapes were emitted.
fn run_frame(paint: impl FnOnce(&Painter)) -> usize {
    let ctx = egui::Context::default();
    let mut paint = Some(paint);
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(paint) = paint.take() {
                paint(ui.painter());
            }
        });
    });
    output.shapes.len()
}

fn frame<'a>(
    drag: &'a DragState,
    theme: &'a OverlayTheme,
    settings: &'a OverlaySettings,
    visible_days: usize,
) -> OverlayFrame<'a> {
    OverlayFrame {
        drag,
        layout: grid::layout(visible_days),
        offset: 2.0,
        origin: Pos2::ZERO,
        theme,
        settings,
    }
}

#[derive(Default)]
struct CountingContent {
    calls: Cell<usize>,
    seen: RefCell<Vec<(Option<String>, ContentSize)>>,
}

impl EventContentRenderer for CountingContent {
    fn render(&self, _: &Painter, _: Rect, event: Option<&Event>, size: ContentSize) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.seen
            .borrow_mut()
            .push((event.map(|e| e.title.clone()), size));
        true
    }
}

#[test]
fn test_inactive_drag_draws_nothing() {
    let theme = OverlayTheme::light();
    let settings = OverlaySettings::default();
    let drag = DragState::idle();
    let full_calls = Cell::new(0);
    let full = |_: &Painter, _: &OverlayFrame<'_>, _: Option<&dyn EventContentRenderer>| {
        full_calls.set(full_calls.get() + 1);
        true
    };

    let baseline = run_frame(|_| {});
    let mut outcome = None;
    let shapes = run_frame(|painter| {
        outcome = Some(
            DraggingEventWrapper::new()
                .render_dragging_event(&full)
                .show(painter, &frame(&drag, &theme, &settings, 7)),
        );
    });

    assert_eq!(outcome, Some(OverlayVisibility::Hidden));
    assert_eq!(shapes, baseline);
    assert_eq!(full_calls.get(), 0);
}

#[test]
fn test_full_override_replaces_built_in_overlay() {
    let theme = OverlayTheme::light();
    let settings = OverlaySettings::default();
    let drag = events::dragging(Some(events::planning()), 2);
    let content = CountingContent::default();
    let passthrough = Cell::new(false);
    let full = |_: &Painter, _: &OverlayFrame<'_>, render_event: Option<&dyn EventContentRenderer>| {
        passthrough.set(render_event.is_some());
        true
    };

    let baseline = run_frame(|_| {});
    let mut outcome = None;
    let shapes = run_frame(|painter| {
        outcome = Some(
            DraggingEventWrapper::new()
                .render_event(&content)
                .render_dragging_event(&full)
                .show(painter, &frame(&drag, &theme, &settings, 7)),
        );
    });

    assert_eq!(outcome, Some(OverlayVisibility::Delegated));
    assert!(passthrough.get());
    // Nothing from the built-in overlay, and the content renderer is left to the override
    assert_eq!(shapes, baseline);
    assert_eq!(content.calls.get(), 0);
}

#[test]
fn test_built_in_overlay_calls_content_renderer_with_live_size() {
    let theme = OverlayTheme::light();
    let settings = OverlaySettings::default();
    let drag = events::dragging(Some(events::planning()), 2);
    let content = CountingContent::default();

    let baseline = run_frame(|_| {});
    let mut outcome = None;
    let shapes = run_frame(|painter| {
        outcome = Some(
            DraggingEventWrapper::new()
                .render_event(&content)
                .show(painter, &frame(&drag, &theme, &settings, 7)),
        );
    });

    assert_eq!(outcome, Some(OverlayVisibility::BuiltIn));
    assert!(shapes > baseline);
    assert_eq!(content.calls.get(), 1);
    assert_eq!(
        content.seen.borrow()[0],
        (
            Some("Planning".to_string()),
            ContentSize {
                width: 100.0,
                height: 60.0
            }
        )
    );
}

#[test]
fn test_default_content_is_title_or_nothing() {
    let theme = OverlayTheme::dark();
    let settings = OverlaySettings::default();
    let titled = events::dragging(Some(events::planning()), 2);
    let mut untitled_event = events::planning();
    untitled_event.title = String::new();
    untitled_event.color = None;
    let untitled = events::dragging(Some(untitled_event), 2);
    let no_event = events::dragging(None, 2);

    let mut results = Vec::new();
    run_frame(|painter| {
        for drag in [&titled, &untitled, &no_event] {
            results.push(DraggingEvent::new().paint(painter, &frame(drag, &theme, &settings, 7)));
        }
    });

    assert_eq!(results[0].content, OverlayContent::Title);
    assert_eq!(results[1].content, OverlayContent::Empty);
    assert_eq!(results[2].content, OverlayContent::Empty);
    assert_eq!(
        results[0].rect,
        Rect::from_min_size(Pos2::new(249.0, 540.0), egui::vec2(100.0, 60.0))
    );
}

#[test]
fn test_unparsable_colour_paints_transparent_box() {
    let theme = OverlayTheme::light();
    let settings = OverlaySettings::default();
    let mut event = events::planning();
    // Multi-byte characters with the byte length of "#RRGGBB"
    event.color = Some("#a\u{e9}a\u{e9}".to_string());
    assert!(event.validate().is_err());
    let drag = events::dragging(Some(event), 2);

    let mut outcome = None;
    run_frame(|painter| {
        outcome = Some(
            DraggingEventWrapper::new().show(painter, &frame(&drag, &theme, &settings, 7)),
        );
    });

    assert_eq!(outcome, Some(OverlayVisibility::BuiltIn));
    assert_eq!(
        theme.box_style(drag.color(), &settings, None).fill,
        egui::Color32::TRANSPARENT
    );
}

#[test]
fn test_custom_edges_replace_default_dots() {
    let theme = OverlayTheme::light();
    let settings = OverlaySettings::default();
    let drag = events::dragging(Some(events::planning()), 2);
    let top_rects = RefCell::new(Vec::new());
    let bottom_calls = Cell::new(0);
    let top = |_: &Painter, rect: Rect| top_rects.borrow_mut().push(rect);
    let bottom = |_: &Painter, _: Rect| bottom_calls.set(bottom_calls.get() + 1);

    let mut painted = None;
    run_frame(|painter| {
        painted = Some(
            DraggingEvent::new()
                .top_edge(&top)
                .bottom_edge(&bottom)
                .paint(painter, &frame(&drag, &theme, &settings, 1)),
        );
    });

    let painted = painted.unwrap();
    assert_eq!(top_rects.borrow().as_slice(), &[painted.rect]);
    assert_eq!(bottom_calls.get(), 1);
}

#[test]
fn test_drag_across_days_slides_overlay() {
    let settings = OverlaySettings::default();
    let index = grid::week();
    let layout = grid::layout(7);
    let theme = OverlayTheme::light();
    let mut state = DragState::idle();
    let mut manager = DragManager::new();
    let mut controller = OverlayController::new(settings.offset_animation());

    manager.begin(
        &mut state,
        DragContext::from_event(events::planning(), 540.0),
        dates::day(2),
    );
    let first = controller.update(&state, &index, dates::day(0), 7, Duration::ZERO);
    assert_eq!(first, Some(2.0));

    manager.update_hover(&mut state, dates::day(5), 600.0);
    let sliding = controller
        .update(&state, &index, dates::day(0), 7, Duration::from_millis(40))
        .unwrap();
    assert!(sliding > 2.0 && sliding < 5.0);

    let settled = controller
        .update(&state, &index, dates::day(0), 7, Duration::from_millis(100))
        .unwrap();
    let overlay = OverlayFrame {
        drag: &state,
        layout,
        offset: settled,
        origin: Pos2::ZERO,
        theme: &theme,
        settings: &settings,
    };
    assert_eq!(overlay.event_rect().min, Pos2::new(549.0, 600.0));

    // Dragging past the end of the week pins to the last column
    manager.update_hover(&mut state, dates::day(12), 600.0);
    let pinned = controller
        .update(&state, &index, dates::day(0), 7, Duration::from_secs(1))
        .unwrap();
    assert_eq!(pinned, 6.0);

    let moved = manager.finish(&mut state).unwrap();
    assert_eq!(moved.start.date_naive(), dates::monday() + chrono::Duration::days(12));
    assert_eq!(controller.update(&state, &index, dates::day(0), 7, Duration::ZERO), None);
}
