//! Integration tests for the screen frame loop.

use std::sync::Arc;

use abacus_theme::{HapticKind, RecordingHaptics, Theme};
use abacus_ui::{
    AnimatedCounter, BoundedValue, CurrencyField, DonutChart, InputState, Key, ProgressRing,
    RenderCommand, Rect, Role, Screen, Segment, SegmentKey, Slider, StatCard, Stepper, ValueFormat,
};

const FRAME: f32 = 1.0 / 60.0;

fn recording_screen() -> (Screen, Arc<Theme>, Arc<RecordingHaptics>) {
    let haptics = Arc::new(RecordingHaptics::new());
    let theme = Arc::new(Theme::builder().haptics(haptics.clone()).build());
    let screen = Screen::new(Arc::clone(&theme), Rect::new(0.0, 0.0, 390.0, 844.0));
    (screen, theme, haptics)
}

fn tap_at(input: &mut InputState, x: f32, y: f32) {
    input.set_pointer_pos(x, y);
    input.pointer_down();
    input.pointer_up();
}

#[test]
fn test_loan_screen_settles() {
    let (mut screen, theme, _haptics) = recording_screen();

    screen.add(ProgressRing::new(
        Arc::clone(&theme),
        Rect::new(20.0, 20.0, 160.0, 160.0),
        "Paid off",
        0.35,
    ));
    screen.add(AnimatedCounter::new(
        Arc::clone(&theme),
        Rect::new(200.0, 20.0, 170.0, 40.0),
        "Monthly payment",
        1310.0,
        ValueFormat::default(),
    ));
    screen.add(StatCard::new(
        Arc::clone(&theme),
        Rect::new(20.0, 200.0, 170.0, 100.0),
        "Total interest",
        182_400.0,
        ValueFormat::Compact,
    ));
    screen.add(DonutChart::new(
        theme,
        Rect::new(20.0, 320.0, 200.0, 200.0),
        "Breakdown",
        vec![Segment::new("Principal", 250_000.0), Segment::new("Interest", 182_400.0)],
    ));

    let mut input = InputState::new();
    let first = screen.frame(&input, FRAME);
    assert_eq!(first.rerendered, 4);
    assert_eq!(first.accessibility.len(), 4);

    for _ in 0..120 {
        input.begin_frame();
        screen.frame(&input, FRAME);
    }
    input.begin_frame();
    let last = screen.frame(&input, FRAME);
    // Everything settled: nothing redraws, the draw list is stable.
    input.begin_frame();
    let settled = screen.frame(&input, FRAME);
    assert_eq!(settled.rerendered, 0);
    assert_eq!(settled.commands, last.commands);

    let texts: Vec<&str> = settled
        .commands
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"35%"));
    assert!(texts.contains(&"$1,310.00"));
    assert!(texts.contains(&"182.4K"));
}

#[test]
fn test_stepper_taps_through_screen() {
    let (mut screen, theme, haptics) = recording_screen();
    let id = screen.add(Stepper::new(
        theme,
        Rect::new(20.0, 20.0, 160.0, 44.0),
        "Term (years)",
        6.0,
        1.0,
        7.0,
    ));

    let mut input = InputState::new();
    tap_at(&mut input, 170.0, 40.0);
    let frame = screen.frame(&input, FRAME);
    assert!(frame.response(id).is_some_and(|response| response.changed));

    input.begin_frame();
    tap_at(&mut input, 170.0, 40.0);
    let frame = screen.frame(&input, FRAME);
    assert!(frame.response(id).is_some_and(|response| response.tapped && !response.changed));

    assert_eq!(screen.get_mut::<Stepper>(id).map(|stepper| stepper.value()), Some(7.0));
    assert_eq!(haptics.take(), vec![HapticKind::Selection, HapticKind::Warning]);

    let node = &frame.accessibility[0].1;
    assert_eq!(node.role, Role::Adjustable);
    assert_eq!(node.value.as_deref(), Some("7"));
}

#[test]
fn test_slider_drag_over_frames() {
    let (mut screen, theme, haptics) = recording_screen();
    let id = screen.add(Slider::new(
        theme,
        Rect::new(0.0, 100.0, 300.0, 30.0),
        "Down payment",
        BoundedValue::new(0.0, 0.0, 60_000.0, 1_000.0),
        ValueFormat::default(),
    ));

    let mut input = InputState::new();
    input.set_pointer_pos(10.0, 115.0);
    input.pointer_down();
    let frame = screen.frame(&input, FRAME);
    assert!(frame.response(id).is_some_and(|response| response.drag_started));

    let mut committed = Vec::new();
    for x in [50.0, 100.0, 150.0] {
        input.begin_frame();
        input.set_pointer_pos(x, 115.0);
        let frame = screen.frame(&input, FRAME);
        assert!(frame.response(id).is_some_and(|response| response.changed));
        committed.push(screen.get_mut::<Slider>(id).map(|slider| slider.value()));
    }
    assert_eq!(committed, vec![Some(10_000.0), Some(20_000.0), Some(30_000.0)]);

    input.begin_frame();
    input.pointer_up();
    let frame = screen.frame(&input, FRAME);
    assert!(frame.response(id).is_some_and(|response| response.drag_ended));
    assert_eq!(haptics.take(), vec![HapticKind::Medium, HapticKind::Light]);
}

#[test]
fn test_currency_field_through_screen() {
    let (mut screen, theme, _haptics) = recording_screen();
    let id = screen.add(CurrencyField::new(
        theme,
        Rect::new(20.0, 20.0, 300.0, 44.0),
        "Loan amount",
    ));

    let mut input = InputState::new();
    tap_at(&mut input, 60.0, 40.0);
    let frame = screen.frame(&input, FRAME);
    assert!(frame.response(id).is_some_and(|response| response.focused));

    input.begin_frame();
    input.text("12a3.4.5");
    screen.frame(&input, FRAME);

    let field = screen.get_mut::<CurrencyField>(id);
    assert_eq!(field.as_ref().map(|field| field.text()), Some("123.4.5"));
    assert_eq!(field.map(|field| field.value()), Some(0.0));

    input.begin_frame();
    input.key_down(Key::Backspace);
    input.key_down(Key::Backspace);
    input.key_down(Key::Enter);
    let frame = screen.frame(&input, FRAME);
    let response = frame.response(id);
    assert!(response.is_some_and(|response| response.unfocused));
}

#[test]
fn test_donut_selection_survives_transition() {
    let (mut screen, theme, _haptics) = recording_screen();
    let id = screen.add(DonutChart::new(
        theme,
        Rect::new(0.0, 0.0, 200.0, 200.0),
        "Budget",
        vec![Segment::new("Rent", 50.0), Segment::new("Food", 50.0)],
    ));

    let rent = SegmentKey::from("Rent");
    if let Some(chart) = screen.get_mut::<DonutChart>(id) {
        chart.toggle_selection(&rent);
        chart.set_segments(vec![Segment::new("Rent", 70.0), Segment::new("Fun", 30.0)]);
    }

    let input = InputState::new();
    for _ in 0..120 {
        screen.frame(&input, FRAME);
    }
    let chart = screen.get_mut::<DonutChart>(id);
    assert_eq!(chart.and_then(|chart| chart.selected().cloned()), Some(rent));
}

#[test]
fn test_accessibility_adjust_via_screen() {
    let (mut screen, theme, _haptics) = recording_screen();
    let ring = screen.add(ProgressRing::new(
        Arc::clone(&theme),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        "Saved",
        0.2,
    ));
    let stepper = screen.add(Stepper::new(
        theme,
        Rect::new(0.0, 120.0, 160.0, 44.0),
        "Years",
        1.0,
        1.0,
        3.0,
    ));

    assert!(!screen.accessibility_increment(ring));
    assert!(!screen.accessibility_decrement(stepper));
    assert!(screen.accessibility_increment(stepper));
    assert!(screen.accessibility_increment(stepper));
    assert!(!screen.accessibility_increment(stepper));
}
