use super::*;
use crate::app::{Message, Model, update};
use crate::config::ThemeMode;
use crate::editor::{ERROR_MARKER, InputEvent};
use crate::eval::Operator;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 24);
    Terminal::new(backend).unwrap()
}

fn type_keys(mut model: Model, keys: &str) -> Model {
    for c in keys.chars() {
        let input = InputEvent::from_char(c).unwrap();
        model = update(model, Message::Input(input));
    }
    model
}

fn rendered_rows(model: &Model) -> Vec<String> {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let cells: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
    cells.chunks(width).map(|row| row.concat()).collect()
}

#[test]
fn test_empty_display_shows_zero_placeholder() {
    let model = Model::new((60, 24));
    let rows = rendered_rows(&model);
    assert!(rows[1].trim_end().trim_end_matches('│').trim_end().ends_with('0'));
}

#[test]
fn test_display_shows_buffer_right_aligned() {
    let model = type_keys(Model::new((60, 24)), "12+3.5");
    let rows = rendered_rows(&model);
    let inner = rows[1].trim_end_matches('│');
    assert!(inner.ends_with("12+3.5"), "display row was {:?}", rows[1]);
}

#[test]
fn test_display_shows_result_after_evaluate() {
    let model = type_keys(Model::new((60, 24)), "6*7=");
    let rows = rendered_rows(&model);
    assert!(rows[1].contains("42"));
}

#[test]
fn test_display_shows_error_marker() {
    let model = type_keys(Model::new((60, 24)), "5/0=");
    let rows = rendered_rows(&model);
    assert!(rows[1].contains(ERROR_MARKER));
}

#[test]
fn test_keypad_labels_are_rendered() {
    let model = Model::new((60, 24));
    let content = rendered_rows(&model).concat();
    for row in &KEYPAD {
        for button in *row {
            assert!(content.contains(button.label), "missing label {}", button.label);
        }
    }
}

#[test]
fn test_status_bar_shows_state() {
    let model = type_keys(Model::new((60, 24)), "1+");
    let rows = rendered_rows(&model);
    assert!(rows[23].contains("typing"));
    assert!(rows[23].contains("?:help"));
}

#[test]
fn test_error_toast_replaces_status_bar() {
    let model = type_keys(Model::new((60, 24)), "1/0=");
    let rows = rendered_rows(&model);
    assert!(rows[23].contains("[error] division by zero"));
}

#[test]
fn test_help_overlay_renders() {
    let model = update(Model::new((60, 24)), Message::ToggleHelp);
    let content = rendered_rows(&model).concat();
    assert!(content.contains("Help"));
    assert!(content.contains("Evaluate"));
}

#[test]
fn test_light_theme_renders() {
    let model = Model::new((60, 24)).with_theme(ThemeMode::Light);
    let rows = rendered_rows(&model);
    assert!(rows[23].contains("[light]"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let model = type_keys(Model::new((8, 6)), "123");
    let backend = TestBackend::new(8, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(&model, frame)).unwrap();
}

#[test]
fn test_visible_tail_keeps_end_of_long_input() {
    assert_eq!(render::visible_tail("12345", 10), "12345");
    assert_eq!(render::visible_tail("123456789", 5), "\u{2026}6789");
    assert_eq!(render::visible_tail("123", 0), "\u{2026}");
}

#[test]
fn test_hit_testing_matches_button_centers() {
    let area = Rect::new(0, 3, 40, 20);
    for (rect, button) in keypad_button_rects(area) {
        let cx = rect.x + rect.width / 2;
        let cy = rect.y + rect.height / 2;
        assert_eq!(keypad_button_at(area, cx, cy), Some(button));
    }
}

#[test]
fn test_hit_testing_covers_the_whole_keypad() {
    let area = Rect::new(0, 3, 40, 20);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            assert!(keypad_button_at(area, x, y).is_some(), "gap at ({x}, {y})");
        }
    }
}

#[test]
fn test_hit_testing_outside_keypad() {
    let area = Rect::new(0, 3, 40, 20);
    assert_eq!(keypad_button_at(area, 5, 1), None);
    assert_eq!(keypad_button_at(area, 5, 23), None);
    assert_eq!(keypad_button_at(area, 40, 10), None);
}

#[test]
fn test_specific_buttons_are_where_they_are_drawn() {
    let area = Rect::new(0, 0, 40, 20);
    // Top-left is the wide clear key, bottom-right is evaluate.
    assert_eq!(
        keypad_button_at(area, 0, 0).map(|b| b.input),
        Some(InputEvent::Clear)
    );
    assert_eq!(
        keypad_button_at(area, 39, 19).map(|b| b.input),
        Some(InputEvent::Evaluate)
    );
    assert_eq!(
        keypad_button_at(area, 39, 0).map(|b| b.input),
        Some(InputEvent::Operator(Operator::Div))
    );
}

#[test]
fn test_split_main_rows_reserves_display_and_status() {
    let rows = split_main_rows(Rect::new(0, 0, 40, 24));
    assert_eq!(rows[0].height, DISPLAY_HEIGHT);
    assert_eq!(rows[2].height, STATUS_HEIGHT);
    assert_eq!(rows[1].height, 24 - DISPLAY_HEIGHT - STATUS_HEIGHT);
}
