use keycalc::prelude::*;

fn run(keys: &str) -> ExpressionEditor {
    let mut editor = ExpressionEditor::new();
    for c in keys.chars() {
        match c {
            'C' => editor.apply(InputEvent::Clear),
            '<' => editor.apply(InputEvent::Delete),
            _ => editor.apply(InputEvent::from_char(c).unwrap()),
        };
    }
    editor
}

#[test]
fn test_second_point_in_a_run_is_a_noop() {
    assert_eq!(run("5..2").text(), "5.2");
}

#[test]
fn test_leading_operator_then_point() {
    assert_eq!(run("+.").text(), "+0.");
    assert_eq!(run(".").text(), "0.");
}

#[test]
fn test_trailing_operator_is_trimmed() {
    let editor = run("5+=");
    assert_eq!(editor.text(), "5");
    assert_eq!(editor.state(), EditorState::Result);
}

#[test]
fn test_division_by_zero_shows_marker() {
    let mut editor = run("5/0");
    assert_eq!(
        editor.evaluate(),
        Evaluation::Failed(EvalError::DivisionByZero { pos: 1 })
    );
    assert_eq!(editor.text(), "Error");
}

#[test]
fn test_empty_evaluate_and_delete() {
    let editor = run("=<");
    assert_eq!(editor.text(), "");
    assert_eq!(editor.state(), EditorState::Empty);
}

#[test]
fn test_clear_from_every_state() {
    for keys in ["", "12+", "2*3=", "1/0=", "9<"] {
        let editor = run(&format!("{keys}C"));
        assert_eq!(editor.text(), "", "after {keys:?}");
        assert_eq!(editor.state(), EditorState::Empty);
    }
}

#[test]
fn test_precedence_through_the_keypad_path() {
    assert_eq!(run("2+3*4-10/5=").text(), "12");
    assert_eq!(run("0.1+0.2=").text(), (0.1_f64 + 0.2).to_string());
    assert_eq!(run("7/2=").text(), "3.5");
}

#[test]
fn test_chained_calculation() {
    assert_eq!(run("6*7=-2=/8=").text(), "5");
}

#[test]
fn test_digit_after_result_starts_over() {
    assert_eq!(run("2+2=9").text(), "9");
}

#[test]
fn test_append_after_error_starts_over() {
    assert_eq!(run("1/0=4").text(), "4");
    assert_eq!(run("1/0=-4=").text(), "-4");
    assert_eq!(run("1/0=.").text(), "0.");
}

#[test]
fn test_evaluate_matches_direct_evaluation() {
    for expr in ["1+2*3", "-4*-2", "10-2-3", "8/4/2", "3.25*4"] {
        let editor = run(&format!("{expr}="));
        let expected = format_value(evaluate(expr).unwrap());
        assert_eq!(editor.text(), expected, "expression {expr:?}");
    }
}

#[test]
fn test_model_routes_input_to_editor() {
    let model = "12*3="
        .chars()
        .filter_map(InputEvent::from_char)
        .fold(Model::new((80, 24)), |model, event| {
            keycalc::app::update(model, Message::Input(event))
        });
    assert_eq!(model.display_text(), "36");
}
