use std::io::Cursor;

use scicalc::{console::PipeConsole, diagnostics::CalcError, repl::Session};

fn run_session(input: &str) -> String {
    let console = PipeConsole::new(Cursor::new(input.to_owned()), Vec::new());
    let mut session = Session::new(console);
    session.run().expect("session should finish cleanly");
    let output = session.into_console().into_output();
    String::from_utf8(output).expect("console output is UTF-8")
}

fn run_session_error(input: &str) -> CalcError {
    let console = PipeConsole::new(Cursor::new(input.to_owned()), Vec::new());
    let mut session = Session::new(console);
    match session.run() {
        Ok(()) => panic!("expected the session to fail"),
        Err(err) => err,
    }
}

#[test]
fn square_root_scenario_reports_then_exits() {
    let output = run_session("1\n25.0\n5\n");
    assert!(output.contains("Result: 5.0"), "{output}");
    assert!(output.contains("Exiting calculator. Goodbye!"), "{output}");
    assert!(output.trim_end().ends_with("Goodbye!"), "{output}");
}

#[test]
fn negative_factorial_reports_minus_one() {
    let output = run_session("2\n-5\n5\n");
    assert!(output.contains("Result: -1"), "{output}");
    assert!(!output.contains("NaN"), "{output}");
}

#[test]
fn menu_lists_the_five_operations_in_order() {
    let output = run_session("5\n");
    let mut last = 0;
    for label in [
        "Square Root",
        "Factorial",
        "Natural Logarithm",
        "Power",
        "Exit",
    ] {
        let position = output
            .find(label)
            .unwrap_or_else(|| panic!("menu should list {label}: {output}"));
        assert!(position > last, "{label} out of order: {output}");
        last = position;
    }
}

#[test]
fn invalid_choice_keeps_the_loop_alive() {
    let output = run_session("9\n3\n1.0\n5\n");
    assert!(output.contains("Invalid choice"), "{output}");
    assert!(output.contains("Result: 0.0"), "{output}");
    assert!(output.contains("Goodbye"), "{output}");
}

#[test]
fn log_of_negative_prints_nan() {
    let output = run_session("3\n-10\n5\n");
    assert!(output.contains("Result: NaN"), "{output}");
}

#[test]
fn power_reads_base_then_exponent() {
    let output = run_session("4\n2\n10\n5\n");
    assert!(output.contains("Result: 1024.0"), "{output}");
}

#[test]
fn several_tokens_on_one_line_feed_successive_reads() {
    let output = run_session("4 2 10\n5\n");
    assert!(output.contains("Result: 1024.0"), "{output}");
}

#[test]
fn malformed_choice_is_fatal() {
    let err = run_session_error("banana\n");
    assert!(matches!(err, CalcError::MalformedInput { .. }), "{err}");
}

#[test]
fn malformed_operand_is_fatal() {
    let err = run_session_error("1\nx\n");
    assert!(matches!(err, CalcError::MalformedInput { .. }), "{err}");
}

#[test]
fn real_operand_for_factorial_is_fatal() {
    let err = run_session_error("2\n5.5\n");
    assert!(matches!(err, CalcError::MalformedInput { .. }), "{err}");
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let output = run_session("");
    assert!(output.contains("Welcome to the Scientific Calculator"), "{output}");
    assert!(!output.contains("Goodbye"), "{output}");
}

#[test]
fn end_of_input_mid_operation_ends_the_session_cleanly() {
    let output = run_session("4\n2\n");
    assert!(!output.contains("Result:"), "{output}");
}
