//! Source-to-output integration tests driving the embedding interface
//! directly (`run_source` with a captured output `Vec<String>`), in place of
//! the teacher's compiled-binary `tests/*.rs` style, since this crate has no
//! compiler backend to spawn.

use std::cell::RefCell;
use std::rc::Rc;

use hanlang::Interpreter;

fn run(source: &str) -> Vec<String> {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = lines.clone();
    let mut interpreter = Interpreter::new(
        move |line: &str| sink.borrow_mut().push(line.to_owned()),
        |_prompt: &str| String::new(),
    );
    interpreter.run(source).expect("program should run to completion");
    drop(interpreter);
    Rc::try_unwrap(lines).unwrap().into_inner()
}

fn run_with_input(source: &str, inputs: &'static [&'static str]) -> Vec<String> {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = lines.clone();
    let remaining = Rc::new(RefCell::new(inputs.iter()));
    let mut interpreter = Interpreter::new(
        move |line: &str| sink.borrow_mut().push(line.to_owned()),
        move |_prompt: &str| remaining.borrow_mut().next().copied().unwrap_or("").to_owned(),
    );
    interpreter.run(source).expect("program should run to completion");
    drop(interpreter);
    Rc::try_unwrap(lines).unwrap().into_inner()
}

#[test]
fn arithmetic_and_print() {
    assert_eq!(run("변수 x = 3 + 4 * 2\n출력(x)"), vec!["11"]);
}

#[test]
fn recursive_factorial() {
    let src = "함수 fact(n){ 만약 n<=1 { 반환 1 } 반환 n*fact(n-1) } 출력(fact(5))";
    assert_eq!(run(src), vec!["120"]);
}

#[test]
fn inclusive_for_loop() {
    assert_eq!(run("반복 i = 1 : 3 { 출력(i) }"), vec!["1", "2", "3"]);
}

#[test]
fn list_append_renders_with_commas() {
    let src = "변수 a = [1,2,3]\n추가(a,4)\n출력(a)";
    assert_eq!(run(src), vec!["[1, 2, 3, 4]"]);
}

#[test]
fn try_catch_finally_scenario() {
    let src = r#"시도 { 던지기 "boom" } 잡기 (e) { 출력(e) } 마침내 { 출력("done") }"#;
    assert_eq!(run(src), vec!["boom", "done"]);
}

#[test]
fn lambda_addition() {
    assert_eq!(run("변수 add = (x,y) => x+y\n출력(add(2,3))"), vec!["5"]);
}

#[test]
fn class_with_constructor_and_method() {
    let src = r#"
클래스 P { 함수 생성(n){ 나.n = n } 함수 g(){ 반환 나.n } }
변수 p = P(7)
출력(p.g())
"#;
    assert_eq!(run(src), vec!["7"]);
}

#[test]
fn division_by_zero_is_catchable() {
    let src = r#"시도 { 출력(1/0) } 잡기 (e) { 출력("나누기 실패") } "#;
    assert_eq!(run(src), vec!["나누기 실패"]);
}

#[test]
fn const_reassignment_raises_at_assignment_not_declaration() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = lines.clone();
    let mut interpreter = Interpreter::new(move |line: &str| sink.borrow_mut().push(line.to_owned()), |_| String::new());

    // the declaration itself must succeed
    assert!(interpreter.run("상수 k = 1").is_ok());
    // the reassignment is where the failure happens
    assert!(interpreter.run("k = 2").is_err());
}

#[test]
fn lambda_disambiguation_from_parenthesized_expression() {
    assert_eq!(run("변수 a = 1\n출력((a)+1)"), vec!["2"]);
    assert_eq!(run("변수 add = (a) => a+1\n출력(add(1))"), vec!["2"]);
}

#[test]
fn elif_chain_picks_first_matching_branch() {
    let src = r#"
변수 x = 2
만약 x == 1 { 출력("one") } 아니면만약 x == 2 { 출력("two") } 아니면만약 x == 3 { 출력("three") } 아니면 { 출력("other") }
"#;
    assert_eq!(run(src), vec!["two"]);
}

#[test]
fn dictionary_round_trip() {
    let src = r#"
변수 d = { "a": 1, "b": 2 }
출력(d["a"])
d["c"] = 3
출력(길이(d))
"#;
    assert_eq!(run(src), vec!["1", "3"]);
}

#[test]
fn while_loop_with_break_and_continue() {
    let src = r#"
변수 i = 0
동안 참 {
    i = i + 1
    만약 i == 2 { 계속 }
    만약 i > 4 { 중단 }
    출력(i)
}
"#;
    assert_eq!(run(src), vec!["1", "3", "4"]);
}

#[test]
fn input_reads_one_line_per_call() {
    let src = r#"
변수 이름 = 입력("이름: ")
출력(이름)
"#;
    assert_eq!(run_with_input(src, &["한준후"]), vec!["한준후"]);
}

#[test]
fn closures_share_mutable_captured_state() {
    let src = r#"
함수 만들기() {
    변수 count = 0
    함수 증가() { count = count + 1 반환 count }
    반환 증가
}
변수 inc = 만들기()
출력(inc())
출력(inc())
출력(inc())
"#;
    assert_eq!(run(src), vec!["1", "2", "3"]);
}

#[test]
fn decorative_markers_are_ignored() {
    let src = "변수 x = 1 개발자한준후가 만든언어입니다.\n출력(x) 감사합니다.";
    assert_eq!(run(src), vec!["1"]);
}

#[test]
fn zero_and_empty_collections_are_truthy() {
    let src = r#"
만약 0 { 출력("t") } 아니면 { 출력("f") }
만약 0.0 { 출력("t") } 아니면 { 출력("f") }
만약 "" { 출력("t") } 아니면 { 출력("f") }
만약 [] { 출력("t") } 아니면 { 출력("f") }
만약 {} { 출력("t") } 아니면 { 출력("f") }
"#;
    assert_eq!(run(src), vec!["t", "t", "t", "t", "t"]);
}

#[test]
fn structurally_equal_dicts_compare_equal() {
    let src = r#"
변수 a = { "x": 1, "y": 2 }
변수 b = { "y": 2, "x": 1 }
출력(a == b)
출력({} == {})
"#;
    assert_eq!(run(src), vec!["참", "참"]);
}

#[test]
fn unterminated_string_is_a_lex_error_not_a_panic() {
    let mut interpreter = Interpreter::new(|_| {}, |_| String::new());
    let err = interpreter.run("변수 s = \"안녕").unwrap_err();
    assert!(err.to_string().contains("줄"));
}
