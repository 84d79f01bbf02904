//! Integration tests for end-to-end parsing.
//!
//! These tests verify that the complete front end works correctly from
//! source text through tokenization and parsing to the rendered tree and
//! diagnostics.

use pretty_assertions::assert_eq;
use watt::{
    ast::{ast::Item, definitions::Definition},
    errors::errors::ErrorKind,
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
    render_error,
};

const PROGRAM: &str = r#"// geometry helpers
import 'std/math' with math
import ('std/io', 'std/fmt' with fmt)

trait Shape {
    fn area(self)
    fn describe(self) {
        return fmt.format('area: {}', self.area())
    }
}

type Rect(w, h) impl Shape, Eq {
    fn area(self) {
        return self.w * self.h
    }
}

unit Registry {
    shapes := []

    fn add(shape) {
        shapes.push(shape)
    }
}

fn main {
    native print -> 'watt_print'

    r := new Rect(2, 3)
    Registry.add(r)

    /* sum every area */
    total := 0
    for shape in Registry.shapes {
        total += shape.area()
    }

    kind := match total
        case 0 -> 'empty'
        case 6 { print('one rect') }
        default _ -> 'many'

    scale := lambda (x) -> x * 2
    on_done := fn (value) { print(value) }

    if total > 10 and !done {
        print('large')
    } elif total == 6 {
        print(scale(total))
    } else {
        on_done(kind)?
    }
}
"#;

#[test]
fn test_parse_full_program() {
    let program = parse_source(PROGRAM, Some("geometry.watt".to_string())).unwrap();

    let kinds: Vec<&str> = program.iter().map(|item| item.describe()).collect();
    assert_eq!(kinds.len(), 6);

    let names: Vec<&str> = program
        .iter()
        .filter_map(|item| match item {
            Item::Definition(definition) => Some(definition.name().value.as_str()),
            Item::Statement(_) => None,
        })
        .collect();
    assert_eq!(names, vec!["Shape", "Rect", "Registry", "main"]);

    let Item::Definition(Definition::Type(rect)) = &program.items[3] else {
        panic!("expected type definition");
    };
    let traits: Vec<&str> = rect
        .traits
        .as_ref()
        .unwrap()
        .iter()
        .map(|name| name.value.as_str())
        .collect();
    assert_eq!(traits, vec!["Shape", "Eq"]);
}

#[test]
fn test_rendered_tree() {
    let source = "import 'std/io' with io\nfn main(args) { x := io.read(args)? return x + 1 }";
    let program = parse_source(source, None).unwrap();

    assert_eq!(
        program.to_string(),
        "(import ('std/io' with io))\n(fn main [args] (block (:= x (call? (. io read) args)) (return (+ x 1))))"
    );
}

#[test]
fn test_reformatting_keeps_tree() {
    let compact = "type P(a,b) impl Eq{fn eq(o){return a==o.a and b==o.b}}";
    let spread = "type P(\n  a,\n  b\n) impl Eq {\n  // equality\n  fn eq(o) {\n    return a == o.a\n      and b == o.b\n  }\n}\n";

    let compact = parse_source(compact, None).unwrap();
    let spread = parse_source(spread, None).unwrap();

    assert_eq!(compact.to_string(), spread.to_string());
}

#[test]
fn test_tokenize_then_parse() {
    let tokens = tokenize(PROGRAM, Some("geometry.watt".to_string())).unwrap();
    let file = std::sync::Arc::new("geometry.watt".to_string());

    let program = parse(tokens, file).unwrap();
    assert_eq!(
        program,
        parse_source(PROGRAM, Some("geometry.watt".to_string())).unwrap()
    );
    assert_eq!(program.span.end.0 as usize, PROGRAM.len());
}

#[test]
fn test_parse_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse_source(PROGRAM, None).map(|p| p.to_string())))
        .collect();

    let expected = parse_source(PROGRAM, None).unwrap().to_string();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), expected);
    }
}

#[test]
fn test_render_lex_error() {
    let source = "fn main {\n    x := 'open\n}\n";
    let error = parse_source(source, Some("main.watt".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.line_column(source), Some((2, 10)));

    let expected = [
        "Error: UnterminatedString (string literals must be closed with `'` on the same line)",
        "-> main.watt",
        "  |",
        "2 | x := 'open",
        "  | -----^",
        "",
    ]
    .join("\n");
    assert_eq!(render_error(&error, source), expected);
}

#[test]
fn test_render_end_of_input() {
    let source = "fn main {\n    f(1";
    let error = parse_source(source, Some("main.watt".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(error.line_column(source), Some((2, 8)));
}

#[test]
fn test_first_error_wins() {
    let source = "fn a { x := }\nfn b( { }";
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_position().0, 12);
    assert_eq!(error.get_position().1.as_str(), "shell");
}
