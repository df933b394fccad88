use crate::frontend::{lex, parse, parse_expression, AstPrinter};
use crate::session::Session;

fn test_compiles(source: &str, should_compile: bool) {
    let session = Session::default();
    let result = crate::compile(source, &session);

    match (result, should_compile) {
        (Err(err), true) => panic!("failed to compile: {source:?}: {err}"),
        (Ok(_), false) => panic!("unexpectedly compiled: {source:?}"),
        _ => {}
    }
}

#[test]
fn multi_digit() {
    test_compiles("int main() { return 100; }", true);
}

#[test]
fn newlines() {
    test_compiles("\nint\nmain\n(\n)\n{\nreturn\n0\n;\n}", true);
}

#[test]
fn no_newlines() {
    test_compiles("int main(){return 0;}", true);
}

#[test]
fn spaces() {
    test_compiles("   int   main    (  )  {   return  0 ; }", true);
}

#[test]
fn return_0() {
    test_compiles("int main() { return 0; }", true);
}

#[test]
fn return_2() {
    test_compiles("int main() { return 2; }", true);
}

#[test]
fn unary_operators() {
    test_compiles("int main() { return -5; }", true);
    test_compiles("int main() { return ~0; }", true);
    test_compiles("int main() { return !1; }", true);
    test_compiles("int main() { return -~!0; }", true);
}

#[test]
fn binary_operators() {
    test_compiles("int main() { return 1 + 2 * 3 - 4 / 2 % 2; }", true);
    test_compiles("int main() { return 1 < 2 == 3 >= 4 != 0; }", true);
    test_compiles("int main() { return 1 & 2 | 3 ^ 4; }", true);
    test_compiles("int main() { return 1 << 2 >> 1; }", true);
    test_compiles("int main() { return 1 && 0 || 1; }", true);
}

#[test]
fn variables() {
    test_compiles("int main() { int a = 4; int b = 2; return a / b + a % b; }", true);
    test_compiles("int main() { int a; a = 3; return a; }", true);
    test_compiles("int main() { int a = 1; a = a + 1; return a; }", true);
}

#[test]
fn missing_paren() {
    test_compiles("int main( { return 0; }", false);
}

#[test]
fn missing_retval() {
    test_compiles("int main() { return; }", false);
}

#[test]
fn no_brace() {
    test_compiles("int main() { return 0;", false);
}

#[test]
fn no_semicolon() {
    test_compiles("int main() { return 0 }", false);
}

#[test]
fn no_space() {
    // lexes as the identifier `return0`, which is never declared
    test_compiles("int main() { return0; }", false);
}

#[test]
fn wrong_case() {
    test_compiles("int main() { RETURN 0; }", false);
}

#[test]
fn unknown_character() {
    test_compiles("int main() { return 0@; }", false);
}

#[test]
fn undeclared_variable() {
    test_compiles("int main() { return x; }", false);
}

fn roundtrip_expression(source: &str) {
    let session = Session::default();

    let tokens = lex(source, &session).unwrap();
    let parsed = parse_expression(tokens).unwrap();

    let printed = AstPrinter::new(&session).print_expression(&parsed);

    let tokens = lex(&printed, &session).unwrap();
    let reparsed = parse_expression(tokens).unwrap();

    assert_eq!(parsed, reparsed, "printed form {printed:?} changed the tree");
}

#[test]
fn printer_roundtrips_expressions() {
    for source in [
        "1",
        "1 + 2 * 3",
        "8 - 4 - 2",
        "(1 + 2) * (3 - 4) % 5",
        "-~!0",
        "a = b = 1 << 2",
        "a && b || c == d",
        "x <= 1 >> 2 ^ 3",
        "!(a = 1)",
        "-(a + b)",
    ] {
        roundtrip_expression(source);
    }
}

#[test]
fn printer_roundtrips_modules() {
    let session = Session::default();
    let source = "int main() { int a = 1; int b; b = a + 2; return a * b; }";

    let tokens = lex(source, &session).unwrap();
    let parsed = parse(tokens).unwrap();

    let printed = AstPrinter::new(&session).print_module(&parsed);

    let tokens = lex(&printed, &session).unwrap();
    let reparsed = parse(tokens).unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn printer_disambiguates_binary_expressions() {
    let session = Session::default();

    let tokens = lex("int main() { int a = 1; a = a + 2; return a; }", &session).unwrap();
    let module = parse(tokens).unwrap();

    let printed = AstPrinter::new(&session).print_module(&module);

    let expected = "\
int main () {
int a = 1;
(a = (a + 2));
return a;
}
";

    assert_eq!(printed, expected);
}
