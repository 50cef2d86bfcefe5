use super::*;

fn parse(s: &str) -> Instruction {
    parse_line(s, 1).unwrap()
}

fn parse_err(s: &str) -> Error {
    parse_line(s, 4).unwrap_err()
}

#[test]
fn test_move_literal() {
    let i = parse("100>>v0;");
    assert!(i.has_code);
    assert_eq!(i.left, Operand::NumberLiteral(100));
    assert_eq!(i.op, Operator::Move);
    assert_eq!(i.right, Operand::Variable(0));
    assert_eq!(i.source_line, 1);
}

#[test]
fn test_operators() {
    assert_eq!(parse("v0>?3;").op, Operator::JumpIfPositive);
    assert_eq!(parse("1>+v0;").op, Operator::Add);
    assert_eq!(parse("1>-v0;").op, Operator::Subtract);
    assert_eq!(parse("2>*v0;").op, Operator::Multiply);
    assert_eq!(parse("2>/v0;").op, Operator::Divide);
}

#[test]
fn test_blank_and_comment_lines() {
    for s in &["", "// comment", "   ", "\r", "v0>>v1", "no code here"] {
        let i = parse(s);
        assert!(!i.has_code, "{:?}", s);
        assert_eq!(i.source_line, 1);
    }
}

#[test]
fn test_trailing_comment_after_terminator() {
    let i = parse("\\a>>r; // print a");
    assert!(i.has_code);
    assert_eq!(i.left, Operand::CharLiteral(97));
    assert_eq!(i.right, Operand::RawOutput);
}

#[test]
fn test_crlf() {
    assert!(parse("i>>o;\r").has_code);
}

#[test]
fn test_escaped_gt_character() {
    let i = parse("\\>>>r;");
    assert_eq!(i.left, Operand::CharLiteral('>' as i64));
    assert_eq!(i.right, Operand::RawOutput);
}

#[test]
fn test_nested_operands_keep_chain() {
    let i = parse("vc5>+cvv1;");
    assert_eq!(i.left, Operand::NestedVariable("c5".into()));
    assert_eq!(i.right, Operand::NestedCharVariable("vv1".into()));
}

#[test]
fn test_invalid_operator() {
    let e = parse_err("1>xv0;");
    assert_eq!(e.code(), ErrorCode::InvalidOperator);
    assert_eq!(e.line_number(), Some(4));
    assert_eq!(e.to_string(), "INVALID OPERATOR IN 4; 'x'");
}

#[test]
fn test_malformed_operand_names_line_and_side() {
    let e = parse_err("1>>v-1;");
    assert_eq!(e.code(), ErrorCode::MalformedOperand);
    assert_eq!(e.line_number(), Some(4));
    assert_eq!(e.side(), Some(Side::Right));
}

#[test]
fn test_move_requires_sink() {
    let e = parse_err("1>>5;");
    assert_eq!(e.code(), ErrorCode::OperandRoleViolation);
    assert_eq!(e.side(), Some(Side::Right));
    assert!(parse_line("1>>i;", 1).is_err());
    assert!(parse_line("1>>l;", 1).is_err());
}

#[test]
fn test_left_requires_source() {
    let e = parse_err("o>>v0;");
    assert_eq!(e.code(), ErrorCode::OperandRoleViolation);
    assert_eq!(e.side(), Some(Side::Left));
    assert!(parse_line("r>?1;", 1).is_err());
}

#[test]
fn test_jump_requires_source_target() {
    assert!(parse_line("1>?l;", 1).is_ok());
    assert!(parse_line("i>?i;", 1).is_ok());
    let e = parse_err("1>?o;");
    assert_eq!(e.code(), ErrorCode::OperandRoleViolation);
    assert_eq!(e.side(), Some(Side::Right));
}

#[test]
fn test_arithmetic_requires_source_and_sink() {
    assert!(parse_line("1>+v0;", 1).is_ok());
    assert!(parse_line("1>*cv0;", 1).is_ok());
    for s in &["1>+o;", "1>-r;", "1>*5;", "1>/i;", "1>+n;"] {
        assert_eq!(
            parse_err(s).code(),
            ErrorCode::OperandRoleViolation,
            "{}",
            s
        );
    }
}

#[test]
fn test_input_count() {
    assert_eq!(parse("i>?i;").input_count(), 2);
    assert_eq!(parse("i>>v0;").input_count(), 1);
    assert_eq!(parse("1>>v0;").input_count(), 0);
    assert_eq!(parse("// i>>o;").input_count(), 0);
}

#[test]
fn test_display_round_trip() {
    for s in &["100>>v0;", "v0>?3;", "\\a>>r;", "vc5>-cv2;", "l>*v9;"] {
        assert_eq!(parse(s).to_string(), *s);
    }
}
