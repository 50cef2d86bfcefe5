mod common;
use common::*;
use esscript::lang::{ErrorCode, Side};
use esscript::mach::{Event, Runtime};

#[test]
fn test_nested_read() {
    let mut r = Runtime::default();
    r.load("vc5>>o;");
    r.memory_mut().set_cvar(5, 7).unwrap();
    r.memory_mut().set_var(7, 42).unwrap();
    assert_eq!(exec(&mut r), "> 42\n");
}

#[test]
fn test_nested_write() {
    let mut r = script("2>>v0;\n99>>vv0;\n-1>>cv0;");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.memory().var(2).unwrap(), 99);
    assert_eq!(r.memory().cvar(2).unwrap(), 255);
}

#[test]
fn test_resolution_sees_writes_in_loop() {
    // v0 walks 1..3, vv0 reads v1..v3
    let source = "\
10>>v1;
20>>v2;
30>>v3;
1>>v0;
vv0>>o;
1>+v0;
4>>v9;
v0>-v9;
v9>?5;";
    let mut r = script(source);
    assert_eq!(exec(&mut r), "> 10\n> 20\n> 30\n");
}

#[test]
fn test_nested_out_of_range_halts() {
    let mut r = script("300>>v0;\nvv0>>o;\n1>>o;");
    match r.execute(100) {
        Event::Errors(errors) => {
            assert_eq!(errors[0].code(), ErrorCode::UnclampedAccess);
            assert_eq!(errors[0].line_number(), Some(2));
            assert_eq!(errors[0].side(), Some(Side::Left));
        }
        event => panic!("unexpected {:?}", event),
    }
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_intermediate_step_out_of_range_halts() {
    let mut r = script("-4>>v0;\n1>>cvv0;");
    assert_eq!(
        exec(&mut r),
        "UNCLAMPED ACCESS IN 2 RIGHT; VARIABLE -4 NOT IN 0..256\n"
    );
}

#[test]
fn test_direct_out_of_range_halts() {
    let mut r = script("c32768>>o;");
    assert_eq!(
        exec(&mut r),
        "UNCLAMPED ACCESS IN 1 LEFT; CHARACTER VARIABLE 32768 NOT IN 0..32768\n"
    );
}
