use crate::lang::ErrorCode;
use crate::mach::Memory;

#[test]
fn test_plain_digits() {
    let m = Memory::new(8, 8);
    assert_eq!(m.resolve("5").unwrap(), 5);
}

#[test]
fn test_letter_next_to_digits_binds_first() {
    let mut m = Memory::new(16, 16);
    m.set_cvar(5, 7).unwrap();
    m.set_var(7, 42).unwrap();
    assert_eq!(m.resolve("c5").unwrap(), 7);
    assert_eq!(m.resolve("vc5").unwrap(), 42);
}

#[test]
fn test_three_levels() {
    let mut m = Memory::new(16, 16);
    m.set_var(1, 2).unwrap();
    m.set_cvar(2, 3).unwrap();
    m.set_var(3, 9).unwrap();
    assert_eq!(m.resolve("vcv1").unwrap(), 9);
}

#[test]
fn test_no_caching_between_calls() {
    let mut m = Memory::new(16, 16);
    m.set_var(0, 4).unwrap();
    assert_eq!(m.resolve("v0").unwrap(), 4);
    m.set_var(0, 11).unwrap();
    assert_eq!(m.resolve("v0").unwrap(), 11);
}

#[test]
fn test_each_step_bounds_checked() {
    let mut m = Memory::new(4, 4);
    m.set_var(0, 100).unwrap();
    let err = m.resolve("vv0").unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnclampedAccess);
    m.set_var(0, -1).unwrap();
    assert_eq!(m.resolve("cv0").unwrap_err().code(), ErrorCode::UnclampedAccess);
    assert_eq!(m.resolve("v9").unwrap_err().code(), ErrorCode::UnclampedAccess);
}

#[test]
fn test_malformed_chain() {
    let m = Memory::new(4, 4);
    for chain in &["", "v", "vx1", "v1v", "-1"] {
        assert_eq!(
            m.resolve(chain).unwrap_err().code(),
            ErrorCode::MalformedOperand,
            "{:?}",
            chain
        );
    }
}
