//! Integration tests for operator resolution and evaluation
//!
//! These drive the public API the way an expression evaluator would:
//! resolve a token, then apply it to two extracted operands.

use equilibrium_rs::comparison::{helpers, TypeDescriptor, TypeRegistry};
use equilibrium_rs::{apply, resolve, ComparisonError, ComparisonKind, Condition, Operand};

// ============================================================================
// Fixtures
// ============================================================================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Types {
    interface: TypeDescriptor,
    impl_type: TypeDescriptor,
    another_impl: TypeDescriptor,
}

/// `Impl: Interface`, `AnotherImpl: AnotherInterface`
fn types() -> Types {
    let mut registry = TypeRegistry::new();
    let interface = registry.register("Interface", &[]).unwrap();
    registry.register("AnotherInterface", &[]).unwrap();
    let impl_type = registry.register("Impl", &["Interface"]).unwrap();
    let another_impl = registry.register("AnotherImpl", &["AnotherInterface"]).unwrap();
    Types {
        interface,
        impl_type,
        another_impl,
    }
}

fn check(token: &str, left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    apply(resolve(token), &left.into(), &right.into()).unwrap()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_operators() {
    init_logging();

    assert_eq!(resolve("=="), ComparisonKind::Equals);
    assert_eq!(resolve("!="), ComparisonKind::NotEquals);
    assert_eq!(resolve(">"), ComparisonKind::GreaterThan);
    assert_eq!(resolve(">="), ComparisonKind::GreaterOrEqual);
    assert_eq!(resolve("<"), ComparisonKind::LessThan);
    assert_eq!(resolve("<="), ComparisonKind::LessOrEqual);
    assert_eq!(resolve("is"), ComparisonKind::IsSubtype);
    assert_eq!(resolve("is not"), ComparisonKind::IsNotSubtype);
    assert_eq!(resolve("asd"), ComparisonKind::None);
}

#[test]
fn test_strict_resolution() {
    assert_eq!(
        ComparisonKind::try_resolve("asd"),
        Err(ComparisonError::UnresolvedToken("asd".to_string()))
    );
    assert_eq!(ComparisonKind::try_resolve("=<"), Ok(ComparisonKind::LessOrEqual));
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_apply_operators() {
    init_logging();
    let t = types();

    assert!(check("==", "test", "test"));
    assert!(check("!=", "test", "test-2"));
    assert!(check(">", 1i32, 0i32));
    assert!(check(">", 1.1f64, 1.0f64));
    assert!(check(">=", 1i32, 0i32));
    assert!(check(">=", 1.1f64, 1.0f64));
    assert!(check("<", 0i32, 1i32));
    assert!(check("<", 1.0f64, 1.1f64));
    assert!(check("<=", 0i32, 1i32));
    assert!(check("<=", 1.0f64, 1.1f64));
    assert!(check("is", t.impl_type.clone(), t.interface.clone()));
    assert!(!check("is", t.another_impl.clone(), t.interface.clone()));
    assert!(check("is not", t.another_impl, t.interface));
    assert!(!check("asd", "test", "test"));
}

#[test]
fn test_mixed_kinds_never_raise() {
    for token in [">", ">=", "<", "<=", "is", "is not"] {
        assert!(!check(token, "10", 1i32), "'10' {} 1", token);
        assert!(!check(token, 1i32, "10"), "1 {} '10'", token);
    }
}

#[test]
fn test_left_operand_selects_numeric_domain() {
    // long on the left truncates 1.9 to 1
    assert!(check(">=", 1i64, 1.9f64));
    assert!(!check(">=", 1.0f64, 1.9f64));
    // int on the left saturates a huge double
    assert!(!check(">", i32::MAX, 1e12f64));
    assert!(check(">", 1e12f64, i32::MAX));
}

#[test]
fn test_equals_and_not_equals_agree() {
    let values = [
        Operand::from("a"),
        Operand::from(1i32),
        Operand::from(1i64),
        Operand::from(1.0f64),
        Operand::from(f64::NAN),
        Operand::from(true),
    ];
    for left in &values {
        assert!(apply(ComparisonKind::Equals, left, left).unwrap());
        for right in &values {
            assert_eq!(
                apply(ComparisonKind::NotEquals, left, right).unwrap(),
                !apply(ComparisonKind::Equals, left, right).unwrap()
            );
        }
    }
}

#[test]
fn test_not_equals_with_null_left_fails() {
    let result = apply(ComparisonKind::NotEquals, &Operand::Null, &Operand::Null);
    assert!(matches!(result, Err(ComparisonError::InvalidOperand { .. })));

    // the standalone helper is null-safe
    assert!(!helpers::not_equals(&Operand::Null, &Operand::Null));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_conditions_from_yaml() {
    let cases = [
        ("left: 3\nop: \"=>\"\nright: 3\n", true),
        ("left: 3\nop: \"<\"\nright: 2.5\n", false),
        ("left: search\nop: \"=\"\nright: search\n", true),
        ("left: true\nop: \"==\"\nright: false\n", false),
    ];
    for (yaml, expected) in cases {
        let condition = Condition::from_yaml(yaml).unwrap();
        assert_eq!(condition.evaluate().unwrap(), expected, "{}", yaml);
    }
}
