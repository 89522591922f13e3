//! Comparator scenarios: synthesized comparators on record fields.

use attrkit_tests::prelude::*;
use proptest::prelude::*;
use std::cmp::Ordering;

fn by_abs() -> std::sync::Arc<attrkit_compare::ComparatorClass<Value>> {
    let abs = |v: &Value| v.as_int().map(i64::abs).unwrap_or(0);
    cmp_using::<Value>()
        .eq(move |a, b| abs(a) == abs(b))
        .lt(move |a, b| abs(a) < abs(b))
        .class_name("ByAbs")
        .build()
}

mod record_equality {
    use super::*;

    fn registry() -> (Registry, attrkit_core::TypeId) {
        let mut builder = RegistryBuilder::new();
        let id = builder
            .add_type("Offset")
            .field(FieldSpec::new("delta").compared_by(by_abs()))
            .field(FieldSpec::new("note").no_eq())
            .done()
            .unwrap();
        (builder.build().unwrap(), id)
    }

    #[test]
    fn test_eq_key_and_no_eq() {
        let (registry, id) = registry();
        let a = registry.construct(id, InitArgs::new().arg(-3).arg("a")).unwrap();
        let b = registry.construct(id, InitArgs::new().arg(3).arg("b")).unwrap();
        let c = registry.construct(id, InitArgs::new().arg(4).arg("a")).unwrap();

        assert!(records_equal(&registry, &a, &b));
        assert!(!records_equal(&registry, &a, &c));
        // Only lt is wired; gt falls back to the reflected lt.
        assert_eq!(record_partial_cmp(&registry, &c, &a), Some(Ordering::Greater));
    }
}

mod strict_fallback {
    use super::*;

    #[test]
    fn test_reflected_operator() {
        let class = by_abs();
        let (two, minus_five) = (class.wrap(Value::Int(2)), class.wrap(Value::Int(-5)));

        assert!(compare(&minus_five, CmpOp::Gt, &two).unwrap());
        // Neither ge nor its reflection le is wired.
        assert!(compare(&two, CmpOp::Ge, &minus_five).is_err());
    }

    #[test]
    fn test_unwired_operator_fails() {
        let eq_only = cmp_using::<Value>().eq(|a, b| a == b).build();
        let (a, b) = (eq_only.wrap(Value::Int(1)), eq_only.wrap(Value::Int(2)));

        let result = compare(&a, CmpOp::Lt, &b);

        Expect::error("not supported between instances")
            .check("lt", &result)
            .unwrap();
    }
}

proptest! {
    #[test]
    fn prop_foreign_classes_are_incomparable(x in any::<i64>(), y in any::<i64>()) {
        let (left, right) = (by_abs(), by_abs());
        let (a, b) = (left.wrap(Value::Int(x)), right.wrap(Value::Int(y)));

        for op in [CmpOp::Eq, CmpOp::Ne, CmpOp::Lt] {
            prop_assert_eq!(a.op(op, &b), Outcome::Incomparable);
        }
        prop_assert!(compare(&a, CmpOp::Lt, &b).is_err());
    }
}
