//! Evolution scenarios.

use attrkit_tests::prelude::*;
use proptest::prelude::*;

mod evolve_records {
    use super::*;

    #[test]
    fn test_nested_record_replaced() {
        let f = Fixture::new().unwrap();
        let line = f
            .line(f.point(0, 0).unwrap(), f.point(1, 1).unwrap(), list!["a"])
            .unwrap();

        let evolved = evolve(&f.registry, &line, [("end", Value::from(f.point(9, 9).unwrap()))])
            .unwrap();

        assert_eq!(
            asdict(&f.registry, &evolved).unwrap(),
            Value::map([
                ("start", Value::map([("x", 0), ("y", 0)])),
                ("end", Value::map([("x", 9), ("y", 9)])),
                ("tags", list!["a"]),
            ])
        );
    }

    #[test]
    fn test_unknown_name() {
        let f = Fixture::new().unwrap();
        let p = f.point(1, 2).unwrap();

        let result = evolve(&f.registry, &p, [("z", Value::Int(3))]);

        Expect::error_matches(r"unexpected keyword argument: 'z'$")
            .check("unknown", &result)
            .unwrap();
    }

    #[test]
    fn test_assoc_bypasses_validators() {
        let f = Fixture::new().unwrap();
        let settings = f.settings(true).unwrap();

        let raw = assoc(&f.registry, &settings, [("level", Value::Int(99))]).unwrap();
        assert_eq!(raw.values()[1], Value::Int(99));

        let checked = evolve(&f.registry, &settings, [("level", Value::Int(99))]);
        assert!(checked.unwrap_err().is_validation());
    }
}

proptest! {
    #[test]
    fn prop_evolve_keeps_other_fields(x in any::<i64>(), y in any::<i64>(), new_x in any::<i64>()) {
        let f = Fixture::new().unwrap();
        let p = f.point(x, y).unwrap();

        let evolved = evolve(&f.registry, &p, [("x", Value::Int(new_x))]).unwrap();

        prop_assert_eq!(evolved.values(), &[Value::Int(new_x), Value::Int(y)][..]);
        prop_assert_eq!(p.values(), &[Value::Int(x), Value::Int(y)][..]);
    }
}
