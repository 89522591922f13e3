//! Projection scenarios: asdict / astuple over registered records.

use attrkit_tests::prelude::*;

mod filtering {
    use super::*;

    #[test]
    fn test_point_excluding_y() {
        // GIVEN Point(1, 2) and a filter excluding y
        let f = Fixture::new().unwrap();
        let p = f.point(1, 2).unwrap();

        // WHEN projecting to a dict
        let result = AsDict::new().filter(exclude(["y"])).project(&f.registry, &p);

        // THEN only x remains
        Expect::value(Value::map([("x", 1)]))
            .check("exclude y", &result)
            .unwrap();
    }

    #[test]
    fn test_include_by_kind_reaches_nested_records() {
        let f = Fixture::new().unwrap();
        let line = f
            .line(f.point(0, 1).unwrap(), f.point(2, 3).unwrap(), list![9])
            .unwrap();

        let options = AsTuple::new().filter(include([
            Selector::from(ValueKind::Int),
            Selector::from(TypeHint::Record(f.point)),
        ]));

        Expect::value(Value::Tuple(vec![
            Value::Tuple(vec![Value::Int(0), Value::Int(1)]),
            Value::Tuple(vec![Value::Int(2), Value::Int(3)]),
        ]))
        .check("kind filter", &options.project(&f.registry, &line))
        .unwrap();
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_output_follows_declared_order() {
        let f = Fixture::new().unwrap();
        let line = f
            .line(f.point(0, 0).unwrap(), f.point(1, 1).unwrap(), list![])
            .unwrap();

        let projected = asdict(&f.registry, &line).unwrap();
        let keys: Vec<String> = projected
            .as_entries()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str().unwrap().to_string())
            .collect();

        let declared: Vec<&str> = f
            .registry
            .fields(f.line)
            .unwrap()
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(keys, declared);
    }
}

mod containers {
    use super::*;

    fn tagged(f: &Fixture) -> Record {
        let tags = Value::map([
            ("set", Value::set([Value::Int(1), Value::Int(2)])),
            ("tuple", Value::Tuple(vec![Value::from(f.point(5, 6).unwrap())])),
        ]);
        f.line(f.point(0, 0).unwrap(), f.point(1, 1).unwrap(), tags)
            .unwrap()
    }

    fn tags_of(projected: Value) -> Value {
        projected.as_entries().unwrap()[2].1.clone()
    }

    #[test]
    fn test_default_normalizes_to_lists() {
        let f = Fixture::new().unwrap();
        let projected = asdict(&f.registry, &tagged(&f)).unwrap();

        assert_eq!(
            tags_of(projected),
            Value::map([
                ("set", list![1, 2]),
                ("tuple", list![Value::map([("x", 5), ("y", 6)])]),
            ])
        );
    }

    #[test]
    fn test_retaining_keeps_kinds() {
        let f = Fixture::new().unwrap();
        let projected = AsDict::retaining().project(&f.registry, &tagged(&f)).unwrap();

        assert_eq!(
            tags_of(projected),
            Value::map([
                ("set", Value::set([Value::Int(1), Value::Int(2)])),
                ("tuple", Value::Tuple(vec![Value::map([("x", 5), ("y", 6)])])),
            ])
        );
    }

    #[test]
    fn test_collection_keys_are_rebuilt() {
        let f = Fixture::new().unwrap();
        let key = Value::frozen_set([Value::from(f.point(1, 2).unwrap())]);
        let line = f
            .line(
                f.point(0, 0).unwrap(),
                f.point(1, 1).unwrap(),
                Value::map([(key, Value::Bool(true))]),
            )
            .unwrap();

        let projected = astuple(&f.registry, &line).unwrap();

        let Value::Tuple(items) = projected else {
            panic!("expected a tuple");
        };
        assert_eq!(
            items[2],
            Value::map([(
                list![Value::Tuple(vec![Value::Int(1), Value::Int(2)])],
                Value::Bool(true)
            )])
        );
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_non_record_operand() {
        let f = Fixture::new().unwrap();
        let result = AsTuple::new().project_value(&f.registry, &Value::from("Point"));
        Expect::error_matches("^String is not a record type$")
            .check("non-record", &result)
            .unwrap();
    }

    #[test]
    fn test_serializer_failure_propagates() {
        let f = Fixture::new().unwrap();
        let line = f
            .line(f.point(0, 0).unwrap(), f.point(1, 1).unwrap(), list![])
            .unwrap();

        let result = AsDict::new()
            .value_serializer(|_, field, value| {
                if field.name == "tags" {
                    return Err(AttrError::conversion(&value, "tags are private"));
                }
                Ok(value)
            })
            .project(&f.registry, &line);

        Expect::error("tags are private")
            .check("serializer", &result)
            .unwrap();
    }
}
