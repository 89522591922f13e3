//! Attribute-write scenarios through setter pipelines.

use attrkit_tests::prelude::*;

mod validate_then_convert {
    use super::*;

    #[test]
    fn test_yes_stores_true() {
        // GIVEN Settings written through pipe(validate, convert)
        let f = Fixture::new().unwrap();
        let mut settings = f.settings(false).unwrap();

        // WHEN writing "yes"
        set_attr(&f.registry, &mut settings, "enabled", Value::from("yes")).unwrap();

        // THEN true is stored
        assert_eq!(
            f.registry.get_attr(&settings, "enabled").unwrap(),
            &Value::Bool(true)
        );
    }

    #[test]
    fn test_null_fails_validation_before_conversion() {
        let f = Fixture::new().unwrap();
        let mut settings = f.settings("on").unwrap();

        let result = set_attr(&f.registry, &mut settings, "enabled", Value::Null);

        // A conversion error would mention "bool"; validation names the field.
        let err = result.unwrap_err();
        assert!(err.is_validation(), "got {}", err);
        assert!(err.to_string().contains("'enabled'"));
        assert_eq!(settings.values()[0], Value::Bool(true));
    }

    #[test]
    fn test_range_checked_on_write() {
        let f = Fixture::new().unwrap();
        let mut settings = f.settings(true).unwrap();

        set_attr(&f.registry, &mut settings, "level", Value::Int(5)).unwrap();
        let err = set_attr(&f.registry, &mut settings, "level", Value::Int(6)).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(settings.values()[1], Value::Int(5));
    }

    #[test]
    fn test_initializer_converts_too() {
        let f = Fixture::new().unwrap();
        assert_eq!(f.settings("Y").unwrap().values()[0], Value::Bool(true));
        assert!(matches!(
            f.settings("maybe"),
            Err(AttrError::ValueFormat { .. })
        ));
    }
}

mod conversion_failures {
    use super::*;

    #[test]
    fn test_write_error_names_field() {
        // GIVEN Settings with a to_bool field
        let f = Fixture::new().unwrap();
        let mut settings = f.settings(true).unwrap();

        // WHEN writing an unrecognized token
        let result = set_attr(&f.registry, &mut settings, "enabled", Value::from("maybe"));

        // THEN the error names both the value and the field
        Expect::error("cannot convert \"maybe\" to bool for field 'enabled'")
            .check("set enabled", &result.map(|_| Value::Null))
            .unwrap();
        assert_eq!(settings.values()[0], Value::Bool(true));
    }

    #[test]
    fn test_construct_error_names_field() {
        let f = Fixture::new().unwrap();

        let err = f.settings("maybe").unwrap_err();

        assert!(matches!(
            err,
            AttrError::ValueFormat { field: Some(ref name), .. } if name == "enabled"
        ));
        assert!(err.to_string().contains("'enabled'"));
    }
}

mod frozen_records {
    use super::*;

    #[test]
    fn test_every_write_rejected() {
        let f = Fixture::new().unwrap();
        let mut coord = f.coord(51.5, -0.1).unwrap();

        let result = set_attr(&f.registry, &mut coord, "lat", Value::Float(0.0));

        assert!(matches!(result, Err(AttrError::FrozenAttribute { .. })));
        assert_eq!(coord.values()[0], Value::Float(51.5));
    }

    #[test]
    fn test_evolve_still_works() {
        let f = Fixture::new().unwrap();
        let coord = f.coord(51.5, -0.1).unwrap();

        let moved = evolve(&f.registry, &coord, [("lat", Value::Float(48.9))]).unwrap();

        assert_eq!(moved.values(), &[Value::Float(48.9), Value::Float(-0.1)]);
    }
}

mod custom_pipelines {
    use super::*;
    use attrkit_registry::SetHook;

    #[test]
    fn test_field_override_and_no_op() {
        let trim = SetHook::custom("trim", |_, _, value| {
            Ok(match value {
                Value::String(s) => Value::String(s.trim().to_string()),
                other => other,
            })
        });
        let mut builder = RegistryBuilder::new();
        let id = builder
            .add_type("Profile")
            .field(FieldSpec::new("handle").on_setattr(pipe(vec![trim, validate()]).into()))
            .field(FieldSpec::new("raw").on_setattr(NO_OP))
            .done()
            .unwrap();
        let registry = builder.build().unwrap();
        let mut profile = registry
            .construct(id, InitArgs::new().arg("ada").arg(0))
            .unwrap();

        set_attr(&registry, &mut profile, "handle", Value::from("  grace ")).unwrap();
        set_attr(&registry, &mut profile, "raw", Value::from("  as is ")).unwrap();

        assert_eq!(profile.values()[0], Value::from("grace"));
        assert_eq!(profile.values()[1], Value::from("  as is "));
    }
}
