//! Record types shared by the scenario tests.

use attrkit_converters::to_bool_converter;
use attrkit_core::{AttrResult, Factory, Record, TypeHint, TypeId, Value, ValueKind};
use attrkit_registry::validators::{not_null, range};
use attrkit_registry::{
    FieldRegistry, FieldSpec, InitArgs, Registry, RegistryBuilder, RegistryError,
};
use attrkit_setters::{convert, pipe, validate};

/// A registry with a handful of record types.
///
/// - `Point { x: Int, y: Int }`
/// - `Line { start: Point, end: Point, tags = [] }`
/// - `Settings { enabled: bool (to_bool, not null), level = 1 (0..=5) }`,
///   written through `pipe(validate, convert)`
/// - `Coord { lat, lon }`, frozen
pub struct Fixture {
    pub registry: Registry,
    pub point: TypeId,
    pub line: TypeId,
    pub settings: TypeId,
    pub coord: TypeId,
}

impl Fixture {
    pub fn new() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        let point = builder
            .add_type("Point")
            .field(FieldSpec::new("x").typed(ValueKind::Int))
            .field(FieldSpec::new("y").typed(ValueKind::Int))
            .done()?;
        let line = builder
            .add_type("Line")
            .field(FieldSpec::new("start").typed(TypeHint::Record(point)))
            .field(FieldSpec::new("end").typed(TypeHint::Record(point)))
            .field(FieldSpec::new("tags").with_default(Factory::new(|| Value::List(vec![]))))
            .done()?;
        let settings = builder
            .add_type("Settings")
            .field(
                FieldSpec::new("enabled")
                    .with_converter(to_bool_converter())
                    .with_validator(not_null()),
            )
            .field(
                FieldSpec::new("level")
                    .with_default(Value::Int(1))
                    .with_validator(range(Some(Value::Int(0)), Some(Value::Int(5)))),
            )
            .on_setattr(pipe(vec![validate(), convert()]))
            .done()?;
        let coord = builder
            .add_type("Coord")
            .field(FieldSpec::new("lat"))
            .field(FieldSpec::new("lon"))
            .frozen()
            .done()?;

        Ok(Self {
            registry: builder.build()?,
            point,
            line,
            settings,
            coord,
        })
    }

    pub fn point(&self, x: i64, y: i64) -> AttrResult<Record> {
        self.make(self.point, InitArgs::new().arg(x).arg(y))
    }

    pub fn line(&self, start: Record, end: Record, tags: Value) -> AttrResult<Record> {
        self.make(
            self.line,
            InitArgs::new().arg(start).arg(end).kwarg("tags", tags),
        )
    }

    pub fn settings(&self, enabled: impl Into<Value>) -> AttrResult<Record> {
        self.make(self.settings, InitArgs::new().arg(enabled))
    }

    pub fn coord(&self, lat: f64, lon: f64) -> AttrResult<Record> {
        self.make(self.coord, InitArgs::new().arg(lat).arg(lon))
    }

    pub fn make(&self, type_id: TypeId, args: InitArgs) -> AttrResult<Record> {
        self.registry.construct(type_id, args)
    }
}
