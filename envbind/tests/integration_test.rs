//! Integration tests

use envbind::{BindError, Complex32, Complex64, EnvBind, Error, FieldKind, LoadError, TypeTag};
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const EPSILON: f64 = 1e-6;

#[derive(Debug, Default, EnvBind)]
struct AllTypes {
    #[env("STRING")]
    pub string: String,
    #[env("INT")]
    pub int: isize,
    #[env("INT8")]
    pub int8: i8,
    #[env("INT16")]
    pub int16: i16,
    #[env("INT32")]
    pub int32: i32,
    #[env("INT64")]
    pub int64: i64,
    #[env("UINT")]
    pub uint: usize,
    #[env("UINT8")]
    pub uint8: u8,
    #[env("UINT16")]
    pub uint16: u16,
    #[env("UINT32")]
    pub uint32: u32,
    #[env("UINT64")]
    pub uint64: u64,
    #[env("FLOAT32")]
    pub float32: f32,
    #[env("FLOAT64")]
    pub float64: f64,
    #[env("BOOL,required")]
    pub bool: bool,
    #[env("COMPLEX64")]
    pub complex64: Complex32,
    #[env("COMPLEX")]
    pub complex: Complex64,
}

type Port = u16;

#[derive(Debug, Default, EnvBind)]
struct Server {
    #[env("PORT,required")]
    pub port: Port,
}

#[derive(Debug, Default, EnvBind)]
struct Tuned<T> {
    #[env("NAME")]
    pub name: String,
    #[env("LEVEL")]
    pub level: T,
}

#[derive(Debug, Default, EnvBind)]
struct AppConfig {
    #[env("STRING")]
    pub string: String,
    #[env("INT")]
    pub count: i32,
    #[env("BOOL,required")]
    pub flag: bool,
}

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn clear_app_vars() {
    for key in ["STRING", "INT", "BOOL"] {
        env::remove_var(key);
    }
}

#[test]
fn test_all_types() {
    let provider = values(&[
        ("STRING", "test"),
        ("INT", "1"),
        ("INT8", "2"),
        ("INT16", "3"),
        ("INT32", "4"),
        ("INT64", "5"),
        ("UINT", "6"),
        ("UINT8", "7"),
        ("UINT16", "8"),
        ("UINT32", "9"),
        ("UINT64", "10"),
        ("FLOAT32", "11.1"),
        ("FLOAT64", "12.2"),
        ("BOOL", "true"),
        ("COMPLEX64", "3-4i"),
        ("COMPLEX", "1+2i"),
    ]);

    let config = AllTypes::from_provider(&provider).unwrap();

    assert_eq!(config.string, "test");
    assert_eq!(config.int, 1);
    assert_eq!(config.int8, 2);
    assert_eq!(config.int16, 3);
    assert_eq!(config.int32, 4);
    assert_eq!(config.int64, 5);
    assert_eq!(config.uint, 6);
    assert_eq!(config.uint8, 7);
    assert_eq!(config.uint16, 8);
    assert_eq!(config.uint32, 9);
    assert_eq!(config.uint64, 10);
    assert!((f64::from(config.float32) - 11.1).abs() < EPSILON);
    assert!((config.float64 - 12.2).abs() < EPSILON);
    assert!(config.bool);
    assert!((f64::from(config.complex64.re) - 3.0).abs() < EPSILON);
    assert!((f64::from(config.complex64.im) + 4.0).abs() < EPSILON);
    assert!((config.complex.re - 1.0).abs() < EPSILON);
    assert!((config.complex.im - 2.0).abs() < EPSILON);
}

#[test]
fn test_bool_true_values() {
    for raw in ["Y", "y", "Yes", "YES", "yes", "on", "true"] {
        let config = AllTypes::from_provider(&values(&[("BOOL", raw)])).unwrap();
        assert!(config.bool, "{raw} should bind as true");
    }
}

#[test]
fn test_bool_false_values() {
    for raw in ["N", "n", "No", "NO", "no", "off", "false"] {
        let config = AllTypes::from_provider(&values(&[("BOOL", raw)])).unwrap();
        assert!(!config.bool, "{raw} should bind as false");
    }
}

#[test]
fn test_bool_invalid_value() {
    let result = AllTypes::from_provider(&values(&[("BOOL", "maybe")]));
    assert!(matches!(result, Err(BindError::Coercion { .. })));
}

#[test]
fn test_required() {
    let result = AllTypes::from_provider(&values(&[]));
    match result {
        Err(BindError::MissingRequired { field, key }) => {
            assert_eq!(field, "bool");
            assert_eq!(key, "BOOL");
        }
        other => panic!("Expected MissingRequired, got {:?}", other),
    }
}

#[test]
fn test_required_reported_even_with_other_valid_fields() {
    let result = AllTypes::from_provider(&values(&[("STRING", "ok"), ("INT8", "1")]));
    assert!(matches!(result, Err(BindError::MissingRequired { .. })));
}

#[test]
fn test_int8_overflow() {
    let result = AllTypes::from_provider(&values(&[
        ("INT8", "99999999999999999999"),
        ("BOOL", "Y"),
    ]));

    match result {
        Err(BindError::Coercion { field, value, .. }) => {
            assert_eq!(field, "int8");
            assert_eq!(value, "99999999999999999999");
        }
        other => panic!("Expected Coercion error, got {:?}", other),
    }
}

#[test]
fn test_optional_absence_does_not_abort() {
    let config = AllTypes::from_provider(&values(&[("UINT16", "80"), ("BOOL", "no")])).unwrap();
    assert_eq!(config.string, "");
    assert_eq!(config.int8, 0);
    assert_eq!(config.uint16, 80);
}

#[test]
fn test_alias_field_binds_as_underlying_type() {
    assert_eq!(
        Server::template()[0].kind,
        FieldKind::Supported(TypeTag::UnsignedInteger(16))
    );

    let server = Server::from_provider(&values(&[("PORT", "8080")])).unwrap();
    assert_eq!(server.port, 8080);

    let result = Server::from_provider(&values(&[("PORT", "70000")]));
    assert!(matches!(result, Err(BindError::Coercion { .. })));
}

#[test]
fn test_generic_field_binds_as_instantiated_type() {
    let tuned = Tuned::<u8>::from_provider(&values(&[("NAME", "svc"), ("LEVEL", "1")])).unwrap();
    assert_eq!(tuned.name, "svc");
    assert_eq!(tuned.level, 1);

    let tuned = Tuned::<f64>::from_provider(&values(&[("LEVEL", "0.5")])).unwrap();
    assert!((tuned.level - 0.5).abs() < EPSILON);

    let result = Tuned::<u8>::from_provider(&values(&[("LEVEL", "256")]));
    assert!(matches!(result, Err(BindError::Coercion { .. })));
}

#[test]
#[serial]
fn test_load_and_bind_reader() {
    clear_app_vars();

    let mut config = AppConfig::default();
    envbind::load_and_bind_reader(Cursor::new("STRING=hello\nINT=42\nBOOL=Y\n"), &mut config)
        .unwrap();

    assert_eq!(config.string, "hello");
    assert_eq!(config.count, 42);
    assert!(config.flag);

    clear_app_vars();
}

#[test]
#[serial]
fn test_load_and_bind_reader_missing_required() {
    clear_app_vars();

    let mut config = AppConfig::default();
    let result = envbind::load_and_bind_reader(Cursor::new("STRING=hello\n"), &mut config);

    match result {
        Err(Error::Bind(BindError::MissingRequired { field, key })) => {
            assert_eq!(field, "flag");
            assert_eq!(key, "BOOL");
        }
        other => panic!("Expected MissingRequired, got {:?}", other),
    }

    clear_app_vars();
}

#[test]
#[serial]
fn test_load_and_bind_file() {
    clear_app_vars();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# application settings").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  STRING = hello  ").unwrap();
    writeln!(file, "INT=42").unwrap();
    writeln!(file, "BOOL=Y").unwrap();

    let mut config = AppConfig::default();
    envbind::load_and_bind_file(file.path(), &mut config).unwrap();

    assert_eq!(config.string, "hello");
    assert_eq!(config.count, 42);
    assert!(config.flag);

    clear_app_vars();
}

#[test]
#[serial]
fn test_load_file_format_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "STRING=hello").unwrap();
    writeln!(file, "FOO").unwrap();

    let mut config = AppConfig::default();
    let result = envbind::load_and_bind_file(file.path(), &mut config);

    assert!(matches!(
        result,
        Err(Error::Load(LoadError::Format { line_number: 2, .. }))
    ));
}

#[test]
#[serial]
fn test_from_env() {
    clear_app_vars();
    env::set_var("STRING", "from-env");
    env::set_var("BOOL", "off");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.string, "from-env");
    assert_eq!(config.count, 0);
    assert!(!config.flag);

    clear_app_vars();
}

#[test]
#[serial]
fn test_from_env_empty_required() {
    clear_app_vars();
    env::set_var("BOOL", "");

    let result = AppConfig::from_env();
    assert!(matches!(result, Err(BindError::MissingRequired { .. })));

    clear_app_vars();
}

#[test]
fn test_parse_reader_feeds_map_provider() {
    let pairs = envbind::parse_reader(Cursor::new("STRING=hello\nINT=42\nBOOL=Y")).unwrap();
    let provider: HashMap<String, String> = pairs.into_iter().collect();

    let config = AppConfig::from_provider(&provider).unwrap();
    assert_eq!(config.string, "hello");
    assert_eq!(config.count, 42);
    assert!(config.flag);
}
