// nmlgen/src/params/tests.rs

//! Tests for the parameter value module.

use super::*;
use crate::error::NmlgenError;
use std::collections::HashMap;

#[test]
fn test_logical_formatting() {
    assert_eq!(
        ParamValue::Logical(true).to_fortran_string().unwrap(),
        ".true."
    );
    assert_eq!(
        ParamValue::Logical(false).to_fortran_string().unwrap(),
        ".false."
    );
}

#[test]
fn test_integer_formatting() {
    assert_eq!(ParamValue::Integer(42).to_fortran_string().unwrap(), "42");
    assert_eq!(ParamValue::Integer(-7).to_fortran_string().unwrap(), "-7");
    assert_eq!(ParamValue::Integer(0).to_fortran_string().unwrap(), "0");
}

#[test]
fn test_real_formatting() {
    assert_eq!(
        ParamValue::Real(3.14159).to_fortran_string().unwrap(),
        "  3.1415900000d+00"
    );
    assert_eq!(
        ParamValue::Real(0.25).to_fortran_string().unwrap(),
        "  2.5000000000d-01"
    );
    assert_eq!(
        ParamValue::Real(-2.8).to_fortran_string().unwrap(),
        " -2.8000000000d+00"
    );
    assert_eq!(
        ParamValue::Real(0.0).to_fortran_string().unwrap(),
        "  0.0000000000d+00"
    );
    assert_eq!(
        ParamValue::Real(12345.6789).to_fortran_string().unwrap(),
        "  1.2345678900d+04"
    );
}

#[test]
fn test_real_formatting_extreme_exponents() {
    assert_eq!(
        ParamValue::Real(1.0e-7).to_fortran_string().unwrap(),
        "  1.0000000000d-07"
    );
    assert_eq!(
        ParamValue::Real(6.02214076e23).to_fortran_string().unwrap(),
        "  6.0221407600d+23"
    );
    // Three digit exponents push past the 18 column pad
    assert_eq!(
        ParamValue::Real(1.0e100).to_fortran_string().unwrap(),
        " 1.0000000000d+100"
    );
    assert_eq!(
        ParamValue::Real(-1.5e-300).to_fortran_string().unwrap(),
        "-1.5000000000d-300"
    );
}

#[test]
fn test_nonfinite_real_formatting() {
    let inf = ParamValue::Real(f64::INFINITY).to_fortran_string().unwrap();
    assert_eq!(inf.len(), 18);
    assert_eq!(inf.trim_start(), "inf");

    let neg_inf = ParamValue::Real(f64::NEG_INFINITY)
        .to_fortran_string()
        .unwrap();
    assert_eq!(neg_inf.trim_start(), "-inf");

    let nan = ParamValue::Real(f64::NAN).to_fortran_string().unwrap();
    assert_eq!(nan.trim_start(), "nan");
}

#[test]
fn test_string_formatting() {
    assert_eq!(
        ParamValue::character("aiida.bas").to_fortran_string().unwrap(),
        "'aiida.bas'"
    );
    assert_eq!(ParamValue::character("").to_fortran_string().unwrap(), "''");
}

#[test]
fn test_unquoted_string_formatting() {
    let options = FormatOptions {
        quote_strings: false,
    };
    assert_eq!(
        ParamValue::character("aiida.bas")
            .to_fortran_string_with_options(&options)
            .unwrap(),
        "aiida.bas"
    );
}

#[test]
fn test_string_contents_pass_through_unescaped() {
    // Embedded quotes are the caller's responsibility
    assert_eq!(
        ParamValue::character("don't").to_fortran_string().unwrap(),
        "'don't'"
    );
}

#[test]
fn test_compound_values_have_no_literal_form() {
    let arr = ParamValue::array(vec![ParamValue::Integer(1)]);
    match arr.to_fortran_string() {
        Err(NmlgenError::InvalidValue { value, type_name }) => {
            assert_eq!(value, "array[1]");
            assert_eq!(type_name, "array");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }

    let map = ParamValue::mapping(HashMap::new());
    assert!(map.to_fortran_string().is_err());

    let err = ParamValue::Null.to_fortran_string().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value 'null' of type 'null', accepts only logicals, integers, reals and strings"
    );
}

#[test]
fn test_type_names() {
    assert_eq!(ParamValue::Logical(true).type_name(), "logical");
    assert_eq!(ParamValue::Integer(1).type_name(), "integer");
    assert_eq!(ParamValue::Real(1.0).type_name(), "real");
    assert_eq!(ParamValue::character("x").type_name(), "character");
    assert_eq!(ParamValue::array(vec![]).type_name(), "array");
    assert_eq!(ParamValue::mapping(HashMap::new()).type_name(), "mapping");
    assert_eq!(ParamValue::Null.type_name(), "null");
}

#[test]
fn test_scalar_and_null_checks() {
    assert!(ParamValue::Integer(3).is_scalar());
    assert!(ParamValue::character("x").is_scalar());
    assert!(!ParamValue::array(vec![]).is_scalar());
    assert!(!ParamValue::Null.is_scalar());

    assert!(ParamValue::Null.is_null());
    assert!(!ParamValue::Integer(0).is_null());
}

#[test]
fn test_summaries() {
    assert_eq!(ParamValue::Logical(true).summary(), "logical(true)");
    assert_eq!(ParamValue::Integer(42).summary(), "integer(42)");
    assert_eq!(ParamValue::Real(1.5).summary(), "real(1.500000)");
    assert_eq!(
        ParamValue::character("short").summary(),
        "character(\"short\")"
    );
    assert_eq!(
        ParamValue::character("a very long string that keeps going").summary(),
        "character(\"a very long strin...\")"
    );
    assert_eq!(
        ParamValue::array(vec![ParamValue::Integer(1), ParamValue::Integer(2)]).summary(),
        "array[2]"
    );
    assert_eq!(ParamValue::Null.summary(), "null");
}

#[test]
fn test_scalar_conversions() {
    assert_eq!(ParamValue::from(true), ParamValue::Logical(true));
    assert_eq!(ParamValue::from(42i32), ParamValue::Integer(42));
    assert_eq!(ParamValue::from(42i64), ParamValue::Integer(42));
    assert_eq!(ParamValue::from(2.5f32), ParamValue::Real(2.5));
    assert_eq!(ParamValue::from(2.5f64), ParamValue::Real(2.5));
    assert_eq!(
        ParamValue::from("aiida.lvs"),
        ParamValue::Character("aiida.lvs".to_string())
    );
    assert_eq!(
        ParamValue::from("aiida.lvs".to_string()),
        ParamValue::Character("aiida.lvs".to_string())
    );
}

#[test]
fn test_container_conversions() {
    assert_eq!(
        ParamValue::from(vec![4i64, 5, 6]),
        ParamValue::Array(vec![
            ParamValue::Integer(4),
            ParamValue::Integer(5),
            ParamValue::Integer(6),
        ])
    );

    // Nested vectors build the two-level shape used for explicit indices
    assert_eq!(
        ParamValue::from(vec![vec![1.0f64, 2.0]]),
        ParamValue::Array(vec![ParamValue::Array(vec![
            ParamValue::Real(1.0),
            ParamValue::Real(2.0),
        ])])
    );

    let mut hubbard = HashMap::new();
    hubbard.insert("Co".to_string(), 3.5f64);
    let converted = ParamValue::from(hubbard);
    match converted {
        ParamValue::Mapping(entries) => {
            assert_eq!(entries.get("Co"), Some(&ParamValue::Real(3.5)));
        }
        other => panic!("Expected mapping, got {:?}", other),
    }

    assert_eq!(ParamValue::from(Some(4i64)), ParamValue::Integer(4));
    assert_eq!(ParamValue::from(None::<i64>), ParamValue::Null);
}

#[test]
fn test_untagged_deserialization() {
    let v: ParamValue = serde_json::from_str("4").unwrap();
    assert_eq!(v, ParamValue::Integer(4));

    let v: ParamValue = serde_json::from_str("4.0").unwrap();
    assert_eq!(v, ParamValue::Real(4.0));

    let v: ParamValue = serde_json::from_str("true").unwrap();
    assert_eq!(v, ParamValue::Logical(true));

    let v: ParamValue = serde_json::from_str("\"aiida.kpts\"").unwrap();
    assert_eq!(v, ParamValue::Character("aiida.kpts".to_string()));

    let v: ParamValue = serde_json::from_str("null").unwrap();
    assert_eq!(v, ParamValue::Null);

    let v: ParamValue = serde_json::from_str("[1, 2.5, \"Fe\"]").unwrap();
    assert_eq!(
        v,
        ParamValue::Array(vec![
            ParamValue::Integer(1),
            ParamValue::Real(2.5),
            ParamValue::Character("Fe".to_string()),
        ])
    );

    let v: ParamValue = serde_json::from_str("{\"verbosity\": 3}").unwrap();
    match v {
        ParamValue::Mapping(entries) => {
            assert_eq!(entries.get("verbosity"), Some(&ParamValue::Integer(3)));
        }
        other => panic!("Expected mapping, got {:?}", other),
    }
}

#[test]
fn test_untagged_serialization() {
    assert_eq!(
        serde_json::to_value(ParamValue::Integer(4)).unwrap(),
        serde_json::json!(4)
    );
    assert_eq!(
        serde_json::to_value(ParamValue::Logical(false)).unwrap(),
        serde_json::json!(false)
    );
    assert_eq!(
        serde_json::to_value(ParamValue::Null).unwrap(),
        serde_json::json!(null)
    );
    assert_eq!(
        serde_json::to_value(ParamValue::from(vec![1i64, 2])).unwrap(),
        serde_json::json!([1, 2])
    );
}
