//! Integration tests for the tagged representation
//!
//! Exercises the full configuration flow: units written by hand as JSON (the
//! way a pipeline's filter config would arrive), reconstructed, evaluated,
//! and written back out.

use sifter::{
    codec, And, ConfigError, Exists, Function, IsEqual, IsLessThan, IsMoreThan, Not, Or,
    Predicate, StatelessOutputAdapter, Tagged, Value,
};

#[test]
fn decodes_handwritten_config() {
    let json = r#"
        {
            "class": "And",
            "predicates": [
                { "class": "IsMoreThan", "value": { "Int": 0 } },
                { "class": "IsLessThan", "value": { "Int": 10 }, "or_equal_to": true },
                { "class": "Not", "predicate": { "class": "IsEqual", "value": { "Int": 5 } } }
            ]
        }
    "#;

    let p: Predicate = codec::decode(json).unwrap();
    let expected: Predicate = And::new(vec![
        IsMoreThan::new(0).into(),
        IsLessThan::inclusive(10).into(),
        Not::new(IsEqual::new(5)).into(),
    ])
    .into();
    assert_eq!(p, expected);

    assert!(p.test(Some(&Value::from(10))));
    assert!(!p.test(Some(&Value::from(5))));
    assert!(!p.test(Some(&Value::from(11))));
    assert!(!p.test(None));
}

#[test]
fn omitted_or_equal_to_defaults_to_strict() {
    let p: Predicate = codec::decode(r#"{"class":"IsMoreThan","value":{"Int":3}}"#).unwrap();
    assert_eq!(p, IsMoreThan::new(3).into());
}

#[test]
fn absent_control_value_decodes_for_is_equal_only() {
    let p: Predicate = codec::decode(r#"{"class":"IsEqual"}"#).unwrap();
    assert_eq!(p, IsEqual::absent().into());
    assert!(p.test(None));

    // The ordered predicates require their control value.
    for json in [r#"{"class":"IsMoreThan"}"#, r#"{"class":"IsLessThan"}"#] {
        let result: Result<Predicate, _> = codec::decode(json);
        assert!(matches!(result, Err(ConfigError::Malformed { .. })), "{}", json);
    }
}

#[test]
fn nested_composition_roundtrips() {
    let original: Predicate = Not::new(IsMoreThan::inclusive(3)).into();
    let json = codec::encode(&original).unwrap();
    let back: Predicate = codec::decode(&json).unwrap();
    assert_eq!(back, original);

    let original: Predicate = Or::new(vec![
        Exists::new().into(),
        And::new(vec![
            IsEqual::new("ab").into(),
            Not::empty().into(),
        ])
        .into(),
    ])
    .into();
    let back: Predicate = codec::decode(&codec::encode(&original).unwrap()).unwrap();
    assert_eq!(back, original);
}

#[test]
fn reencoding_is_stable() {
    let original: Predicate = Not::new(IsMoreThan::inclusive(3)).into();
    let tree = codec::encode_value(&original).unwrap();
    let back: Predicate = codec::decode_value(tree.clone()).unwrap();
    assert_eq!(codec::encode_value(&back).unwrap(), tree);
}

#[test]
fn unknown_tag_is_a_config_error() {
    let result: Result<Predicate, _> = codec::decode(r#"{"class":"IsDivisibleBy","value":{"Int":2}}"#);
    assert_eq!(
        result,
        Err(ConfigError::UnknownTag {
            role: "predicate",
            tag: "IsDivisibleBy".to_string(),
        })
    );

    let result: Result<Function, _> = codec::decode(r#"{"class":"ToTitleCase"}"#);
    assert_eq!(
        result,
        Err(ConfigError::UnknownTag {
            role: "function",
            tag: "ToTitleCase".to_string(),
        })
    );

    let result: Result<StatelessOutputAdapter, _> = codec::decode(r#"{"class":"StatefulAdapter"}"#);
    assert_eq!(
        result,
        Err(ConfigError::UnknownTag {
            role: "adapter",
            tag: "StatefulAdapter".to_string(),
        })
    );
}

#[test]
fn missing_tag_is_a_config_error() {
    let result: Result<Predicate, _> = codec::decode(r#"{"value":{"Int":2}}"#);
    assert_eq!(result, Err(ConfigError::MissingTag { role: "predicate" }));
}

#[test]
fn adapter_reconstructs_and_still_ignores_state() {
    let json = r#"{"class":"StatelessOutputAdapter","adapter":{"class":"ToUpperCase"}}"#;
    let adapter: StatelessOutputAdapter = codec::decode(json).unwrap();
    assert_eq!(adapter, StatelessOutputAdapter::new(Function::ToUpperCase));

    assert_eq!(
        adapter.apply(&"accumulator", Value::from("ab")).unwrap(),
        Value::from("AB")
    );
    assert_eq!(
        adapter.apply(&9000, Value::from("ab")).unwrap(),
        Value::from("AB")
    );
}

#[test]
fn passthrough_adapter_roundtrips() {
    let adapter: StatelessOutputAdapter =
        codec::decode(r#"{"class":"StatelessOutputAdapter"}"#).unwrap();
    assert_eq!(adapter, StatelessOutputAdapter::passthrough());
    assert_eq!(
        adapter.apply(&(), Value::from(7)).unwrap(),
        Value::from(7)
    );
}

#[test]
fn function_with_configuration_roundtrips() {
    let original = Function::MultiplyBy { by: -4 };
    let back: Function = codec::decode(&codec::encode(&original).unwrap()).unwrap();
    assert_eq!(back, original);
    assert_eq!(back.apply(&Value::from(5)).unwrap(), Value::from(-20));
}

#[test]
fn every_registered_predicate_tag_reconstructs() {
    let samples: Vec<Predicate> = vec![
        IsEqual::new(1).into(),
        IsMoreThan::new(1).into(),
        IsLessThan::new(1).into(),
        Exists::new().into(),
        Not::new(Exists::new()).into(),
        And::new(vec![]).into(),
        Or::new(vec![]).into(),
    ];
    assert_eq!(samples.len(), Predicate::TAGS.len());
    for p in samples {
        assert!(Predicate::TAGS.contains(&p.tag()));
        let back: Predicate = codec::decode(&codec::encode(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}

#[test]
fn every_registered_function_tag_reconstructs() {
    let samples = vec![
        Function::ToUpperCase,
        Function::ToLowerCase,
        Function::Length,
        Function::ToText,
        Function::MultiplyBy { by: 2 },
    ];
    assert_eq!(samples.len(), Function::TAGS.len());
    for f in samples {
        assert!(Function::TAGS.contains(&f.tag()));
        let back: Function = codec::decode(&codec::encode(&f).unwrap()).unwrap();
        assert_eq!(back, f);
    }
}

#[test]
fn control_value_kind_is_preserved() {
    // An Int control value must come back as an Int, not a Decimal.
    let p: Predicate = codec::decode(r#"{"class":"IsEqual","value":{"Int":5}}"#).unwrap();
    assert!(p.test(Some(&Value::from(5))));
    assert!(!p.test(Some(&Value::Decimal("5".parse().unwrap()))));

    let p: Predicate =
        codec::decode(r#"{"class":"IsEqual","value":{"Decimal":"5"}}"#).unwrap();
    assert!(!p.test(Some(&Value::from(5))));
    assert!(p.test(Some(&Value::Decimal("5".parse().unwrap()))));
}
