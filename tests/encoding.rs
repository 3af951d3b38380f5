use shopadmin::{CheckboxId, FieldName};

#[test]
fn field_name_round_trips_through_display() {
    for input in ["rules[0].ruleName", "rules[17].baseFee", "fees[3].company.name"] {
        let parsed = FieldName::parse(input).unwrap();
        assert_eq!(parsed.to_string(), input, "round trip failed for {input}");
    }
}

#[test]
fn field_name_exposes_its_parts() {
    let name = FieldName::parse("rules[4].estimatedDeliveryTime").unwrap();
    assert_eq!(name.list(), "rules");
    assert_eq!(name.index(), 4);
    assert_eq!(name.attribute(), "estimatedDeliveryTime");
}

#[test]
fn field_name_accepts_hyphen_and_underscore_lists() {
    assert!(FieldName::parse("rule_rows[0].fee").is_ok());
    assert!(FieldName::parse("rule-rows[0].fee").is_ok());
}

#[test]
fn field_name_rejects_malformed_inputs() {
    for input in [
        "",
        "rules",
        "rules[].fee",
        "rules[x].fee",
        "rules[1]",
        "rules[1].",
        "rules[1].fee junk",
        "[1].fee",
        "rules[-1].fee",
    ] {
        assert!(FieldName::parse(input).is_err(), "accepted {input:?}");
    }
}

#[test]
fn field_name_rejects_overflowing_index() {
    assert!(FieldName::parse("rules[18446744073709551616].fee").is_err());
}

#[test]
fn checkbox_id_round_trips_through_display() {
    for input in ["isExpress_0", "isExpressEdit_12", "opt2_10"] {
        let parsed = CheckboxId::parse(input).unwrap();
        assert_eq!(parsed.to_string(), input, "round trip failed for {input}");
    }
}

#[test]
fn checkbox_id_splits_on_the_trailing_digit_run() {
    let id = CheckboxId::parse("isExpressEdit_12").unwrap();
    assert_eq!(id.prefix(), "isExpressEdit_");
    assert_eq!(id.index(), 12);
}

#[test]
fn checkbox_id_rejects_malformed_inputs() {
    for input in ["", "isExpress_", "42", "9lives3", "is express_1"] {
        assert!(CheckboxId::parse(input).is_err(), "accepted {input:?}");
    }
}

#[test]
fn errors_render_with_context() {
    let err = FieldName::parse("rules[x].fee").unwrap_err();
    assert!(err.to_string().starts_with("invalid positional encoding:"));
}
