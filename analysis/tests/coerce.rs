use analysis::coerce;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn to_number_accepts_numbers_and_numeric_strings() {
    assert_eq!(coerce::to_number(Some(&json!(7)), 0.0), 7.0);
    assert_eq!(coerce::to_number(Some(&json!(1.25)), 0.0), 1.25);
    assert_eq!(coerce::to_number(Some(&json!(" 42.5 ")), 0.0), 42.5);
    assert_eq!(coerce::to_number(Some(&json!(true)), 0.0), 1.0);
}

#[test]
fn to_number_falls_back() {
    assert_eq!(coerce::to_number(None, 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!(null)), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!("")), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!("abc")), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!("inf")), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!("NaN")), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!([1])), 3.0), 3.0);
    assert_eq!(coerce::to_number(Some(&json!({ "value": 1 })), 3.0), 3.0);
}

#[test]
fn first_text_takes_first_non_empty() {
    let value = json!({ "a": "  ", "b": 12, "c": "later" });

    assert_eq!(coerce::first_text(&value, &["a", "b", "c"]), "12");
    assert_eq!(coerce::first_text(&value, &["missing"]), "");
}

#[test]
fn integer_ids() {
    assert_eq!(coerce::as_integer(Some(&json!(4))), Some(4));
    assert_eq!(coerce::as_integer(Some(&json!(4.0))), Some(4));
    assert_eq!(coerce::as_integer(Some(&json!(" 12 "))), Some(12));
    assert_eq!(coerce::as_integer(Some(&json!("12a"))), None);
    assert_eq!(coerce::as_integer(Some(&json!(1.5))), None);
    assert_eq!(coerce::as_integer(None), None);
}

#[test]
fn names() {
    assert_eq!(coerce::extract_name(&json!({ "nickname": "Nick" })), "Nick");
    assert_eq!(coerce::extract_name(&json!(" Plain ")), "Plain");
    assert_eq!(coerce::name_key("  MiXeD "), "mixed");
}
