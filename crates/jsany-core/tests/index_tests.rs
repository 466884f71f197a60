use jsany_core::{array, object, Value, ValueError, MAX_ARRAY_INDEX};

fn assert_invalid(result: Result<impl std::fmt::Debug, ValueError>, expected: &str) {
    match result {
        Err(ValueError::InvalidOperation(msg)) => assert_eq!(msg, expected),
        other => panic!("expected InvalidOperation({expected:?}), got {other:?}"),
    }
}

// ============================================================================
// Soft-fail reads
// ============================================================================

#[test]
fn read_out_of_bounds_is_undefined_and_does_not_grow() {
    let list = array![1, 2, 3];
    assert!(list.get(100).unwrap().is_undefined());
    assert!(list.get(-1).unwrap().is_undefined());
    assert_eq!(list.len(), Some(3));
}

#[test]
fn read_in_bounds_returns_element() {
    let list = array!["a", "b"];
    assert_eq!(list.get(1).unwrap().as_str(), Some("b"));
    assert_eq!(list.get(1i64).unwrap().as_str(), Some("b"));
    assert_eq!(list.get(1usize).unwrap().as_str(), Some("b"));
}

#[test]
fn read_missing_key_is_undefined_and_does_not_insert() {
    let obj = object! { "b" => 2 };
    assert!(obj.get("a").unwrap().is_undefined());
    assert!(!obj.contains("a").unwrap());
    assert_eq!(obj.len(), Some(1));
}

#[test]
fn lookup_distinguishes_missing_from_undefined() {
    let mut obj = Value::new_object();
    obj.set("present", Value::Undefined).unwrap();
    assert!(obj.lookup("present").unwrap().is_some());
    assert!(obj.lookup("absent").unwrap().is_none());
}

#[test]
fn integer_index_on_object_uses_decimal_key() {
    let obj = object! { "5" => "five" };
    assert_eq!(obj.get(5).unwrap().as_str(), Some("five"));
    assert_eq!(obj.get(&Value::from(5i64)).unwrap().as_str(), Some("five"));
}

#[test]
fn value_indices_dispatch_by_kind() {
    let list = array![10, 20];
    assert_eq!(list.get(&Value::from(1)).unwrap().as_i32(), Some(20));

    let obj = object! { "k" => 1 };
    assert_eq!(obj.get(&Value::from("k")).unwrap().as_i32(), Some(1));
    assert_eq!(obj.get(&Value::from(String::from("k"))).unwrap().as_i32(), Some(1));
    let key = String::from("k");
    assert_eq!(obj.get(&key).unwrap().as_i32(), Some(1));
}

#[test]
fn string_index_on_array_is_rejected() {
    let list = array![1];
    assert_invalid(list.get("0"), "unsupported index type");
    assert_invalid(list.get(&Value::from("0")), "unsupported index type");
}

#[test]
fn other_index_kinds_are_rejected() {
    let obj = Value::new_object();
    assert_invalid(obj.get(&Value::from(true)), "unsupported index type");
    assert_invalid(obj.get(&Value::from(1.5)), "unsupported index type");
    assert_invalid(obj.get(&Value::Null), "unsupported index type");
}

#[test]
fn indexing_non_container_is_rejected() {
    assert_invalid(Value::from(3).get(0), "not an array or object");
    assert_invalid(Value::from("abc").get(0), "not an array or object");
    let mut n = Value::from(3);
    assert_invalid(n.get_mut("x"), "not an array or object");
}

// ============================================================================
// Auto-vivifying writes
// ============================================================================

#[test]
fn write_past_end_pads_with_undefined() {
    let mut list = Value::array();
    list.set(5, "x").unwrap();

    assert_eq!(list.len(), Some(6));
    for i in 0..5 {
        assert!(list.get(i).unwrap().is_undefined(), "index {i} should be undefined");
    }
    assert_eq!(list.get(5).unwrap().as_str(), Some("x"));
}

#[test]
fn write_in_bounds_replaces_without_growth() {
    let mut list = array![1, 2, 3];
    list.set(1, 20).unwrap();
    assert_eq!(list.to_string(), "[1, 20, 3]");
}

#[test]
fn write_missing_key_creates_it() {
    let mut obj = Value::new_object();
    assert!(obj.get("a").unwrap().is_undefined());
    assert_eq!(obj.len(), Some(0));

    let slot = obj.get_mut("a").unwrap();
    assert!(slot.is_undefined());
    *slot = Value::from(1);

    assert_eq!(obj.len(), Some(1));
    assert_eq!(obj.get("a").unwrap().as_i32(), Some(1));
}

#[test]
fn get_mut_alone_vivifies_key_as_undefined() {
    let mut obj = Value::new_object();
    obj.get_mut("touched").unwrap();
    assert!(obj.contains("touched").unwrap());
    assert!(obj.get("touched").unwrap().is_undefined());
}

#[test]
fn integer_write_on_object_uses_decimal_key() {
    let mut obj = Value::new_object();
    obj.set(7, "seven").unwrap();
    obj.set(&Value::from(8i64), "eight").unwrap();
    assert_eq!(obj.get("7").unwrap().as_str(), Some("seven"));
    assert_eq!(obj.get("8").unwrap().as_str(), Some("eight"));
}

#[test]
fn negative_array_write_is_rejected() {
    let mut list = Value::array();
    assert_invalid(list.get_mut(-1), "negative array index");
    assert_eq!(list.len(), Some(0));
}

#[test]
fn write_beyond_max_array_index_is_rejected_without_growth() {
    let mut list = array![1];
    assert_invalid(list.set(i64::MAX, 1), "array index out of range");
    assert_invalid(list.set(1i64 << 40, 1), "array index out of range");
    assert_invalid(list.get_mut(MAX_ARRAY_INDEX + 1), "array index out of range");
    assert_eq!(list.len(), Some(1));
}

#[test]
fn huge_reads_stay_soft() {
    let list = array![1];
    assert!(list.get(i64::MAX).unwrap().is_undefined());
    assert!(list.get(usize::MAX).unwrap_err().to_string().contains("unsupported index type"));
}

#[test]
fn nested_writes_vivify_each_level_in_place() {
    let mut root = object! { "rows" => Value::array() };
    let row = root.get_mut("rows").unwrap().get_mut(1).unwrap();
    *row = object! { "id" => 2 };

    let rows = root.get("rows").unwrap();
    assert_eq!(rows.len(), Some(2));
    assert_eq!(rows.get(1).unwrap().get("id").unwrap().as_i32(), Some(2));
}

// ============================================================================
// Deletion
// ============================================================================

#[test]
fn delete_present_key() {
    let mut obj = object! { "a" => 1, "b" => 2 };
    obj.delete("a").unwrap();
    assert!(obj.get("a").unwrap().is_undefined());
    assert_eq!(obj.len(), Some(1));
}

#[test]
fn delete_absent_key_is_noop() {
    let mut obj = object! { "a" => 1 };
    obj.delete("zzz").unwrap();
    assert_eq!(obj.len(), Some(1));
}

#[test]
fn delete_integer_key_uses_decimal_form() {
    let mut obj = object! { 3 => "three" };
    obj.delete(3).unwrap();
    assert_eq!(obj.len(), Some(0));
}

#[test]
fn delete_on_non_object_is_type_error() {
    let mut list = array![1];
    assert!(matches!(list.delete("0"), Err(ValueError::Type(_))));
    let mut n = Value::from(1);
    assert!(matches!(n.delete("x"), Err(ValueError::Type(_))));
}
