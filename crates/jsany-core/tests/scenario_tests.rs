/// End-to-end usage: the kind of code a client writes against the value type,
/// mixing auto-vivification, iteration, operators and display in one flow.
use jsany_core::{array, object, Kind, Value};

#[test]
fn counter_record_and_growing_list() {
    let mut record = object! {
        "name" => String::from("x"),
        "count" => 0,
    };

    for _ in 0..3 {
        record.get_mut("count").unwrap().increment().unwrap();
    }
    assert!(record.get("count").unwrap().equals(&Value::from(3)).unwrap());

    let mut list = Value::array();
    for i in 0..3 {
        list.set(i, i * 10).unwrap();
    }
    assert_eq!(list.len(), Some(3));
    for (key, value) in list.entries().unwrap() {
        assert_eq!(value.to_int().unwrap(), key.to_int().unwrap() * 10);
    }

    let name = record.get("name").unwrap();
    let count = record.get("count").unwrap();
    let label = name.try_add(&count).unwrap();
    assert_eq!(label.kind(), Kind::String);
    assert!(label.equals(&Value::from(String::from("x3"))).unwrap());
}

#[test]
fn summing_object_values_with_a_loop() {
    let scores = object! { "alice" => 3, "bob" => 4, "carol" => 5 };

    let mut total = Value::from(0);
    for score in scores.values().unwrap() {
        total.try_add_assign(score).unwrap();
    }
    assert_eq!(total.as_i32(), Some(12));

    let mut best = Value::Undefined;
    for (name, score) in scores.entries().unwrap() {
        if best.is_undefined() || score.greater_than(&scores.get(&best).unwrap()).unwrap() {
            best = name;
        }
    }
    assert_eq!(best.as_str(), Some("carol"));
}

#[test]
fn building_a_nested_document_by_writes() {
    let mut doc = Value::new_object();
    doc.set("title", "report").unwrap();
    doc.set("rows", Value::array()).unwrap();

    let rows = doc.get_mut("rows").unwrap();
    for i in 0..2 {
        let row = rows.get_mut(i).unwrap();
        *row = Value::new_object();
        row.set("id", i).unwrap();
        row.set("label", Value::from("row ").add_int(i).unwrap()).unwrap();
    }

    doc.delete("title").unwrap();
    assert_eq!(
        doc.to_string(),
        "{rows: [{id: 0, label: row 0}, {id: 1, label: row 1}]}"
    );
}

#[test]
fn truthiness_drives_control_flow() {
    let inputs = array!["", "text", 0, 1, Value::Null, Value::array()];
    let truthy: Vec<bool> = inputs.values().unwrap().map(Value::to_bool).collect();
    assert_eq!(truthy, vec![false, true, false, true, false, true]);
}

#[test]
fn callbacks_stored_in_objects() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let mut handlers = Value::new_object();
    handlers
        .set("ping", Value::closure(move || sink.borrow_mut().push("ping")))
        .unwrap();

    handlers.get("ping").unwrap().call().unwrap();
    handlers.get("ping").unwrap().call().unwrap();
    assert!(handlers.get("missing").unwrap().call().is_err());
    assert_eq!(*log.borrow(), vec!["ping", "ping"]);
}
