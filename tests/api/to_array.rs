use crate::helpers::spawn_paginator;

#[test]
fn json_form_uses_the_wire_field_names() {
    let paginator = spawn_paginator(25, 10, 3);
    let value = serde_json::to_value(paginator.to_array()).unwrap();

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "current_page",
            "data",
            "first_page_url",
            "from",
            "last_page",
            "last_page_url",
            "next_page_url",
            "per_page",
            "prev_page_url",
            "to",
            "total",
        ]
    );
}

#[test]
fn json_form_values() {
    let paginator = spawn_paginator(25, 10, 3);
    let value = serde_json::to_value(&paginator).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "current_page": 3,
            "data": [
                { "id": 21, "name": "user-21" },
                { "id": 22, "name": "user-22" },
                { "id": 23, "name": "user-23" },
                { "id": 24, "name": "user-24" },
                { "id": 25, "name": "user-25" },
            ],
            "first_page_url": "/users?page=1",
            "from": 21,
            "last_page": 3,
            "last_page_url": "/users?page=3",
            "next_page_url": null,
            "per_page": 10,
            "prev_page_url": "/users?page=2",
            "to": 25,
            "total": 25,
        })
    );
}

#[test]
fn empty_page_serializes_nulls() {
    let paginator = spawn_paginator(0, 10, 1);
    let value = serde_json::to_value(paginator.to_array()).unwrap();

    assert!(value["from"].is_null());
    assert!(value["next_page_url"].is_null());
    assert!(value["prev_page_url"].is_null());
    assert_eq!(value["to"], 0);
    assert_eq!(value["last_page"], 1);
    assert_eq!(value["data"], serde_json::json!([]));
}
