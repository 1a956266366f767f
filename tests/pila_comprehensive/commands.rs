//! Request flows through the Executor
//!
//! Mirrors what a transport does: address entities by name or identity,
//! map errors to status codes.

use super::*;
use piladb::engine::config::vars;
use piladb::{Command, Error, Executor, Output};

fn setup() -> Executor {
    let executor = Executor::default();
    executor
        .execute(Command::CreateDatabase { name: "db".into() })
        .unwrap();
    executor
        .execute(Command::CreateStack {
            database: "db".into(),
            name: "stack".into(),
        })
        .unwrap();
    executor
}

#[test]
fn test_address_by_identity_and_name() {
    let executor = setup();
    let db_id = id_of("db");
    let stack_id = id_of("dbstack");

    executor
        .execute(Command::Push {
            database: db_id.clone(),
            stack: "stack".into(),
            element: Value::Int(1),
        })
        .unwrap();
    executor
        .execute(Command::Push {
            database: "db".into(),
            stack: stack_id.clone(),
            element: Value::Int(2),
        })
        .unwrap();

    assert_eq!(
        executor.execute(Command::Size {
            database: db_id,
            stack: stack_id,
        }),
        Ok(Output::Size(2))
    );
}

#[test]
fn test_status_codes() {
    let executor = setup();
    let pop = || Command::Pop {
        database: "db".into(),
        stack: "stack".into(),
    };

    let code = |r: Result<Output, Error>| r.map(|_| 200).unwrap_or_else(|e| e.kind().status_code());

    assert_eq!(code(executor.execute(pop())), 204);
    assert_eq!(
        code(executor.execute(Command::Peek {
            database: "db".into(),
            stack: "missing".into(),
        })),
        410
    );
    executor
        .execute(Command::ConfigSet {
            key: vars::MAX_STACK_SIZE.into(),
            value: Value::Int(0),
        })
        .unwrap();
    assert_eq!(
        code(executor.execute(Command::Push {
            database: "db".into(),
            stack: "stack".into(),
            element: Value::Int(1),
        })),
        406
    );
    executor
        .execute(Command::Block {
            database: "db".into(),
            stack: "stack".into(),
        })
        .unwrap();
    assert_eq!(
        code(executor.execute(Command::DeleteStack {
            database: "db".into(),
            stack: "stack".into(),
        })),
        423
    );
}

#[test]
fn test_status_json_shape() {
    let executor = setup();
    executor
        .execute(Command::Push {
            database: "db".into(),
            stack: "stack".into(),
            element: Value::from("foo"),
        })
        .unwrap();

    let status = match executor
        .execute(Command::StackStatus {
            database: "db".into(),
            stack: "stack".into(),
        })
        .unwrap()
    {
        Output::Stack(status) => status,
        other => panic!("Expected Stack, got {:?}", other),
    };
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["id"], "c6720370-7d14-5a93-bc59-dbc1d54660c8");
    assert_eq!(json["name"], "stack");
    assert_eq!(json["peek"], "foo");
    assert_eq!(json["size"], 1);
    assert_eq!(json["blocked"], false);
    for key in ["created_at", "updated_at", "read_at"] {
        assert!(json[key].as_str().is_some_and(|t| t.ends_with("+00:00")));
    }
}

#[test]
fn test_decoded_payload_reaches_the_stack() {
    let executor = setup();
    let element = piladb::decode_element(Some(br#"{"element": [1, {"a": null}]}"#)).unwrap();
    executor
        .execute(Command::Push {
            database: "db".into(),
            stack: "stack".into(),
            element: element.clone(),
        })
        .unwrap();
    assert_eq!(
        executor.execute(Command::Pop {
            database: "db".into(),
            stack: "stack".into(),
        }),
        Ok(Output::Element(Some(element)))
    );
}
