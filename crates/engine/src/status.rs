//! Status snapshots returned by stacks, databases and the Pila
//!
//! These are plain data: building one never touches UpdatedAt or ReadAt.
//! Field names are the JSON keys of the piladb API.

use std::collections::BTreeMap;

use piladb_core::timestamp::{self, Timestamp};
use piladb_core::Value;
use serde::{Deserialize, Serialize};

/// Status of one stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackStatus {
    /// Stack identity
    pub id: String,
    /// Stack name
    pub name: String,
    /// Top element, `null` when empty
    pub peek: Option<Value>,
    /// Number of elements
    pub size: usize,
    /// Whether mutations are forbidden
    pub blocked: bool,
    /// Creation date
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: Timestamp,
    /// Last recorded write
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: Timestamp,
    /// Last recorded read
    #[serde(serialize_with = "timestamp::serialize")]
    pub read_at: Timestamp,
}

/// Status of a list of stacks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StacksStatus {
    /// Stack statuses
    pub stacks: Vec<StackStatus>,
}

impl StacksStatus {
    /// Order the list by stack name.
    pub fn sort_by_name(&mut self) {
        self.stacks.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Number of stacks listed.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether no stack is listed.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

/// Stack name to top element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StacksKv {
    /// `name -> peek`, `null` for empty stacks
    pub stacks: BTreeMap<String, Option<Value>>,
}

/// Status of a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStatus {
    /// Database identity
    pub id: String,
    /// Database name
    pub name: String,
    /// Number of stacks
    pub number_of_stacks: usize,
    /// Sorted stack identities
    pub stacks: Vec<String>,
}

/// Status of the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PilaStatus {
    /// Number of databases
    pub number_of_databases: usize,
    /// Database statuses
    pub databases: Vec<DatabaseStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn stack_status(name: &str, peek: Option<Value>) -> StackStatus {
        let at = Utc.with_ymd_and_hms(2017, 4, 30, 17, 1, 47).unwrap();
        StackStatus {
            id: "e5b8c45d-bf31-5d7d-bbb3-d5389255a3cc".to_string(),
            name: name.to_string(),
            peek,
            size: 1,
            blocked: false,
            created_at: at,
            updated_at: at,
            read_at: at,
        }
    }

    #[test]
    fn stack_status_json_shape() {
        let status = stack_status("stack", Some(Value::from("foo")));
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "e5b8c45d-bf31-5d7d-bbb3-d5389255a3cc",
                "name": "stack",
                "peek": "foo",
                "size": 1,
                "blocked": false,
                "created_at": "2017-04-30T17:01:47+00:00",
                "updated_at": "2017-04-30T17:01:47+00:00",
                "read_at": "2017-04-30T17:01:47+00:00",
            })
        );
    }

    #[test]
    fn stack_status_empty_peek_is_null() {
        let json = serde_json::to_value(stack_status("s", None)).unwrap();
        assert_eq!(json["peek"], serde_json::Value::Null);
    }

    #[test]
    fn stack_status_round_trips() {
        let status = stack_status("s", Some(Value::Int(3)));
        let text = serde_json::to_string(&status).unwrap();
        let back: StackStatus = serde_json::from_str(&text).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn stacks_status_sorts_by_name() {
        let mut status = StacksStatus {
            stacks: vec![stack_status("c", None), stack_status("a", None), stack_status("b", None)],
        };
        status.sort_by_name();
        let names: Vec<_> = status.stacks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(status.len(), 3);
    }

    #[test]
    fn stacks_kv_json_shape() {
        let mut kv = StacksKv::default();
        kv.stacks.insert("foo".to_string(), Some(Value::Int(8)));
        kv.stacks.insert("bar".to_string(), None);
        assert_eq!(
            serde_json::to_value(&kv).unwrap(),
            json!({"stacks": {"bar": null, "foo": 8}})
        );
    }

    #[test]
    fn pila_status_json_shape() {
        let status = PilaStatus {
            number_of_databases: 1,
            databases: vec![DatabaseStatus {
                id: "e9423e94-11d0-59db-8c2d-c5aa1892d35a".to_string(),
                name: "db".to_string(),
                number_of_stacks: 0,
                stacks: vec![],
            }],
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "number_of_databases": 1,
                "databases": [{
                    "id": "e9423e94-11d0-59db-8c2d-c5aa1892d35a",
                    "name": "db",
                    "number_of_stacks": 0,
                    "stacks": [],
                }],
            })
        );
    }
}
