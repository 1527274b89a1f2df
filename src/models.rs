//! Wire Models
//!
//! Data structures matching the remote todo service.

use serde::{Deserialize, Serialize};

/// Task record owned by the remote service (matches the wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier, stable for the record's lifetime
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn todo_round_trips_the_underscore_id_field() {
        let wire = json!({"_id": "64f1", "task": "buy milk", "completed": false});
        let todo: Todo = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(todo.id, "64f1");
        assert_eq!(serde_json::to_value(&todo).unwrap(), wire);
    }
}
