use serde::{Deserialize, Serialize};

/// A person tasks can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Resolve an `assignedTo` id against the cached worker list. Returns `None`
/// for the empty id and for dangling references (worker deleted server-side).
pub fn assignee_name(workers: &[Worker], assigned_to: &str) -> Option<String> {
    if assigned_to.is_empty() {
        return None;
    }
    workers
        .iter()
        .find(|w| w.id == assigned_to)
        .map(|w| w.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers() -> Vec<Worker> {
        vec![
            Worker {
                id: "w-1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
            Worker {
                id: "w-2".into(),
                name: "Grace".into(),
                email: String::new(),
            },
        ]
    }

    #[test]
    fn resolves_known_worker() {
        assert_eq!(assignee_name(&workers(), "w-2"), Some("Grace".into()));
    }

    #[test]
    fn unassigned_and_dangling_resolve_to_none() {
        assert_eq!(assignee_name(&workers(), ""), None);
        assert_eq!(assignee_name(&workers(), "w-gone"), None);
    }
}
