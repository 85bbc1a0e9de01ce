#[cfg(test)]
mod tests {
    use tasklist::libs::task::{normalize_text, parse_done, Task};

    #[test]
    fn test_parse_done_true_values() {
        for value in ["yes", "on", "YES", "On", "  yes  ", "\ton\n"] {
            assert!(parse_done(value), "{:?} should be done", value);
        }
    }

    #[test]
    fn test_parse_done_false_values() {
        for value in ["no", "off", "NO", " Off ", "", "maybe", "true", "1", "yess"] {
            assert!(!parse_done(value), "{:?} should not be done", value);
        }
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("buy milk"), Some("buy milk".to_string()));
        assert_eq!(normalize_text("  buy milk \n"), Some("buy milk".to_string()));
        assert_eq!(normalize_text("a  b"), Some("a  b".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t\r\n "), None);
    }

    #[test]
    fn test_task_serializes() {
        let task = Task::new(5, "write docs", true);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 5, "task": "write docs", "done": true }));
    }
}
