#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::thread;
    use tasklist::db::db::Db;
    use tasklist::db::tasks::Tasks;
    use tasklist::libs::error::TaskError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("tasks.db"), 4).unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                tasks: Tasks::new(db),
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_and_list(ctx: &mut TaskTestContext) {
        assert!(ctx.tasks.list_all().unwrap().is_empty());

        let id = ctx.tasks.create("write spec").unwrap();

        let all = ctx.tasks.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].task, "write spec");
        assert!(!all[0].done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_fetch(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.create("buy milk").unwrap();

        let task = ctx.tasks.fetch_by_id(id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.task, "buy milk");
        assert!(!task.done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_keeps_insertion_order(ctx: &mut TaskTestContext) {
        for i in 1..=5 {
            ctx.tasks.create(&format!("Task {}", i)).unwrap();
        }

        let names: Vec<String> = ctx.tasks.list_all().unwrap().into_iter().map(|t| t.task).collect();
        assert_eq!(names, vec!["Task 1", "Task 2", "Task 3", "Task 4", "Task 5"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_missing_is_not_found(ctx: &mut TaskTestContext) {
        let err = ctx.tasks.fetch_by_id(42).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(42)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.create("Original").unwrap();

        let affected = ctx.tasks.update(id, "Updated", true).unwrap();
        assert_eq!(affected, 1);

        let task = ctx.tasks.fetch_by_id(id).unwrap();
        assert_eq!(task.task, "Updated");
        assert!(task.done);

        ctx.tasks.update(id, "Updated again", false).unwrap();
        assert!(!ctx.tasks.fetch_by_id(id).unwrap().done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_leaves_store_unchanged(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.create("Keep me").unwrap();
        let before = ctx.tasks.list_all().unwrap();

        let err = ctx.tasks.update(id + 100, "Ghost", true).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(missing) if missing == id + 100));

        assert_eq!(ctx.tasks.list_all().unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.create("Short-lived").unwrap();

        assert_eq!(ctx.tasks.delete(id).unwrap(), 1);
        assert!(ctx.tasks.list_all().unwrap().is_empty());
        assert!(matches!(ctx.tasks.fetch_by_id(id), Err(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_is_not_an_error(ctx: &mut TaskTestContext) {
        ctx.tasks.create("Survivor").unwrap();
        let before = ctx.tasks.list_all().unwrap();

        assert_eq!(ctx.tasks.delete(9999).unwrap(), 0);
        assert_eq!(ctx.tasks.list_all().unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut TaskTestContext) {
        ctx.tasks.create("first").unwrap();
        let last = ctx.tasks.create("second").unwrap();
        ctx.tasks.delete(last).unwrap();

        let next = ctx.tasks.create("third").unwrap();
        assert!(next > last);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_text_is_stored_verbatim(ctx: &mut TaskTestContext) {
        let text = "<b>bold</b> & 'quotes' \"double\" ünïcödé";
        let id = ctx.tasks.create(text).unwrap();
        assert_eq!(ctx.tasks.fetch_by_id(id).unwrap().task, text);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_concurrent_creates_share_the_pool(ctx: &mut TaskTestContext) {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let tasks = ctx.tasks.clone();
                thread::spawn(move || {
                    for i in 0..5 {
                        tasks.create(&format!("worker {} item {}", worker, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let all = ctx.tasks.list_all().unwrap();
        assert_eq!(all.len(), 40);

        let mut ids: Vec<i64> = all.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_in_memory_database_is_single_connection() {
        let db = Db::open_in_memory().unwrap();
        assert_eq!(db.pool_size(), 1);
        assert!(db.is_in_memory());

        let tasks = Tasks::new(db);
        let id = tasks.create("ephemeral").unwrap();
        assert_eq!(tasks.fetch_by_id(id).unwrap().task, "ephemeral");
    }

    #[test]
    fn test_schema_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("reopen.db");

        let id = Tasks::new(Db::open(&path, 1).unwrap()).create("persisted").unwrap();

        let reopened = Tasks::new(Db::open(&path, 2).unwrap());
        assert_eq!(reopened.fetch_by_id(id).unwrap().task, "persisted");
    }

    #[test]
    fn test_zero_pool_size_opens_one_connection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(&temp_dir.path().join("zero.db"), 0).unwrap();
        assert_eq!(db.pool_size(), 1);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(Db::open(Path::new(""), 4).is_err());
        assert!(Db::open(Path::new("   "), 1).is_err());
    }

    #[test]
    fn test_pooled_connections_share_one_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = Tasks::new(Db::open(&temp_dir.path().join("shared.db"), 4).unwrap());

        for i in 0..8 {
            tasks.create(&format!("item {}", i)).unwrap();
        }
        for _ in 0..4 {
            assert_eq!(tasks.list_all().unwrap().len(), 8);
        }
    }
}
