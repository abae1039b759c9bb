#[cfg(test)]
mod tests {
    use tasksync::db::db::Db;
    use tasksync::db::tasks::Tasks;
    use tasksync::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    impl TaskTestContext {
        fn tasks(&self) -> Tasks {
            let db = Db::open(self.temp_dir.path().join("tasks.db")).unwrap();
            Tasks::from_db(db)
        }
    }

    fn insert_task(tasks: &Tasks, title: &str, due: &str, done: bool) -> Task {
        let id = tasks.insert(&Task::new(title, due).completed(done)).unwrap();
        tasks.get_by_id(id).unwrap().unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_assigns_id(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let task = Task::new("Write report", "2024-05-01")
            .with_description(Some("Quarterly numbers"))
            .with_image_path(Some("/tmp/chart.png"));
        let id = tasks.insert(&task).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.title, "Write report");
        assert_eq!(stored.description.as_deref(), Some("Quarterly numbers"));
        assert_eq!(stored.image_path.as_deref(), Some("/tmp/chart.png"));
        assert_eq!(stored.voice_note_path, None);
        assert!(!stored.is_completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_ignores_given_id(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        let first = insert_task(&tasks, "First", "2024-01-01", false);

        let mut duplicate = Task::new("Second", "2024-01-02");
        duplicate.id = first.id;
        let id = tasks.insert(&duplicate).unwrap();

        assert_ne!(Some(id), first.id);
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_storage_does_not_validate(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let id = tasks.insert(&Task::new("", "not a date")).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.title, "");
        assert_eq!(stored.due_date, "not a date");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_all_orders_by_due_date(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        insert_task(&tasks, "Later", "2024-03-01", false);
        insert_task(&tasks, "Sooner", "2024-01-01", true);
        insert_task(&tasks, "Middle", "2024-02-01", false);

        let titles: Vec<String> = tasks.fetch(TaskFilter::All).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Sooner", "Middle", "Later"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_pending_excludes_completed(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        insert_task(&tasks, "Open B", "2024-02-01", false);
        insert_task(&tasks, "Done", "2024-01-15", true);
        insert_task(&tasks, "Open A", "2024-01-01", false);

        let pending = tasks.fetch(TaskFilter::Pending).unwrap();
        let titles: Vec<&str> = pending.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Open A", "Open B"]);
        assert!(pending.iter().all(|t| !t.is_completed));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_orders_by_last_update(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        let mut older = insert_task(&tasks, "Older", "2024-01-01", true);
        let mut newer = insert_task(&tasks, "Newer", "2024-06-01", true);
        insert_task(&tasks, "Open", "2024-01-01", false);

        older.updated_at = 1_000;
        newer.updated_at = 2_000;
        tasks.update(&older).unwrap();
        tasks.update(&newer).unwrap();

        let titles: Vec<String> = tasks.fetch(TaskFilter::Completed).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_replaces_every_field(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        let mut task = insert_task(&tasks, "Original", "2024-01-01", false);

        task.title = "Renamed".to_string();
        task.description = Some("Now with notes".to_string());
        task.due_date = "2024-12-31".to_string();
        task.voice_note_path = Some("/tmp/memo.m4a".to_string());
        let affected = tasks.update(&task).unwrap();

        assert_eq!(affected, 1);
        assert_eq!(tasks.get_by_id(task.id.unwrap()).unwrap().unwrap(), task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_and_delete_missing_row(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        let mut ghost = Task::new("Ghost", "2024-01-01");
        ghost.id = Some(999);

        assert_eq!(tasks.update(&ghost).unwrap(), 0);
        assert_eq!(tasks.delete(&ghost).unwrap(), 0);
        assert_eq!(tasks.version(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        let task = insert_task(&tasks, "Disposable", "2024-01-01", false);

        assert_eq!(tasks.delete(&task).unwrap(), 1);
        assert!(tasks.get_by_id(task.id.unwrap()).unwrap().is_none());
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_survive_reopen(ctx: &mut TaskTestContext) {
        let id = ctx.tasks().insert(&Task::new("Persistent", "2024-01-01")).unwrap();

        let reopened = ctx.tasks();
        assert_eq!(reopened.get_by_id(id).unwrap().unwrap().title, "Persistent");
    }

    #[test]
    fn test_version_counts_effective_writes() {
        let tasks = Tasks::in_memory().unwrap();
        assert_eq!(tasks.version(), 0);

        let id = tasks.insert(&Task::new("Counted", "2024-01-01")).unwrap();
        assert_eq!(tasks.version(), 1);

        let task = tasks.get_by_id(id).unwrap().unwrap();
        tasks.update(&task).unwrap();
        tasks.delete(&task).unwrap();
        tasks.delete(&task).unwrap();
        assert_eq!(tasks.version(), 3);
    }
}
