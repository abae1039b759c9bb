#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tasksync::db::tasks::Tasks;
    use tasksync::libs::live::FilteredTasks;
    use tasksync::libs::task::{Task, TaskFilter};
    use tokio::sync::watch;
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_secs(5);

    fn seeded() -> Tasks {
        let tasks = Tasks::in_memory().unwrap();
        tasks.insert(&Task::new("Pay rent", "2024-02-01")).unwrap();
        tasks.insert(&Task::new("Book flights", "2024-01-10").completed(true)).unwrap();
        tasks.insert(&Task::new("Call plumber", "2024-01-05")).unwrap();
        tasks
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_initial_value_matches_fetch() {
        let tasks = seeded();

        for filter in TaskFilter::ALL {
            let live = tasks.live(filter).unwrap();
            assert_eq!(live.filter(), filter);
            assert_eq!(live.current(), tasks.fetch(filter).unwrap().as_slice());
        }
    }

    #[test]
    fn test_refresh_without_writes_is_quiet() {
        let tasks = seeded();
        let mut live = tasks.live(TaskFilter::All).unwrap();

        assert!(!live.refresh().unwrap());
        assert_eq!(live.current().len(), 3);
    }

    #[test]
    fn test_refresh_picks_up_insert() {
        let tasks = seeded();
        let mut live = tasks.live(TaskFilter::Pending).unwrap();

        tasks.insert(&Task::new("Renew passport", "2024-01-01")).unwrap();

        assert!(live.refresh().unwrap());
        assert_eq!(titles(live.current()), vec!["Renew passport", "Call plumber", "Pay rent"]);
        assert!(!live.refresh().unwrap());
    }

    #[test]
    fn test_unrelated_write_does_not_re_emit() {
        let tasks = seeded();
        let mut pending = tasks.live(TaskFilter::Pending).unwrap();

        let mut done = tasks.fetch(TaskFilter::Completed).unwrap().remove(0);
        done.title = "Book flights to Lisbon".to_string();
        tasks.update(&done).unwrap();

        assert!(!pending.refresh().unwrap());
    }

    #[test]
    fn test_clones_refresh_independently() {
        let tasks = seeded();
        let mut first = tasks.live(TaskFilter::All).unwrap();
        let mut second = first.clone();

        tasks.insert(&Task::new("Water plants", "2024-03-01")).unwrap();

        assert!(first.refresh().unwrap());
        assert!(second.refresh().unwrap());
        assert_eq!(first.current(), second.current());
    }

    #[tokio::test]
    async fn test_changed_wakes_on_background_write() {
        let tasks = seeded();
        let mut live = tasks.live(TaskFilter::Pending).unwrap();

        let writer = tasks.clone();
        let handle = tokio::task::spawn_blocking(move || writer.insert(&Task::new("Fix bike", "2024-01-20")).unwrap());

        timeout(WAIT, live.changed()).await.unwrap().unwrap();
        handle.await.unwrap();
        assert!(titles(live.current()).contains(&"Fix bike"));
    }

    #[tokio::test]
    async fn test_changed_skips_writes_outside_the_query() {
        let tasks = seeded();
        let mut pending = tasks.live(TaskFilter::Pending).unwrap();

        tasks.insert(&Task::new("Archived", "2024-01-01").completed(true)).unwrap();
        tasks.insert(&Task::new("Visible", "2024-01-02")).unwrap();

        timeout(WAIT, pending.changed()).await.unwrap().unwrap();
        assert_eq!(titles(pending.current()), vec!["Visible", "Call plumber", "Pay rent"]);
        assert!(!pending.refresh().unwrap());
    }

    #[test]
    fn test_filtered_tasks_follow_filter_cell() {
        let tasks = seeded();
        let (filter_tx, filter_rx) = watch::channel(TaskFilter::All);
        let mut filtered = FilteredTasks::new(tasks.live(TaskFilter::All).unwrap(), filter_rx);
        assert_eq!(filtered.current().len(), 3);

        filter_tx.send(TaskFilter::Completed).unwrap();
        assert!(filtered.refresh().unwrap());
        assert_eq!(filtered.active_filter(), TaskFilter::Completed);
        assert_eq!(titles(filtered.current()), vec!["Book flights"]);
        assert_eq!(filtered.recomputations(), 1);

        assert!(!filtered.refresh().unwrap());
        assert_eq!(filtered.recomputations(), 1);
    }

    #[test]
    fn test_filtered_tasks_match_storage_query() {
        let tasks = seeded();
        let mut done = tasks.fetch(TaskFilter::Pending).unwrap().remove(0);
        done.is_completed = true;
        done.updated_at += 60_000;
        tasks.update(&done).unwrap();

        let (filter_tx, filter_rx) = watch::channel(TaskFilter::All);
        let mut filtered = FilteredTasks::new(tasks.live(TaskFilter::All).unwrap(), filter_rx);

        for filter in TaskFilter::ALL {
            filter_tx.send_replace(filter);
            filtered.refresh().unwrap();
            assert_eq!(filtered.current(), tasks.fetch(filter).unwrap().as_slice(), "filter {}", filter);
        }
    }

    #[tokio::test]
    async fn test_filtered_tasks_wake_on_data_and_filter() {
        let tasks = seeded();
        let (filter_tx, filter_rx) = watch::channel(TaskFilter::Pending);
        let mut filtered = FilteredTasks::new(tasks.live(TaskFilter::All).unwrap(), filter_rx);

        tasks.insert(&Task::new("Sort mail", "2024-01-01")).unwrap();
        timeout(WAIT, filtered.changed()).await.unwrap().unwrap();
        assert_eq!(filtered.current()[0].title, "Sort mail");

        filter_tx.send(TaskFilter::Completed).unwrap();
        timeout(WAIT, filtered.changed()).await.unwrap().unwrap();
        assert_eq!(titles(filtered.current()), vec!["Book flights"]);
    }

    #[tokio::test]
    async fn test_filter_switch_sees_pending_write() {
        for _ in 0..50 {
            let tasks = Tasks::in_memory().unwrap();
            tasks.insert(&Task::new("Old", "2024-01-01")).unwrap();
            tasks.insert(&Task::new("Done", "2024-01-02").completed(true)).unwrap();
            let (filter_tx, filter_rx) = watch::channel(TaskFilter::Pending);
            let mut filtered = FilteredTasks::new(tasks.live(TaskFilter::All).unwrap(), filter_rx);

            tasks.insert(&Task::new("New", "2024-01-03")).unwrap();
            filter_tx.send(TaskFilter::All).unwrap();
            timeout(WAIT, filtered.changed()).await.unwrap().unwrap();

            assert_eq!(filtered.active_filter(), TaskFilter::All);
            assert_eq!(titles(filtered.current()), vec!["Old", "Done", "New"]);
        }
    }
}
