#[cfg(test)]
mod tests {
    use tasksync::libs::config::{Config, CONFIG_FILE_NAME};
    use tasksync::libs::data_storage::DataStorage;
    use tasksync::libs::task::TaskFilter;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// A temporary directory standing in for the application data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("politecinco").join("tasksync"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_filter, TaskFilter::All);
        assert_eq!(config.database_file, "tasksync.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            default_filter: TaskFilter::Pending,
            database_file: "work.db".to_string(),
        };

        config.save_to(&ctx.storage).unwrap();

        assert!(ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "default_filter": "completed" }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config.default_filter, TaskFilter::Completed);
        assert_eq!(config.database_file, "tasksync.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete_from(&ctx.storage).unwrap());

        let config = Config {
            default_filter: TaskFilter::Completed,
            ..Config::default()
        };
        config.save_to(&ctx.storage).unwrap();

        assert!(Config::delete_from(&ctx.storage).unwrap());
        assert!(!ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), Config::default());
    }
}
