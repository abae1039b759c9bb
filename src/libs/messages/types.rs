use crate::libs::task::TaskFilter;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskQueued,
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskToggled { id: i64, completed: bool },
    NoTasksFound(TaskFilter),
    TasksHeader(TaskFilter),
    TaskDetailHeader,
    ConfirmDeleteTask(String),
    NoChangesDetected,
    InvalidDueDate(String),
    OperationCancelled,

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskImagePath,
    PromptTaskVoiceNotePath,
    SelectTask,

    // === QUICK TASK MESSAGES ===
    QuickTasksHeader,
    QuickTasksEmpty,
    QuickTaskDialogTitle,
    QuickTaskDialogCreate,
    QuickTaskDialogCancel,
    PromptQuickTaskTitle,
    PromptQuickTaskDescription,
    SelectQuickTask,

    // === SESSION MESSAGES ===
    SessionPrompt,
    SessionShowFilter { filter: TaskFilter, count: usize, active: bool },
    SessionNewTask,
    SessionToggleTask,
    SessionOpenTask,
    SessionNewQuickTask,
    SessionToggleQuickTask,
    SessionQuit,
    SessionEnded,
    ControllerNotStarted,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptDefaultFilter,
    PromptDatabaseFile,

    // === DATABASE MESSAGES ===
    DatabaseInitialized,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
