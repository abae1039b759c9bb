//! Task list screen controller.
//!
//! The controller owns the view-model, the session's quick tasks and, while
//! the screen is visible, a [`ListBinding`] holding the adapters and the
//! subscription on the filtered task list. `start` creates the binding and
//! `stop` drops it together with any writes that have not started, so no
//! update reaches a screen that is gone.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasksync::db::tasks::Tasks;
//! use tasksync::libs::controller::{Lifecycle, NoopNavigator, TaskListController};
//! use tasksync::libs::repository::TaskRepository;
//! use tasksync::libs::task::TaskFilter;
//! use tasksync::libs::view_model::TaskViewModel;
//!
//! # fn main() -> anyhow::Result<()> {
//! let repository = TaskRepository::new(Tasks::new()?);
//! let mut controller = TaskListController::new(TaskViewModel::new(repository)?, NoopNavigator);
//! controller.start()?;
//! controller.set_filter(TaskFilter::Pending)?;
//! for task in controller.displayed_tasks() {
//!     println!("{}", task.title);
//! }
//! controller.stop();
//! # Ok(())
//! # }
//! ```

use crate::libs::adapter::{QuickTaskAdapter, TaskAdapter};
use crate::libs::live::FilteredTasks;
use crate::libs::messages::Message;
use crate::libs::quick_tasks::{QuickTask, QuickTaskDialog, QuickTaskList};
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view_model::TaskViewModel;
use crate::msg_bail_anyhow;
use anyhow::Result;
use tracing::debug;

/// Start/stop hooks of a screen.
pub trait Lifecycle {
    /// Acquires view resources. Calling it on a started screen does nothing.
    fn start(&mut self) -> Result<()>;

    /// Releases every subscription and reference acquired by `start`.
    fn stop(&mut self);

    fn is_started(&self) -> bool;
}

/// Where item and button clicks lead. The task list only requests navigation.
pub trait Navigator {
    fn navigate_to_create_task(&mut self);

    fn navigate_to_task_detail(&mut self, task_id: i64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to_create_task(&mut self) {
        debug!("create task navigation requested");
    }

    fn navigate_to_task_detail(&mut self, task_id: i64) {
        debug!(task_id, "task detail navigation requested");
    }
}

/// View resources that exist only while the screen is started.
struct ListBinding {
    tasks: FilteredTasks,
    task_adapter: TaskAdapter,
    quick_task_adapter: QuickTaskAdapter,
    quick_tasks_empty_state_visible: bool,
}

pub struct TaskListController<N: Navigator = NoopNavigator> {
    view_model: TaskViewModel,
    navigator: N,
    current_filter: TaskFilter,
    quick_tasks: QuickTaskList,
    binding: Option<ListBinding>,
    subscriptions: usize,
}

impl<N: Navigator> TaskListController<N> {
    pub fn new(view_model: TaskViewModel, navigator: N) -> Self {
        Self {
            view_model,
            navigator,
            current_filter: TaskFilter::All,
            quick_tasks: QuickTaskList::new(),
            binding: None,
            subscriptions: 0,
        }
    }

    /// Filter applied when the screen starts.
    pub fn with_initial_filter(mut self, filter: TaskFilter) -> Self {
        self.current_filter = filter;
        self
    }

    pub fn current_filter(&self) -> TaskFilter {
        self.current_filter
    }

    pub fn view_model(&self) -> &TaskViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut TaskViewModel {
        &mut self.view_model
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Selects which persisted tasks are displayed.
    ///
    /// Selecting the filter that is already active on a started screen does
    /// nothing and returns `false`. Active means both the controller and the
    /// view-model hold it, so a filter moved behind the controller's back is
    /// still replaced.
    pub fn set_filter(&mut self, filter: TaskFilter) -> Result<bool> {
        if self.binding.is_some() && filter == self.current_filter && filter == self.view_model.filter() {
            return Ok(false);
        }
        self.current_filter = filter;
        self.view_model.set_filter(filter);
        self.refresh()?;
        debug!(%filter, "task filter selected");

        Ok(true)
    }

    /// Pulls pending changes into the task adapter. Returns `true` if the displayed list changed.
    pub fn refresh(&mut self) -> Result<bool> {
        let Some(binding) = self.binding.as_mut() else {
            return Ok(false);
        };
        let changed = binding.tasks.refresh()?;
        self.current_filter = binding.tasks.active_filter();
        if !changed {
            return Ok(false);
        }
        binding.task_adapter.submit_list(binding.tasks.current().to_vec());

        Ok(true)
    }

    /// Waits for the next change of the displayed list and submits it.
    pub async fn next_update(&mut self) -> Result<()> {
        let Some(binding) = self.binding.as_mut() else {
            msg_bail_anyhow!(Message::ControllerNotStarted);
        };
        binding.tasks.changed().await?;
        self.current_filter = binding.tasks.active_filter();
        binding.task_adapter.submit_list(binding.tasks.current().to_vec());

        Ok(())
    }

    /// Waits for dispatched writes to land, then refreshes the displayed list.
    pub async fn settle(&mut self) -> Result<bool> {
        self.view_model.wait_idle().await;
        self.refresh()
    }

    pub fn displayed_tasks(&self) -> &[Task] {
        self.binding.as_ref().map(|binding| binding.task_adapter.items()).unwrap_or(&[])
    }

    pub fn task_adapter(&self) -> Option<&TaskAdapter> {
        self.binding.as_ref().map(|binding| &binding.task_adapter)
    }

    pub fn quick_task_adapter(&self) -> Option<&QuickTaskAdapter> {
        self.binding.as_ref().map(|binding| &binding.quick_task_adapter)
    }

    /// Number of task list subscriptions opened over the controller's life.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions
    }

    /// Forwards a click on a displayed task to the task detail route.
    pub fn on_task_clicked(&mut self, position: usize) -> bool {
        let Some(task_id) = self.displayed_task_id(position) else {
            return false;
        };
        self.navigator.navigate_to_task_detail(task_id);
        true
    }

    pub fn on_add_task_clicked(&mut self) {
        self.navigator.navigate_to_create_task();
    }

    /// Toggles completion of the displayed task at `position` in the background.
    pub fn toggle_task_at(&mut self, position: usize) -> bool {
        let Some(task) = self.binding.as_ref().and_then(|binding| binding.task_adapter.item(position)).cloned() else {
            return false;
        };
        self.view_model.toggle_task_completion(task);
        true
    }

    pub fn quick_tasks(&self) -> &[QuickTask] {
        self.quick_tasks.items()
    }

    /// Adds a quick task at the top of the list. Blank titles are ignored.
    pub fn add_quick_task(&mut self, title: &str, description: Option<&str>) -> Option<QuickTask> {
        let added = self.quick_tasks.add(title, description).cloned()?;
        self.submit_quick_tasks();
        self.update_quick_tasks_visibility();
        debug!(id = added.id, "quick task added");

        Some(added)
    }

    /// Handles the quick task form being closed.
    pub fn submit_quick_task_form(&mut self, dialog: QuickTaskDialog) -> Option<QuickTask> {
        match dialog {
            QuickTaskDialog::Create(form) => self.add_quick_task(&form.title, Some(&form.description)),
            QuickTaskDialog::Cancel => None,
        }
    }

    pub fn toggle_quick_task_completion(&mut self, id: i64) -> bool {
        if !self.quick_tasks.toggle_completion(id) {
            return false;
        }
        self.submit_quick_tasks();
        true
    }

    pub fn is_quick_tasks_empty_state_visible(&self) -> bool {
        self.binding.as_ref().is_some_and(|binding| binding.quick_tasks_empty_state_visible)
    }

    fn displayed_task_id(&self, position: usize) -> Option<i64> {
        self.binding.as_ref()?.task_adapter.item(position)?.id
    }

    fn submit_quick_tasks(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.quick_task_adapter.submit_list(self.quick_tasks.items().to_vec());
        }
    }

    fn update_quick_tasks_visibility(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.quick_tasks_empty_state_visible = self.quick_tasks.is_empty();
        }
    }
}

impl<N: Navigator> Lifecycle for TaskListController<N> {
    fn start(&mut self) -> Result<()> {
        if self.binding.is_some() {
            return Ok(());
        }
        self.view_model.set_filter(self.current_filter);
        let tasks = self.view_model.filtered_tasks()?;

        let mut binding = ListBinding {
            tasks,
            task_adapter: TaskAdapter::new(),
            quick_task_adapter: QuickTaskAdapter::new(),
            quick_tasks_empty_state_visible: true,
        };
        binding.task_adapter.submit_list(binding.tasks.current().to_vec());
        binding.quick_task_adapter.submit_list(self.quick_tasks.items().to_vec());
        self.binding = Some(binding);
        self.subscriptions += 1;
        self.update_quick_tasks_visibility();
        debug!(filter = %self.current_filter, "task list started");

        Ok(())
    }

    fn stop(&mut self) {
        if self.binding.take().is_some() {
            debug!("task list stopped");
        }
        self.view_model.cancel_pending_writes();
    }

    fn is_started(&self) -> bool {
        self.binding.is_some()
    }
}
