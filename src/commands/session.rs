//! Interactive task list screen.
//!
//! Embeds a [`TaskListController`]: the filter tabs drive `set_filter`, task
//! clicks go through a navigator that records the requested route, and the
//! quick task form feeds the session-only list. Leaving the screen waits for
//! in-flight writes, then stops the controller.

use super::open_repository;
use crate::{
    libs::{
        config::Config,
        controller::{Lifecycle, Navigator, TaskListController},
        formatter,
        messages::Message,
        quick_tasks::{QuickTaskDialog, QuickTaskForm},
        task::{Task, TaskFilter},
        view::View,
        view_model::TaskViewModel,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Filter to open with, the configured default when omitted
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    CreateTask,
    TaskDetail(i64),
}

/// Records the last navigation request for the session loop to follow.
#[derive(Debug, Default)]
struct CliNavigator {
    requested: Option<Route>,
}

impl Navigator for CliNavigator {
    fn navigate_to_create_task(&mut self) {
        self.requested = Some(Route::CreateTask);
    }

    fn navigate_to_task_detail(&mut self, task_id: i64) {
        self.requested = Some(Route::TaskDetail(task_id));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show(TaskFilter),
    NewTask,
    ToggleTask,
    OpenTask,
    NewQuickTask,
    ToggleQuickTask,
    Quit,
}

type Screen = TaskListController<CliNavigator>;

pub async fn cmd(args: SessionArgs) -> Result<()> {
    let config = Config::read()?;
    let view_model = TaskViewModel::new(open_repository(&config)?)?;
    let mut controller = TaskListController::new(view_model, CliNavigator::default())
        .with_initial_filter(args.filter.unwrap_or(config.default_filter));

    controller.start()?;
    let result = run(&mut controller).await;
    controller.view_model_mut().wait_idle().await;
    controller.stop();

    msg_info!(Message::SessionEnded);
    result
}

async fn run(controller: &mut Screen) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        controller.refresh()?;
        render(controller)?;

        match prompt_action(controller, &theme)? {
            Action::Show(filter) => {
                controller.set_filter(filter)?;
            }
            Action::NewTask => controller.on_add_task_clicked(),
            Action::OpenTask => {
                if let Some(position) = select_task(controller, &theme)? {
                    controller.on_task_clicked(position);
                }
            }
            Action::ToggleTask => {
                if let Some(position) = select_task(controller, &theme)? {
                    controller.toggle_task_at(position);
                }
            }
            Action::NewQuickTask => {
                let dialog = prompt_quick_task(&theme)?;
                controller.submit_quick_task_form(dialog);
            }
            Action::ToggleQuickTask => {
                if let Some(id) = select_quick_task(controller, &theme)? {
                    controller.toggle_quick_task_completion(id);
                }
            }
            Action::Quit => return Ok(()),
        }

        if let Some(route) = controller.navigator_mut().requested.take() {
            follow(controller, route, &theme)?;
        }
        controller.settle().await?;
    }
}

fn render(controller: &Screen) -> Result<()> {
    let filter = controller.current_filter();

    msg_print!(Message::TasksHeader(filter), true);
    if controller.displayed_tasks().is_empty() {
        msg_info!(Message::NoTasksFound(filter));
    } else {
        View::tasks(controller.displayed_tasks())?;
    }

    msg_print!(Message::QuickTasksHeader, true);
    if controller.is_quick_tasks_empty_state_visible() {
        msg_info!(Message::QuickTasksEmpty);
    } else {
        View::quick_tasks(controller.quick_tasks())?;
    }

    Ok(())
}

fn prompt_action(controller: &mut Screen, theme: &ColorfulTheme) -> Result<Action> {
    let counts = controller.view_model_mut().task_counts()?;
    let active = controller.current_filter();

    let mut actions: Vec<(Action, Message)> = TaskFilter::ALL
        .iter()
        .map(|filter| {
            let label = Message::SessionShowFilter {
                filter: *filter,
                count: counts.for_filter(*filter),
                active: *filter == active,
            };
            (Action::Show(*filter), label)
        })
        .collect();
    actions.push((Action::NewTask, Message::SessionNewTask));
    if !controller.displayed_tasks().is_empty() {
        actions.push((Action::ToggleTask, Message::SessionToggleTask));
        actions.push((Action::OpenTask, Message::SessionOpenTask));
    }
    actions.push((Action::NewQuickTask, Message::SessionNewQuickTask));
    if !controller.quick_tasks().is_empty() {
        actions.push((Action::ToggleQuickTask, Message::SessionToggleQuickTask));
    }
    actions.push((Action::Quit, Message::SessionQuit));

    let labels: Vec<String> = actions.iter().map(|(_, label)| label.to_string()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::SessionPrompt.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].0)
}

fn select_task(controller: &Screen, theme: &ColorfulTheme) -> Result<Option<usize>> {
    let labels: Vec<String> = controller
        .displayed_tasks()
        .iter()
        .map(|task| format!("{} ({}, {})", task.title, task.due_date, formatter::format_status(task.is_completed)))
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .interact_opt()?;

    Ok(selection)
}

fn select_quick_task(controller: &Screen, theme: &ColorfulTheme) -> Result<Option<i64>> {
    let quick_tasks = controller.quick_tasks();
    let labels: Vec<String> = quick_tasks
        .iter()
        .map(|task| format!("{} ({})", task.title, formatter::format_status(task.is_completed)))
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::SelectQuickTask.to_string())
        .items(&labels)
        .interact_opt()?;

    Ok(selection.map(|position| quick_tasks[position].id))
}

fn prompt_quick_task(theme: &ColorfulTheme) -> Result<QuickTaskDialog> {
    msg_print!(Message::QuickTaskDialogTitle);
    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptQuickTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt(Message::PromptQuickTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let buttons = [Message::QuickTaskDialogCreate.to_string(), Message::QuickTaskDialogCancel.to_string()];
    let choice = Select::with_theme(theme).items(&buttons).default(0).interact()?;

    Ok(match choice {
        0 => QuickTaskDialog::Create(QuickTaskForm { title, description }),
        _ => QuickTaskDialog::Cancel,
    })
}

fn follow(controller: &mut Screen, route: Route, theme: &ColorfulTheme) -> Result<()> {
    match route {
        Route::CreateTask => {
            let task = prompt_new_task(theme)?;
            controller.view_model_mut().insert_task(task);
            msg_success!(Message::TaskQueued);
        }
        Route::TaskDetail(id) => match controller.view_model().repository().get_task_by_id(id)? {
            Some(task) => {
                msg_print!(Message::TaskDetailHeader, true);
                View::task(&task)?;
            }
            None => msg_error!(Message::TaskNotFoundWithId(id)),
        },
    }

    Ok(())
}

fn prompt_new_task(theme: &ColorfulTheme) -> Result<Task> {
    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due_date: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(formatter::today())
        .validate_with(|input: &String| -> Result<(), String> {
            formatter::parse_due_date(input)
                .map(drop)
                .ok_or_else(|| Message::InvalidDueDate(input.clone()).to_string())
        })
        .interact_text()?;
    let image_path: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskImagePath.to_string())
        .allow_empty(true)
        .interact_text()?;
    let voice_note_path: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskVoiceNotePath.to_string())
        .allow_empty(true)
        .interact_text()?;

    let due_date = formatter::parse_due_date(&due_date).unwrap_or(due_date);
    let optional = |value: &str| Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string);

    let mut task = Task::new(title.trim(), &due_date);
    task.description = optional(&description);
    task.image_path = optional(&image_path);
    task.voice_note_path = optional(&voice_note_path);

    Ok(task)
}
