use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{backend::CrosstermBackend, Terminal, widgets::{Block, Borders, List, ListItem, Paragraph, ListState}, layout::{Layout, Constraint, Direction}, style::{Style, Modifier, Color}};

use todolists::application::{selectors, store::Store, tasks_service::TasksService, todolists_service::TodolistsService};
use todolists::config::ClientConfig;
use todolists::domain::state::{Action, RequestStatus, RootState};
use todolists::domain::task::{TaskStatus, UpdateDomainTaskModel};
use todolists::infrastructure::http_api::HttpTodolistsApi;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env()?;
    let api = Arc::new(HttpTodolistsApi::new(&config)?);
    let store = Store::new();
    let app = App {
        lists: TodolistsService::new(Arc::clone(&api), store.clone()),
        tasks: TasksService::new(api, store.clone()),
        store,
        base_url: config.base_url,
        mode: Mode::View,
        focus: Focus::Lists,
        list_state: ListState::default(),
        task_state: ListState::default(),
        draft: String::new(),
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode { View, NewList, NewTask, RenameList, EditTask }

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus { Lists, Tasks }

struct App {
    lists: TodolistsService<HttpTodolistsApi>,
    tasks: TasksService<HttpTodolistsApi>,
    store: Store,
    base_url: String,
    mode: Mode,
    focus: Focus,
    list_state: ListState,
    task_state: ListState,
    draft: String,
}

impl App {
    async fn load(&mut self) {
        self.lists.fetch_todolists().await;
        let ids: Vec<String> = self.store.select(|s| selectors::select_todolists(s).iter().map(|tl| tl.id.clone()).collect()).await;
        for id in ids {
            self.tasks.fetch_tasks(&id).await;
        }
        self.store.dispatch(Action::SetAppInitialized(true)).await;
    }

    fn selected_list(&self, state: &RootState) -> Option<String> {
        let idx = self.list_state.selected()?;
        selectors::select_todolists(state).get(idx).map(|tl| tl.id.clone())
    }

    fn selected_task(&self, state: &RootState) -> Option<(String, String, TaskStatus, String)> {
        let list_id = self.selected_list(state)?;
        let idx = self.task_state.selected()?;
        selectors::select_filtered_tasks(state, &list_id)
            .get(idx)
            .map(|t| (t.id.clone(), list_id.clone(), t.status, t.title.clone()))
    }

    fn clamp(&mut self, state: &RootState) {
        let lists = selectors::select_todolists(state).len();
        clamp_state(&mut self.list_state, lists);
        let tasks = self.selected_list(state).map_or(0, |id| selectors::select_filtered_tasks(state, &id).len());
        clamp_state(&mut self.task_state, tasks);
    }
}

fn clamp_state(state: &mut ListState, len: usize) {
    if len == 0 { state.select(None); return; }
    let idx = state.selected().unwrap_or(0).min(len - 1);
    state.select(Some(idx));
}

fn move_selection(state: &mut ListState, up: bool) {
    let idx = state.selected().unwrap_or(0);
    state.select(Some(if up { idx.saturating_sub(1) } else { idx + 1 }));
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    app.load().await;

    loop {
        let state = app.store.snapshot().await;
        app.clamp(&state);

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
                .split(f.size());

            let header = Paragraph::new("Tab: switch pane, n: new, e: edit, d: delete, f: filter, Enter: toggle done, r: reload, q: quit")
                .block(Block::default().borders(Borders::ALL).title("todolists"));
            f.render_widget(header, chunks[0]);

            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[1]);

            let highlight = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED);

            let list_items: Vec<ListItem> = selectors::select_todolists(&state).iter().map(|tl| {
                let busy = if tl.entity_status == RequestStatus::Loading { " …" } else { "" };
                ListItem::new(format!("{} [{}]{}", tl.title, tl.filter.label(), busy))
            }).collect();
            let lists = List::new(list_items)
                .block(Block::default().borders(Borders::ALL).title(if app.focus == Focus::Lists { "lists *" } else { "lists" }))
                .highlight_style(highlight)
                .highlight_symbol(">> ");
            f.render_stateful_widget(lists, middle[0], &mut app.list_state);

            let task_items: Vec<ListItem> = app.selected_list(&state).map(|id| {
                selectors::select_filtered_tasks(&state, &id).into_iter().map(|t| {
                    let mark = if t.status == TaskStatus::Completed { "[x]" } else { "[ ]" };
                    ListItem::new(format!("{} {}", mark, t.title))
                }).collect()
            }).unwrap_or_default();
            let tasks = List::new(task_items)
                .block(Block::default().borders(Borders::ALL).title(if app.focus == Focus::Tasks { "tasks *" } else { "tasks" }))
                .highlight_style(highlight)
                .highlight_symbol(">> ");
            f.render_stateful_widget(tasks, middle[1], &mut app.task_state);

            let (title, footer_text) = match app.mode {
                Mode::View => {
                    let status = match selectors::select_status(&state) {
                        RequestStatus::Idle => "idle",
                        RequestStatus::Loading => "loading…",
                        RequestStatus::Succeeded => "ok",
                        RequestStatus::Failed => "failed",
                    };
                    let error = selectors::select_error(&state).map(|e| format!("  |  error: {e}")).unwrap_or_default();
                    ("info", format!("{}  |  {}{}", app.base_url, status, error))
                }
                Mode::NewList => ("new list", format!("Title: {}_  (Enter to save, Esc to cancel)", app.draft)),
                Mode::NewTask => ("new task", format!("Title: {}_  (Enter to save, Esc to cancel)", app.draft)),
                Mode::RenameList => ("rename list", format!("Title: {}_  (Enter to save, Esc to cancel)", app.draft)),
                Mode::EditTask => ("edit task", format!("Title: {}_  (Enter to save, Esc to cancel)", app.draft)),
            };
            let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(footer, chunks[2]);
        })?;

        if !event::poll(tick_rate)? { continue; }
        let Event::Key(key) = event::read()? else { continue };
        // Only act on key presses; ignore repeats and releases to prevent duplicate input
        if key.kind != KeyEventKind::Press { continue; }

        if app.mode == Mode::View {
            match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Tab => { app.focus = if app.focus == Focus::Lists { Focus::Tasks } else { Focus::Lists }; }
                KeyCode::Up | KeyCode::Down => {
                    let up = key.code == KeyCode::Up;
                    match app.focus {
                        Focus::Lists => { move_selection(&mut app.list_state, up); app.task_state.select(Some(0)); }
                        Focus::Tasks => move_selection(&mut app.task_state, up),
                    }
                }
                KeyCode::Char('r') => app.load().await,
                KeyCode::Char('n') => {
                    app.draft.clear();
                    app.mode = match app.focus {
                        Focus::Lists => Mode::NewList,
                        Focus::Tasks if app.selected_list(&state).is_some() => Mode::NewTask,
                        Focus::Tasks => Mode::View,
                    };
                }
                KeyCode::Char('e') => match app.focus {
                    Focus::Lists => {
                        if let Some(tl) = app.list_state.selected().and_then(|i| selectors::select_todolists(&state).get(i)) {
                            app.draft = tl.title.clone();
                            app.mode = Mode::RenameList;
                        }
                    }
                    Focus::Tasks => {
                        if let Some((_, _, _, title)) = app.selected_task(&state) {
                            app.draft = title;
                            app.mode = Mode::EditTask;
                        }
                    }
                },
                KeyCode::Char('d') => match app.focus {
                    Focus::Lists => if let Some(id) = app.selected_list(&state) { app.lists.remove_todolist(&id).await; },
                    Focus::Tasks => if let Some((task_id, list_id, _, _)) = app.selected_task(&state) { app.tasks.remove_task(&task_id, &list_id).await; },
                },
                KeyCode::Char('f') => {
                    if let Some(tl) = app.list_state.selected().and_then(|i| selectors::select_todolists(&state).get(i)) {
                        app.lists.change_filter(&tl.id, tl.filter.next()).await;
                    }
                }
                KeyCode::Enter => {
                    if let Some((task_id, list_id, status, _)) = app.selected_task(&state) {
                        let next = if status == TaskStatus::Completed { TaskStatus::New } else { TaskStatus::Completed };
                        app.tasks.update_task(&task_id, UpdateDomainTaskModel::status(next), &list_id).await;
                    }
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Esc => { app.mode = Mode::View; app.draft.clear(); }
            KeyCode::Backspace => { app.draft.pop(); }
            KeyCode::Char(c) => app.draft.push(c),
            KeyCode::Enter => {
                let title = app.draft.trim().to_string();
                match app.mode {
                    Mode::NewList => app.lists.add_todolist(&title).await,
                    Mode::NewTask => if let Some(id) = app.selected_list(&state) { app.tasks.add_task(&title, &id).await; },
                    Mode::RenameList => if let Some(id) = app.selected_list(&state) { app.lists.change_todolist_title(&id, &title).await; },
                    Mode::EditTask => if let Some((task_id, list_id, _, _)) = app.selected_task(&state) {
                        app.tasks.update_task(&task_id, UpdateDomainTaskModel::title(title), &list_id).await;
                    },
                    Mode::View => {}
                }
                app.mode = Mode::View;
                app.draft.clear();
            }
            _ => {}
        }
    }
    Ok(())
}
