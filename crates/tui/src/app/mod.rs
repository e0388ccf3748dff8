use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent};

use engine::{
    CategoryTotals, EngineError, Ledger, Money, SnapshotFile, Transaction, TransactionKind,
    Window, balance, category_totals, filter_by_window,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
    ui::keymap::AppAction,
};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Amount,
    Date,
}

/// The entry form. Raw text goes to the ledger untouched; validation and
/// the resulting error messages live there.
#[derive(Debug)]
pub struct FormState {
    pub kind: TransactionKind,
    pub amount: String,
    pub date: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Income,
            amount: String::new(),
            date: String::new(),
            focus: FormField::Kind,
            error: None,
        }
    }
}

impl FormState {
    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Kind => FormField::Amount,
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Kind,
        };
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Kind => None,
            FormField::Amount => Some(&mut self.amount),
            FormField::Date => Some(&mut self.date),
        }
    }

    /// Clears the submitted values. The kind keeps its last selection as
    /// the default for the next entry.
    fn reset_after_submit(&mut self) {
        self.amount.clear();
        self.date.clear();
        self.error = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

/// View-model derived from the ledger: the filtered subset and its
/// aggregates. Recomputed whenever the ledger revision, the window or the
/// local date changes.
#[derive(Debug, Default)]
pub struct Derived {
    pub entries: Vec<Transaction>,
    pub balance: Money,
    pub totals: CategoryTotals,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: Mode,
    pub window: Window,
    pub form: FormState,
    pub selected: usize,
    pub toast: Option<ToastState>,
    pub today: NaiveDate,
    pub snapshot_path: String,
    pub total_entries: usize,
    pub derived: Derived,
}

pub struct App {
    ledger: Ledger,
    pub state: AppState,
    derived_key: Option<(u64, Window, NaiveDate)>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ledger = Ledger::open(SnapshotFile::new(&config.data_path))?;
        tracing::info!(
            path = %config.data_path,
            entries = ledger.len(),
            "ledger opened"
        );

        let state = AppState {
            mode: Mode::Browse,
            window: Window::default(),
            form: FormState::default(),
            selected: 0,
            toast: None,
            today: Local::now().date_naive(),
            snapshot_path: config.data_path,
            total_entries: ledger.len(),
            derived: Derived::default(),
        };

        Ok(Self {
            ledger,
            state,
            derived_key: None,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.refresh_derived();
            self.expire_toast();

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Re-derives the filtered subset and its aggregates when the ledger
    /// revision, the selected window or the local date has changed. The
    /// reference date tracks the clock so the calendar windows roll over
    /// at midnight.
    fn refresh_derived(&mut self) {
        let today = Local::now().date_naive();
        let key = (self.ledger.revision(), self.state.window, today);
        if self.derived_key == Some(key) {
            return;
        }
        self.derived_key = Some(key);

        self.state.today = today;
        self.state.total_entries = self.ledger.len();

        let entries = filter_by_window(self.ledger.entries(), self.state.window, today);
        self.state.derived.balance = balance(&entries);
        self.state.derived.totals = category_totals(&entries);
        self.state.derived.entries = entries;

        let len = self.state.derived.entries.len();
        if len == 0 {
            self.state.selected = 0;
        } else if self.state.selected >= len {
            self.state.selected = len - 1;
        }
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.state.toast {
            if toast.shown_at.elapsed() >= TOAST_TTL {
                self.state.toast = None;
            }
        }
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            AppAction::Quit => self.should_quit = true,
            action => match self.state.mode {
                Mode::Browse => self.handle_browse(action),
                Mode::Entry => self.handle_entry(action),
            },
        }
    }

    fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('a') => {
                self.state.mode = Mode::Entry;
                self.state.form.error = None;
            }
            AppAction::Input('1') => self.set_window(Window::All),
            AppAction::Input('2') => self.set_window(Window::Today),
            AppAction::Input('3') => self.set_window(Window::ThisWeek),
            AppAction::Input('4') => self.set_window(Window::ThisMonth),
            AppAction::Left => self.set_window(self.state.window.previous()),
            AppAction::Right => self.set_window(self.state.window.next()),
            AppAction::Up | AppAction::Input('k') => self.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.select_next(),
            _ => {}
        }
    }

    fn handle_entry(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => {
                self.state.mode = Mode::Browse;
                self.state.form.error = None;
            }
            AppAction::NextField => self.state.form.advance_focus(),
            AppAction::Submit => self.submit_form(),
            AppAction::Backspace => {
                if let Some(field) = self.state.form.active_text_mut() {
                    field.pop();
                }
            }
            AppAction::Up | AppAction::Down | AppAction::Left | AppAction::Right => {
                if self.state.form.focus == FormField::Kind {
                    self.state.form.kind = self.state.form.kind.toggled();
                }
            }
            AppAction::Input(ch) => self.handle_entry_input(ch),
            _ => {}
        }
    }

    fn handle_entry_input(&mut self, ch: char) {
        if self.state.form.focus == FormField::Kind {
            match ch {
                'i' | 'I' => self.state.form.kind = TransactionKind::Income,
                'e' | 'E' => self.state.form.kind = TransactionKind::Expense,
                ' ' => self.state.form.kind = self.state.form.kind.toggled(),
                _ => {}
            }
            return;
        }
        if let Some(field) = self.state.form.active_text_mut() {
            field.push(ch);
        }
    }

    /// Hands the raw form strings to the ledger. On a validation error the
    /// form keeps its values and shows the message; on success amount and
    /// date reset while the kind selection is retained.
    fn submit_form(&mut self) {
        let form = &self.state.form;
        match self.ledger.append(form.kind, &form.amount, &form.date) {
            Ok(appended) => {
                self.state.form.reset_after_submit();
                if appended.persisted {
                    self.toast(ToastLevel::Success, "Registrato.");
                } else {
                    self.toast(
                        ToastLevel::Error,
                        "Salvataggio fallito: la voce resta solo in memoria.",
                    );
                }
            }
            Err(err) => {
                self.state.form.error = Some(form_message_for_error(&err));
            }
        }
    }

    fn set_window(&mut self, window: Window) {
        self.state.window = window;
        self.state.selected = 0;
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let len = self.state.derived.entries.len();
        if len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(len - 1);
    }
}

fn form_message_for_error(err: &EngineError) -> String {
    match err {
        EngineError::InvalidAmount(_) => "Importo non valido.".to_string(),
        EngineError::InvalidDate(_) => "Data non valida (usa AAAA-MM-GG).".to_string(),
        EngineError::Snapshot(_) => "Errore di salvataggio.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_path: dir
                .path()
                .join("ledger.json")
                .to_string_lossy()
                .into_owned(),
            log_path: dir.path().join("app.log").to_string_lossy().into_owned(),
        };
        (App::new(config).unwrap(), dir)
    }

    #[test]
    fn garbage_amount_is_rejected_and_retained() {
        let (mut app, _dir) = test_app();
        app.state.mode = Mode::Entry;
        app.state.form.amount = "abc".to_string();
        app.state.form.date = "2024-01-01".to_string();

        app.submit_form();

        assert_eq!(app.ledger.len(), 0);
        assert_eq!(app.state.form.error.as_deref(), Some("Importo non valido."));
        assert_eq!(app.state.form.amount, "abc");
        assert_eq!(app.state.form.date, "2024-01-01");
    }

    #[test]
    fn submit_resets_amount_and_date_but_keeps_kind() {
        let (mut app, _dir) = test_app();
        app.state.mode = Mode::Entry;
        app.state.form.kind = TransactionKind::Expense;
        app.state.form.amount = "12.50".to_string();
        app.state.form.date = "2024-01-01".to_string();

        app.submit_form();

        assert_eq!(app.ledger.len(), 1);
        assert!(app.state.form.amount.is_empty());
        assert!(app.state.form.date.is_empty());
        assert_eq!(app.state.form.kind, TransactionKind::Expense);
        assert!(app.state.form.error.is_none());
        assert!(matches!(
            app.state.toast,
            Some(ToastState {
                level: ToastLevel::Success,
                ..
            })
        ));
    }

    #[test]
    fn derived_state_follows_the_window() {
        let (mut app, _dir) = test_app();
        let today = Local::now().date_naive();
        app.ledger
            .append(
                TransactionKind::Income,
                "100",
                &today.format("%Y-%m-%d").to_string(),
            )
            .unwrap();
        app.ledger
            .append(TransactionKind::Expense, "30", "2000-01-01")
            .unwrap();

        app.refresh_derived();
        assert_eq!(app.state.derived.entries.len(), 2);
        assert_eq!(app.state.derived.balance, Money::new(7000));

        app.handle_browse(AppAction::Input('2'));
        app.refresh_derived();
        assert_eq!(app.state.window, Window::Today);
        assert_eq!(app.state.derived.entries.len(), 1);
        assert_eq!(app.state.derived.balance, Money::new(10000));
        assert_eq!(app.state.derived.totals.income, Money::new(10000));
        assert_eq!(app.state.derived.totals.expense, Money::ZERO);
    }

    #[test]
    fn kind_field_responds_to_toggle_keys() {
        let (mut app, _dir) = test_app();
        app.state.mode = Mode::Entry;
        assert_eq!(app.state.form.kind, TransactionKind::Income);

        app.handle_entry(AppAction::Input('e'));
        assert_eq!(app.state.form.kind, TransactionKind::Expense);
        app.handle_entry(AppAction::Input(' '));
        assert_eq!(app.state.form.kind, TransactionKind::Income);
        app.handle_entry(AppAction::Left);
        assert_eq!(app.state.form.kind, TransactionKind::Expense);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let (mut app, _dir) = test_app();
        app.state.mode = Mode::Entry;
        app.handle_entry(AppAction::NextField); // Kind -> Amount
        for ch in "42.5".chars() {
            app.handle_entry(AppAction::Input(ch));
        }
        app.handle_entry(AppAction::NextField); // Amount -> Date
        for ch in "2024-03-01".chars() {
            app.handle_entry(AppAction::Input(ch));
        }

        assert_eq!(app.state.form.amount, "42.5");
        assert_eq!(app.state.form.date, "2024-03-01");

        app.handle_entry(AppAction::Backspace);
        assert_eq!(app.state.form.date, "2024-03-0");
    }
}
