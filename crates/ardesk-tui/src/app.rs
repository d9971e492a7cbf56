use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ardesk_core::domain::Record;
use ardesk_core::rules::AgingPolicy;
use ardesk_core::view::{
    derive, parse_filters, ClientView, Derived, Facet, InvoiceView, RecordView, ReminderView,
    ViewKind, ViewState,
};
use ardesk_store::Store;

pub const LIST_EMPTY: &str = "No records found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Draft search text; only applied on enter.
    FilterEditing(String),
}

/// One mounted record view: its derivation settings, its filters and
/// selection, and the list cursor.
pub struct Pane<V>
where
    V: RecordView,
    V::Record: Record,
{
    pub view: V,
    pub state: ViewState<V::Facet, <V::Record as Record>::Id>,
    pub cursor: usize,
    pub filter_error: Option<String>,
}

impl<V> Pane<V>
where
    V: RecordView,
    V::Record: Record,
{
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: ViewState::new(),
            cursor: 0,
            filter_error: None,
        }
    }

    pub fn derive<'a>(&self, records: &'a [V::Record]) -> Derived<'a, V::Record, V::Summary> {
        derive(&self.view, records, &self.state.filters)
    }

    /// The record behind the open detail panel, looked up in the full store.
    pub fn selected_record<'a>(&self, records: &'a [V::Record]) -> Option<&'a V::Record> {
        let id = self.state.selected()?;
        records.iter().find(|record| record.id() == id)
    }

    fn handle_list_key(&mut self, key: KeyEvent, records: &[V::Record]) -> Option<Mode> {
        let visible = self.derive(records).visible_count();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, visible),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, visible),
            KeyCode::PageDown => self.move_cursor(5, visible),
            KeyCode::PageUp => self.move_cursor(-5, visible),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = visible.saturating_sub(1),
            KeyCode::Enter => {
                let id = self
                    .derive(records)
                    .visible
                    .get(self.cursor)
                    .map(|record| record.id().clone());
                if let Some(id) = id {
                    self.state.select(id);
                }
            }
            KeyCode::Char('/') => {
                self.filter_error = None;
                return Some(Mode::FilterEditing(self.state.filters.query.clone()));
            }
            KeyCode::Char('f') => {
                self.state.cycle_category();
                self.cursor = 0;
            }
            KeyCode::Char('c') => {
                self.state.clear_filters();
                self.filter_error = None;
                self.cursor = 0;
            }
            _ => {}
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.state.back();
        }
    }

    /// Applies the search box. A `key:value` token in the text replaces the
    /// category filter; plain text keeps the current one.
    fn apply_filter_input(&mut self, input: &str) -> bool {
        match parse_filters::<V::Facet>(input) {
            Ok(parsed) => {
                let has_category_token = input.split_whitespace().any(|token| {
                    token
                        .split_once(':')
                        .map(|(key, _)| {
                            <V::Facet as Facet>::KEYS.contains(&key.to_ascii_lowercase().as_str())
                        })
                        .unwrap_or(false)
                });
                self.state.set_query(parsed.query);
                if has_category_token {
                    self.state.set_category(parsed.category);
                }
                self.filter_error = None;
                self.cursor = 0;
                true
            }
            Err(err) => {
                self.filter_error = Some(err.to_string());
                false
            }
        }
    }

    fn move_cursor(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as i32;
        let mut next = self.cursor as i32 + delta;
        if next < 0 {
            next = 0;
        }
        if next >= len {
            next = len - 1;
        }
        self.cursor = next as usize;
    }
}

pub struct App {
    pub mode: Mode,
    pub active: ViewKind,
    pub show_help: bool,
    pub should_quit: bool,
    pub clients: Pane<ClientView>,
    pub invoices: Pane<InvoiceView>,
    pub reminders: Pane<ReminderView>,
    pub policy: AgingPolicy,
    pub currency_symbol: String,
    store: Store,
}

impl App {
    pub fn new(
        store: Store,
        policy: AgingPolicy,
        currency_symbol: impl Into<String>,
        active: ViewKind,
    ) -> Self {
        Self {
            mode: Mode::Browse,
            active,
            show_help: false,
            should_quit: false,
            clients: Pane::new(ClientView),
            invoices: Pane::new(InvoiceView::new(policy)),
            reminders: Pane::new(ReminderView),
            policy,
            currency_symbol: currency_symbol.into(),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn filter_error(&self) -> Option<&str> {
        match self.active {
            ViewKind::Dashboard => None,
            ViewKind::Invoices => self.invoices.filter_error.as_deref(),
            ViewKind::Reminders => self.reminders.filter_error.as_deref(),
            ViewKind::Clients => self.clients.filter_error.as_deref(),
        }
    }

    pub fn in_detail(&self) -> bool {
        match self.active {
            ViewKind::Dashboard => false,
            ViewKind::Invoices => self.invoices.state.is_detail(),
            ViewKind::Reminders => self.reminders.state.is_detail(),
            ViewKind::Clients => self.clients.state.is_detail(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Browse);
        self.mode = match mode {
            Mode::Browse => self.handle_browse_key(key).unwrap_or(Mode::Browse),
            Mode::FilterEditing(input) => self.handle_filter_key(key, input),
        };
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Tab => {
                self.active = self.active.next();
                return None;
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
                return None;
            }
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                if let Some(kind) = ViewKind::from_index(index) {
                    self.active = kind;
                }
                return None;
            }
            _ => {}
        }

        match self.active {
            ViewKind::Dashboard => None,
            ViewKind::Invoices => {
                if self.invoices.state.is_detail() {
                    self.invoices.handle_detail_key(key);
                    None
                } else {
                    self.invoices.handle_list_key(key, self.store.invoices().all())
                }
            }
            ViewKind::Reminders => {
                if self.reminders.state.is_detail() {
                    self.reminders.handle_detail_key(key);
                    None
                } else {
                    self.reminders
                        .handle_list_key(key, self.store.reminders().all())
                }
            }
            ViewKind::Clients => {
                if self.clients.state.is_detail() {
                    self.clients.handle_detail_key(key);
                    None
                } else {
                    self.clients.handle_list_key(key, self.store.clients().all())
                }
            }
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, mut input: String) -> Mode {
        match key.code {
            KeyCode::Esc => {
                self.clear_filter_error();
                Mode::Browse
            }
            KeyCode::Enter => {
                let applied = match self.active {
                    ViewKind::Dashboard => true,
                    ViewKind::Invoices => self.invoices.apply_filter_input(&input),
                    ViewKind::Reminders => self.reminders.apply_filter_input(&input),
                    ViewKind::Clients => self.clients.apply_filter_input(&input),
                };
                if applied {
                    Mode::Browse
                } else {
                    Mode::FilterEditing(input)
                }
            }
            _ => {
                apply_text_input(&mut input, key);
                Mode::FilterEditing(input)
            }
        }
    }

    fn clear_filter_error(&mut self) {
        self.clients.filter_error = None;
        self.invoices.filter_error = None;
        self.reminders.filter_error = None;
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Mode};
    use ardesk_core::domain::ClientId;
    use ardesk_core::rules::{AgingPolicy, RiskLevel};
    use ardesk_core::view::{CategoryFilter, Selection, ViewKind};
    use ardesk_store::Store;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        let store = Store::seeded().expect("seed");
        let as_of = store.reference_date().expect("reference date");
        let policy = AgingPolicy::new(as_of, 7).expect("policy");
        App::new(store, policy, "$", ViewKind::Clients)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn visible_clients(app: &App) -> Vec<String> {
        app.clients
            .derive(app.store().clients().all())
            .visible
            .iter()
            .map(|client| client.name.clone())
            .collect()
    }

    #[test]
    fn search_applies_on_enter_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "acme");
        assert_eq!(app.mode, Mode::FilterEditing("acme".to_string()));
        assert_eq!(visible_clients(&app).len(), 8);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(visible_clients(&app), vec!["Acme Corp"]);
    }

    #[test]
    fn esc_cancels_search_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "mega");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.clients.state.filters.query.is_empty());
    }

    #[test]
    fn q_while_editing_is_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn category_token_in_search_sets_facet() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "risk:high");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.clients.state.filters.category,
            CategoryFilter::Only(RiskLevel::High)
        );
        assert_eq!(visible_clients(&app), vec!["MegaMart"]);
    }

    #[test]
    fn duplicate_category_keeps_editing_with_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "risk:high risk:low");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::FilterEditing(_)));
        assert!(app.filter_error().is_some());
    }

    #[test]
    fn f_cycles_category_and_c_clears() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            app.clients.state.filters.category,
            CategoryFilter::Only(RiskLevel::High)
        );
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            app.clients.state.filters.category,
            CategoryFilter::Only(RiskLevel::Medium)
        );
        assert_eq!(
            visible_clients(&app),
            vec!["TechStart Inc", "RetailHub", "BuildCo"]
        );
        press(&mut app, KeyCode::Char('c'));
        assert!(app.clients.state.filters.is_unfiltered());
    }

    #[test]
    fn detail_round_trip_keeps_filters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "corp");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.clients.state.selection,
            Selection::Detail(ClientId::new("8").unwrap())
        );
        let record = app
            .clients
            .selected_record(app.store().clients().all())
            .expect("record");
        assert_eq!(record.name, "Quantum Corp");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.clients.state.selection, Selection::List);
        assert_eq!(app.clients.state.filters.query, "corp");
        assert_eq!(app.clients.cursor, 1);
    }

    #[test]
    fn enter_on_empty_list_stays_in_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(!app.in_detail());
    }

    #[test]
    fn views_keep_their_own_state() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active, ViewKind::Invoices);
        assert!(app.invoices.state.filters.is_unfiltered());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, ViewKind::Clients);
        assert!(!app.clients.state.filters.is_unfiltered());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.clients.cursor, 7);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.clients.cursor, 0);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.clients.cursor, 0);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
