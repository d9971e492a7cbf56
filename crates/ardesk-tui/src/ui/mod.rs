use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use ardesk_core::domain::{Client, Invoice, Reminder, ReminderStatus};
use ardesk_core::rules::{InvoiceStatus, RiskLevel};
use ardesk_core::time::{format_date_long, format_optional_date};
use ardesk_core::view::{summarize_dashboard, ViewKind};

use crate::app::{App, Mode, LIST_EMPTY};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(frame, chunks[0], app);

    match app.active {
        ViewKind::Dashboard => render_dashboard(frame, chunks[1], app),
        ViewKind::Invoices => {
            if app.invoices.state.is_detail() {
                render_invoice_detail(frame, chunks[1], app);
            } else {
                render_invoice_list(frame, chunks[1], app);
            }
        }
        ViewKind::Reminders => {
            if app.reminders.state.is_detail() {
                render_reminder_detail(frame, chunks[1], app);
            } else {
                render_reminder_list(frame, chunks[1], app);
            }
        }
        ViewKind::Clients => {
            if app.clients.state.is_detail() {
                render_client_detail(frame, chunks[1], app);
            } else {
                render_client_list(frame, chunks[1], app);
            }
        }
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mut tabs = Vec::new();
    for kind in ViewKind::ALL {
        let label = format!(" {} {} ", kind.index() + 1, kind.title());
        let style = if kind == app.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(tabs), Line::from(summary_cards(app))];

    let filter_line = match (&app.mode, app.active) {
        (_, ViewKind::Dashboard) => Line::from(format!(
            "as of {}",
            format_date_long(app.policy.as_of)
        )),
        (Mode::FilterEditing(input), _) => {
            let mut spans = vec![
                Span::raw("search: "),
                Span::styled(format!("{}_", input), Style::default().fg(Color::Yellow)),
            ];
            if let Some(err) = app.filter_error() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                ));
            }
            Line::from(spans)
        }
        (Mode::Browse, _) => Line::from(format!("filter: {}", filter_label(app))),
    };
    lines.push(filter_line);

    let block = Block::default().borders(Borders::ALL).title("ardesk");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn summary_cards(app: &App) -> Vec<Span<'static>> {
    let store = app.store();
    let symbol = app.currency_symbol.as_str();
    let cards: Vec<(String, String)> = match app.active {
        ViewKind::Dashboard => {
            let summary = summarize_dashboard(store.invoices().all(), &app.policy);
            vec![
                ("Total AR".into(), summary.total_ar.format_compact(symbol)),
                ("Current".into(), summary.current.format_compact(symbol)),
                ("Overdue".into(), summary.overdue.format_compact(symbol)),
                ("At risk".into(), summary.at_risk.format_compact(symbol)),
            ]
        }
        ViewKind::Invoices => {
            let summary = app.invoices.derive(store.invoices().all()).summary;
            vec![
                ("Invoices".into(), summary.total_invoices.to_string()),
                ("Total".into(), summary.total_amount.format_compact(symbol)),
                (
                    "Overdue".into(),
                    format!(
                        "{} ({})",
                        summary.overdue_count,
                        summary.overdue_amount.format_compact(symbol)
                    ),
                ),
                ("Due soon".into(), summary.due_soon_count.to_string()),
            ]
        }
        ViewKind::Reminders => {
            let summary = app.reminders.derive(store.reminders().all()).summary;
            vec![
                ("Action".into(), summary.action_required.to_string()),
                ("Upcoming".into(), summary.upcoming.to_string()),
                ("History".into(), summary.history.to_string()),
                ("Failed".into(), summary.failed.to_string()),
            ]
        }
        ViewKind::Clients => {
            let summary = app.clients.derive(store.clients().all()).summary;
            vec![
                ("Clients".into(), summary.total_clients.to_string()),
                (
                    "Outstanding".into(),
                    summary.total_outstanding.format_compact(symbol),
                ),
                ("Avg days late".into(), summary.avg_days_late.to_string()),
                ("High risk".into(), summary.high_risk_count.to_string()),
            ]
        }
    };

    let mut spans = Vec::new();
    for (label, value) in cards {
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    spans
}

fn filter_label(app: &App) -> String {
    let input = match app.active {
        ViewKind::Dashboard => String::new(),
        ViewKind::Invoices => app.invoices.state.filters.to_input(),
        ViewKind::Reminders => app.reminders.state.filters.to_input(),
        ViewKind::Clients => app.clients.state.filters.to_input(),
    };
    if input.is_empty() {
        "(none)".to_string()
    } else {
        input
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match (&app.mode, app.active) {
        (Mode::FilterEditing(_), _) => "enter apply  esc cancel  ctrl+u clear  ctrl+w delete word",
        (Mode::Browse, ViewKind::Dashboard) => "1-4/tab switch view  ? help  q quit",
        (Mode::Browse, _) if app.in_detail() => "esc back  1-4/tab switch view  ? help  q quit",
        (Mode::Browse, _) => {
            "j/k move  enter detail  / search  f category  c clear  1-4/tab view  ? help  q quit"
        }
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_dashboard(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let summary = summarize_dashboard(app.store().invoices().all(), &app.policy);
    let symbol = app.currency_symbol.as_str();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total AR      ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.total_ar.format_full(symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Current 0-30  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.current.format_full(symbol),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Overdue 31+   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.overdue.format_full(symbol),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(
                "   {} of {} invoices past due",
                summary.overdue_count, summary.invoice_count
            )),
        ]),
        Line::from(vec![
            Span::styled("At risk       ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.at_risk.format_full(symbol),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Aging",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let bar_width = area.width.saturating_sub(40) as i64;
    for slice in &summary.aging {
        let filled = (bar_width * slice.percent / 100).max(0) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{:<6} ", slice.bucket.label())),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                " {}%  {} invoices  {}",
                slice.percent,
                slice.count,
                slice.amount.format_compact(symbol)
            )),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Dashboard"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_invoice_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let pane = &app.invoices;
    let derived = pane.derive(app.store().invoices().all());
    let symbol = app.currency_symbol.as_str();
    let items = derived
        .visible
        .iter()
        .map(|invoice| {
            let status = app.policy.status(invoice);
            let days_overdue = app.policy.days_overdue(invoice);
            let mut spans = vec![
                Span::styled(
                    invoice.id.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(invoice.customer.clone()),
                Span::raw("  "),
                Span::raw(invoice.amount.format_compact(symbol)),
                Span::raw("  "),
                status_badge(status),
            ];
            if days_overdue > 0 {
                spans.push(Span::styled(
                    format!(" {}d", days_overdue),
                    Style::default().fg(Color::Red),
                ));
            }
            spans.push(Span::raw("  "));
            spans.push(risk_badge(invoice.risk_level()));
            ListItem::new(Line::from(spans))
        })
        .collect();
    render_rows(
        frame,
        area,
        list_title("Invoices", derived.visible_count(), derived.total),
        items,
        pane.cursor,
    );
}

fn render_reminder_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let pane = &app.reminders;
    let derived = pane.derive(app.store().reminders().all());
    let symbol = app.currency_symbol.as_str();
    let items = derived
        .visible
        .iter()
        .map(|reminder| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    reminder.client_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    reminder.invoice_id.to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::raw(reminder.amount.format_compact(symbol)),
                Span::raw("  "),
                Span::raw(format!(
                    "{} via {}",
                    reminder.scheduled_date,
                    reminder.channel.label()
                )),
                Span::raw("  "),
                reminder_badge(reminder.status),
            ]))
        })
        .collect();
    render_rows(
        frame,
        area,
        list_title("Reminders", derived.visible_count(), derived.total),
        items,
        pane.cursor,
    );
}

fn render_client_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let pane = &app.clients;
    let derived = pane.derive(app.store().clients().all());
    let symbol = app.currency_symbol.as_str();
    let items = derived
        .visible
        .iter()
        .map(|client| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    client.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(client.contact.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::raw(client.outstanding_balance.format_compact(symbol)),
                Span::raw(format!("  {}d late  ", client.avg_days_late)),
                risk_badge(client.risk_level()),
            ]))
        })
        .collect();
    render_rows(
        frame,
        area,
        list_title("Clients", derived.visible_count(), derived.total),
        items,
        pane.cursor,
    );
}

fn list_title(name: &str, visible: usize, total: usize) -> String {
    format!("{}  showing {} of {}", name, visible, total)
}

fn render_rows(
    frame: &mut Frame<'_>,
    area: Rect,
    title: String,
    items: Vec<ListItem<'_>>,
    cursor: usize,
) {
    if items.is_empty() {
        let paragraph = Paragraph::new(LIST_EMPTY)
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut state = ListState::default();
    state.select(Some(cursor.min(items.len() - 1)));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_invoice_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(invoice) = app.invoices.selected_record(app.store().invoices().all()) else {
        render_missing(frame, area, "Invoice");
        return;
    };
    let lines = invoice_lines(invoice, app);
    render_detail(frame, area, "Invoice", lines);
}

fn invoice_lines(invoice: &Invoice, app: &App) -> Vec<Line<'static>> {
    let symbol = app.currency_symbol.as_str();
    vec![
        Line::from(Span::styled(
            invoice.id.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        field("Customer", invoice.customer.clone()),
        field("Amount", invoice.amount.format_full(symbol)),
        field("Due", format_date_long(invoice.due_date)),
        Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            status_badge(app.policy.status(invoice)),
        ]),
        field(
            "Days overdue",
            app.policy.days_overdue(invoice).to_string(),
        ),
        field("Aging", app.policy.aging(invoice).label().to_string()),
        Line::from(vec![
            Span::styled("Risk: ", Style::default().add_modifier(Modifier::BOLD)),
            risk_badge(invoice.risk_level()),
            Span::raw(format!(" ({})", invoice.risk_score.value())),
        ]),
        field("Last contact", format_optional_date(invoice.last_contact)),
        field(
            "Last reminder",
            format_optional_date(invoice.last_reminder_sent),
        ),
    ]
}

fn render_reminder_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(reminder) = app.reminders.selected_record(app.store().reminders().all()) else {
        render_missing(frame, area, "Reminder");
        return;
    };
    let lines = reminder_lines(reminder, &app.currency_symbol);
    render_detail(frame, area, "Reminder", lines);
}

fn reminder_lines(reminder: &Reminder, symbol: &str) -> Vec<Line<'static>> {
    let response = match reminder.response_received {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    vec![
        Line::from(Span::styled(
            reminder.client_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        field("Invoice", reminder.invoice_id.to_string()),
        field("Amount", reminder.amount.format_full(symbol)),
        field("Due", format_date_long(reminder.due_date)),
        field("Scheduled", format_date_long(reminder.scheduled_date)),
        Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            reminder_badge(reminder.status),
            Span::raw(format!("  {}", reminder.queue().title())),
        ]),
        field("Channel", reminder.channel.label().to_string()),
        field("Attempts", reminder.attempt_count.to_string()),
        field("Last attempt", format_optional_date(reminder.last_attempt)),
        field("Next attempt", format_optional_date(reminder.next_attempt)),
        field("Response received", response.to_string()),
    ]
}

fn render_client_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(client) = app.clients.selected_record(app.store().clients().all()) else {
        render_missing(frame, area, "Client");
        return;
    };
    let lines = client_lines(client, &app.currency_symbol);
    render_detail(frame, area, "Client", lines);
}

fn client_lines(client: &Client, symbol: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            client.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        field("Contact", client.contact.clone()),
        field("Outstanding", client.outstanding_balance.format_full(symbol)),
        Line::from(vec![
            Span::styled("Risk: ", Style::default().add_modifier(Modifier::BOLD)),
            risk_badge(client.risk_level()),
            Span::raw(format!(" ({})", client.risk_score.value())),
        ]),
        field("Avg days late", client.avg_days_late.to_string()),
        field(
            "Paid on time",
            format!(
                "{}/{} ({}%)",
                client.paid_on_time,
                client.total_invoices,
                client.on_time_percent()
            ),
        ),
        field("Payment trend", client.payment_trend.label().to_string()),
        field("Last payment", format_date_long(client.last_payment)),
    ]
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_missing(frame: &mut Frame<'_>, area: Rect, title: &str) {
    let paragraph = Paragraph::new(LIST_EMPTY)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 70, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: q quit, Ctrl+C quit, ? help, 1-4 or tab/shift+tab switch view"),
        Line::from("List: j/k move, g/G first/last, enter detail, / search, f cycle category, c clear filters"),
        Line::from("Search: enter apply, esc cancel, ctrl+u clear, ctrl+w delete word"),
        Line::from("Detail: esc back to the list"),
        Line::from(""),
        Line::from("Search syntax: free text plus one category token"),
        Line::from("Clients: risk:high|medium|low"),
        Line::from("Invoices: status:overdue|due-soon|current, aging:0-30|31-60|60+, risk:..."),
        Line::from("Reminders: queue:action|upcoming|history, status:..., channel:email|sms|whatsapp|call"),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn risk_badge(level: RiskLevel) -> Span<'static> {
    let style = match level {
        RiskLevel::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        RiskLevel::Medium => Style::default().fg(Color::Yellow),
        RiskLevel::Low => Style::default().fg(Color::Green),
    };
    Span::styled(format!("[{}]", level.label()), style)
}

fn status_badge(status: InvoiceStatus) -> Span<'static> {
    let style = match status {
        InvoiceStatus::Overdue => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        InvoiceStatus::DueSoon => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        InvoiceStatus::Current => Style::default().fg(Color::Blue),
    };
    Span::styled(format!("[{}]", status.label()), style)
}

fn reminder_badge(status: ReminderStatus) -> Span<'static> {
    let style = match status {
        ReminderStatus::Failed => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ReminderStatus::Pending => Style::default().fg(Color::Magenta),
        ReminderStatus::Scheduled => Style::default().fg(Color::Blue),
        ReminderStatus::Sent => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!("[{}]", status.label()), style)
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
