use ardesk_core::domain::{ClientId, InvoiceId, Money, ReminderId};
use ardesk_core::rules::{AgingBucket, AgingPolicy, InvoiceStatus, RiskLevel};
use ardesk_core::view::{
    summarize_dashboard, ClientView, InvoiceFacet, InvoiceView, ReminderFacet, ReminderView,
};
use ardesk_core::{derive, Filters, ReminderQueue};
use ardesk_store::Store;
use chrono::NaiveDate;

fn reference_policy(store: &Store) -> AgingPolicy {
    let as_of = store.reference_date().expect("reference date");
    AgingPolicy::new(as_of, 7).expect("policy")
}

#[test]
fn seeded_store_has_sample_book() {
    let store = Store::seeded().expect("seed");
    assert_eq!(store.clients().len(), 8);
    assert_eq!(store.invoices().len(), 8);
    assert_eq!(store.reminders().len(), 6);
    assert_eq!(
        store.reference_date(),
        NaiveDate::from_ymd_opt(2024, 12, 22)
    );
    assert_eq!(store.clients().all()[0].name, "MegaMart");
}

#[test]
fn lookup_by_id() {
    let store = Store::seeded().expect("seed");
    let id = InvoiceId::new("INV-2024-003").unwrap();
    let invoice = store.invoices().get(&id).expect("invoice");
    assert_eq!(invoice.customer, "Global Enterprises");

    let missing = ReminderId::new("99").unwrap();
    assert!(store.reminders().get(&missing).is_none());
    assert!(store.reminders().require(&missing).is_err());
}

#[test]
fn client_summary_over_sample() {
    let store = Store::seeded().expect("seed");
    let derived = derive(
        &ClientView,
        store.clients().all(),
        &Filters::all().with_category(RiskLevel::High),
    );
    assert_eq!(derived.visible.len(), 1);
    assert_eq!(derived.visible[0].id, ClientId::new("1").unwrap());
    assert_eq!(derived.summary.total_clients, 8);
    assert_eq!(derived.summary.total_outstanding, Money::from_major(1_845_000));
    assert_eq!(derived.summary.avg_days_late, 25);
    assert_eq!(derived.summary.high_risk_count, 1);
    assert_eq!(
        derived.summary.total_outstanding.format_compact("$"),
        "$1.8M"
    );
}

#[test]
fn sample_invoice_statuses_at_reference_date() {
    let store = Store::seeded().expect("seed");
    let view = InvoiceView::new(reference_policy(&store));
    let ids = |status: InvoiceStatus| -> Vec<String> {
        derive(
            &view,
            store.invoices().all(),
            &Filters::all().with_category(InvoiceFacet::Status(status)),
        )
        .visible
        .iter()
        .map(|invoice| invoice.id.to_string())
        .collect()
    };

    assert_eq!(
        ids(InvoiceStatus::Overdue),
        vec!["INV-2024-001", "INV-2024-003", "INV-2024-005", "INV-2024-008"]
    );
    assert_eq!(
        ids(InvoiceStatus::DueSoon),
        vec!["INV-2024-002", "INV-2024-007"]
    );
    assert_eq!(
        ids(InvoiceStatus::Current),
        vec!["INV-2024-004", "INV-2024-006"]
    );
}

#[test]
fn dashboard_over_sample() {
    let store = Store::seeded().expect("seed");
    let policy = reference_policy(&store);
    let dashboard = summarize_dashboard(store.invoices().all(), &policy);
    assert_eq!(dashboard.total_ar, Money::from_major(78_309_000));
    assert_eq!(dashboard.current, Money::from_major(64_064_000));
    assert_eq!(dashboard.overdue, Money::from_major(14_245_000));
    assert_eq!(dashboard.at_risk, Money::from_major(43_120_000));
    let over_30 = dashboard
        .aging
        .iter()
        .find(|slice| slice.bucket == AgingBucket::Days31To60)
        .expect("slice");
    assert_eq!(over_30.count, 1);
    assert_eq!(over_30.percent, 18);
}

#[test]
fn reminder_queues_over_sample() {
    let store = Store::seeded().expect("seed");
    let derived = derive(
        &ReminderView,
        store.reminders().all(),
        &Filters::all().with_category(ReminderFacet::Queue(ReminderQueue::ActionRequired)),
    );
    let clients: Vec<&str> = derived
        .visible
        .iter()
        .map(|r| r.client_name.as_str())
        .collect();
    assert_eq!(clients, vec!["Acme Corp", "Tech Solutions Ltd"]);
    assert_eq!(derived.summary.upcoming, 2);
    assert_eq!(derived.summary.history, 2);
    assert_eq!(derived.summary.failed, 1);
    assert_eq!(derived.summary.responses_received, 1);
}
