use expense_buddy::{
    config::{self, users},
    core::{
        budget::{budget_overview, budget_statuses},
        report::{format_amount, format_group_report, format_progress_bar, generate_group_report},
        subscription::{monthly_total, upcoming_renewals},
    },
    errors::Result,
};
use chrono::Utc;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Days ahead to look for subscription renewals.
const RENEWAL_WINDOW_DAYS: u64 = 7;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load configuration and replay it into a fresh store
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Critical error loading configuration: {}", e))?;
    let store = app_config
        .seed_store()
        .inspect_err(|e| error!("Failed to seed ledger: {}", e))?;

    // 4. Report every group
    let nicknames = users::get_participant_nicknames();
    for group in store.groups() {
        let mut report = generate_group_report(&store, &group.id, None)?;
        users::apply_nicknames(&mut report.group, &nicknames);
        println!("{}\n", format_group_report(&report));

        let expenses = store.expenses_for_group(&group.id)?;
        let statuses = budget_statuses(&app_config.budgets, &expenses, store.categories());
        for status in &statuses {
            println!(
                "{:<20} {} {} / {}",
                status.category_name,
                format_progress_bar(status.progress_percent, None),
                format_amount(status.spent),
                format_amount(status.limit)
            );
        }
        if !statuses.is_empty() {
            let overview = budget_overview(&statuses);
            println!(
                "Budget used: {} / {} ({:.1}%)\n",
                format_amount(overview.total_spent),
                format_amount(overview.total_limit),
                overview.overall_progress
            );
        }
    }

    // 5. Subscriptions
    let today = Utc::now().date_naive();
    println!(
        "Subscriptions: {} per month",
        format_amount(monthly_total(&app_config.subscriptions))
    );
    for renewal in upcoming_renewals(&app_config.subscriptions, today, RENEWAL_WINDOW_DAYS) {
        println!(
            "  {} renews on {} ({})",
            renewal.subscription.name,
            renewal.date,
            format_amount(renewal.subscription.amount)
        );
    }

    Ok(())
}
