//! Shop bootstrap: configuration to a running service.

use chrono::{DateTime, Utc};

use pizzashop_infra::{FileMenuRepository, FilePaymentRepository, ShopConfig};
use pizzashop_service::{ClosingReport, PizzaService};

/// Service backed by the text files named in the configuration.
pub type ShopService = PizzaService<FileMenuRepository, FilePaymentRepository>;

pub fn open_service(config: &ShopConfig) -> ShopService {
    tracing::info!(
        menu = %config.menu_path().display(),
        payments = %config.payments_path().display(),
        "opening shop"
    );
    PizzaService::new(
        FileMenuRepository::new(config.menu_path()),
        FilePaymentRepository::new(config.payments_path()),
    )
}

/// Closing report as pretty-printed JSON.
pub fn render_closing_report(
    service: &ShopService,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    let report = ClosingReport::build(service, generated_at);
    tracing::info!(
        payments = report.payment_count,
        cash = %report.totals.cash,
        card = %report.totals.card,
        "closing totals"
    );
    serde_json::to_string_pretty(&report)
}
