use anyhow::Context;

use pizzashop_infra::ShopConfig;

fn main() -> anyhow::Result<()> {
    pizzashop_observability::init();

    let config = ShopConfig::from_env().context("invalid shop configuration")?;
    let service = pizzashop_app::open_service(&config);

    for item in service.menu_data() {
        tracing::info!(name = item.name(), price = %item.price(), "on the menu");
    }

    let report = pizzashop_app::render_closing_report(&service, chrono::Utc::now())
        .context("failed to render closing report")?;
    println!("{report}");

    Ok(())
}
