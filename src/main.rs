use clap::Parser;
use kit_orders::utils::error::ErrorSeverity;
use kit_orders::utils::{logger, validation::Validate};
use kit_orders::{
    round_to_cents, CliConfig, Clock, CsvKitSource, Order, OrderCatalogService, SessionConfig,
    SystemClock,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting kit-orders CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ kit-orders failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2, // rejected by validation
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> kit_orders::Result<()> {
    config.validate()?;

    let session = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading session from: {}", path);
            let session = SessionConfig::from_file(path)?;
            session.validate()?;
            session
        }
        None => SessionConfig::default(),
    };

    let clock = SystemClock;
    let mut service = OrderCatalogService::new(clock);

    if session.catalog.clear_default {
        service.clear_kits();
    }
    if !session.catalog.kits.is_empty() {
        service.import_from(&session)?;
    }
    if let Some(path) = &config.catalog {
        tracing::info!("📁 Importing catalog from: {}", path);
        service.import_from(&CsvKitSource::new(path))?;
    }

    for order in &session.orders {
        let request = order.to_request(clock.now())?;
        let placed = service.place_order(request)?;
        tracing::info!(
            "✅ Order {} placed for customer {} (total {})",
            placed.id,
            placed.customer_id,
            placed.total_price
        );
    }

    let orders = match config.customer {
        Some(customer_id) => service.get_customer_orders(customer_id),
        None => service.orders().to_vec(),
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
    } else {
        print_orders(&orders);
    }

    Ok(())
}

fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders.");
        return;
    }

    println!(
        "{:>6} {:>9} {:>5} {:>5} {:<20} {:>14} {:>12}",
        "order", "customer", "kit", "qty", "delivery", "total", "rounded"
    );
    for order in orders {
        println!(
            "{:>6} {:>9} {:>5} {:>5} {:<20} {:>14} {:>12}",
            order.id,
            order.customer_id,
            order.kit_id,
            order.quantity,
            order
                .expected_delivery_date
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            order.total_price,
            round_to_cents(order.total_price)
        );
    }
}
