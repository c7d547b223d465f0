use anyhow::Context;
use cart_sync::core::{CatalogSource, KeyValueStore, Notifier};
use cart_sync::utils::error::{CartError, ErrorSeverity};
use cart_sync::utils::{logger, validation::Validate};
use cart_sync::{
    AmountUpdate, CartCommand, CartManager, CartOutcome, CartSession, CliConfig, ConsoleNotifier,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = cli
        .settings()
        .context("failed to load cart-sync configuration")?;

    // 初始化日誌
    logger::init_logger(settings.log_level.as_deref(), settings.json_logs);

    tracing::info!("Starting cart-sync CLI");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut session = match CartSession::open(&settings, ConsoleNotifier::new()) {
        Ok(session) => session,
        Err(e) => exit_with(e),
    };

    match run(&cli.command, session.cart_mut()).await {
        Ok(CartOutcome::Applied) | Ok(CartOutcome::Ignored) => Ok(()),
        Ok(outcome) => {
            tracing::debug!("Command finished without changes: {:?}", outcome);
            std::process::exit(2);
        }
        Err(e) => exit_with(e),
    }
}

async fn run<C, S, N>(
    command: &CartCommand,
    cart: &mut CartManager<C, S, N>,
) -> cart_sync::Result<CartOutcome>
where
    C: CatalogSource,
    S: KeyValueStore,
    N: Notifier,
{
    let outcome = match command {
        CartCommand::Show => CartOutcome::Applied,
        CartCommand::Add { product_id } => cart.add_product(*product_id).await?,
        CartCommand::Remove { product_id } => cart.remove_product(*product_id)?,
        CartCommand::Update { product_id, amount } => {
            cart.update_product_amount(AmountUpdate {
                product_id: *product_id,
                amount: *amount,
            })
            .await?
        }
        CartCommand::Clear => {
            cart.clear()?;
            CartOutcome::Applied
        }
    };

    print_cart(cart);
    Ok(outcome)
}

fn print_cart<C, S, N>(cart: &CartManager<C, S, N>)
where
    C: CatalogSource,
    S: KeyValueStore,
    N: Notifier,
{
    if cart.cart().is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    for entry in cart.cart() {
        let title = entry.title().unwrap_or("(untitled)");
        match entry.price() {
            Some(price) => println!(
                "#{:<6} {:<40} x{:<4} {:>10.2}",
                entry.id,
                title,
                entry.amount,
                price * f64::from(entry.amount)
            ),
            None => println!("#{:<6} {:<40} x{:<4}", entry.id, title, entry.amount),
        }
    }

    let summary = cart.summary();
    println!(
        "🧾 {} lines, {} items, subtotal {:.2}",
        summary.lines, summary.items, summary.subtotal
    );
}

fn exit_with(e: CartError) -> ! {
    tracing::error!(
        "❌ cart-sync failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
