use clap::Parser;
use std::path::Path;
use shoptimal::core::{ConfigProvider, Storage};
use shoptimal::utils::logger;
use shoptimal::{CliConfig, Command, Item, Result, ShopCatalog, ShopData};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            init_logger(&cli, None);
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logger(&cli, config.log_level.as_deref());

    tracing::info!("Starting shoptimal CLI");
    tracing::debug!("Resolved config: {:?}", config);

    let catalog = ShopCatalog::from_config(&config);

    if let Err(e) = run(&catalog, &config, cli.command()) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logger(cli: &CliConfig, level: Option<&str>) {
    if cli.log_json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }
}

fn run<S, C>(catalog: &ShopCatalog<S>, config: &C, command: Command) -> Result<()>
where
    S: Storage,
    C: ConfigProvider,
{
    let file_name = config.file_name();
    let location = catalog.storage().resolve(Path::new(file_name));

    match command {
        Command::RoundTrip => {
            let data = catalog.round_trip(file_name)?;
            println!(
                "✅ Round trip of {} shops through {} succeeded",
                data.len(),
                location.display()
            );
        }
        Command::Export => {
            catalog.export_sample(file_name)?;
            println!("📁 Sample data saved to: {}", location.display());
        }
        Command::Import => {
            let data = catalog.import(file_name)?;
            print_summary(&data);
        }
        Command::Show => {
            let data = catalog.import(file_name)?;
            print_catalogue(&data);
        }
        Command::Check { items } => {
            let data = catalog.import(file_name)?;
            let missing = data.unavailable_items(items.iter().map(String::as_str));
            if missing.is_empty() {
                println!("✅ Every item is sold by at least one shop");
            } else {
                println!("⚠️  Not sold anywhere: {}", missing.join(", "));
            }
        }
    }

    Ok(())
}

fn print_summary(data: &ShopData) {
    println!("{} shops, {} items", data.len(), data.item_count());
    for shop in data {
        println!("  {} ({}): {} items", shop.name, shop.location, shop.catalogue.len());
    }
}

fn print_catalogue(data: &ShopData) {
    for shop in data {
        println!("{} ({})", shop.name, shop.location);

        let mut items: Vec<&Item> = shop.catalogue.iter().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()).then(a.price().total_cmp(&b.price())));
        for item in items {
            println!("  {:<16} {:>8.2}", item.name(), item.price());
        }
    }
}
