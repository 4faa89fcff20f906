use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;
use storefront_core::Storefront;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Order;

fn cli() -> Command {
    let cart = Arg::new("cart")
        .long("cart")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Cart JSON: object of item id to cart item");
    let checkout = Arg::new("checkout")
        .long("checkout")
        .value_parser(value_parser!(PathBuf))
        .help("Checkout JSON: object of field title to answer");

    Command::new("storefront")
        .version(storefront_core::VERSION)
        .about("Storefront cart totals and order messages")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Storefront TOML configuration"),
        )
        .subcommand(
            Command::new("total")
                .about("Print the cart total, delivery surcharge included")
                .arg(cart.clone())
                .arg(checkout.clone()),
        )
        .subcommand(
            Command::new("message")
                .about("Print the order message sent to the store")
                .arg(cart.clone())
                .arg(checkout.clone()),
        )
        .subcommand(
            Command::new("fields")
                .about("List the checkout fields to ask for this cart")
                .arg(cart)
                .arg(checkout)
                .arg(
                    Arg::new("fields")
                        .long("fields")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Fields JSON: list of radio/text fields"),
                ),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STOREFRONT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_order(storefront: &Storefront, args: &ArgMatches) -> Result<Order> {
    let cart = args
        .get_one::<PathBuf>("cart")
        .ok_or_else(|| anyhow::anyhow!("--cart is required"))?;
    let checkout = args.get_one::<PathBuf>("checkout");

    Order::load(storefront, cart, checkout.map(PathBuf::as_path))
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    let Some((name, args)) = matches.subcommand() else {
        return Ok(());
    };

    let config = commands::load_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let storefront = Storefront::new(config);
    let order = load_order(&storefront, args)?;

    match name {
        "total" => {
            tracing::info!(items = order.cart.len(), "computing total");
            println!("{}", commands::total(&storefront, &order));
        }
        "message" => {
            tracing::info!(items = order.cart.len(), "building order message");
            println!("{}", commands::message(&storefront, &order));
        }
        "fields" => {
            let fields = args
                .get_one::<PathBuf>("fields")
                .ok_or_else(|| anyhow::anyhow!("--fields is required"))?;
            println!("{}", commands::fields(&storefront, &order, fields)?);
        }
        _ => {}
    }

    Ok(())
}
