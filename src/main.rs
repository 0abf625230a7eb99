use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use firefly_signer::config::{DomainConfig, Network};
use firefly_signer::order::{random_salt, Order};
use firefly_signer::signing::{onboarding_payload, SigningScheme};
use firefly_signer::types::{digest_hex, parse_digest, Address};
use firefly_signer::utils::logging;
use firefly_signer::{format_wei, log_debug, log_error, to_wei, OrderSigner, PrivateKey, SignerError};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use zeroize::Zeroizing;

const MODULE: &str = "cli";

/// Default order lifetime
const DEFAULT_EXPIRATION_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Parser)]
#[command(name = "firefly-signer", version, about = "Sign onboarding, order and cancellation messages for Firefly")]
struct Cli {
    /// Network preset for the chain id and onboarding URL
    #[arg(long, global = true, default_value = "testnet")]
    network: Network,

    /// Trader contract of the market (verifying contract)
    #[arg(long, global = true)]
    contract: Option<Address>,

    /// JSON file with the EIP-712 domain; overrides --network and --contract
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hex private key
    #[arg(long, global = true, env = "FIREFLY_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign the onboarding message
    Onboard {
        /// Message to sign; defaults to the network's onboarding URL
        #[arg(long)]
        message: Option<String>,
    },
    /// Hash and sign a limit order
    Order(OrderArgs),
    /// Sign the cancellation of one or more orders
    Cancel {
        /// Hash of an order to cancel; repeat for a batch
        #[arg(long = "order-hash", required = true)]
        order_hashes: Vec<String>,
    },
}

#[derive(Args)]
struct OrderArgs {
    /// Limit price, human decimal
    #[arg(long)]
    price: String,

    /// Quantity, human decimal
    #[arg(long)]
    quantity: String,

    /// Leverage, human decimal
    #[arg(long)]
    leverage: String,

    /// Trigger price, human decimal
    #[arg(long, default_value = "0")]
    trigger_price: String,

    /// Sell instead of buy
    #[arg(long)]
    sell: bool,

    #[arg(long)]
    reduce_only: bool,

    /// Unix seconds; defaults to 30 days from now
    #[arg(long)]
    expiration: Option<u64>,

    /// Random when omitted
    #[arg(long)]
    salt: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        logging::enable_debug();
    }
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let report = match err.downcast_ref::<SignerError>() {
                    Some(signer_err) => json!({ "error": signer_err.report() }),
                    None => json!({ "error": { "message": format!("{:#}", err) } }),
                };
                println!("{}", report);
            } else {
                log_error!(MODULE, "command failed", error = format!("{:#}", err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(mut cli: Cli) -> Result<()> {
    let key_hex = Zeroizing::new(cli.private_key.take().ok_or_else(|| {
        SignerError::InvalidKey(
            "no private key: pass --private-key or set FIREFLY_PRIVATE_KEY".to_string(),
        )
    })?);
    let private_key = PrivateKey::from_hex(&key_hex)?;

    match cli.command {
        Command::Onboard { ref message } => {
            let message = message
                .clone()
                .unwrap_or_else(|| cli.network.onboarding_url().to_string());
            onboard(&cli, &private_key, &message)
        }
        Command::Order(ref args) => {
            let signer = OrderSigner::new(resolve_domain(&cli)?, private_key)?;
            order(&cli, &signer, args)
        }
        Command::Cancel { ref order_hashes } => {
            let signer = OrderSigner::new(resolve_domain(&cli)?, private_key)?;
            cancel(&cli, &signer, order_hashes)
        }
    }
}

fn resolve_domain(cli: &Cli) -> Result<DomainConfig> {
    if let Some(path) = &cli.config {
        let domain = DomainConfig::from_file(path)
            .with_context(|| format!("loading domain from {}", path.display()))?;
        return Ok(domain);
    }

    let contract = cli.contract.ok_or_else(|| {
        SignerError::Config("no verifying contract: pass --contract or --config".to_string())
    })?;
    Ok(DomainConfig::for_network(cli.network, contract))
}

fn onboard(cli: &Cli, private_key: &PrivateKey, message: &str) -> Result<()> {
    let address = private_key.address()?;
    let signed = SigningScheme::PersonalMessage.sign(&onboarding_payload(message), private_key)?;

    log_debug!(MODULE, "onboarding", network = cli.network, address = address);

    if cli.json {
        println!(
            "{}",
            json!({
                "address": address,
                "message": message,
                "signature": signed,
            })
        );
    } else {
        println!("address:   {}", address);
        println!("message:   {}", message);
        println!("signature: {}", signed);
    }
    Ok(())
}

fn order(cli: &Cli, signer: &OrderSigner, args: &OrderArgs) -> Result<()> {
    let expiration = match args.expiration {
        Some(expiration) => expiration,
        None => u64::try_from(chrono::Utc::now().timestamp() + DEFAULT_EXPIRATION_SECS)
            .context("system clock is before the unix epoch")?,
    };

    let order = Order {
        is_buy: !args.sell,
        reduce_only: args.reduce_only,
        quantity: to_wei(&args.quantity).context("--quantity")?,
        price: to_wei(&args.price).context("--price")?,
        trigger_price: to_wei(&args.trigger_price).context("--trigger-price")?,
        leverage: to_wei(&args.leverage).context("--leverage")?,
        maker: signer.address(),
        expiration,
        salt: args.salt.unwrap_or_else(random_salt),
    };

    let flags = order.flags()?;
    let image = signer.order_pre_image(&order)?;
    let signed = signer.sign_order(&order)?;

    if cli.json {
        println!(
            "{}",
            json!({
                "maker": order.maker,
                "flags": format!("0x{}", hex::encode(flags)),
                "salt": order.salt,
                "expiration": order.expiration,
                "domainSeparator": digest_hex(&image.domain_separator),
                "structHash": digest_hex(&image.struct_hash),
                "orderHash": signed.order_hash_hex(),
                "signature": signed.signature,
            })
        );
    } else {
        println!("maker:       {}", order.maker);
        println!("side:        {}", if order.is_buy { "buy" } else { "sell" });
        println!("price:       {}", format_wei(order.price));
        println!("quantity:    {}", format_wei(order.quantity));
        println!("leverage:    {}", format_wei(order.leverage));
        println!("flags:       0x{}", hex::encode(flags));
        println!("salt:        {}", order.salt);
        println!("expiration:  {}", order.expiration);
        println!("struct hash: {}", digest_hex(&image.struct_hash));
        println!("order hash:  {}", signed.order_hash_hex());
        println!("signature:   {}", signed.signature);
    }
    Ok(())
}

fn cancel(cli: &Cli, signer: &OrderSigner, order_hashes: &[String]) -> Result<()> {
    let hashes = order_hashes
        .iter()
        .map(|h| parse_digest(h).with_context(|| format!("--order-hash {}", h)))
        .collect::<Result<Vec<_>>>()?;

    let signed = signer.sign_cancellation(&hashes)?;

    if cli.json {
        println!("{}", serde_json::to_string(&signed)?);
    } else {
        for hash in &signed.order_hashes {
            println!("order hash:  {}", digest_hex(hash));
        }
        println!("cancel hash: {}", digest_hex(&signed.cancel_hash));
        println!("signature:   {}", signed.signature);
    }
    Ok(())
}
