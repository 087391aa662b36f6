use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use uprod::assembly::init_asm;
use uprod::reference::{verify_boundaries, verify_random};
use uprod::util::{parse_operand, MulConfig};
use uprod::{Strategy, WideProduct};

/// Exact 128-bit product of two 64-bit unsigned integers
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First operand (decimal or 0x-prefixed hex)
    #[arg(value_parser = parse_operand)]
    x: u64,

    /// Second operand (decimal or 0x-prefixed hex)
    #[arg(value_parser = parse_operand)]
    y: u64,

    /// Force a strategy: native, limb or asm
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Also check boundary operands and N random pairs against the reference
    #[arg(long, value_name = "N")]
    verify: Option<usize>,
}

fn setup_logger() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logger();

    let args = Args::parse();
    init_asm();

    let mut config = MulConfig::default();
    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(samples) = args.verify {
        config = config.with_verify_samples(samples);
    }

    let strategy = config.resolve_strategy();
    tracing::info!(%strategy, x = args.x, y = args.y, "multiplying");

    let product = WideProduct::compute(strategy, args.x, args.y);
    println!("{} * {} =", args.x, args.y);
    println!("  hex:     {}", product);
    println!("  decimal: {}", product.to_u128());
    println!("  high:    {:#018x}", product.high);
    println!("  low:     {:#018x}", product.low);

    if args.verify.is_some() {
        let pairs = verify_boundaries(strategy)
            .with_context(|| format!("boundary check failed for {strategy} strategy"))?;
        let samples = verify_random(strategy, config.verify_samples)
            .with_context(|| format!("random check failed for {strategy} strategy"))?;
        println!("verified {strategy}: {pairs} boundary pairs, {samples} random pairs");
    }

    Ok(())
}
