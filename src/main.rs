use binary_adder::{add, BinarySum, Result};
use tracing_subscriber::EnvFilter;

/// 70 set bits, added to itself by the driver.
const DRIVER_OPERAND: &str = "1111111111111111111111111111111111111111111111111111111111111111111111";

fn run() -> Result<BinarySum> {
    add(DRIVER_OPERAND, DRIVER_OPERAND)
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the result line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "binary_adder=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sum = run()?;
    println!("{}", sum);
    Ok(())
}
