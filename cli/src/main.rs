//! stacksig: verify a signed message against a Stacks account address.
//!
//! Prints one JSON document `{"valid": bool, "reason": string}` on stdout
//! and maps validity to the process exit code.

use clap::Parser;
use stacksig_types::Network;
use stacksig_verifier::VerificationRequest;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "stacksig",
    about = "Verify that an address, message, signature, and public key are mutually consistent"
)]
struct Cli {
    /// Claimed c32check account address.
    #[arg(long, env = "STACKSIG_ADDRESS")]
    address: String,

    /// The plaintext message that was signed.
    #[arg(long, env = "STACKSIG_MESSAGE")]
    message: String,

    /// Hex-encoded 65-byte RSV signature.
    #[arg(long, env = "STACKSIG_SIGNATURE")]
    signature: String,

    /// Hex-encoded SEC1 public key, compressed or uncompressed.
    #[arg(long, env = "STACKSIG_PUBLIC_KEY")]
    public_key: String,

    /// Network: "mainnet" or "testnet". Any other value falls back to
    /// inference from the address prefix.
    #[arg(long, env = "STACKSIG_NETWORK")]
    network: Option<String>,

    /// Log filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "STACKSIG_LOG_LEVEL")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    stacksig_utils::init_tracing(&cli.log_level);

    let network = cli.network.as_deref().and_then(Network::from_token);
    let request = VerificationRequest {
        address: cli.address,
        message: cli.message,
        signature: cli.signature,
        public_key: cli.public_key,
        network,
    };

    let outcome = stacksig_verifier::verify(&request);
    match serde_json::to_string(&outcome) {
        Ok(body) => println!("{body}"),
        Err(error) => {
            eprintln!("failed to encode outcome: {error}");
            return ExitCode::from(2);
        }
    }

    if outcome.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
