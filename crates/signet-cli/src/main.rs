//! # signet CLI Entry Point
//!
//! Key-custody tooling: generate key pairs, sign payloads, verify
//! signatures, and recover public keys from the command line.

use anyhow::Context;
use clap::Parser;

use signet_crypto::{address_from_public_key, recover, verify, KeyPair};

/// Signet key-custody toolchain.
///
/// Generates secp256k1 key pairs and performs signing, verification,
/// and public-key recovery over hex-encoded payloads.
#[derive(Parser, Debug)]
#[command(name = "signet", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate a new key pair and print its address.
    Generate,
    /// Sign a payload with a secret key.
    Sign(SignArgs),
    /// Verify a signature against a public key and payload.
    Verify(VerifyArgs),
    /// Recover the public key that produced a signature.
    Recover(RecoverArgs),
}

#[derive(clap::Args, Debug)]
struct SignArgs {
    /// Secret key, 64 hex chars.
    #[arg(long)]
    secret: String,
    /// Payload to sign, hex-encoded.
    #[arg(long)]
    data: String,
}

#[derive(clap::Args, Debug)]
struct VerifyArgs {
    /// Public key, compressed or uncompressed SEC1, hex-encoded.
    #[arg(long)]
    public_key: String,
    /// Payload that was signed, hex-encoded.
    #[arg(long)]
    data: String,
    /// Signature, 130 hex chars.
    #[arg(long)]
    signature: String,
}

#[derive(clap::Args, Debug)]
struct RecoverArgs {
    /// Payload that was signed, hex-encoded.
    #[arg(long)]
    data: String,
    /// Signature, 130 hex chars.
    #[arg(long)]
    signature: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate => generate(),
        Commands::Sign(args) => sign(args),
        Commands::Verify(args) => {
            if !run_verify(args)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Recover(args) => run_recover(args),
    }
}

fn generate() -> anyhow::Result<()> {
    let keypair = KeyPair::generate();
    tracing::debug!(address = %keypair.address(), "generated key pair");

    println!("secret:     {}", bytes_to_hex(&keypair.secret_bytes()));
    println!("public key: {}", bytes_to_hex(&keypair.public_key()));
    println!("address:    {}", keypair.address());
    Ok(())
}

fn sign(args: SignArgs) -> anyhow::Result<()> {
    let secret: [u8; 32] = hex_to_bytes(&args.secret)
        .context("secret key is not valid hex")?
        .try_into()
        .map_err(|_| anyhow::anyhow!("secret key must be 32 bytes (64 hex chars)"))?;
    let data = hex_to_bytes(&args.data).context("payload is not valid hex")?;

    let keypair = KeyPair::from_secret_bytes(secret)?;
    let signature = keypair.sign(&data);

    println!("address:    {}", keypair.address());
    println!("signature:  {signature}");
    Ok(())
}

fn run_verify(args: VerifyArgs) -> anyhow::Result<bool> {
    let public_key = hex_to_bytes(&args.public_key).context("public key is not valid hex")?;
    let data = hex_to_bytes(&args.data).context("payload is not valid hex")?;
    let signature = hex_to_bytes(&args.signature).context("signature is not valid hex")?;

    let valid = verify(&public_key, &data, &signature)?;
    println!("valid:      {valid}");
    Ok(valid)
}

fn run_recover(args: RecoverArgs) -> anyhow::Result<()> {
    let data = hex_to_bytes(&args.data).context("payload is not valid hex")?;
    let signature = hex_to_bytes(&args.signature).context("signature is not valid hex")?;

    let public_key = recover(&data, &signature)?;
    let address = address_from_public_key(&public_key)?;

    println!("public key: {}", bytes_to_hex(&public_key));
    println!("address:    {address}");
    Ok(())
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_to_bytes(hex: &str) -> anyhow::Result<Vec<u8>> {
    let hex = hex.trim().trim_start_matches("0x");
    if !hex.is_ascii() {
        anyhow::bail!("hex string must be ascii");
    }
    if hex.len() % 2 != 0 {
        anyhow::bail!("hex string must have even length");
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex at position {i}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_bytes_roundtrip_with_prefix() {
        let bytes = hex_to_bytes("0xdeadbeef").unwrap();
        assert_eq!(bytes_to_hex(&bytes), "deadbeef");
    }

    #[test]
    fn test_hex_to_bytes_odd_length_is_error() {
        assert!(hex_to_bytes("abc").is_err());
    }

    #[test]
    fn test_hex_to_bytes_multibyte_utf8_is_error_not_panic() {
        assert!(hex_to_bytes(&("€".repeat(2))).is_err());
    }
}
