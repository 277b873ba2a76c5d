use anyhow::Result;
use registry_ops::KeyPair;
use registry_ops::setup::FAUCET_URL;

// Development wallet for testnet signing only, never for real funds
fn main() -> Result<()> {
    println!("\n🔐 Generating development wallet...\n");
    println!("{}", "═".repeat(60));

    let wallet = KeyPair::generate()?;

    println!("\n📝 Wallet details:\n");
    println!("Address: {}", wallet.address);
    println!("Private Key: {}", wallet.private_key_hex());
    if let Some(phrase) = &wallet.mnemonic {
        println!("Mnemonic: {}", phrase);
    }

    println!("\n{}", "═".repeat(60));
    println!("\n⚠️  IMPORTANT:\n");
    println!("1. This wallet is ONLY for development/testnet");
    println!("2. Store this information somewhere safe");
    println!("3. NEVER use this wallet for real funds");
    println!("4. Add these variables to your .env:\n");

    println!("# Blockchain Wallet (Testnet)");
    println!("SIGNER_ADDRESS={}", wallet.address);
    println!("SIGNER_PRIVATE_KEY={}", wallet.private_key_hex());
    println!();

    println!("📥 Next step: get free testnet MATIC");
    println!("   {}", FAUCET_URL);
    println!("   Paste this address: {}", wallet.address);
    println!();

    Ok(())
}
