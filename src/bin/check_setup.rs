use std::process::ExitCode;

use registry_ops::common::DOTENV_PATH;
use registry_ops::logging::init_tracing;
use registry_ops::setup::{CheckOutcome, CheckSection, SetupReport, check_connectivity, check_environment, check_wallet};
use registry_ops::{EnvSource, GasConfig, RpcChain, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    println!("\n🔍 Checking smart contract setup...\n");
    println!("{}", "═".repeat(60));

    let env = EnvSource::load(DOTENV_PATH);
    let settings = match Settings::from_env(&env) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("\n❌ Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut report = SetupReport::default();

    let env_section = check_environment(&env, &settings.network);
    env_section.print();
    if !env_section.passed() {
        println!("\n❌ Missing environment variables. Check your .env");
        return ExitCode::FAILURE;
    }
    report.add(env_section);

    match RpcChain::connect(&settings.rpc_url) {
        Ok(client) => {
            let rpc_section = check_connectivity(&client, &settings.network).await;
            rpc_section.print();
            report.add(rpc_section);

            let wallet_section = check_wallet(&client, &settings, &GasConfig::default()).await;
            wallet_section.print();
            report.add(wallet_section);
        }
        Err(e) => {
            let mut rpc_section = CheckSection::new("🌐 RPC connectivity:");
            rpc_section.push(CheckOutcome::Fail(format!("Connection error: {}", e)));
            rpc_section.print();
            report.add(rpc_section);
        }
    }

    println!("\n{}", "═".repeat(60));

    if report.all_good() {
        println!("\n🎉 Everything is ready to deploy!");
        println!("\n📝 Next step:");
        println!("   NETWORK={} cargo run --bin deploy", settings.network.name);
        println!();
        ExitCode::SUCCESS
    } else {
        println!("\n❌ Setup incomplete. Review the errors above.");
        println!();
        ExitCode::FAILURE
    }
}
