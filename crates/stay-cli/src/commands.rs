use colored::Colorize;
use tracing::info;

use stay_gateway::{
    ConnectionProfile, Contract, FileSystemWallet, Gateway, Identity, Wallet,
};

use crate::cli::{Cli, Command};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let contract = open_session(&cli)?;

    match cli.command {
        Command::InitLedger => {
            contract.submit_transaction("InitLedger", &[])?;
            println!("{} Ledger seeded.", "✓".green().bold());
        }
        Command::GetAllHotels => {
            let out = contract.evaluate_transaction("GetAllHotels", &[])?;
            println!("{}", String::from_utf8_lossy(&out));
        }
        Command::CreateHotel(args) => {
            contract.submit_transaction(
                "CreateHotel",
                &[
                    args.id.as_str(),
                    args.name.as_str(),
                    args.is_active.as_str(),
                    args.rating.as_str(),
                ],
            )?;
            println!("{} Created hotel {}.", "✓".green().bold(), args.id.yellow());
        }
        Command::ReadHotel(args) => {
            let out = contract.evaluate_transaction("ReadHotel", &[args.id.as_str()])?;
            println!("{}", String::from_utf8_lossy(&out));
        }
        Command::UpdateHotel(args) => {
            contract.submit_transaction(
                "UpdateHotel",
                &[
                    args.id.as_str(),
                    args.name.as_str(),
                    args.is_active.as_str(),
                    args.rating.as_str(),
                ],
            )?;
            println!("{} Updated hotel {}.", "✓".green().bold(), args.id.yellow());
        }
        Command::DeleteHotel(args) => {
            contract.submit_transaction("DeleteHotel", &[args.id.as_str()])?;
            println!("{} Deleted hotel {}.", "✓".green().bold(), args.id.yellow());
        }
        Command::HotelExists(args) => {
            let out = contract.evaluate_transaction("HotelExists", &[args.id.as_str()])?;
            let answer = String::from_utf8_lossy(&out);
            println!("{}", answer.trim().bold());
        }
        Command::Demo => run_demo(&contract)?,
    }

    Ok(())
}

fn open_session(cli: &Cli) -> anyhow::Result<Contract> {
    let profile = match &cli.profile {
        Some(path) => ConnectionProfile::from_file(path)?,
        None => ConnectionProfile::local_default(),
    };

    let wallet = FileSystemWallet::new(&cli.wallet)?;
    if !wallet.exists(&cli.identity)? {
        // Credential issuance is an operator task; a development identity
        // keeps local sessions usable out of the box.
        info!(label = %cli.identity, "populating wallet with development identity");
        wallet.put(
            &cli.identity,
            &Identity::new(&profile.msp_id, "dev-certificate", "dev-private-key"),
        )?;
    }

    let channel = profile.channel.clone();
    let gateway = Gateway::connect(profile, &wallet, &cli.identity)?;
    let network = gateway.get_network(&channel)?;
    Ok(network.get_contract(&cli.contract)?)
}

/// The scripted sequence the original driver issued against the channel.
fn run_demo(contract: &Contract) -> anyhow::Result<()> {
    println!("{}", "--> Submit: InitLedger".bold());
    contract.submit_transaction("InitLedger", &[])?;
    println!("{} Ledger seeded.", "✓".green());

    println!("{}", "--> Evaluate: GetAllHotels".bold());
    let out = contract.evaluate_transaction("GetAllHotels", &[])?;
    println!("{}", String::from_utf8_lossy(&out));

    println!("{}", "--> Submit: CreateHotel 5 \"Legend Saigon\" true 8.1".bold());
    contract.submit_transaction("CreateHotel", &["5", "Legend Saigon", "true", "8.1"])?;
    println!("{} Created hotel {}.", "✓".green(), "5".yellow());

    println!("{}", "--> Evaluate: ReadHotel 5".bold());
    let out = contract.evaluate_transaction("ReadHotel", &["5"])?;
    println!("{}", String::from_utf8_lossy(&out));

    Ok(())
}
