use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stay",
    about = "StayLedger — hotel quality and SLA records on a transactional ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Wallet directory holding signing identities
    #[arg(long, global = true, default_value = "wallet")]
    pub wallet: String,

    /// Connection profile (TOML); built-in local profile when omitted
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Identity label to sign invocations with
    #[arg(long, global = true, default_value = "appUser")]
    pub identity: String,

    /// Contract name on the channel
    #[arg(long, global = true, default_value = "hotel")]
    pub contract: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed the ledger with the base hotel set
    InitLedger,
    /// List every hotel in ascending key order
    GetAllHotels,
    /// Issue a new hotel
    CreateHotel(HotelArgs),
    /// Read one hotel by id
    ReadHotel(IdArg),
    /// Replace an existing hotel's record
    UpdateHotel(HotelArgs),
    /// Delete one hotel by id
    DeleteHotel(IdArg),
    /// Check whether a hotel id exists
    HotelExists(IdArg),
    /// Run the scripted driver sequence: seed, list, create, read
    Demo,
}

#[derive(Args)]
pub struct HotelArgs {
    pub id: String,
    pub name: String,
    /// Boolean token, "true" or "false" (case-sensitive)
    pub is_active: String,
    /// Decimal rating, unbounded
    pub rating: String,
}

#[derive(Args)]
pub struct IdArg {
    pub id: String,
}
