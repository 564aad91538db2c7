//! Cachewire - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cachewire types` | List registered cache types |
//! | `cachewire caches` | Resolve every configured cache |
//! | `cachewire resolve [KEY]` | Resolve one cache (default `orm_default`) |

// Force-link cachewire-providers to ensure linkme registrations are included
extern crate cachewire_providers;

use cachewire::cli::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = run(&cli).await?;
    print!("{output}");
    Ok(())
}
