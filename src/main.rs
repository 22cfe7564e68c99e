//! Magicforge - Entry Point
//!
//! Generates magic weapons and prints them as JSON.
//!
//! Usage: `magicforge [power] [count]`, or `magicforge export` to write the
//! built-in tables to the data directory.

use anyhow::{bail, Context, Result};

use magicforge::items::{attributes, generate_magic_weapon, Damage, Weapon, WeaponHead};
use magicforge::tables::export_default_data;
use magicforge::{ForgeConfig, PowerTier, TableData, TableRoller};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Magicforge v{}", env!("CARGO_PKG_VERSION"));

    let config = ForgeConfig::load();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("export") {
        export_default_data(&config.data_dir)
            .with_context(|| format!("exporting tables to {}", config.data_dir.display()))?;
        return Ok(());
    }

    let power = match args.first() {
        Some(name) => match PowerTier::parse(name) {
            Some(power) => power,
            None => bail!("unknown power tier {:?} (expected mundane, minor, medium or major)", name),
        },
        None => config.power,
    };
    let count: usize = match args.get(1) {
        Some(count) => count.parse().with_context(|| format!("invalid count {:?}", count))?,
        None => 1,
    };

    let tables = TableData::load_or_default(&config.data_dir);
    let mut roller = TableRoller::seeded(&tables, config.seed);

    let weapons: Vec<Weapon> = (0..count)
        .map(|_| generate_magic_weapon(&tables, &mut roller, longsword(), power))
        .collect();

    let json = serde_json::to_string_pretty(&weapons).context("serializing weapons")?;
    println!("{}", json);

    Ok(())
}

/// Base weapon handed to the generator
fn longsword() -> Weapon {
    Weapon::new("longsword", "x2")
        .with_attributes([attributes::MELEE, attributes::SLASHING, attributes::METAL])
        .with_threat_range(2)
        .with_primary(WeaponHead::new(
            vec![Damage::new("1d8", "Slashing")],
            vec![Damage::new("2d8", "Slashing")],
        ))
}
