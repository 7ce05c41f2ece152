use anyhow::Result;

use hm_rf_bridge::build;

use crate::argsets::ConfigFileArgs;

/// Validate the configuration and print it, including the values filled in
/// by final validation.
pub fn validate(args: ConfigFileArgs) -> Result<()> {
    let raw = super::read_config(&args.path)?;
    let (config, ctx) = build::validate(&raw)?;
    log::debug!("{} advisory warning(s)", ctx.advisories.len());

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
