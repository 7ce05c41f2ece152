use anyhow::Result;
use itertools::Itertools;

use hm_rf_bridge::build;
use hm_rf_bridge::helpers::time_period::format_time_period;

use crate::argsets::ConfigFileArgs;

pub fn build(args: ConfigFileArgs) -> Result<()> {
    let raw = super::read_config(&args.path)?;
    let output = build::build(&raw)?;

    log::info!(
        "Loaded domains: {}",
        output.context.loaded_domains().join(", ")
    );
    log::info!(
        "Sockets reserved: {}/{} ({})",
        output.context.sockets.total(),
        output.context.sockets.capacity(),
        output.context.sockets.summary()
    );
    output.scheduler.dump_config();

    for registration in output.scheduler.setup_order() {
        let component = &registration.component;
        match registration.update_interval {
            Some(interval) => println!(
                "{} priority={} update_interval={}",
                component.component_id(),
                component.setup_priority(),
                format_time_period(interval)
            ),
            None => println!(
                "{} priority={}",
                component.component_id(),
                component.setup_priority()
            ),
        }
    }
    Ok(())
}
