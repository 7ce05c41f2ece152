//! The build orchestrator.
//!
//! Phase 1 validates every component on its own and books resources. Phase 2
//! runs final validation over the assembled tree, then instantiates components
//! in dependency order and registers them with the scheduler.

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::build::context::BuildContext;
use crate::build::full_config::{FullConfig, SocketSettings};
use crate::build::order::{instantiation_order, Node};
use crate::build::path::ConfigPath;
use crate::build::scheduler::Scheduler;
use crate::build::variables::{Variable, Variables};
use crate::components::socket::SocketLedger;
use crate::components::{output, uart};
use crate::constants::keys;
use crate::error::{BuildError, Result};
use crate::hm_rf_bridge;

/// Result of a complete build.
pub struct Build {
    pub config: FullConfig,
    pub context: BuildContext,
    pub variables: Variables,
    pub scheduler: Scheduler,
}

pub fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Into::into)
}

/// Entries of a multi-instance domain; a single dictionary counts as one entry.
fn entries<'a>(root: &'a Map<String, Value>, domain: &str) -> Result<Vec<&'a Value>> {
    match root.get(domain) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.iter().collect()),
        Some(item @ Value::Object(_)) => Ok(vec![item]),
        Some(other) => Err(BuildError::schema(
            domain,
            format!("expected a list or a dictionary, got {other}"),
        )),
    }
}

/// A domain given as `null` counts as absent.
fn domain_value(root: &Map<String, Value>, domain: &str) -> Option<Value> {
    root.get(domain).filter(|v| !v.is_null()).cloned()
}

fn check_dependencies(config: &FullConfig) -> Result<()> {
    for dependency in hm_rf_bridge::DEPENDENCIES {
        if !config.has_domain(dependency) {
            return Err(BuildError::schema(
                keys::DOMAIN_HM_RF_BRIDGE,
                format!("Component hm_rf_bridge requires component {dependency}"),
            ));
        }
    }
    Ok(())
}

/// Phase 1: validate each component's entries against its own schema.
pub fn validate_components(raw: &Value) -> Result<(FullConfig, BuildContext)> {
    let root = raw.as_object().ok_or_else(|| {
        BuildError::schema("<root>", "expected the configuration to be a dictionary")
    })?;

    let socket: Option<SocketSettings> = root
        .get(keys::DOMAIN_SOCKET)
        .map(|v| ConfigPath::domain(keys::DOMAIN_SOCKET).parse(v))
        .transpose()?;
    let mut ctx = BuildContext::new(SocketLedger::from_setting(
        socket.and_then(|s| s.max_sockets),
    ));

    // Leaf domains declare their ids before anything can reference them.
    let uart_path = ConfigPath::domain(keys::DOMAIN_UART);
    let uarts = entries(root, keys::DOMAIN_UART)?
        .into_iter()
        .enumerate()
        .map(|(i, raw)| uart::validate(&uart_path.index(i), raw, &mut ctx.ids))
        .collect::<Result<Vec<_>>>()?;

    let output_path = ConfigPath::domain(keys::DOMAIN_OUTPUT);
    let outputs = entries(root, keys::DOMAIN_OUTPUT)?
        .into_iter()
        .enumerate()
        .map(|(i, raw)| output::validate(&output_path.index(i), raw, &mut ctx.ids))
        .collect::<Result<Vec<_>>>()?;

    let mut other = root.clone();
    for domain in [
        keys::DOMAIN_UART,
        keys::DOMAIN_OUTPUT,
        keys::DOMAIN_WIFI,
        keys::DOMAIN_ETHERNET,
        keys::DOMAIN_SOCKET,
        keys::DOMAIN_HM_RF_BRIDGE,
    ] {
        other.remove(domain);
    }

    let mut config = FullConfig {
        uart: uarts,
        output: outputs,
        wifi: domain_value(root, keys::DOMAIN_WIFI),
        ethernet: domain_value(root, keys::DOMAIN_ETHERNET),
        socket,
        hm_rf_bridge: Vec::new(),
        other,
    };

    let bridge_entries = entries(root, keys::DOMAIN_HM_RF_BRIDGE)?;
    if !bridge_entries.is_empty() {
        check_dependencies(&config)?;
    }
    // Generated ids must not take an id the user wrote for a later entry.
    for id in bridge_entries.iter().flat_map(|raw| hm_rf_bridge::schema::explicit_ids(raw)) {
        ctx.ids.reserve(id);
    }

    let bridge_path = ConfigPath::domain(keys::DOMAIN_HM_RF_BRIDGE);
    config.hm_rf_bridge = bridge_entries
        .into_iter()
        .enumerate()
        .map(|(i, raw)| hm_rf_bridge::validate_config(&bridge_path.index(i), raw, &mut ctx))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Validated {} uart(s), {} output(s), {} bridge(s); sockets: {}",
        config.uart.len(),
        config.output.len(),
        config.hm_rf_bridge.len(),
        ctx.sockets.summary()
    );
    Ok((config, ctx))
}

/// Phase 2a: cross-component checks over the assembled tree.
pub fn final_validate(config: &mut FullConfig, ctx: &mut BuildContext) -> Result<()> {
    let bridges = config.hm_rf_bridge.clone();
    for bridge in &bridges {
        hm_rf_bridge::final_validate(bridge, config, ctx)?;
    }
    Ok(())
}

/// Validate a raw configuration completely, without instantiating anything.
pub fn validate(raw: &Value) -> Result<(FullConfig, BuildContext)> {
    let (mut config, mut ctx) = validate_components(raw)?;
    final_validate(&mut config, &mut ctx)?;
    log::info!(
        "Configuration is valid ({} advisory warning(s))",
        ctx.advisories.len()
    );
    Ok((config, ctx))
}

fn instantiate(
    node: Node,
    config: &FullConfig,
    variables: &mut Variables,
    scheduler: &mut Scheduler,
) -> Result<()> {
    match node {
        Node::Uart(i) => {
            let path = ConfigPath::domain(keys::DOMAIN_UART).index(i);
            let hw_serial_number = u8::try_from(i)
                .map_err(|_| BuildError::schema(path.to_string(), "too many uart buses"))?;
            let bus = uart::new_uart(&path, &config.uart[i], hw_serial_number)?;
            variables.add(bus.id.clone(), Variable::Uart(Rc::clone(&bus)));
            scheduler.register_component(bus);
        }
        Node::Output(i) => {
            let out = output::new_binary_output(&config.output[i]);
            variables.add(out.id.clone(), Variable::Output(Rc::clone(&out)));
            scheduler.register_component(out);
        }
        Node::HmRfBridge(i) => {
            hm_rf_bridge::to_code(&config.hm_rf_bridge[i], variables, scheduler)?;
        }
    }
    Ok(())
}

/// Phase 2b: instantiate a validated configuration in dependency order.
pub fn instantiate_all(config: &FullConfig) -> Result<(Variables, Scheduler)> {
    let mut variables = Variables::new();
    let mut scheduler = Scheduler::new();
    for node in instantiation_order(config)? {
        instantiate(node, config, &mut variables, &mut scheduler)?;
    }
    Ok((variables, scheduler))
}

/// Run the whole pipeline on a raw configuration.
pub fn build(raw: &Value) -> Result<Build> {
    let (config, context) = validate(raw)?;
    let (variables, scheduler) = instantiate_all(&config)?;
    log::info!(
        "Build complete: {} component(s) registered",
        scheduler.registrations().len()
    );
    Ok(Build {
        config,
        context,
        variables,
        scheduler,
    })
}
