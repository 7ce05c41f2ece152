//! Dependency order for instantiation.
//!
//! Leaves (buses, outputs) come before the components that reference them.
//! Among nodes whose dependencies are met, declaration order is kept.

use std::collections::HashSet;

use itertools::Itertools;

use crate::build::full_config::FullConfig;
use crate::error::{BuildError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Uart(usize),
    Output(usize),
    HmRfBridge(usize),
}

struct Entry<'a> {
    node: Node,
    id: &'a str,
    depends_on: Vec<&'a str>,
}

fn entries(config: &FullConfig) -> Vec<Entry<'_>> {
    let uarts = config.uart.iter().enumerate().map(|(i, u)| Entry {
        node: Node::Uart(i),
        id: u.id.as_str(),
        depends_on: Vec::new(),
    });
    let outputs = config.output.iter().enumerate().map(|(i, o)| Entry {
        node: Node::Output(i),
        id: o.id.as_str(),
        depends_on: Vec::new(),
    });
    let bridges = config.hm_rf_bridge.iter().enumerate().map(|(i, b)| Entry {
        node: Node::HmRfBridge(i),
        id: b.id.as_str(),
        depends_on: [Some(&b.uart_id), Some(&b.reset_output)]
            .into_iter()
            .chain([b.red_led.as_ref(), b.green_led.as_ref(), b.blue_led.as_ref()])
            .flatten()
            .map(String::as_str)
            .collect(),
    });
    uarts.chain(outputs).chain(bridges).collect()
}

pub fn instantiation_order(config: &FullConfig) -> Result<Vec<Node>> {
    let mut pending = entries(config);
    let known: HashSet<&str> = pending.iter().map(|e| e.id).collect();
    let mut done: HashSet<&str> = HashSet::new();
    let mut order = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        // ids that are not components (or were never declared) cannot block ordering;
        // instantiation reports them as unresolved.
        let ready = pending.iter().position(|e| {
            e.depends_on
                .iter()
                .all(|dep| done.contains(dep) || !known.contains(dep))
        });

        match ready {
            Some(index) => {
                let entry = pending.remove(index);
                done.insert(entry.id);
                order.push(entry.node);
            }
            None => {
                return Err(BuildError::schema(
                    "<root>",
                    format!(
                        "circular dependency between {}",
                        pending.iter().map(|e| e.id).join(", ")
                    ),
                ));
            }
        }
    }

    Ok(order)
}
