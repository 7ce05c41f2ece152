use std::collections::BTreeSet;

use crate::build::registry::IdRegistry;
use crate::components::socket::SocketLedger;

/// Non-fatal finding raised while validating the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub component: String,
    pub message: String,
}

/// State shared by all components while one configuration is validated.
#[derive(Debug)]
pub struct BuildContext {
    pub ids: IdRegistry,
    pub sockets: SocketLedger,
    pub advisories: Vec<Advisory>,
    loaded_domains: BTreeSet<String>,
}

impl BuildContext {
    pub fn new(sockets: SocketLedger) -> Self {
        BuildContext {
            ids: IdRegistry::new(),
            sockets,
            advisories: Vec::new(),
            loaded_domains: BTreeSet::new(),
        }
    }

    /// Mark a domain as required by the build even if the user never declared it.
    pub fn load_domain(&mut self, domain: &str) {
        if self.loaded_domains.insert(domain.to_string()) {
            log::debug!("Loaded domain '{}'", domain);
        }
    }

    pub fn is_loaded(&self, domain: &str) -> bool {
        self.loaded_domains.contains(domain)
    }

    pub fn loaded_domains(&self) -> impl Iterator<Item = &str> {
        self.loaded_domains.iter().map(String::as_str)
    }

    pub fn advise(&mut self, component: &str, message: impl Into<String>) {
        let advisory = Advisory {
            component: component.to_string(),
            message: message.into(),
        };
        log::warn!("{}: {}", advisory.component, advisory.message);
        self.advisories.push(advisory);
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        BuildContext::new(SocketLedger::default())
    }
}
