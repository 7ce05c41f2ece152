//! Registration of instantiated components with the application scheduler.

use std::rc::Rc;
use std::time::Duration;

/// Setup priorities; components with a higher value are set up first.
pub mod setup_priority {
    pub const BUS: f32 = 1000.0;
    pub const HARDWARE: f32 = 800.0;
    pub const DATA: f32 = 600.0;
    pub const ETHERNET: f32 = 250.0;
    pub const LATE: f32 = -100.0;
}

pub trait Component {
    fn component_id(&self) -> &str;

    fn setup_priority(&self) -> f32 {
        setup_priority::DATA
    }

    /// Log the effective configuration of this component.
    fn dump_config(&self) {}
}

pub struct Registration {
    pub component: Rc<dyn Component>,
    /// Period of the `update()` call, `None` for components that are not polled.
    pub update_interval: Option<Duration>,
}

#[derive(Default)]
pub struct Scheduler {
    registrations: Vec<Registration>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_component(&mut self, component: Rc<dyn Component>) {
        log::debug!("Registered component '{}'", component.component_id());
        self.registrations.push(Registration {
            component,
            update_interval: None,
        });
    }

    pub fn register_polling_component(&mut self, component: Rc<dyn Component>, interval: Duration) {
        log::debug!(
            "Registered polling component '{}' every {:?}",
            component.component_id(),
            interval
        );
        self.registrations.push(Registration {
            component,
            update_interval: Some(interval),
        });
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn find(&self, id: &str) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|r| r.component.component_id() == id)
    }

    /// Registrations in the order their setup runs: highest priority first,
    /// registration order among equals.
    pub fn setup_order(&self) -> Vec<&Registration> {
        let mut ordered: Vec<&Registration> = self.registrations.iter().collect();
        ordered.sort_by(|a, b| {
            b.component
                .setup_priority()
                .total_cmp(&a.component.setup_priority())
        });
        ordered
    }

    pub fn dump_config(&self) {
        for registration in self.setup_order() {
            registration.component.dump_config();
        }
    }
}
