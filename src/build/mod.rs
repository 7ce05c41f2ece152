pub mod context;
pub mod full_config;
pub mod order;
pub mod path;
pub mod pipeline;
pub mod registry;
pub mod scheduler;
pub mod variables;

pub use context::{Advisory, BuildContext};
pub use full_config::FullConfig;
pub use pipeline::{build, validate, Build};
