//! Application services - Use case implementations

mod aggregator;
mod resolver;
mod view;

pub use aggregator::AggregatorService;
pub use resolver::{Resolution, ResolverService};
pub use view::WeatherView;
