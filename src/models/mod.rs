pub mod analytics;
pub mod assignments;
pub mod categories;
pub mod common;
pub mod notifications;
pub mod portfolios;
pub mod submissions;
pub mod users;

pub use common::pagination::{ListEnvelope, Pagination};
pub use common::params::ListParams;
