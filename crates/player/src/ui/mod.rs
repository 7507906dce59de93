//! User interface: route table, navigation guard and view-models.

pub mod presentation;
pub mod routes;

pub use routes::{NavigationOutcome, ResolvedRoute, Route, RouteMeta, Router};
