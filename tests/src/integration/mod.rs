//! Full-stack integration flows.

pub mod ante_flows;
