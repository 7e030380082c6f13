//! Eligibility engine for the VPP Texas home-battery program.
//!
//! An address qualifies when it sits in a Texas county designated as a federal
//! energy community and is served by a utility in a deregulated market. The
//! reference tables backing those checks live in [`eligibility`]; address
//! normalization lives in [`resolver`]; lead intake hand-off lives in [`leads`].

pub mod config;
pub mod eligibility;
pub mod error;
pub mod leads;
pub mod resolver;
pub mod telemetry;
