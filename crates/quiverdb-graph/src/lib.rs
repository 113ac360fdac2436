//! `QuiverDB` Graph
//!
//! This crate provides synthetic topology generation for `QuiverDB`:
//! complete graphs, cycles, and barbells, materialized as label-partitioned
//! vertex and edge records.
//!
//! # Modules
//!
//! - [`generate`] - Topology generators and the generation context

pub mod generate;

pub use generate::{
    generate_barbell, generate_complete, generate_cycle, GenerateError, GenerateRequest,
    GenerateResult, Generated, GenerationContext, Topology,
};
