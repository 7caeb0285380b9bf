//! # topotile Core
//!
//! Core types, traits and I/O shared by the topotile crates.
//!
//! This crate provides:
//! - `Point`, `Size`, `Bounds`: extents in the projected tile grid
//! - `Feature`: GeoJSON features with polygonal geometry
//! - Algorithm traits for consistent API
//! - I/O for footprint and capture-area GeoJSON files

pub mod error;
pub mod extent;
pub mod io;
pub mod vector;

pub use error::{Error, Result};
pub use extent::{Bounds, Point, Size};
pub use vector::Feature;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extent::{Bounds, Point, Size};
    pub use crate::vector::Feature;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in topotile.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
