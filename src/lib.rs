//! Fuel requirements for a list of module masses.
//!
//! Each mass needs `floor(mass / 3) - 2` units of fuel. The crate parses
//! whitespace-separated masses from text and totals their fuel; the `fuel`
//! binary does this for standard input.

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

pub mod fuel;
pub mod masses;

pub use fuel::{fuel_for_fuel, fuel_for_mass, fuel_for_mass_and_fuel, total_fuel,
               total_fuel_with_fuel, Fuel, FuelChain, Total};
pub use masses::{masses, Mass, ParseError};
