use itertools::Itertools;
use masses::{masses, Mass, ParseError};

pub type Fuel = i64;

/// Sums of fuel amounts. Wide enough that no input can overflow it.
pub type Total = i128;

/// Return the fuel needed to launch a module of the given mass: the mass
/// divided by three, rounded down, minus two.
///
/// Rounding is toward negative infinity, so negative masses round away from
/// zero: `fuel_for_mass(-1)` is `-3`, not `-2`.
pub fn fuel_for_mass(mass: Mass) -> Fuel {
    mass.div_euclid(3) - 2
}

/// Return an iterator over the fuel needed for `mass`, then the fuel needed
/// for that fuel, and so on, stopping before the first amount that isn't
/// positive.
///
/// For example:
///
///     # extern crate fuel_calculator;
///     # use fuel_calculator::fuel_for_fuel;
///     assert_eq!(fuel_for_fuel(1969).collect::<Vec<_>>(),
///                vec![654, 216, 70, 21, 5]);
pub fn fuel_for_fuel(mass: Mass) -> FuelChain {
    FuelChain(mass)
}

#[derive(Debug, Clone)]
pub struct FuelChain(Mass);

impl Iterator for FuelChain {
    type Item = Fuel;
    fn next(&mut self) -> Option<Fuel> {
        let fuel = fuel_for_mass(self.0);
        if fuel <= 0 {
            return None;
        }
        self.0 = fuel;
        Some(fuel)
    }
}

/// Return the fuel needed for `mass`, counting the mass of the fuel itself.
/// Never negative.
pub fn fuel_for_mass_and_fuel(mass: Mass) -> Fuel {
    fuel_for_fuel(mass).sum()
}

/// Return the total fuel needed for the whitespace-separated masses in
/// `text`. Empty text needs no fuel.
pub fn total_fuel(text: &str) -> Result<Total, ParseError> {
    sum_fuel(text, fuel_for_mass)
}

/// Like `total_fuel`, but counting the fuel needed for the fuel, as computed
/// by `fuel_for_mass_and_fuel`.
pub fn total_fuel_with_fuel(text: &str) -> Result<Total, ParseError> {
    sum_fuel(text, fuel_for_mass_and_fuel)
}

fn sum_fuel<F>(text: &str, fuel: F) -> Result<Total, ParseError>
where F: Fn(Mass) -> Fuel
{
    let mut count = 0;
    let total = masses(text).fold_results(0, |total: Total, mass| {
        let needed = fuel(mass);
        trace!("mass {} needs {} fuel", mass, needed);
        count += 1;
        total + Total::from(needed)
    })?;
    debug!("{} masses need {} fuel", count, total);
    Ok(total)
}
