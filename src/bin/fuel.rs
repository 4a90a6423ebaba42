extern crate env_logger;
extern crate failure;
extern crate fuel_calculator;

use failure::Error;
use std::io::{Read, Write};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let total = fuel_calculator::total_fuel(&input)?;

    let stdout = std::io::stdout();
    writeln!(stdout.lock(), "{}", total)?;

    Ok(())
}
