pub mod analyze;
pub mod config;
pub mod diagnose;
pub mod requirements;

use std::io::Read;

/// Read an input argument as a file path, or stdin when it is "-".
pub fn read_input(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
