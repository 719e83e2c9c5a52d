//! Writes a solver verdict in the output format §6 mandates. Grounded in
//! the original source's `print_assignments`, including its release-mode
//! collapsing of the "unset" (free) and "conflict" states to `1` and `0`
//! respectively — `sat_core::Configuration::value_of` already performs
//! that collapsing, so this module only formats.

use std::io::{self, Write};

use sat_core::SatSolution;

/// Writes the verdict line and, if satisfiable, one `<var> <bit>` line per
/// variable.
pub fn print_solution<W: Write>(out: &mut W, solution: &SatSolution) -> io::Result<()> {
    match solution {
        SatSolution::Unsatisfiable => writeln!(out, "Unsatisfiable."),
        SatSolution::Satisfiable(valuation) => {
            writeln!(out, "Satisfiable!")?;
            for (i, &value) in valuation.iter().enumerate() {
                writeln!(out, "{} {}", i + 1, value as u8)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_satisfiable_verdict() {
        let solution = SatSolution::Satisfiable(vec![true, false, true]);
        let mut buf = Vec::new();
        print_solution(&mut buf, &solution).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Satisfiable!\n1 1\n2 0\n3 1\n"
        );
    }

    #[test]
    fn formats_unsatisfiable_verdict() {
        let mut buf = Vec::new();
        print_solution(&mut buf, &SatSolution::Unsatisfiable).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Unsatisfiable.\n");
    }
}
