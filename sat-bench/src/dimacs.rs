//! A line-oriented DIMACS CNF decoder, identical in shape to `sat-cli`'s:
//! a fixture loader is an external collaborator in its own right and has
//! no dependency on the CLI binary.

use std::io::BufRead;

pub struct ParsedCnf {
    pub num_vars: usize,
    pub num_clauses: usize,
    pub clauses: Vec<Vec<i64>>,
}

#[derive(Debug)]
pub struct DimacsError(String);

impl std::fmt::Display for DimacsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DimacsError {}

pub fn parse<R: BufRead>(reader: R) -> Result<ParsedCnf, DimacsError> {
    let mut lines = reader.lines();

    let (num_vars, num_clauses) = loop {
        let line = match lines.next() {
            Some(line) => line.map_err(|e| DimacsError(e.to_string()))?,
            None => return Err(DimacsError("missing problem line".to_string())),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.as_bytes()[0] {
            b'c' => continue,
            b'p' => break parse_problem_line(trimmed)?,
            _ => return Err(DimacsError("missing problem line".to_string())),
        }
    };

    let mut clauses = Vec::with_capacity(num_clauses);
    while clauses.len() < num_clauses {
        let line = match lines.next() {
            Some(line) => line.map_err(|e| DimacsError(e.to_string()))?,
            None => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.as_bytes()[0] == b'c' {
            continue;
        }
        let mut clause = Vec::new();
        for token in trimmed.split_whitespace() {
            let lit: i64 = token
                .parse()
                .map_err(|_| DimacsError(format!("malformed clause line: {:?}", trimmed)))?;
            if lit == 0 {
                break;
            }
            clause.push(lit);
        }
        clauses.push(clause);
    }

    if clauses.len() != num_clauses {
        return Err(DimacsError(format!(
            "{} clause(s) declared but {} found",
            num_clauses,
            clauses.len()
        )));
    }

    Ok(ParsedCnf { num_vars, num_clauses, clauses })
}

fn parse_problem_line(line: &str) -> Result<(usize, usize), DimacsError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some("p"), Some("cnf"), Some(v), Some(c)) => {
            let v: usize = v.parse().map_err(|_| DimacsError(format!("malformed problem line: {:?}", line)))?;
            let c: usize = c.parse().map_err(|_| DimacsError(format!("malformed problem line: {:?}", line)))?;
            Ok((v, c))
        }
        _ => Err(DimacsError(format!("malformed problem line: {:?}", line))),
    }
}
