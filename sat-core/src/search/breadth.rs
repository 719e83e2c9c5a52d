use log::{error, trace};

use crate::config::Configuration;
use crate::error::SolveError;
use crate::heuristic::Chooser;
use crate::solution::SatSolution;
use crate::store::FormulaStore;

use super::{dpll_step, StepResult};

/// Starting frontier capacity. The original source sizes its initial
/// preallocation to roughly 256KiB of configurations; we start smaller and
/// let doubling take over, since `Configuration` sizes vary far more with
/// `V`/`C` here than the original's fixed-shape `bitstore` arrays.
const INITIAL_CAPACITY: usize = 64;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Tbd,
    Fail,
}

/// The breadth-first frontier driver (spec §4.8). Maintains a dense array
/// of live configurations, advancing every `TBD` slot one reduction round
/// per outer loop iteration, with periodic compaction and capacity
/// doubling. Uses more memory than the depth-first driver but less time
/// whenever the formula is satisfiable, since a satisfying branch is found
/// without first exhausting sibling branches on the call stack.
pub fn solve_breadth_first_with(
    store: &FormulaStore,
    chooser: &dyn Chooser,
) -> Result<SatSolution, SolveError> {
    let mut configs: Vec<Configuration> = Vec::new();
    let mut statuses: Vec<Status> = Vec::new();
    let mut capacity = INITIAL_CAPACITY;
    reserve_to(&mut configs, &mut statuses, capacity)?;

    configs.push(Configuration::new(store));
    statuses.push(Status::Tbd);

    loop {
        let round_len = configs.len();

        // Iterate from the back so newly appended children are not
        // scanned again within the same round (spec §4.8 step 2).
        for i in (0..round_len).rev() {
            if statuses[i] != Status::Tbd {
                continue;
            }

            match dpll_step(&mut configs[i], store) {
                StepResult::Success => {
                    return Ok(SatSolution::from_configuration(store, &configs[i]));
                }
                StepResult::Fail => {
                    statuses[i] = Status::Fail;
                    continue;
                }
                StepResult::Tbd => {}
            }

            let lit = match chooser.choose(store, &configs[i]) {
                Some(lit) => lit,
                None => {
                    error!("chooser returned no literal with unsatisfied clauses remaining");
                    statuses[i] = Status::Fail;
                    continue;
                }
            };

            if configs.len() == capacity {
                capacity = grow(capacity, &mut configs, &mut statuses)?;
            }

            // Clone-before-branch: the child slot is a byte-copy of the
            // parent taken before either polarity is assigned.
            let mut child = configs[i].clone();
            child.assign_lit(store, -lit);
            configs[i].assign_lit(store, lit);

            configs.push(child);
            statuses.push(Status::Tbd);
        }

        let n_tbd = statuses.iter().filter(|&&s| s == Status::Tbd).count();
        if n_tbd == 0 {
            return Ok(SatSolution::Unsatisfiable);
        }

        let active_len = configs.len();
        if n_tbd < active_len / 2 || active_len > capacity / 2 {
            compact(&mut configs, &mut statuses);
            trace!(
                "breadth-first: compacted to {} live slot(s) ({} TBD)",
                configs.len(),
                n_tbd
            );
        }

        if configs.len() > capacity / 2 {
            capacity = grow(capacity, &mut configs, &mut statuses)?;
        }
    }
}

fn reserve_to(
    configs: &mut Vec<Configuration>,
    statuses: &mut Vec<Status>,
    capacity: usize,
) -> Result<(), SolveError> {
    if configs.try_reserve(capacity).is_err() || statuses.try_reserve(capacity).is_err() {
        return Err(SolveError::FrontierAllocationFailed { attempted: capacity });
    }
    Ok(())
}

fn grow(
    capacity: usize,
    configs: &mut Vec<Configuration>,
    statuses: &mut Vec<Status>,
) -> Result<usize, SolveError> {
    let new_capacity = capacity * 2;
    let additional_configs = new_capacity.saturating_sub(configs.capacity());
    let additional_statuses = new_capacity.saturating_sub(statuses.capacity());
    if configs.try_reserve(additional_configs).is_err()
        || statuses.try_reserve(additional_statuses).is_err()
    {
        return Err(SolveError::FrontierAllocationFailed { attempted: new_capacity });
    }
    trace!("breadth-first: grew frontier capacity to {}", new_capacity);
    Ok(new_capacity)
}

/// Walks from the head, swapping each `Fail` slot with a live slot from
/// the tail, shrinking the active length. Preserves the multiset of
/// non-`Fail` slots (spec §5 invariant).
fn compact(configs: &mut Vec<Configuration>, statuses: &mut Vec<Status>) {
    let mut i = 0;
    let mut j = statuses.len();
    while i < j {
        if statuses[i] == Status::Fail {
            j -= 1;
            configs.swap(i, j);
            statuses.swap(i, j);
        } else {
            i += 1;
        }
    }
    configs.truncate(j);
    statuses.truncate(j);
}
