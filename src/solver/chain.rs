//! Chain-search heuristic backend
//!
//! Greedy nearest-neighbor construction followed by 2-opt local search:
//!
//! 1. Seed the chain with the highest-scoring photo-disjoint candidate pair
//!    (or the first candidate when every pairwise score is zero).
//! 2. Repeatedly attach the compatible candidate with the best transition
//!    gain at either end of the chain. Zero-gain attachments are taken too:
//!    they never hurt the objective and keep placeable photos in the show.
//! 3. Improve by reversing chain segments while any reversal raises the
//!    realized score, or until the time limit runs out.
//!
//! All tie-breaks are by candidate index, so runs are deterministic. The
//! backend writes a full x/y/pos assignment into the model's variable id
//! space and never claims optimality.

use std::collections::{BTreeSet, VecDeque};
use std::time::{Duration, Instant};

use super::{Backend, Outcome, SolveError, SolveStatus};
use crate::model::ShowModel;

/// Deterministic greedy + 2-opt heuristic; `exact()` is false
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainSearch;

impl Backend for ChainSearch {
    fn name(&self) -> &'static str {
        "chain-search"
    }

    fn exact(&self) -> bool {
        false
    }

    fn solve(
        &self,
        show: &ShowModel,
        time_limit: Option<Duration>,
    ) -> Result<Outcome, SolveError> {
        let started = Instant::now();

        if show.is_empty() {
            return Ok(Outcome {
                status: SolveStatus::Infeasible,
                values: Vec::new(),
                objective: 0,
                time_limit_hit: false,
            });
        }

        let chain = construct(show);
        let (chain, time_limit_hit) = improve(show, chain, started, time_limit);

        Ok(assignment(show, &chain, time_limit_hit))
    }
}

fn shares_photo(show: &ShowModel, a: usize, b: usize) -> bool {
    let slides = show.slides();
    slides[a]
        .photo_ids()
        .iter()
        .any(|id| slides[b].photo_ids().contains(id))
}

fn compatible(show: &ShowModel, candidate: usize, used: &BTreeSet<u32>) -> bool {
    show.slides()[candidate]
        .photo_ids()
        .iter()
        .all(|id| !used.contains(id))
}

/// Greedy nearest-neighbor chain construction
fn construct(show: &ShowModel) -> Vec<usize> {
    let n = show.len();
    let scores = show.scores();

    // seed with the best-scoring disjoint pair, if any scores at all
    let mut seed: Option<(u32, usize, usize)> = None;
    for i in 0..n {
        for j in i + 1..n {
            let score = scores.get(i, j);
            if score > 0
                && seed.is_none_or(|(best, ..)| score > best)
                && !shares_photo(show, i, j)
            {
                seed = Some((score, i, j));
            }
        }
    }

    let mut chain: VecDeque<usize> = match seed {
        Some((_, i, j)) => VecDeque::from([i, j]),
        None => VecDeque::from([0]),
    };
    let mut selected = vec![false; n];
    let mut used: BTreeSet<u32> = BTreeSet::new();
    for &s in &chain {
        selected[s] = true;
        used.extend(show.slides()[s].photo_ids());
    }

    // attach the best-gaining compatible candidate at either end until
    // nothing placeable remains
    loop {
        let head = *chain.front().expect("chain is never empty");
        let tail = *chain.back().expect("chain is never empty");

        // (gain, append?, candidate); ties prefer appending, then lower index
        let mut best: Option<(u32, bool, usize)> = None;
        for c in 0..n {
            if selected[c] || !compatible(show, c, &used) {
                continue;
            }
            for (gain, append) in [(scores.get(tail, c), true), (scores.get(c, head), false)] {
                let better = match best {
                    None => true,
                    Some((bg, ba, _)) => gain > bg || (gain == bg && append && !ba),
                };
                if better {
                    best = Some((gain, append, c));
                }
            }
        }

        let Some((_, append, c)) = best else { break };
        if append {
            chain.push_back(c);
        } else {
            chain.push_front(c);
        }
        selected[c] = true;
        used.extend(show.slides()[c].photo_ids());
    }

    chain.into()
}

/// 2-opt: reverse segments while that raises the realized score.
/// Returns the improved chain and whether the time limit cut the search off.
fn improve(
    show: &ShowModel,
    mut chain: Vec<usize>,
    started: Instant,
    time_limit: Option<Duration>,
) -> (Vec<usize>, bool) {
    let scores = show.scores();
    let len = chain.len();
    if len < 3 {
        return (chain, false);
    }

    let edge = |chain: &[usize], a: usize, b: usize| i64::from(scores.get(chain[a], chain[b]));

    loop {
        if let Some(limit) = time_limit {
            if started.elapsed() >= limit {
                return (chain, true);
            }
        }

        let mut improved = false;
        'scan: for i in 0..len - 1 {
            for j in i + 1..len {
                // reversing chain[i..=j] replaces the boundary edges
                let mut old = 0;
                let mut new = 0;
                if i > 0 {
                    old += edge(&chain, i - 1, i);
                    new += edge(&chain, i - 1, j);
                }
                if j < len - 1 {
                    old += edge(&chain, j, j + 1);
                    new += edge(&chain, i, j + 1);
                }
                if new > old {
                    chain[i..=j].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }

        if !improved {
            return (chain, false);
        }
    }
}

/// Write the chain into a full variable assignment over the model's id space
fn assignment(show: &ShowModel, chain: &[usize], time_limit_hit: bool) -> Outcome {
    let mut values = vec![0.0; show.model().var_count()];
    let mut objective = 0i64;

    for (position, &slide) in chain.iter().enumerate() {
        values[show.x(slide).index()] = 1.0;
        values[show.pos(slide).index()] = position as f64;
        if let Some(&next) = chain.get(position + 1) {
            values[show.y(slide, next).index()] = 1.0;
            objective += i64::from(show.scores().get(slide, next));
        }
    }
    debug_assert!(show.model().satisfied(&values));

    Outcome { status: SolveStatus::Feasible, values, objective, time_limit_hit }
}
