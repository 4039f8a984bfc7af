//! Exhaustive move-path counting.
//!
//! `perft` walks the legal move tree with strictly nested apply / unapply
//! pairs. The parallel variants split the work at the root: workers pull root
//! moves from a shared queue and search them on their own copy of the
//! position.

use std::thread;

use parking_lot::Mutex;

use super::{Move, Position};

impl Position {
    /// Number of leaf nodes `depth` plies below this position.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let undo = self.apply(&mv);
            nodes += self.perft(depth - 1);
            self.unapply(&mv, undo);
        }
        nodes
    }

    /// Node count below each legal root move, in generation order.
    ///
    /// Returns an empty list at depth 0.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let mut counts = Vec::new();
        for mv in self.generate_legal() {
            let undo = self.apply(&mv);
            let nodes = self.perft(depth - 1);
            self.unapply(&mv, undo);
            log::debug!("{mv}: {nodes}");
            counts.push((mv, nodes));
        }
        counts
    }

    /// Same count as [`Position::perft`], with root moves spread over
    /// `threads` workers. `threads` of 0 is treated as 1.
    #[must_use]
    pub fn perft_parallel(&self, depth: usize, threads: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let nodes = self
            .perft_divide_parallel(depth, threads)
            .iter()
            .map(|&(_, n)| n)
            .sum();
        log::info!("perft({depth}) = {nodes} on {} thread(s)", threads.max(1));
        nodes
    }

    /// Same result as [`Position::perft_divide`], computed by `threads`
    /// workers. Each worker searches on a private clone of `self`.
    #[must_use]
    pub fn perft_divide_parallel(&self, depth: usize, threads: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let root_moves = self.clone().generate_legal();
        let workers = threads.clamp(1, root_moves.len().max(1));

        let next = Mutex::new(0usize);
        let results: Mutex<Vec<Option<u64>>> = Mutex::new(vec![None; root_moves.len()]);

        thread::scope(|scope| {
            for _ in 0..workers {
                let mut position = self.clone();
                let (next, results, root_moves) = (&next, &results, &root_moves);
                scope.spawn(move || loop {
                    let idx = {
                        let mut next = next.lock();
                        let idx = *next;
                        *next += 1;
                        idx
                    };
                    let Some(mv) = root_moves.get(idx) else {
                        break;
                    };
                    let undo = position.apply(&mv);
                    let nodes = position.perft(depth - 1);
                    position.unapply(&mv, undo);
                    results.lock()[idx] = Some(nodes);
                });
            }
        });

        let counts: Vec<(Move, u64)> = root_moves
            .into_iter()
            .zip(results.into_inner())
            .map(|(mv, nodes)| (mv, nodes.unwrap_or(0)))
            .collect();
        log::info!(
            "divide({depth}): {} root moves on {workers} worker(s)",
            counts.len()
        );
        counts
    }
}
