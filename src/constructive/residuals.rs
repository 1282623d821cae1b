//! Per-call working copy of supply and demand.

use log::trace;

use crate::models::{Allocation, TransportationProblem};

/// Remaining supply and demand while a heuristic runs.
///
/// Cloned from the problem on entry so the problem itself is never touched.
#[derive(Debug)]
pub(crate) struct Residuals {
    supply: Vec<f64>,
    demand: Vec<f64>,
}

impl Residuals {
    pub(crate) fn new(problem: &TransportationProblem) -> Self {
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
        }
    }

    pub(crate) fn supply(&self, source: usize) -> f64 {
        self.supply[source]
    }

    /// Sources with positive remaining supply, ascending.
    pub(crate) fn open_sources(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.supply.len()).filter(move |&i| self.supply[i] > 0.0)
    }

    /// Destinations with positive remaining demand, ascending.
    pub(crate) fn open_destinations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.demand.len()).filter(move |&j| self.demand[j] > 0.0)
    }

    /// `true` while some source still has supply and some destination demand.
    pub(crate) fn is_open(&self) -> bool {
        self.supply.iter().any(|&s| s > 0.0) && self.demand.iter().any(|&d| d > 0.0)
    }

    /// Ships as much as possible through `(source, destination)`.
    ///
    /// Ships `min(supply, demand)`, so at least one side drops to exactly zero.
    pub(crate) fn ship(
        &mut self,
        allocation: &mut Allocation,
        source: usize,
        destination: usize,
    ) -> f64 {
        let quantity = self.supply[source].min(self.demand[destination]);
        allocation.add(source, destination, quantity);
        self.supply[source] -= quantity;
        self.demand[destination] -= quantity;
        trace!("ship {quantity} units {source} -> {destination}");
        quantity
    }
}
