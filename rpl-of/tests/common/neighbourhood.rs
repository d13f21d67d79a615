use std::collections::BTreeMap;

use rpl_of::concepts::dodag::Dodag;
use rpl_of::concepts::parent::Parent;
use rpl_of::concepts::rank::{Etx, Rank};
use rpl_of::objective::ObjectiveFunction;

use crate::common::fixtures::TestSystem;

/// A node and its candidate parents, with link estimates that change every tick
/// the way a link estimator would report them.
pub struct VirtualNeighbourhood {
    pub dodag: Dodag<TestSystem>,
    pub of: &'static dyn ObjectiveFunction<TestSystem>,
    /// per parent: (advertised rank, etx per tick)
    pub links: BTreeMap<String, (Rank, Vec<f64>)>,
    /// preferred parent after every tick
    pub history: Vec<Option<String>>,
    pub ranks: Vec<Rank>,
    tick: usize,
}

impl VirtualNeighbourhood {
    pub fn create(of: &'static dyn ObjectiveFunction<TestSystem>, links: &[(&str, Rank, Vec<f64>)]) -> Self {
        let mut dodag = Dodag::new();
        let mut table = BTreeMap::new();
        for (addr, rank, etx) in links {
            dodag.add_parent(Parent::new(addr.to_string(), *rank, Etx::from_num(etx[0])));
            table.insert(addr.to_string(), (*rank, etx.clone()));
        }
        VirtualNeighbourhood {
            dodag,
            of,
            links: table,
            history: Vec::new(),
            ranks: Vec::new(),
            tick: 0,
        }
    }

    pub fn tick(&mut self) {
        for (addr, (rank, etx)) in &self.links {
            let sample = etx[self.tick % etx.len()];
            self.dodag
                .update_parent(addr, *rank, Etx::from_num(sample))
                .unwrap_or_else(|e| panic!("{e}"));
        }
        let preferred = self.dodag.select_preferred_parent(self.of);
        self.dodag.rank = self.of.calc_rank(&self.dodag, 0);
        self.history.push(preferred);
        self.ranks.push(self.dodag.rank);
        self.tick += 1;
    }

    pub fn tick_n(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// number of times the preferred parent changed
    pub fn switches(&self) -> usize {
        self.history.windows(2).filter(|w| w[0] != w[1]).count()
    }

    pub fn preferred(&self) -> Option<String> {
        self.history.last().cloned().flatten()
    }
}
