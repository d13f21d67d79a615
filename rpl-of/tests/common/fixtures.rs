use rpl_of::concepts::dodag::Dodag;
use rpl_of::concepts::parent::{Parent, ParentState};
use rpl_of::concepts::rank::{Etx, Rank};
use rpl_of::framework::RplSystem;
use simplelog::{Config, LevelFilter, TestLogger};

pub struct TestSystem;

impl RplSystem for TestSystem {
    type LinkAddress = String;
}

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

pub fn etx(value: f64) -> Etx {
    Etx::from_num(value)
}

pub fn candidate(addr: &str, rank: Rank, link_metric: f64) -> Parent<TestSystem> {
    Parent::new(addr.to_string(), rank, etx(link_metric))
}

pub fn active(addr: &str, rank: Rank, link_metric: f64) -> Parent<TestSystem> {
    candidate(addr, rank, link_metric).with_state(ParentState::Active)
}

pub fn dodag_with(parents: Vec<Parent<TestSystem>>) -> Dodag<TestSystem> {
    let mut dodag = Dodag::new();
    for parent in parents {
        dodag.add_parent(parent);
    }
    dodag
}

pub fn addr(s: &str) -> String {
    s.to_string()
}
