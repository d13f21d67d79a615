use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rpl_of::concepts::dodag::Dodag;
use rpl_of::concepts::parent::Parent;
use rpl_of::concepts::rank::{Etx, Rank, OCP_MRHOF, OCP_OF0};
use rpl_of::eui64::{Eui64, Eui64Provider};
use rpl_of::framework::RplSystem;
use rpl_of::objective::{ObjectiveFunction, ObjectiveRegistry};
use simplelog::*;

struct ChurnExample {} // just a type to inform rpl-of of our link-layer addressing
impl RplSystem for ChurnExample {
    type LinkAddress = String; // our neighbours have string names
}

struct DemoBoard {
    seed: u64,
}
impl Eui64Provider for DemoBoard {
    fn luid(&self) -> [u8; 8] {
        self.seed.to_be_bytes()
    }
}

/// a neighbour advertising `rank`, whose link quality wanders around `mean_etx`
struct Neighbour {
    name: &'static str,
    rank: Rank,
    mean_etx: f64,
}

fn run(ocp: u16, registry: &ObjectiveRegistry<ChurnExample>, neighbours: &[Neighbour]) -> anyhow::Result<()> {
    let of = registry
        .get_objective_function(ocp)
        .with_context(|| format!("objective function {ocp:#x}"))?;

    let mut dodag = Dodag::<ChurnExample>::new();
    for n in neighbours {
        dodag.add_parent(Parent::new(n.name.to_string(), n.rank, Etx::from_num(n.mean_etx)));
    }

    // same noise for every objective function
    let mut rng = StdRng::seed_from_u64(7);
    let mut switches = 0;
    let mut last = None;
    for step in 0..20 {
        for n in neighbours {
            let sample = (n.mean_etx + rng.gen_range(-0.4..0.4)).max(1.0);
            dodag.update_parent(&n.name.to_string(), n.rank, Etx::from_num(sample))?;
        }
        let preferred = dodag.select_preferred_parent(of);
        dodag.rank = of.calc_rank(&dodag, 0);
        if last.is_some() && preferred != last {
            switches += 1;
        }
        println!(" - step {step}: preferred {preferred:?}, rank {}", dodag.rank);
        last = preferred;
    }
    info!("ocp {ocp:#x}: {switches} parent switches in 20 steps");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let eui = Eui64::get(&DemoBoard { seed: 0x1122_3344_5566_7788 });
    info!("node {eui}");

    // we have two parents of similar quality, and a far away one behind a clean link:
    // root <- alice (rank 256) <- us
    // root <- bob   (rank 256) <- us
    // root <- ... <- carol (rank 768) <- us
    let neighbours = [
        Neighbour { name: "alice", rank: 256, mean_etx: 1.6 },
        Neighbour { name: "bob", rank: 256, mean_etx: 1.7 },
        Neighbour { name: "carol", rank: 768, mean_etx: 1.0 },
    ];

    let registry = ObjectiveRegistry::<ChurnExample>::with_defaults();
    for ocp in [OCP_MRHOF, OCP_OF0] {
        println!("Objective function {ocp:#x}:");
        run(ocp, &registry, &neighbours)?;
    }

    // an unsupported objective function is refused
    if let Err(e) = registry.get_objective_function(0x3) {
        info!("not joining: {e}");
    }
    Ok(())
}
