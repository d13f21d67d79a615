use std::collections::BTreeMap;

use log::{debug, error};

use crate::concepts::rank::Ocp;
use crate::feedback::RplError;
use crate::framework::RplSystem;
use crate::objective::{ObjectiveFunction, MRHOF, OF0};

/// Maps Objective Code Points to the objective functions this node supports.
///
/// Built once while the stack starts, then only read. Lookups hand out
/// `'static` references, so the DODAG manager may keep them for as long as it
/// likes.
pub struct ObjectiveRegistry<T: RplSystem + ?Sized> {
    functions: BTreeMap<Ocp, &'static dyn ObjectiveFunction<T>>,
}

impl<T: RplSystem + ?Sized> Default for ObjectiveRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RplSystem + ?Sized> ObjectiveRegistry<T> {
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// A registry with MRHOF and OF0
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [&'static dyn ObjectiveFunction<T>; 2] = [&MRHOF, &OF0];
        for of in defaults {
            if let Err(e) = registry.register(of) {
                error!("{e}");
            }
        }
        registry
    }

    /// Registers `of` under its code point and runs its init hook.
    pub fn register(&mut self, of: &'static dyn ObjectiveFunction<T>) -> Result<(), RplError<T>> {
        let ocp = of.ocp();
        if self.functions.contains_key(&ocp) {
            return Err(RplError::DuplicateObjective { ocp });
        }
        of.init();
        self.functions.insert(ocp, of);
        debug!("registered objective function {ocp:#06x}");
        Ok(())
    }

    pub fn get_objective_function(&self, ocp: Ocp) -> Result<&'static dyn ObjectiveFunction<T>, RplError<T>> {
        self.functions
            .get(&ocp)
            .copied()
            .ok_or(RplError::UnsupportedObjective { ocp })
    }

    pub fn contains(&self, ocp: Ocp) -> bool {
        self.functions.contains_key(&ocp)
    }

    pub fn ocps(&self) -> impl Iterator<Item = Ocp> + '_ {
        self.functions.keys().copied()
    }
}
