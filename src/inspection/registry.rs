//! Registry of inspectors
//!
//! One registry is built by the composition root at startup and shared by
//! `Rc` with every inspector (to register) and every consumer (to query).
//! Registration happens during startup only; afterwards the list is
//! read-only and keeps insertion order.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::{InspectionResult, Inspector};
use crate::error::{InspectionError, Result};
use crate::models::Request;
use crate::reactive::{Computed, Signal};

#[derive(Default)]
pub struct InspectionRegistry {
    inspectors: RefCell<Vec<Rc<dyn Inspector>>>,
}

impl InspectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inspector under its declared id.
    ///
    /// A second inspector with the same id is rejected and the registry is
    /// left unchanged.
    pub fn register(&self, inspector: Rc<dyn Inspector>) -> Result<()> {
        let id = inspector.inspector_id().to_string();

        if self.contains(&id) {
            warn!("Inspector '{}' is already registered", id);
            return Err(InspectionError::DuplicateInspector(id).into());
        }

        debug!("Registered inspector '{}'", id);
        self.inspectors.borrow_mut().push(inspector);
        Ok(())
    }

    pub fn contains(&self, inspector_id: &str) -> bool {
        self.inspectors
            .borrow()
            .iter()
            .any(|i| i.inspector_id() == inspector_id)
    }

    /// Registered inspectors in registration order.
    pub fn inspectors(&self) -> Vec<Rc<dyn Inspector>> {
        self.inspectors.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inspectors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspectors.borrow().is_empty()
    }

    /// Merged findings of every registered inspector for `request`.
    ///
    /// Results are concatenated in registration order; results marked as
    /// not applicable are dropped. The returned value re-evaluates whenever
    /// any input read by any inspector changes.
    pub fn get_inspections(&self, request: &Signal<Request>) -> Computed<Vec<InspectionResult>> {
        let per_inspector: Vec<Computed<Vec<InspectionResult>>> = self
            .inspectors
            .borrow()
            .iter()
            .map(|inspector| inspector.get_inspections(request))
            .collect();

        let deps = per_inspector.iter().map(Computed::as_dependency).collect();

        Computed::new(deps, move || {
            per_inspector
                .iter()
                .flat_map(|computed| computed.get())
                .filter(|result| result.is_applicable)
                .collect()
        })
    }
}
