//! Routing a whole schematic across a pool of worker threads.
//!
//! Wire indices go out over one crossbeam channel and `(index, result)`
//! pairs come back over another. Workers borrow the router, the schematic
//! and a single shared obstacle map for the lifetime of a scoped thread
//! group, so nothing is cloned per wire. Results are written back into
//! input order, which makes the output identical to
//! [`WireRouter::route_all`].

use crossbeam_channel::{Receiver, Sender};
use schemroute_grid::ObstacleSet;

use crate::error::RouteError;
use crate::model::Schematic;
use crate::router::{WireRoute, WireRouter};

type WireResult = Result<WireRoute, RouteError>;

fn worker_loop(
    router: &WireRouter,
    obstacles: &ObstacleSet,
    schematic: &Schematic,
    task_rx: Receiver<usize>,
    result_tx: Sender<(usize, WireResult)>,
) {
    while let Ok(index) = task_rx.recv() {
        let Some(wire) = schematic.wires.get(index) else {
            continue;
        };
        let result = router.route_wire_on(obstacles, schematic, wire);
        if result_tx.send((index, result)).is_err() {
            break;
        }
    }
}

impl WireRouter {
    /// Route every wire on up to
    /// [`resolved_worker_count`](crate::EngineConfig::resolved_worker_count)
    /// threads.
    ///
    /// The result is the same, element for element, as
    /// [`route_all`](Self::route_all).
    pub fn route_all_parallel(&self, schematic: &Schematic) -> Vec<WireResult> {
        let wire_count = schematic.wires.len();
        let workers = self.config().resolved_worker_count().min(wire_count);
        if workers <= 1 {
            return self.route_all(schematic);
        }
        tracing::debug!(wires = wire_count, workers, "routing schematic in parallel");

        let obstacles = self.obstacles(&schematic.nodes);
        let (task_tx, task_rx) = crossbeam_channel::bounded(wire_count);
        let (result_tx, result_rx) = crossbeam_channel::unbounded();
        for index in 0..wire_count {
            if task_tx.send(index).is_err() {
                break;
            }
        }
        drop(task_tx);

        let mut slots: Vec<Option<WireResult>> = (0..wire_count).map(|_| None).collect();
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                let obstacles = &obstacles;
                scope.spawn(move || worker_loop(self, obstacles, schematic, task_rx, result_tx));
            }
            drop(result_tx);
            for (index, result) in result_rx.iter() {
                slots[index] = Some(result);
            }
        });

        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::model::{SchematicNode, SchematicWire};
    use schemroute_library::{ComponentKind, ComponentLibrary};

    fn ladder(rungs: usize) -> Schematic {
        let mut doc = Schematic::default();
        for i in 0..rungs {
            let y = i as f64 * 100.0;
            doc.nodes.push(SchematicNode::new(format!("A{i}"), ComponentKind::Resistor, 0.0, y));
            doc.nodes.push(SchematicNode::new(format!("B{i}"), ComponentKind::Capacitor, 300.0, y));
        }
        for i in 0..rungs {
            let next = (i + 1) % rungs;
            doc.wires.push(SchematicWire::new(
                format!("w{i}"),
                format!("A{i}"),
                "2",
                format!("B{next}"),
                "1",
            ));
        }
        doc
    }

    fn router(workers: usize) -> WireRouter {
        let config = EngineConfig {
            worker_count: Some(workers),
            ..Default::default()
        };
        WireRouter::new(config, ComponentLibrary::builtin()).unwrap()
    }

    #[test]
    fn parallel_matches_sequential() {
        let doc = ladder(12);
        let r = router(4);
        assert_eq!(r.route_all_parallel(&doc), r.route_all(&doc));
    }

    #[test]
    fn errors_stay_in_place() {
        let mut doc = ladder(6);
        doc.wires[3].source_id = "ghost".into();
        let results = router(3).route_all_parallel(&doc);
        assert_eq!(results.len(), 6);
        for (i, r) in results.iter().enumerate() {
            if i == 3 {
                assert!(matches!(r, Err(RouteError::UnknownNode { .. })));
            } else {
                assert_eq!(r.as_ref().unwrap().wire_id, format!("w{i}"));
            }
        }
    }

    #[test]
    fn single_worker_and_empty_inputs() {
        let doc = ladder(3);
        assert_eq!(router(1).route_all_parallel(&doc).len(), 3);
        assert!(router(8).route_all_parallel(&Schematic::default()).is_empty());
    }
}
