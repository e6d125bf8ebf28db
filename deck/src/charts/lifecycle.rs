//! Chart instance lifecycle.
//!
//! A chart widget owns at most one live chart instance bound to its drawing
//! surface. Instances release whatever they hold (drawing context, event
//! listeners, pixels) when dropped, so the slot only has to decide *when* an
//! instance goes away:
//!
//! - before a replacement is created (re-mount),
//! - on [`ChartSlot::unmount`],
//! - when the slot itself is dropped.
//!
//! Construction failures are logged and swallowed: the widget stays empty
//! and the page keeps rendering.

use tracing::{debug, error, warn};

use super::config::ChartConfig;
use crate::error::ChartResult;

/// Something that can bind a chart to a drawing surface.
pub trait ChartBackend {
    /// The element charts are drawn on.
    type Surface;
    /// A live chart. Dropping it must release everything it acquired.
    type Instance;

    /// Build a chart on `surface`.
    fn create(&self, surface: &Self::Surface, config: &ChartConfig) -> ChartResult<Self::Instance>;
}

/// Holder of the single chart instance of one widget.
pub struct ChartSlot<B: ChartBackend> {
    name: String,
    backend: B,
    instance: Option<B::Instance>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(name: impl Into<String>, backend: B) -> Self {
        Self {
            name: name.into(),
            backend,
            instance: None,
        }
    }

    /// Slot name used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create the chart, replacing any previous instance.
    ///
    /// The previous instance is dropped before the new one is built, so two
    /// instances never share the surface. Returns `true` when a chart is now
    /// live; on a missing surface or a construction error the failure is
    /// logged and the slot is left empty.
    pub fn mount(&mut self, surface: Option<&B::Surface>, config: &ChartConfig) -> bool {
        if self.instance.take().is_some() {
            debug!(chart = %self.name, "destroyed previous chart instance before re-mount");
        }

        let Some(surface) = surface else {
            warn!(chart = %self.name, "drawing surface unavailable, skipping chart");
            return false;
        };

        match self.backend.create(surface, config) {
            Ok(instance) => {
                debug!(chart = %self.name, bars = config.values.len(), "chart mounted");
                self.instance = Some(instance);
                true
            }
            Err(e) => {
                error!(chart = %self.name, error = %e, "error creating chart");
                false
            }
        }
    }

    /// Destroy the live instance, if any.
    pub fn unmount(&mut self) {
        if self.instance.take().is_some() {
            debug!(chart = %self.name, "chart unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&B::Instance> {
        self.instance.as_ref()
    }

    pub fn instance_mut(&mut self) -> Option<&mut B::Instance> {
        self.instance.as_mut()
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Shared bookkeeping of a fake surface.
    #[derive(Default)]
    struct Ledger {
        live: Cell<usize>,
        peak: Cell<usize>,
        created: Cell<usize>,
        destroyed: Cell<usize>,
        events: RefCell<Vec<String>>,
    }

    struct FakeSurface {
        ledger: Rc<Ledger>,
        broken: bool,
    }

    struct FakeInstance {
        ledger: Rc<Ledger>,
        id: usize,
    }

    impl Drop for FakeInstance {
        fn drop(&mut self) {
            self.ledger.live.set(self.ledger.live.get() - 1);
            self.ledger.destroyed.set(self.ledger.destroyed.get() + 1);
            self.ledger
                .events
                .borrow_mut()
                .push(format!("destroy {}", self.id));
        }
    }

    struct FakeBackend;

    impl ChartBackend for FakeBackend {
        type Surface = FakeSurface;
        type Instance = FakeInstance;

        fn create(&self, surface: &FakeSurface, config: &ChartConfig) -> ChartResult<FakeInstance> {
            if surface.broken {
                return Err(ChartError::ContextUnavailable("no 2d context".into()));
            }
            config.validate()?;

            let ledger = Rc::clone(&surface.ledger);
            let id = ledger.created.get() + 1;
            ledger.created.set(id);
            ledger.live.set(ledger.live.get() + 1);
            ledger.peak.set(ledger.peak.get().max(ledger.live.get()));
            ledger.events.borrow_mut().push(format!("create {id}"));
            Ok(FakeInstance { ledger, id })
        }
    }

    fn surface(broken: bool) -> (FakeSurface, Rc<Ledger>) {
        let ledger = Rc::new(Ledger::default());
        (
            FakeSurface {
                ledger: Rc::clone(&ledger),
                broken,
            },
            ledger,
        )
    }

    #[test]
    fn remount_never_stacks_instances() {
        let (surface, ledger) = surface(false);
        let config = ChartConfig::market_size();
        let mut slot = ChartSlot::new("market-size", FakeBackend);

        assert!(slot.mount(Some(&surface), &config));
        assert!(slot.mount(Some(&surface), &config));

        assert_eq!(ledger.created.get(), 2);
        assert_eq!(ledger.live.get(), 1);
        assert_eq!(ledger.peak.get(), 1);
        assert_eq!(
            *ledger.events.borrow(),
            vec!["create 1", "destroy 1", "create 2"]
        );
        assert_eq!(slot.instance().map(|i| i.id), Some(2));
    }

    #[test]
    fn missing_surface_is_skipped_quietly() {
        let config = ChartConfig::business_cost();
        let mut slot: ChartSlot<FakeBackend> = ChartSlot::new("business-cost", FakeBackend);

        assert!(!slot.mount(None, &config));
        assert!(!slot.is_mounted());
    }

    #[test]
    fn missing_surface_still_releases_previous_instance() {
        let (surface, ledger) = surface(false);
        let config = ChartConfig::market_size();
        let mut slot = ChartSlot::new("market-size", FakeBackend);

        assert!(slot.mount(Some(&surface), &config));
        assert!(!slot.mount(None, &config));
        assert_eq!(ledger.live.get(), 0);
        assert_eq!(ledger.destroyed.get(), 1);
    }

    #[test]
    fn construction_failure_leaves_slot_empty() {
        let (surface, ledger) = surface(true);
        let mut slot = ChartSlot::new("market-size", FakeBackend);

        assert!(!slot.mount(Some(&surface), &ChartConfig::market_size()));
        assert!(!slot.is_mounted());
        assert_eq!(ledger.created.get(), 0);
    }

    #[test]
    fn invalid_config_is_swallowed() {
        let (surface, ledger) = surface(false);
        let mut config = ChartConfig::market_size();
        config.labels.pop();
        let mut slot = ChartSlot::new("market-size", FakeBackend);

        assert!(!slot.mount(Some(&surface), &config));
        assert_eq!(ledger.live.get(), 0);
    }

    #[test]
    fn unmount_and_drop_release() {
        let (surface, ledger) = surface(false);
        let config = ChartConfig::market_size();

        let mut slot = ChartSlot::new("market-size", FakeBackend);
        assert!(slot.mount(Some(&surface), &config));
        slot.unmount();
        assert_eq!(ledger.live.get(), 0);
        slot.unmount();
        assert_eq!(ledger.destroyed.get(), 1);

        assert!(slot.mount(Some(&surface), &config));
        drop(slot);
        assert_eq!(ledger.live.get(), 0);
        assert_eq!(ledger.destroyed.get(), 2);
    }
}
