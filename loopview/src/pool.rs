//! Two-tier view pool keyed by template.
//!
//! The main pool holds idle views across updates. The transient pool only lives for the
//! duration of one visible-range update: views leaving the range are parked there (still
//! active) and are the first choice for indexes entering the range in the same pass. Whatever
//! is left is moved to the main pool by [`ViewPool::flush_transient`], the update's commit
//! point.

use std::collections::HashMap;

use crate::host::ViewHost;
use crate::{Error, TemplateId};

/// Stable identity of a view instance for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(u64);

impl ViewId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A host view plus the bookkeeping the pool and renderer need.
#[derive(Debug)]
pub struct PooledView<V> {
    id: ViewId,
    template: TemplateId,
    pub(crate) drag_checked: bool,
    view: V,
}

impl<V> PooledView<V> {
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Template the view was created for.
    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

/// Counters describing pool custody.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    pub created: usize,
    pub destroyed: usize,
    /// Idle views in the main pool.
    pub idle: usize,
    /// Views in transient custody (non-zero only during an update).
    pub transient: usize,
    /// Successful `acquire` calls, reused or freshly created.
    pub acquisitions: usize,
}

impl PoolStats {
    /// Views currently bound to an item.
    pub fn live(&self) -> usize {
        self.created
            .saturating_sub(self.destroyed)
            .saturating_sub(self.idle)
            .saturating_sub(self.transient)
    }
}

type Stacks<V> = HashMap<TemplateId, Vec<PooledView<V>>>;

#[derive(Debug)]
pub struct ViewPool<V> {
    main: Stacks<V>,
    transient: Stacks<V>,
    next_id: u64,
    created: usize,
    destroyed: usize,
    acquisitions: usize,
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self {
            main: HashMap::new(),
            transient: HashMap::new(),
            next_id: 0,
            created: 0,
            destroyed: 0,
            acquisitions: 0,
        }
    }
}

impl<V> ViewPool<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created,
            destroyed: self.destroyed,
            idle: self.main.values().map(Vec::len).sum(),
            transient: self.transient.values().map(Vec::len).sum(),
            acquisitions: self.acquisitions,
        }
    }

    pub fn idle_count(&self, template: TemplateId) -> usize {
        self.main.get(&template).map_or(0, Vec::len)
    }

    /// Hands out a view for `template`: transient pool first, then the main pool, then a
    /// freshly created one.
    pub fn acquire<H>(&mut self, template: TemplateId, host: &mut H) -> Result<PooledView<V>, Error>
    where
        H: ViewHost<View = V>,
    {
        let reused = pop(&mut self.transient, template).or_else(|| pop(&mut self.main, template));
        let mut pooled = match reused {
            Some(pooled) => pooled,
            None => {
                let view = host
                    .create(template)
                    .ok_or(Error::MissingFactory { template })?;
                let id = ViewId(self.next_id);
                self.next_id += 1;
                self.created += 1;
                ltrace!(id = id.0, template = template.0, "ViewPool: created view");
                PooledView {
                    id,
                    template,
                    drag_checked: false,
                    view,
                }
            }
        };
        host.set_active(&mut pooled.view, true);
        self.acquisitions += 1;
        Ok(pooled)
    }

    /// Parks a view freed during an update. It stays active until the update commits.
    ///
    /// `template` is what the data source resolves for `index`; if it cannot be resolved or
    /// does not match the view's own template, the view is destroyed.
    pub fn recycle_to_transient<H>(
        &mut self,
        index: usize,
        template: Option<TemplateId>,
        pooled: PooledView<V>,
        host: &mut H,
    ) where
        H: ViewHost<View = V>,
    {
        if let Some(template) = self.checked_template(index, template, &pooled) {
            self.transient.entry(template).or_default().push(pooled);
        } else {
            self.destroy(pooled, host);
        }
    }

    /// Returns a view straight to the main pool.
    pub fn recycle_to_main<H>(
        &mut self,
        index: usize,
        template: Option<TemplateId>,
        mut pooled: PooledView<V>,
        host: &mut H,
    ) where
        H: ViewHost<View = V>,
    {
        if let Some(template) = self.checked_template(index, template, &pooled) {
            host.set_active(&mut pooled.view, false);
            self.main.entry(template).or_default().push(pooled);
        } else {
            self.destroy(pooled, host);
        }
    }

    /// Moves every transient leftover into the main pool.
    pub fn flush_transient<H>(&mut self, host: &mut H)
    where
        H: ViewHost<View = V>,
    {
        if self.transient.values().all(Vec::is_empty) {
            return;
        }
        for (template, stack) in self.transient.iter_mut() {
            if stack.is_empty() {
                continue;
            }
            ltrace!(
                template = template.0,
                moved = stack.len(),
                "ViewPool: flushing transient views"
            );
            let main = self.main.entry(*template).or_default();
            for mut pooled in stack.drain(..) {
                host.set_active(&mut pooled.view, false);
                main.push(pooled);
            }
        }
    }

    /// Destroys every idle view in both pools.
    pub fn clear<H>(&mut self, host: &mut H)
    where
        H: ViewHost<View = V>,
    {
        let main = core::mem::take(&mut self.main);
        let transient = core::mem::take(&mut self.transient);
        for pooled in main.into_values().chain(transient.into_values()).flatten() {
            self.destroy(pooled, host);
        }
    }

    fn destroy<H>(&mut self, pooled: PooledView<V>, host: &mut H)
    where
        H: ViewHost<View = V>,
    {
        self.destroyed += 1;
        host.destroy(pooled.view);
    }

    fn checked_template(
        &self,
        index: usize,
        template: Option<TemplateId>,
        pooled: &PooledView<V>,
    ) -> Option<TemplateId> {
        match template {
            None => {
                lwarn!(
                    index,
                    view = pooled.id.0,
                    "no template resolved for recycled item; destroying its view"
                );
                None
            }
            Some(t) if t != pooled.template => {
                lwarn!(
                    index,
                    view = pooled.id.0,
                    resolved = t.0,
                    created_for = pooled.template.0,
                    "recycled view does not match the item's template; destroying it"
                );
                None
            }
            Some(t) => Some(t),
        }
    }
}

fn pop<V>(stacks: &mut Stacks<V>, template: TemplateId) -> Option<PooledView<V>> {
    stacks.get_mut(&template).and_then(Vec::pop)
}
