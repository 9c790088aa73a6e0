use crate::drag::DragRegistrar;
use crate::host::{DataSource, ItemView};
use crate::pool::PooledView;
use crate::Error;

/// Binds `index` into `pooled` and wires the drag hook on first sight of a drag-capable view.
///
/// A binder failure is logged and returned; the view stays bound so the next refresh can
/// retry.
pub(crate) fn bind_item<D, V>(
    source: &mut D,
    registrar: &DragRegistrar,
    index: usize,
    pooled: &mut PooledView<V>,
) -> Result<(), Error>
where
    D: DataSource<V> + ?Sized,
    V: ItemView,
{
    let outcome = source
        .bind(index, pooled.view_mut())
        .map_err(|source| Error::Bind { index, source });
    if let Err(err) = &outcome {
        lerror!(index, error = %err, "item binder failed");
    }
    wire_drag(registrar, pooled);
    outcome
}

fn wire_drag<V: ItemView>(registrar: &DragRegistrar, pooled: &mut PooledView<V>) {
    if pooled.drag_checked {
        return;
    }
    pooled.drag_checked = true;
    let hook = registrar.hook_for(pooled.id());
    if let Some(item) = pooled.view_mut().as_drag_item() {
        item.install_drag_hook(hook);
    }
}
