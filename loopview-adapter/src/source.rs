use core::fmt;

use loopview::{BindError, DataSource, Size, TemplateId};

/// Index-driven data: the caller answers every question by item index.
///
/// ```
/// # use loopview::{BindError, Size};
/// # use loopview_adapter::IndexSource;
/// struct Label(String);
///
/// let source = IndexSource::new(1_000, |index, view: &mut Label| {
///     view.0 = format!("row {index}");
///     Ok::<(), BindError>(())
/// })
/// .with_size(|index| Size::new(320.0, if index % 10 == 0 { 48.0 } else { 24.0 }));
/// # let _ = source;
/// ```
pub struct IndexSource<V> {
    count: usize,
    size_of: Option<Box<dyn Fn(usize) -> Size>>,
    template_of: Option<Box<dyn Fn(usize) -> Option<TemplateId>>>,
    bind: Box<dyn FnMut(usize, &mut V) -> Result<(), BindError>>,
}

impl<V> IndexSource<V> {
    pub fn new(
        count: usize,
        bind: impl FnMut(usize, &mut V) -> Result<(), BindError> + 'static,
    ) -> Self {
        Self {
            count,
            size_of: None,
            template_of: None,
            bind: Box::new(bind),
        }
    }

    /// Per-item sizes. Without it every item uses `LoopViewOptions::default_item_size`.
    pub fn with_size(mut self, size_of: impl Fn(usize) -> Size + 'static) -> Self {
        self.size_of = Some(Box::new(size_of));
        self
    }

    /// Per-item templates. Without it every item uses `TemplateId::DEFAULT`.
    pub fn with_template(
        mut self,
        template_of: impl Fn(usize) -> Option<TemplateId> + 'static,
    ) -> Self {
        self.template_of = Some(Box::new(template_of));
        self
    }

    /// Changes the item count. Call `LoopView::relayout` afterwards.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl<V> DataSource<V> for IndexSource<V> {
    fn count(&self) -> usize {
        self.count
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        self.size_of.as_ref().map(|f| f(index))
    }

    fn template_of(&self, index: usize) -> Option<TemplateId> {
        match &self.template_of {
            Some(f) => f(index),
            None => Some(TemplateId::DEFAULT),
        }
    }

    fn bind(&mut self, index: usize, view: &mut V) -> Result<(), BindError> {
        (self.bind)(index, view)
    }
}

impl<V> fmt::Debug for IndexSource<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSource")
            .field("count", &self.count)
            .field("size_of", &self.size_of.is_some())
            .field("template_of", &self.template_of.is_some())
            .finish_non_exhaustive()
    }
}

/// List-driven data: owns the items and answers by item.
///
/// The bind closure also receives the index, for views that show a position. After mutating
/// the list through [`ListSource::items_mut`], call `LoopView::relayout` (count or sizes
/// changed) or `LoopView::refresh_visible` (contents only).
pub struct ListSource<T, V> {
    items: Vec<T>,
    size_of: Option<Box<dyn Fn(&T) -> Size>>,
    template_of: Option<Box<dyn Fn(&T) -> Option<TemplateId>>>,
    bind: Box<dyn FnMut(&T, usize, &mut V) -> Result<(), BindError>>,
}

impl<T, V> ListSource<T, V> {
    pub fn new(
        items: Vec<T>,
        bind: impl FnMut(&T, usize, &mut V) -> Result<(), BindError> + 'static,
    ) -> Self {
        Self {
            items,
            size_of: None,
            template_of: None,
            bind: Box::new(bind),
        }
    }

    pub fn with_size(mut self, size_of: impl Fn(&T) -> Size + 'static) -> Self {
        self.size_of = Some(Box::new(size_of));
        self
    }

    pub fn with_template(
        mut self,
        template_of: impl Fn(&T) -> Option<TemplateId> + 'static,
    ) -> Self {
        self.template_of = Some(Box::new(template_of));
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, V> DataSource<V> for ListSource<T, V> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        let f = self.size_of.as_ref()?;
        self.items.get(index).map(|item| f(item))
    }

    fn template_of(&self, index: usize) -> Option<TemplateId> {
        let item = self.items.get(index)?;
        match &self.template_of {
            Some(f) => f(item),
            None => Some(TemplateId::DEFAULT),
        }
    }

    fn bind(&mut self, index: usize, view: &mut V) -> Result<(), BindError> {
        let Some(item) = self.items.get(index) else {
            return Err(BindError::new(format!(
                "index {index} out of bounds for {} items",
                self.items.len()
            )));
        };
        (self.bind)(item, index, view)
    }
}

impl<T: fmt::Debug, V> fmt::Debug for ListSource<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSource")
            .field("items", &self.items)
            .field("size_of", &self.size_of.is_some())
            .field("template_of", &self.template_of.is_some())
            .finish_non_exhaustive()
    }
}
