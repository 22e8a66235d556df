//! Collection Hooks
//!
//! Binds a [`CollectionController`] to Leptos signals and a remote source.
//! Network calls run on `spawn_local`; their results are applied to the
//! controller in arrival order.

use collection_view::{
    CollectionController, CollectionSource, CollectionView, MutableSource, Record, SortSpec,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Reactive handle over one fetched collection
pub struct CollectionHandle<R, P, S>
where
    R: Send + Sync + 'static,
    P: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    pub controller: RwSignal<CollectionController<R, P>>,
    source: StoredValue<S>,
}

impl<R, P, S> Clone for CollectionHandle<R, P, S>
where
    R: Send + Sync + 'static,
    P: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, P, S> Copy for CollectionHandle<R, P, S>
where
    R: Send + Sync + 'static,
    P: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
}

/// Create the handle and start the first fetch
pub fn use_collection<R, P, S>(controller: CollectionController<R, P>, source: S) -> CollectionHandle<R, P, S>
where
    R: Record + Send + Sync + 'static,
    P: Default + Send + Sync + 'static,
    S: CollectionSource<R> + Clone + Send + Sync + 'static,
{
    let handle = CollectionHandle {
        controller: RwSignal::new(controller),
        source: StoredValue::new(source),
    };
    handle.refresh();
    handle
}

impl<R, P, S> CollectionHandle<R, P, S>
where
    R: Record + Send + Sync + 'static,
    P: Default + Send + Sync + 'static,
    S: CollectionSource<R> + Clone + Send + Sync + 'static,
{
    /// Derived view; tracked
    pub fn view(&self) -> CollectionView<R> {
        self.controller.with(|c| c.view())
    }

    /// Point the handle at another source (e.g. new query filters)
    fn set_source(&self, source: S) {
        self.source.set_value(source);
    }

    pub fn refresh(&self) {
        let controller = self.controller;
        let source = self.source.get_value();
        controller.update(|c| c.begin_refresh());
        spawn_local(async move {
            let result = source.fetch_all().await;
            controller.try_update(|c| {
                let _ = c.finish_refresh(result);
            });
        });
    }

    pub fn set_filter(&self, query: String) {
        self.controller.update(|c| c.set_filter(query));
    }

    pub fn toggle_sort(&self, key: &str) {
        self.controller.update(|c| c.toggle_sort(key));
    }

    pub fn set_sort(&self, sort: SortSpec) {
        self.controller.update(|c| c.set_sort(sort));
    }

    /// Swap in a re-queried source and start over at page 1
    pub fn requery(&self, source: S) {
        self.set_source(source);
        self.controller.update(|c| c.reset_page());
        self.refresh();
    }

    pub fn goto(&self, page: usize) {
        self.controller.update(|c| c.goto(page));
    }

    pub fn dismiss_errors(&self) {
        self.controller.update(|c| c.dismiss_errors());
    }
}

impl<R, P, S> CollectionHandle<R, P, S>
where
    R: Record + Send + Sync + 'static,
    P: Default + Clone + Send + Sync + 'static,
    S: MutableSource<R, Payload = P> + Clone + Send + Sync + 'static,
{
    /// Submit the create form; refresh on success, keep input on failure
    pub fn create(&self) {
        let controller = self.controller;
        let source = self.source.get_value();
        let Some(payload) = controller.try_update(|c| {
            if c.form.is_submitting() {
                return None;
            }
            c.begin_create();
            Some(c.form.values.clone())
        }).flatten() else {
            return;
        };
        let handle = *self;
        spawn_local(async move {
            let result = source.create(&payload).await;
            let should_refresh = controller.try_update(|c| c.finish_create(result)).unwrap_or(false);
            if should_refresh {
                handle.refresh();
            }
        });
    }

    /// Delete after the synchronous `confirm` gate says yes. A failure leaves
    /// the rendered page alone and raises the error banner.
    pub fn delete(&self, id: R::Id, confirm: impl FnOnce(&R::Id) -> bool)
    where
        R::Id: 'static,
    {
        if !confirm(&id) {
            return;
        }
        let controller = self.controller;
        let source = self.source.get_value();
        let handle = *self;
        spawn_local(async move {
            let result = source.delete(&id).await;
            let should_refresh = controller.try_update(|c| c.finish_delete(&id, result)).unwrap_or(false);
            if should_refresh {
                handle.refresh();
            }
        });
    }
}

/// Browser yes/no dialog. Returns `false` when no window is available.
pub fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
