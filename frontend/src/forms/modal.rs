use leptos::*;
use std::future::Future;

use super::{
    preview::{ImagePreview, Preview},
    validation::FieldErrors,
};
use crate::{
    api::{ApiError, Attachment},
    state::notify::Notifier,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

/// Create/edit state for one entity form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState<F> {
    pub mode: ModalMode,
    pub form: F,
    pub errors: FieldErrors,
    pub fetching: bool,
    pub submitting: bool,
    reading_files: u32,
    fetch_seq: u64,
}

impl<F: Default> ModalState<F> {
    pub fn is_open(&self) -> bool {
        self.mode != ModalMode::Closed
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            ModalMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        self.reset(ModalMode::Create);
    }

    /// Opens the edit form and returns the ticket its entity fetch must present.
    pub fn open_edit(&mut self, id: impl Into<String>) -> u64 {
        self.reset(ModalMode::Edit(id.into()));
        self.fetching = true;
        self.fetch_seq
    }

    /// Populates the form unless the modal was closed or reopened since the fetch started.
    pub fn apply_fetched(&mut self, ticket: u64, form: F) -> bool {
        if ticket != self.fetch_seq || self.editing_id().is_none() {
            return false;
        }
        self.form = form;
        self.fetching = false;
        true
    }

    /// True while no close or reopen has happened since `ticket` was issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.fetch_seq && self.is_open()
    }

    pub fn close(&mut self) {
        self.reset(ModalMode::Closed);
    }

    /// Marks a picked file as being read; submit waits until it lands.
    pub fn begin_file_read(&mut self) -> u64 {
        self.reading_files += 1;
        self.fetch_seq
    }

    /// Stores a finished read unless the form it was picked for is gone.
    pub fn finish_file_read(&mut self, ticket: u64, store: impl FnOnce(&mut F)) -> bool {
        if ticket != self.fetch_seq {
            return false;
        }
        self.reading_files = self.reading_files.saturating_sub(1);
        store(&mut self.form);
        true
    }

    pub fn is_reading_files(&self) -> bool {
        self.reading_files > 0
    }

    /// Runs `validate` synchronously; on failure the errors are shown and no submit happens.
    pub fn begin_submit(&mut self, validate: impl FnOnce(&F, &ModalMode) -> Result<(), FieldErrors>) -> bool {
        if self.submitting || self.fetching || self.is_reading_files() || !self.is_open() {
            return false;
        }
        match validate(&self.form, &self.mode) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn reset(&mut self, mode: ModalMode) {
        self.fetch_seq = self.fetch_seq.wrapping_add(1);
        self.mode = mode;
        self.form = F::default();
        self.errors = FieldErrors::default();
        self.fetching = false;
        self.submitting = false;
        self.reading_files = 0;
    }
}

/// Reactive wrapper that also owns the image preview of the open form.
pub struct FormModal<F: 'static> {
    pub state: RwSignal<ModalState<F>>,
    pub preview_src: RwSignal<Option<String>>,
    preview: StoredValue<ImagePreview>,
}

impl<F: 'static> Clone for FormModal<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for FormModal<F> {}

impl<F: Clone + Default + 'static> FormModal<F> {
    pub fn new() -> Self {
        let modal = Self {
            state: create_rw_signal(ModalState::default()),
            preview_src: create_rw_signal(None),
            preview: store_value(ImagePreview::browser()),
        };
        let preview = modal.preview;
        on_cleanup(move || {
            preview.try_update_value(|p| p.clear());
        });
        modal
    }

    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_open()))
    }

    pub fn errors(&self) -> Signal<FieldErrors> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors.clone()))
    }

    pub fn open_create(&self) {
        self.clear_preview();
        self.state.update(|s| s.open_create());
    }

    /// Opens for edit and loads the entity; a failed load reports through `notifier` and closes.
    pub fn open_edit<Fut>(&self, id: String, fetch: impl FnOnce(String) -> Fut + 'static, notifier: Notifier)
    where
        Fut: Future<Output = Result<(F, Option<Preview>), ApiError>> + 'static,
    {
        self.clear_preview();
        let ticket = self
            .state
            .try_update(|s| s.open_edit(id.clone()))
            .unwrap_or_default();
        let modal = *self;
        spawn_local(async move {
            match fetch(id).await {
                Ok((form, image)) => {
                    let applied = modal
                        .state
                        .try_update(|s| s.apply_fetched(ticket, form))
                        .unwrap_or(false);
                    if applied {
                        modal.show_preview(image);
                    }
                }
                Err(err) => {
                    let current = modal
                        .state
                        .try_with_untracked(|s| s.is_current(ticket))
                        .unwrap_or(false);
                    if current {
                        notifier.error(err.error);
                        modal.close();
                    } else {
                        log::debug!("Dropped failed fetch for a modal that was closed: {}", err);
                    }
                }
            }
        });
    }

    pub fn close(&self) {
        self.clear_preview();
        let _ = self.state.try_update(|s| s.close());
    }

    pub fn update_form(&self, f: impl FnOnce(&mut F)) {
        self.state.update(|s| f(&mut s.form));
    }

    pub fn show_local_image(&self, object_url: String) {
        self.preview.update_value(|p| p.show_local(object_url));
        self.sync_preview();
    }

    /// Handles a file input change: previews the image and stores its bytes through `store`.
    pub fn pick_file(&self, ev: &ev::Event, with_preview: bool, store: impl Fn(&mut F, Option<Attachment>) + 'static) {
        let Some(file) = super::files::first_file(ev) else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        if with_preview {
            if let Some(url) = super::preview::create_object_url(&file) {
                self.show_local_image(url);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = with_preview;
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_file_read()) else {
            return;
        };
        spawn_local(async move {
            let attachment = match super::files::read_attachment(&file).await {
                Ok(attachment) => Some(attachment),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            };
            let stored = state
                .try_update(|s| {
                    s.finish_file_read(ticket, |form| {
                        if attachment.is_some() {
                            store(form, attachment);
                        }
                    })
                })
                .unwrap_or(false);
            if !stored {
                log::debug!("Dropped file read for a form that was reset");
            }
        });
    }

    fn show_preview(&self, image: Option<Preview>) {
        self.preview.update_value(|p| p.show_remote(image));
        self.sync_preview();
    }

    fn clear_preview(&self) {
        if self.preview.try_update_value(|p| p.clear()).is_some() {
            self.sync_preview();
        }
    }

    fn sync_preview(&self) {
        if let Some(src) = self.preview.try_with_value(|p| p.src()) {
            let _ = self.preview_src.try_set(src);
        }
    }
}

/// Read-only record shown in a detail modal; late fetches for a closed or replaced view are dropped.
pub struct DetailModal<T: 'static> {
    pub record: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    seq: StoredValue<u64>,
}

impl<T: 'static> Clone for DetailModal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DetailModal<T> {}

impl<T: Clone + 'static> DetailModal<T> {
    pub fn new() -> Self {
        Self {
            record: create_rw_signal(None),
            loading: create_rw_signal(false),
            seq: store_value(0),
        }
    }

    pub fn is_open(&self) -> Signal<bool> {
        let record = self.record;
        let loading = self.loading;
        Signal::derive(move || loading.get() || record.with(Option::is_some))
    }

    pub fn show(&self, record: T) {
        self.bump();
        self.loading.set(false);
        self.record.set(Some(record));
    }

    pub fn open<Fut>(&self, fetch: Fut, notifier: Notifier)
    where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.bump();
        self.record.set(None);
        self.loading.set(true);
        let modal = *self;
        spawn_local(async move {
            let result = fetch.await;
            if modal.seq.try_get_value() != Some(ticket) {
                return;
            }
            let _ = modal.loading.try_set(false);
            match result {
                Ok(record) => {
                    let _ = modal.record.try_set(Some(record));
                }
                Err(err) => notifier.error(err.error),
            }
        });
    }

    pub fn close(&self) {
        self.bump();
        self.loading.set(false);
        self.record.set(None);
    }

    fn bump(&self) -> u64 {
        self.seq.update_value(|seq| *seq = seq.wrapping_add(1));
        self.seq.get_value()
    }
}

impl<T: Clone + 'static> Default for DetailModal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone + Default + 'static> Default for FormModal<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameForm {
        name: String,
    }

    fn require_name(form: &NameForm, _mode: &ModalMode) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if form.name.is_empty() {
            errors.insert("name", "Name is required");
        }
        errors.into_result()
    }

    #[test]
    fn edit_fetch_populates_only_current_modal() {
        let mut state = ModalState::<NameForm>::default();
        let stale = state.open_edit("h1");
        state.close();
        let current = state.open_edit("h2");

        assert!(!state.apply_fetched(stale, NameForm { name: "old".into() }));
        assert!(state.fetching);
        assert!(state.apply_fetched(current, NameForm { name: "Oak".into() }));
        assert_eq!(state.form.name, "Oak");
        assert!(!state.fetching);
        assert_eq!(state.editing_id(), Some("h2"));
    }

    #[test]
    fn fetch_after_close_is_ignored() {
        let mut state = ModalState::<NameForm>::default();
        let ticket = state.open_edit("h1");
        state.close();
        assert!(!state.apply_fetched(ticket, NameForm { name: "late".into() }));
        assert!(!state.is_open());
        assert_eq!(state.form, NameForm::default());
    }

    #[test]
    fn invalid_form_blocks_submit_with_field_errors() {
        let mut state = ModalState::<NameForm>::default();
        state.open_create();
        assert!(!state.begin_submit(require_name));
        assert_eq!(state.errors.get("name"), Some("Name is required"));
        assert!(!state.submitting);

        state.form.name = "Oak House".into();
        assert!(state.begin_submit(require_name));
        assert!(state.errors.is_empty());
        assert!(!state.begin_submit(require_name));
        state.finish_submit();
        assert!(!state.submitting);
    }

    #[test]
    fn detail_modal_show_and_close() {
        crate::test_support::ssr::with_runtime(|| {
            let modal = DetailModal::<NameForm>::new();
            assert!(!modal.is_open().get());
            modal.show(NameForm { name: "row".into() });
            assert!(modal.is_open().get());
            modal.close();
            assert!(modal.record.get().is_none());
            assert!(!modal.is_open().get());
        });
    }

    #[test]
    fn submit_waits_for_picked_file() {
        let mut state = ModalState::<NameForm>::default();
        state.open_create();
        state.form.name = "Oak House".into();
        let ticket = state.begin_file_read();
        assert!(!state.begin_submit(require_name));

        assert!(state.finish_file_read(ticket, |f| f.name.push_str(" (logo)")));
        assert!(!state.is_reading_files());
        assert!(state.begin_submit(require_name));
        assert_eq!(state.form.name, "Oak House (logo)");
    }

    #[test]
    fn file_read_for_closed_form_is_dropped() {
        let mut state = ModalState::<NameForm>::default();
        state.open_edit("h1");
        let ticket = state.begin_file_read();
        state.close();
        state.open_create();

        assert!(!state.finish_file_read(ticket, |f| f.name = "stale".into()));
        assert_eq!(state.form, NameForm::default());
        assert!(!state.is_reading_files());
    }

    #[test]
    fn ticket_stops_being_current_after_reopen() {
        let mut state = ModalState::<NameForm>::default();
        let ticket = state.open_edit("h1");
        assert!(state.is_current(ticket));
        state.close();
        assert!(!state.is_current(ticket));
        state.open_create();
        assert!(!state.is_current(ticket));
    }

    #[test]
    fn submit_is_refused_while_entity_loads() {
        let mut state = ModalState::<NameForm>::default();
        state.open_edit("h1");
        assert!(!state.begin_submit(|_, _| Ok(())));
    }
}
