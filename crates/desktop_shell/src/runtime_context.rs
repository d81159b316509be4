//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the reducer container, the pointer session, the runtime effect queue, and the
//! weather window contents. UI composition stays in [`crate::components`].

use desktop_core::{
    reduce_desktop, DesktopAction, DesktopState, PointerSessionManager, RuntimeEffect,
    ShellCatalog,
};
use desktop_widgets::WeatherView;
use leptos::*;

use crate::{effect_executor, host::DesktopHostContext};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host helpers for executing runtime effects and querying browser geometry.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// The single drag/resize session shared by every window and icon.
    pub pointer: RwSignal<PointerSessionManager>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// What the weather window currently shows.
    pub weather: RwSignal<WeatherView>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Queues an effect that did not come from the reducer (e.g. the weather refresh button).
    pub fn enqueue_effect(&self, effect: RuntimeEffect) {
        self.effects.update(|queue| queue.push(effect));
    }
}

fn load_catalog() -> Option<ShellCatalog> {
    match ShellCatalog::builtin() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            logging::warn!("shell catalog rejected, booting an empty desktop: {err}");
            None
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens the boot window.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = load_catalog();
    let initial = catalog
        .as_ref()
        .map(ShellCatalog::initial_state)
        .unwrap_or_default();

    let host = store_value(DesktopHostContext::default());
    let state = create_rw_signal(initial);
    let pointer = create_rw_signal(PointerSessionManager::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let weather = create_rw_signal(WeatherView::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut session = pointer.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_session = session.clone();

        match reduce_desktop(&mut desktop, &mut session, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if session != previous_session {
                    pointer.set(session);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        pointer,
        effects,
        weather,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    if let Some(window_id) = catalog.and_then(|catalog| catalog.boot_window) {
        runtime.dispatch_action(DesktopAction::OpenWindow { window_id });
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
