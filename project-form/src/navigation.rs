//! Browser navigation, mount-time query parsing and the leave-page guard

use async_trait::async_trait;
use dioxus::prelude::{ReadableExt, Signal};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::project_form::machine::ProjectFormState;

/// Navigation and scheduling primitives the form state machine depends on
#[async_trait(?Send)]
pub trait Navigator {
    /// Navigate the app to `path`
    fn goto(&self, path: &str);

    /// Yield once to the scheduler so derived UI state catches up
    async fn tick(&self);
}

/// [`Navigator`] for the real browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[async_trait(?Send)]
impl Navigator for BrowserNavigator {
    /// Full document navigation. The destination page loads its own project list.
    fn goto(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            dioxus_logger::tracing::error!("No window available to navigate to {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            dioxus_logger::tracing::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }

    async fn tick(&self) {
        TimeoutFuture::new(0).await;
    }
}

/// `?import=true` selects import mode at mount
pub fn import_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .any(|(key, value)| key == "import" && value == "true")
}

/// Read the import flag from the current page URL
pub fn import_requested_from_location() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| import_requested(&search))
        .unwrap_or(false)
}

/// Registered `beforeunload` listener; removed again when dropped
pub struct UnloadGuard {
    callback: Closure<dyn FnMut(web_sys::BeforeUnloadEvent)>,
}

impl Drop for UnloadGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "beforeunload",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Warn before the page is unloaded while the form has unsaved changes
pub fn install_unload_guard(state: Signal<ProjectFormState>) -> Option<UnloadGuard> {
    let window = web_sys::window()?;

    let callback = Closure::wrap(Box::new(move |event: web_sys::BeforeUnloadEvent| {
        let warn = state
            .try_peek()
            .map(|s| s.warn_before_unload())
            .unwrap_or(false);
        if warn {
            event.prevent_default();
            event.set_return_value("You have unsaved changes.");
        }
    }) as Box<dyn FnMut(web_sys::BeforeUnloadEvent)>);

    if let Err(e) =
        window.add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref())
    {
        dioxus_logger::tracing::warn!("Failed to install unload guard: {:?}", e);
        return None;
    }

    Some(UnloadGuard { callback })
}
