//! Application Context
//!
//! Shared state provided via Leptos Context API: screen navigation,
//! the reload trigger, the toast channel, and the auth token capability.

use std::sync::{Arc, Mutex};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Active admin screen. Navigation is an in-app enum switch; edit screens
/// carry the record id they operate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    ManageUsers,
    MainCategories,
    SubCategories,
    ViewCourses,
    AddCourse,
    EditCourse(u32),
    ViewTemplates,
    AddTemplate,
    EditTemplate(u32),
    ViewPayments,
    CourseOrders,
    DefaultSettings,
    LogoManagement,
    ChangePassword,
    EditProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    seq: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// How long a toast stays up before auto-dismissing
const TOAST_MILLIS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the active screen's data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active screen's data - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Current toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            screen: screen.0,
            set_screen: screen.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Trigger a refetch on the active screen
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Show a toast; it dismisses itself unless a newer one replaced it
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let seq = self
            .toast
            .get_untracked()
            .map(|t| t.seq.wrapping_add(1))
            .unwrap_or(0);
        self.set_toast.set(Some(Toast {
            seq,
            message: message.into(),
            kind,
        }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            if toast.get_untracked().map(|t| t.seq) == Some(seq) {
                set_toast.set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}

const TOKEN_KEY: &str = "adminToken";

/// Injected credential provider for the bearer-authenticated endpoints.
/// The app wires it to `localStorage`; tests inject a fixed token.
#[derive(Clone)]
pub struct AuthTokens {
    get: Arc<dyn Fn() -> Option<String> + Send + Sync>,
    put: Arc<dyn Fn(Option<String>) + Send + Sync>,
}

impl AuthTokens {
    pub fn from_local_storage() -> Self {
        Self {
            get: Arc::new(|| {
                let storage = web_sys::window()?.local_storage().ok()??;
                storage.get_item(TOKEN_KEY).ok()?
            }),
            put: Arc::new(|token| {
                if let Some(storage) =
                    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
                {
                    let result = match token {
                        Some(token) => storage.set_item(TOKEN_KEY, &token),
                        None => storage.remove_item(TOKEN_KEY),
                    };
                    if result.is_err() {
                        web_sys::console::error_1(&"Failed to update stored token".into());
                    }
                }
            }),
        }
    }

    /// In-memory provider for tests and previews
    pub fn fixed(token: Option<String>) -> Self {
        let cell = Arc::new(Mutex::new(token));
        let get_cell = Arc::clone(&cell);
        Self {
            get: Arc::new(move || get_cell.lock().expect("token lock").clone()),
            put: Arc::new(move |token| *cell.lock().expect("token lock") = token),
        }
    }

    pub fn token(&self) -> Option<String> {
        (self.get)()
    }

    /// Persist a refreshed token handed back by the server
    pub fn store(&self, token: String) {
        (self.put)(Some(token));
    }

    pub fn clear(&self) {
        (self.put)(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_tokens_round_trip() {
        let tokens = AuthTokens::fixed(Some("abc".to_string()));
        assert_eq!(tokens.token().as_deref(), Some("abc"));

        tokens.store("def".to_string());
        assert_eq!(tokens.token().as_deref(), Some("def"));

        tokens.clear();
        assert_eq!(tokens.token(), None);
    }
}
