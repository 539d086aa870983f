/// Session state owned by the app shell and handed to every view as a prop.
use leptos::logging::log;
use leptos::*;
use crate::models::session::Session;
use crate::session::SessionStore;

/// `Copy` handle over the session signal, its persistent mirror and the
/// best-effort backend logout.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    restored: RwSignal<bool>,
    store: StoredValue<SessionStore>,
    notify_logout: Callback<()>,
}

impl AuthContext {
    pub fn new(store: SessionStore, notify_logout: Callback<()>) -> Self {
        Self {
            session: create_rw_signal(Session::default()),
            restored: create_rw_signal(false),
            store: store_value(store),
            notify_logout,
        }
    }

    /// Reads the persisted session. Runs once, on mount.
    pub fn restore(&self) {
        if let Some(session) = self.store.with_value(SessionStore::load) {
            log!("[AUTH] restored session for {}", session.username);
            self.session.set(session);
        }
        self.restored.set(true);
    }

    pub fn handle_login(&self, username: String, first_name: String) {
        self.store.with_value(|store| store.save(&username, &first_name));
        log!("[AUTH] {} logged in", username);
        self.session.set(Session::logged_in(username, first_name));
        self.restored.set(true);
    }

    pub fn handle_logout(&self) {
        self.session.set(Session::default());
        self.store.with_value(SessionStore::clear);
        self.notify_logout.call(());
    }

    /// False until [`restore`](Self::restore) ran; guards must not redirect before that.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|session| session.is_logged_in)
    }

    pub fn user_name(&self) -> String {
        self.session.with(|session| session.username.clone())
    }

    pub fn first_name(&self) -> String {
        self.session.with(|session| session.first_name.clone())
    }

    pub fn display_name(&self) -> String {
        self.session.with(|session| session.display_name().to_string())
    }

    pub fn session(&self) -> Signal<Session> {
        self.session.into()
    }
}
