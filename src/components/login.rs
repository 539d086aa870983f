use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;
use leptos_router::use_navigate;
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::models::auth::{AuthForm, AuthOutcome, LoginRequest, CONNECTION_ERROR};

#[component]
pub fn Login(auth: AuthContext, api: ApiClient) -> impl IntoView {
    let navigate = use_navigate();
    let (user_name, set_user_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(None::<&'static str>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_loading.set(true);

        let request = LoginRequest {
            user_name: user_name.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.login(&request).await;
            set_loading.set(false);
            match result.map(|response| response.outcome(&request.user_name)) {
                Ok(AuthOutcome::Authenticated { user_name, first_name }) => {
                    auth.handle_login(user_name, first_name);
                    navigate("/", Default::default());
                }
                Ok(outcome) => set_error_message.set(outcome.error_message(AuthForm::Login)),
                Err(err) => {
                    error!("[LOGIN] request failed: {}", err);
                    set_error_message.set(Some(CONNECTION_ERROR));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <div class="auth-icon">"🚗"</div>
                    <h2>"Welcome Back"</h2>
                    <p>"Sign in to your account"</p>
                </div>

                {move || error_message.get().map(|message| view! { <div class="alert-error">{message}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label">"Username"</label>
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Enter your username"
                            required
                            prop:value=move || user_name.get()
                            on:input=move |ev| set_user_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Password"</label>
                        <input
                            type="password"
                            class="form-control"
                            placeholder="Enter your password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || loading.get()>
                        {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
