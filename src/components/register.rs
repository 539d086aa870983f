use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::models::auth::{AuthForm, AuthOutcome, RegisterRequest, CONNECTION_ERROR};

#[component]
pub fn Register(auth: AuthContext, api: ApiClient) -> impl IntoView {
    let navigate = use_navigate();
    let form = create_rw_signal(RegisterRequest::default());
    let (error_message, set_error_message) = create_signal(None::<&'static str>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_loading.set(true);

        let request = form.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.register(&request).await;
            set_loading.set(false);
            match result.map(|response| response.outcome(&request.user_name)) {
                Ok(AuthOutcome::Authenticated { user_name, first_name }) => {
                    log!("[REGISTER] account created for {}", user_name);
                    auth.handle_login(user_name, first_name);
                    navigate("/", Default::default());
                }
                // Duplicate usernames and other refusals stay on the page
                Ok(outcome) => set_error_message.set(outcome.error_message(AuthForm::Register)),
                Err(err) => {
                    error!("[REGISTER] request failed: {}", err);
                    set_error_message.set(Some(CONNECTION_ERROR));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card wide">
                <div class="auth-heading">
                    <div class="auth-icon">"🚗"</div>
                    <h2>"Create Account"</h2>
                    <p>"Join the Best Cars community"</p>
                </div>

                {move || error_message.get().map(|message| view! { <div class="alert-error">{message}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label">"Username *"</label>
                        <input
                            type="text"
                            name="userName"
                            class="form-control"
                            placeholder="Choose a username"
                            required
                            prop:value=move || form.with(|f| f.user_name.clone())
                            on:input=move |ev| form.update(|f| f.user_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"First Name *"</label>
                        <input
                            type="text"
                            name="firstName"
                            class="form-control"
                            placeholder="Enter your first name"
                            required
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Last Name *"</label>
                        <input
                            type="text"
                            name="lastName"
                            class="form-control"
                            placeholder="Enter your last name"
                            required
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Email Address *"</label>
                        <input
                            type="email"
                            name="email"
                            class="form-control"
                            placeholder="Enter your email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Password *"</label>
                        <input
                            type="password"
                            name="password"
                            class="form-control"
                            placeholder="Create a secure password"
                            required
                            minlength="6"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
