use leptos::*;
use crate::models::review::Sentiment;

/// Icon and colour for a backend sentiment label; unknown labels render neutral.
#[component]
pub fn SentimentBadge(#[prop(into)] label: String) -> impl IntoView {
    let sentiment = Sentiment::from_label(&label);

    view! {
        <span class=sentiment.badge_class()>
            {sentiment.icon()} " " {label}
        </span>
    }
}
