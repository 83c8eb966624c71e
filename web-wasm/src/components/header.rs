//! ヘッダーコンポーネント

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/search", "Search"),
    ("/about", "About"),
    ("/services", "Services"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Trademark Search"</h1>
            <nav class="nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}
