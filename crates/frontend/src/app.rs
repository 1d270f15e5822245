use crate::domain::a001_location::SelectionState;
use crate::layout::ExplorerPage;
use crate::shared::config::app_config;
use crate::shared::notify::{NotificationHost, NotificationService};
use crate::system::credential::CredentialProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notices are shared by the key panel and the map view.
    provide_context(NotificationService::new(app_config().ui.notice_ms));

    // One selection for the list and the map.
    provide_context(SelectionState::new());

    view! {
        <CredentialProvider>
            <ExplorerPage />
            <NotificationHost />
        </CredentialProvider>
    }
}
