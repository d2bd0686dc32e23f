//! Create-article form: thumbnail, title, category, content.
//!
//! There is no article backend. Upload waits [`SIMULATED_UPLOAD_DELAY`],
//! logs the [`DraftSubmission`](crate::state::draft::DraftSubmission) it
//! would have sent, and returns to the dashboard.

#[cfg(test)]
#[path = "article_create_test.rs"]
mod article_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::checking_session::CheckingSession;
use crate::components::sidebar::AdminSidebar;
use crate::state::draft::{ARTICLE_CATEGORIES, DASHBOARD_ROUTE, DraftState};
use crate::util::guard::{PageAccess, use_route_guard};
use crate::util::notify::alert;

pub const UPLOAD_SUCCESS_NOTICE: &str = "Article uploaded successfully! (Simulated)";

fn word_count_label(count: usize) -> String {
    if count == 1 { "1 Word".to_owned() } else { format!("{count} Words") }
}

#[component]
pub fn CreateArticlePage() -> impl IntoView {
    let guard = use_route_guard(PageAccess::AdminOnly);
    let sidebar_open = RwSignal::new(false);

    view! {
        <Show when=move || guard.with(|g| g.is_allowed()) fallback=|| view! { <CheckingSession/> }>
            <div class="admin-layout">
                <AdminSidebar open=sidebar_open/>
                <div class="admin-main">
                    <DraftForm/>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DraftForm() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(DraftState::default());

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(Some(url)) = draft.try_with_untracked(|d| d.thumbnail.as_ref().map(|t| t.preview_url.clone())) {
            revoke_preview(&url);
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime_type = file.type_();
            let previous = draft.with_untracked(|d| d.thumbnail.as_ref().map(|t| t.preview_url.clone()));
            let preview_url = if crate::state::draft::ACCEPTED_IMAGE_TYPES.contains(&mime_type.as_str()) {
                match web_sys::Url::create_object_url_with_blob(&file) {
                    Ok(url) => url,
                    Err(e) => {
                        log::warn!("thumbnail preview unavailable: {e:?}");
                        String::new()
                    }
                }
            } else {
                String::new()
            };
            if let Some(url) = previous {
                revoke_preview(&url);
            }
            if let Some(Err(e)) = draft.try_update(|d| d.select_thumbnail(&file.name(), &mime_type, preview_url)) {
                input.set_value("");
                alert(&e.to_string());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = {
        let navigate = navigate.clone();
        move |_| {
            let Some(Ok(submission)) = draft.try_update(DraftState::begin_submit) else {
                return;
            };
            log::info!(
                "submitting draft title={:?} category={:?} words={} thumbnail={:?}",
                submission.title,
                submission.category,
                draft.with_untracked(|d| d.word_count),
                submission.thumbnail
            );
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(crate::state::draft::SIMULATED_UPLOAD_DELAY).await;
                    alert(UPLOAD_SUCCESS_NOTICE);
                    if let Some(route) = draft.try_update(DraftState::finish_submit) {
                        navigate(route, NavigateOptions::default());
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &navigate;
            }
        }
    };

    let on_preview = move |_| alert(&draft.with(DraftState::preview_summary));
    let on_cancel = move |_| navigate(DASHBOARD_ROUTE, NavigateOptions::default());
    let submitting = move || draft.with(DraftState::is_submitting);

    view! {
        <header class="admin-header">
            <a class="admin-header__back" href=DASHBOARD_ROUTE aria-label="Back">"←"</a>
            <h1 class="admin-header__title">"Create Articles"</h1>
        </header>
        <section class="draft">
            <h2 class="draft__label">"Thumbnails"</h2>
            <label class="draft__thumbnail">
                {move || match draft.with(|d| d.thumbnail.as_ref().map(|t| t.preview_url.clone())) {
                    Some(url) if !url.is_empty() => view! { <img class="draft__preview" src=url alt="Thumbnail preview"/> }.into_any(),
                    Some(_) => view! { <span class="draft__hint">"Image selected"</span> }.into_any(),
                    None => view! {
                        <span class="draft__hint">"Click to select files"</span>
                        <span class="draft__hint draft__hint--small">"Support File Type : jpg or png"</span>
                    }
                    .into_any(),
                }}
                <input
                    class="draft__file"
                    type="file"
                    accept="image/jpeg,image/png"
                    disabled=submitting
                    on:change=on_file_change
                />
            </label>

            <label class="draft__label" for="draft-title">"Title"</label>
            <input
                id="draft-title"
                class="draft__input"
                type="text"
                placeholder="Input title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />

            <label class="draft__label" for="draft-category">"Category"</label>
            <select
                id="draft-category"
                class="draft__input"
                prop:value=move || draft.with(|d| d.category.clone())
                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            >
                <option value="">"Select category"</option>
                {ARTICLE_CATEGORIES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <textarea
                class="draft__content"
                placeholder="Type a content..."
                prop:value=move || draft.with(|d| d.content.clone())
                on:input=move |ev| draft.update(|d| d.set_content(event_target_value(&ev)))
            ></textarea>
            <p class="draft__words">{move || word_count_label(draft.with(|d| d.word_count))}</p>

            <div class="draft__actions">
                <button class="btn btn--ghost" type="button" disabled=submitting on:click=on_cancel>
                    "Cancel"
                </button>
                <button class="btn btn--ghost" type="button" disabled=submitting on:click=on_preview>
                    "Preview"
                </button>
                <button class="btn" type="button" disabled=submitting on:click=on_upload>
                    {move || if submitting() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn revoke_preview(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::debug!("object url already released: {e:?}");
    }
}
