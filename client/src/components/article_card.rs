//! Card renderers for feed items and related articles.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::format::published_date;

/// Chips shown when a feed item carries no categories.
const FALLBACK_CATEGORIES: [&str; 2] = ["Technology", "Design"];

/// Public feed card. Links out to the publisher.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let Article { title, image_url, categories, published_at, source_url, description, creator, .. } = article;
    let chips: Vec<String> = if categories.is_empty() {
        FALLBACK_CATEGORIES.iter().map(|c| (*c).to_owned()).collect()
    } else {
        categories
    };
    let byline = creator.map(|c| format!("By {c}"));

    view! {
        <article class="article-card">
            <a class="article-card__link" href=source_url target="_blank" rel="noopener noreferrer">
                <Thumbnail image_url=image_url alt=title.clone()/>
                <p class="article-card__date">{published_date(&published_at)}</p>
                <h2 class="article-card__title">{title}</h2>
                <p class="article-card__description">
                    {description.unwrap_or_else(|| "No description available.".to_owned())}
                </p>
                {byline.map(|b| view! { <p class="article-card__byline">{b}</p> })}
                <div class="article-card__chips">
                    {chips.into_iter().map(|c| view! { <span class="chip">{c}</span> }).collect::<Vec<_>>()}
                </div>
            </a>
        </article>
    }
}

/// Compact card under an article detail. Links to that article's detail page.
#[component]
pub fn RelatedArticleCard(article: Article) -> impl IntoView {
    let href = format!("/article/{}", article.id);
    let Article { title, image_url, categories, published_at, .. } = article;

    view! {
        <a class="related-card" href=href>
            <Thumbnail image_url=image_url alt=title.clone()/>
            <p class="related-card__date">{published_date(&published_at)}</p>
            <h3 class="related-card__title">{title}</h3>
            <div class="article-card__chips">
                {categories.into_iter().map(|c| view! { <span class="chip">{c}</span> }).collect::<Vec<_>>()}
            </div>
        </a>
    }
}

#[component]
fn Thumbnail(image_url: Option<String>, alt: String) -> impl IntoView {
    match image_url {
        Some(src) => view! {
            <div class="thumb">
                <img class="thumb__img" src=src alt=alt loading="lazy"/>
            </div>
        }
        .into_any(),
        None => view! { <div class="thumb thumb--empty">"No image"</div> }.into_any(),
    }
}
