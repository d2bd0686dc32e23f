//! Admin article table.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::format::published_datetime;

#[component]
pub fn ArticleTable(articles: Vec<Article>) -> impl IntoView {
    view! {
        <table class="article-table">
            <thead>
                <tr>
                    <th>"Thumbnails"</th>
                    <th>"Title"</th>
                    <th>"Category"</th>
                    <th>"Created at"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                {articles.into_iter().map(|article| view! { <ArticleRow article/> }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn ArticleRow(article: Article) -> impl IntoView {
    let detail_href = format!("/article/{}", article.id);
    let category = article.primary_category().to_owned();
    let Article { title, image_url, published_at, source_url, .. } = article;

    view! {
        <tr class="article-table__row">
            <td>
                {match image_url {
                    Some(src) => view! { <img class="article-table__thumb" src=src alt="Thumbnail"/> }.into_any(),
                    None => view! { <span class="article-table__thumb article-table__thumb--empty">"No Img"</span> }.into_any(),
                }}
            </td>
            <td class="article-table__title">{title}</td>
            <td>{category}</td>
            <td>{published_datetime(&published_at)}</td>
            <td class="article-table__actions">
                <a href=detail_href>"Details"</a>
                <a href=source_url target="_blank" rel="noopener noreferrer">"Preview"</a>
            </td>
        </tr>
    }
}
