use crate::actions::PostActions;
use crate::api;
use crate::data_object::{NewPostData, PostPatch};
use crate::err::ActionError;
use crate::page_state::{page_link, EditSet, Level, Notice};
use crate::view::IndexPage;
use crate::State;
use askama::Template;
use lazy_static::lazy_static;
use log::error;
use roa::http::{header, HeaderValue, StatusCode};
use roa::preload::*;
use roa::router::{get, post, put, Router};
use roa::{Context, Result};

lazy_static! {
    static ref TEXT_HTML: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");
}

/// All routes: the list page, its form actions and the json api.
pub fn post_router() -> Router<State> {
    Router::new()
        .on("/", get(list_page))
        .on("/posts", post(create_post))
        .on("/posts/:id", post(update_post))
        .on("/posts/:id/delete", post(delete_post))
        .on("/api/posts", get(api::list_posts).post(api::create_post))
        .on(
            "/api/posts/:id",
            put(api::update_post).delete(api::delete_post),
        )
}

fn editing(ctx: &Context<State>) -> EditSet {
    ctx.query("editing")
        .map(|param| EditSet::parse(param.as_str()))
        .unwrap_or_default()
}

fn see_other(ctx: &mut Context<State>, notice: &Notice, editing: &EditSet) -> Result {
    let location = page_link(Some(notice), editing);
    ctx.resp.status = StatusCode::SEE_OTHER;
    ctx.resp
        .headers
        .insert(header::LOCATION, HeaderValue::from_str(&location)?);
    Ok(())
}

async fn list_page(ctx: &mut Context<State>) -> Result {
    let notice = ctx.query("notice").map(|message| Notice {
        level: Level::from_param(ctx.query("level").as_deref().map(String::as_str)),
        message: message.as_str().to_string(),
    });
    let editing = editing(ctx);
    let posts = ctx.get_posts().await.map_err(ActionError::into_status)?;
    let html = IndexPage::new(notice.as_ref(), &posts, &editing).render()?;
    ctx.resp.write(html);
    ctx.resp.headers.insert(header::CONTENT_TYPE, TEXT_HTML.clone());
    Ok(())
}

async fn create_post(ctx: &mut Context<State>) -> Result {
    let editing = editing(ctx);
    let data: NewPostData = ctx.read_form().await?;
    let notice = match ctx.create_post(data).await {
        Ok(_) => Notice::success("Post successfully created!"),
        Err(err) => {
            error!("failed to create post: {}", err);
            Notice::error(format!("Creation failed: {}", err))
        }
    };
    see_other(ctx, &notice, &editing)
}

async fn update_post(ctx: &mut Context<State>) -> Result {
    let id: i32 = ctx.must_param("id")?.parse()?;
    let editing = editing(ctx);
    let patch: PostPatch = ctx.read_form().await?;
    let title = patch.title.trim().to_string();
    match ctx.update_post(id, patch).await {
        Ok(()) => see_other(
            ctx,
            &Notice::success(format!("Post \"{}\" updated.", title)),
            &editing.without(id),
        ),
        Err(err) => {
            error!("failed to update post({}): {}", id, err);
            // stays in edit mode
            see_other(
                ctx,
                &Notice::error(format!("Failed to update post: {}", err)),
                &editing,
            )
        }
    }
}

async fn delete_post(ctx: &mut Context<State>) -> Result {
    let id: i32 = ctx.must_param("id")?.parse()?;
    let editing = editing(ctx).without(id);
    let notice = match ctx.remove_post(id).await {
        Ok(removed) => Notice::success(format!("Post \"{}\" deleted.", removed.title)),
        Err(err) => {
            error!("failed to delete post({}): {}", id, err);
            Notice::error(format!("Failed to delete post: {}", err))
        }
    };
    see_other(ctx, &notice, &editing)
}
