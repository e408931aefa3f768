//! Json endpoints over the same post actions.
//!
//! Validation failures answer 422, unknown ids 404;
//! storage failures keep their status and hide their message.

use crate::actions::PostActions;
use crate::data_object::{NewPostData, PostPatch};
use crate::err::ActionError;
use crate::State;
use roa::http::StatusCode;
use roa::preload::*;
use roa::{Context, Result};

pub async fn list_posts(ctx: &mut Context<State>) -> Result {
    let posts = ctx.get_posts().await.map_err(ActionError::into_status)?;
    ctx.write_json(&*posts)
}

pub async fn create_post(ctx: &mut Context<State>) -> Result {
    let data: NewPostData = ctx.read_json().await?;
    let post = ctx
        .create_post(data)
        .await
        .map_err(ActionError::into_status)?;
    ctx.resp.status = StatusCode::CREATED;
    ctx.write_json(&post)
}

pub async fn update_post(ctx: &mut Context<State>) -> Result {
    let id: i32 = ctx.must_param("id")?.parse()?;
    let patch: PostPatch = ctx.read_json().await?;
    ctx.update_post(id, patch)
        .await
        .map_err(ActionError::into_status)?;
    let post = ctx.find_post(id).await.map_err(ActionError::into_status)?;
    ctx.write_json(&post)
}

pub async fn delete_post(ctx: &mut Context<State>) -> Result {
    let id: i32 = ctx.must_param("id")?.parse()?;
    let post = ctx.remove_post(id).await.map_err(ActionError::into_status)?;
    ctx.write_json(&post)
}
