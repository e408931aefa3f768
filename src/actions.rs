use crate::data_object::{normalize_content, require_title, NewPostData, PostPatch};
use crate::err::{ActionError, Result};
use crate::models::{NewPost, Post};
use crate::schema::posts::dsl::{self, posts};
use crate::State;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use log::{debug, info};
use roa::{async_trait, Context};
use roa_diesel::preload::{AsyncPool, SqlQuery};
use std::sync::Arc;

/// A context extension running the post actions.
///
/// Each action is a single round trip to storage,
/// and every successful write marks the cached post list stale.
#[async_trait]
pub trait PostActions {
    /// All posts, newest first.
    async fn get_posts(&self) -> Result<Arc<Vec<Post>>>;

    /// The post with `id`, or `ActionError::NotFound`.
    async fn find_post(&self, id: i32) -> Result<Post>;

    /// Inserts an unpublished post and returns it.
    async fn create_post(&self, data: NewPostData) -> Result<Post>;

    /// Overwrites title and published flag of post `id`.
    async fn update_post(&self, id: i32, patch: PostPatch) -> Result;

    /// Deletes post `id`.
    async fn delete_post(&self, id: i32) -> Result;

    /// Deletes post `id` and returns what was deleted.
    async fn remove_post(&self, id: i32) -> Result<Post>;
}

#[async_trait]
impl PostActions for Context<State> {
    async fn get_posts(&self) -> Result<Arc<Vec<Post>>> {
        self.cache
            .get_or_load(move || async move {
                let rows: Vec<Post> = self
                    .load_data(posts.order((dsl::created_at.desc(), dsl::id.desc())))
                    .await?;
                debug!("loaded {} posts from storage", rows.len());
                Ok::<_, ActionError>(rows)
            })
            .await
    }

    async fn find_post(&self, id: i32) -> Result<Post> {
        self.first::<Post, _>(posts.find(id))
            .await?
            .ok_or(ActionError::NotFound(id))
    }

    async fn create_post(&self, data: NewPostData) -> Result<Post> {
        let new_post = NewPost {
            title: require_title(&data.title)?,
            content: normalize_content(data.content),
            published: false,
            created_at: Utc::now().naive_utc(),
        };
        let conn = self.get_conn().await?;
        // sqlite has no RETURNING, read the row back in the same transaction
        let post = self
            .exec
            .spawn_blocking(move || {
                conn.transaction::<Post, DieselError, _>(|| {
                    diesel::insert_into(posts).values(&new_post).execute(&*conn)?;
                    posts.order(dsl::id.desc()).first(&*conn)
                })
            })
            .await?;
        info!("post({}) created", post.id);
        self.cache.invalidate().await;
        Ok(post)
    }

    async fn update_post(&self, id: i32, patch: PostPatch) -> Result {
        let title = require_title(&patch.title)?;
        let affected = self
            .execute(
                diesel::update(posts.find(id))
                    .set((dsl::title.eq(title), dsl::published.eq(patch.published))),
            )
            .await?;
        if affected == 0 {
            return Err(ActionError::NotFound(id));
        }
        info!("post({}) updated", id);
        self.cache.invalidate().await;
        Ok(())
    }

    async fn delete_post(&self, id: i32) -> Result {
        let affected = self.execute(diesel::delete(posts.find(id))).await?;
        if affected == 0 {
            return Err(ActionError::NotFound(id));
        }
        info!("post({}) deleted", id);
        self.cache.invalidate().await;
        Ok(())
    }

    async fn remove_post(&self, id: i32) -> Result<Post> {
        let post = self.find_post(id).await?;
        self.delete_post(id).await?;
        Ok(post)
    }
}
