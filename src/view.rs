use crate::models::Post;
use crate::page_state::{action_link, page_link, EditSet, Notice};
use askama::Template;

/// The list page: creation form on top, one item per post below.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    has_notice: bool,
    notice_level: &'static str,
    notice_message: &'a str,
    create_action: String,
    items: Vec<PostItem<'a>>,
}

// one post, in display or edit mode
struct PostItem<'a> {
    id: i32,
    title: &'a str,
    content: &'a str,
    has_content: bool,
    published: bool,
    editing: bool,
    edit_href: String,
    cancel_href: String,
    update_action: String,
    delete_action: String,
}

impl<'a> PostItem<'a> {
    fn new(post: &'a Post, editing: &EditSet) -> Self {
        let content = post.content.as_deref().unwrap_or_default();
        Self {
            id: post.id,
            title: &post.title,
            content,
            has_content: !content.is_empty(),
            published: post.published,
            editing: editing.contains(post.id),
            edit_href: page_link(None, &editing.with(post.id)),
            cancel_href: page_link(None, &editing.without(post.id)),
            update_action: action_link(&format!("/posts/{}", post.id), editing),
            delete_action: action_link(&format!("/posts/{}/delete", post.id), editing),
        }
    }
}

impl<'a> IndexPage<'a> {
    pub fn new(notice: Option<&'a Notice>, posts: &'a [Post], editing: &EditSet) -> Self {
        Self {
            has_notice: notice.is_some(),
            notice_level: notice.map(|notice| notice.level.as_str()).unwrap_or(""),
            notice_message: notice.map(|notice| notice.message.as_str()).unwrap_or(""),
            create_action: action_link("/posts", editing),
            items: posts.iter().map(|post| PostItem::new(post, editing)).collect(),
        }
    }
}
