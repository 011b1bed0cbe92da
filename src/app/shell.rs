//! Presentation shell: screen routing, session-scoped form state, and the
//! view model returned to the webview after every interaction.
//!
//! Each operation mutates the session, performs at most one store call, and
//! finishes with a full re-render of the current screen from live reads.

use crate::app::post::{
    post_create, post_delete, post_get, post_list, post_update, PostCreateReq, PostDto,
    PostUpdateReq,
};
use crate::domain::Screen;
use crate::error::AppError;
use crate::infra::DbPool;
use serde::Serialize;
use std::sync::Mutex;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required!";
pub const MSG_CREATED: &str = "Post created successfully!";
pub const MSG_UPDATED: &str = "Post updated successfully!";
pub const MSG_DELETED: &str = "Post deleted successfully!";

/// Session state managed by the host, one per window.
pub struct ShellState(pub Mutex<Session>);

impl ShellState {
    pub fn new() -> Self {
        Self(Mutex::new(Session::default()))
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

/// The only state that survives across renders: current screen plus
/// in-progress form values. Post data itself is re-read on every render.
#[derive(Debug, Default)]
pub struct Session {
    pub screen: Screen,
    pub create_form: CreateForm,
    pub edit_form: EditForm,
    pub notice: Option<Notice>,
}

/// Create-screen fields. Deliberately not cleared after a successful
/// submit, matching the original UX.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub selected: Option<i64>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
        }
    }
}

/// Full render of one screen, tagged for the frontend router.
#[derive(Debug, Serialize)]
#[serde(tag = "screen", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenView {
    List(ListView),
    Create(CreateView),
    EditDelete(EditDeleteView),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub posts: Vec<PostDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateView {
    pub title: String,
    pub content: String,
    pub author: String,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDeleteView {
    pub options: Vec<PostOption>,
    pub selected: Option<i64>,
    pub title: String,
    pub content: String,
    pub notice: Option<Notice>,
}

/// Selector entry: label = title, value = id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOption {
    pub id: i64,
    pub title: String,
}

/// Re-render the current screen without changing any state.
pub fn shell_view(pool: &DbPool, session: &Session) -> Result<ScreenView, AppError> {
    render(pool, session)
}

/// Switch screens by sidebar menu label.
pub fn shell_select_menu(
    pool: &DbPool,
    session: &mut Session,
    choice: &str,
) -> Result<ScreenView, AppError> {
    let screen = Screen::from_menu_label(choice)
        .ok_or_else(|| AppError::Validation(format!("unknown menu choice: {choice}")))?;
    session.screen = screen;
    session.notice = None;
    render(pool, session)
}

/// Submit the create form. Empty fields produce an inline error notice and
/// never reach the store.
pub fn shell_submit_create(
    pool: &DbPool,
    session: &mut Session,
    title: String,
    content: String,
    author: String,
) -> Result<ScreenView, AppError> {
    session.screen = Screen::Create;
    session.create_form = CreateForm {
        title,
        content,
        author,
    };

    let form = &session.create_form;
    if form.title.is_empty() || form.content.is_empty() || form.author.is_empty() {
        session.notice = Some(Notice::error(MSG_FIELDS_REQUIRED));
    } else {
        post_create(
            pool,
            PostCreateReq {
                title: form.title.clone(),
                content: form.content.clone(),
                author: form.author.clone(),
            },
        )?;
        session.notice = Some(Notice::success(MSG_CREATED));
    }

    render(pool, session)
}

/// Pick a post in the edit/delete selector and prefill its fields. A stale
/// id (row gone since the options were rendered) just clears the selection.
pub fn shell_select_post(
    pool: &DbPool,
    session: &mut Session,
    id: i64,
) -> Result<ScreenView, AppError> {
    session.screen = Screen::EditDelete;
    session.notice = None;
    session.edit_form = match post_get(pool, id)? {
        Some(post) => EditForm {
            selected: Some(post.id),
            title: post.title,
            content: post.content,
        },
        None => EditForm::default(),
    };
    render(pool, session)
}

/// Update the selected post's title and content. Success is reported
/// unconditionally, even when the row no longer exists.
pub fn shell_submit_update(
    pool: &DbPool,
    session: &mut Session,
    title: String,
    content: String,
) -> Result<ScreenView, AppError> {
    session.screen = Screen::EditDelete;
    let id = session
        .edit_form
        .selected
        .ok_or_else(|| AppError::Validation("no post selected".into()))?;
    session.edit_form.title = title.clone();
    session.edit_form.content = content.clone();

    post_update(pool, PostUpdateReq { id, title, content })?;
    session.notice = Some(Notice::success(MSG_UPDATED));

    render(pool, session)
}

/// Delete the selected post. Success is reported unconditionally.
pub fn shell_submit_delete(pool: &DbPool, session: &mut Session) -> Result<ScreenView, AppError> {
    session.screen = Screen::EditDelete;
    let id = session
        .edit_form
        .selected
        .ok_or_else(|| AppError::Validation("no post selected".into()))?;

    post_delete(pool, id)?;
    session.edit_form = EditForm::default();
    session.notice = Some(Notice::success(MSG_DELETED));

    render(pool, session)
}

fn render(pool: &DbPool, session: &Session) -> Result<ScreenView, AppError> {
    match session.screen {
        Screen::List => Ok(ScreenView::List(ListView {
            posts: post_list(pool)?,
        })),
        Screen::Create => Ok(ScreenView::Create(CreateView {
            title: session.create_form.title.clone(),
            content: session.create_form.content.clone(),
            author: session.create_form.author.clone(),
            notice: session.notice.clone(),
        })),
        Screen::EditDelete => {
            let options = post_list(pool)?
                .into_iter()
                .map(|p| PostOption {
                    id: p.id,
                    title: p.title,
                })
                .collect();
            Ok(ScreenView::EditDelete(EditDeleteView {
                options,
                selected: session.edit_form.selected,
                title: session.edit_form.title.clone(),
                content: session.edit_form.content.clone(),
                notice: session.notice.clone(),
            }))
        }
    }
}
