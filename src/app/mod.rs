//! Application use cases: the post store and the presentation shell.

mod post;
mod shell;

pub use post::{
    post_create, post_delete, post_get, post_list, post_update, PostCreateReq, PostDto,
    PostUpdateReq,
};
pub use shell::{
    shell_select_menu, shell_select_post, shell_submit_create, shell_submit_delete,
    shell_submit_update, shell_view, CreateView, EditDeleteView, ListView, Notice, NoticeKind,
    PostOption, ScreenView, Session, ShellState, MSG_CREATED, MSG_DELETED, MSG_FIELDS_REQUIRED,
    MSG_UPDATED,
};
