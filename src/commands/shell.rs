use crate::app::{
    shell_select_menu, shell_select_post, shell_submit_create, shell_submit_delete,
    shell_submit_update, shell_view, ScreenView, ShellState,
};
use crate::error::AppError;
use crate::infra::DbPool;
use serde::Deserialize;
use tauri::State;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSelectReq {
    pub choice: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmitReq {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSelectReq {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSubmitReq {
    pub title: String,
    pub content: String,
}

fn lock_session(shell: &ShellState) -> std::sync::MutexGuard<'_, crate::app::Session> {
    shell.0.lock().expect("session lock")
}

#[tauri::command]
pub fn cmd_shell_view(
    pool: State<DbPool>,
    shell: State<ShellState>,
) -> Result<ScreenView, AppError> {
    let session = lock_session(&shell);
    shell_view(&pool, &session)
}

#[tauri::command]
pub fn cmd_shell_select_menu(
    pool: State<DbPool>,
    shell: State<ShellState>,
    req: MenuSelectReq,
) -> Result<ScreenView, AppError> {
    let mut session = lock_session(&shell);
    shell_select_menu(&pool, &mut session, &req.choice)
}

#[tauri::command]
pub fn cmd_shell_create_post(
    pool: State<DbPool>,
    shell: State<ShellState>,
    req: CreateSubmitReq,
) -> Result<ScreenView, AppError> {
    let mut session = lock_session(&shell);
    shell_submit_create(&pool, &mut session, req.title, req.content, req.author)
}

#[tauri::command]
pub fn cmd_shell_select_post(
    pool: State<DbPool>,
    shell: State<ShellState>,
    req: PostSelectReq,
) -> Result<ScreenView, AppError> {
    let mut session = lock_session(&shell);
    shell_select_post(&pool, &mut session, req.id)
}

#[tauri::command]
pub fn cmd_shell_update_post(
    pool: State<DbPool>,
    shell: State<ShellState>,
    req: EditSubmitReq,
) -> Result<ScreenView, AppError> {
    let mut session = lock_session(&shell);
    shell_submit_update(&pool, &mut session, req.title, req.content)
}

#[tauri::command]
pub fn cmd_shell_delete_post(
    pool: State<DbPool>,
    shell: State<ShellState>,
) -> Result<ScreenView, AppError> {
    let mut session = lock_session(&shell);
    shell_submit_delete(&pool, &mut session)
}
