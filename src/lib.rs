pub mod app;
mod commands;
pub mod domain;
pub mod error;
pub mod infra;

use app::ShellState;
use infra::init_db;
use std::path::PathBuf;
use tauri::Manager;

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.nickdu.blogpad")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let data_dir = app
                .handle()
                .path()
                .app_data_dir()
                .unwrap_or_else(|_| app_data_dir());
            let db_path = data_dir.join("blogpad.db");
            log::info!("DB path: {:?}", db_path);

            let pool = init_db(&db_path).map_err(|e| {
                log::error!("DB init failed: {}", e);
                e
            })?;
            app.manage(pool);
            app.manage(ShellState::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::shell::cmd_shell_view,
            commands::shell::cmd_shell_select_menu,
            commands::shell::cmd_shell_create_post,
            commands::shell::cmd_shell_select_post,
            commands::shell::cmd_shell_update_post,
            commands::shell::cmd_shell_delete_post,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
