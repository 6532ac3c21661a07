//! Export operations
//!
//! Handles:
//! - Switching the export format (and remembering it)
//! - Serializing the current data and saving it through a native dialog

use crate::app::{BANNER_SECS, BannerSeverity, Message, State};
use iced::Task;
use netsketch::core::export::{self, ExportFormat};

pub(crate) fn handle_export_format_changed(
    state: &mut State,
    format: ExportFormat,
) -> Task<Message> {
    if state.export_format == format {
        return Task::none();
    }
    state.export_format = format;
    state.update_cached_preview();
    state.save_config()
}

/// Serializes the current data and asks where to save it.
///
/// The dialog task receives the finished text and never touches the store.
pub(crate) fn handle_export_clicked(state: &mut State) -> Task<Message> {
    let file = match export::prepare(
        state.store.segments(),
        state.store.rules(),
        state.export_format,
        chrono::Utc::now(),
    ) {
        Ok(file) => file,
        Err(e) => {
            state.push_banner(e.user_message(), BannerSeverity::Error, BANNER_SECS);
            return Task::none();
        }
    };

    let format = file.format;
    Task::perform(
        async move {
            use rfd::AsyncFileDialog;
            let handle = AsyncFileDialog::new()
                .set_file_name(&file.file_name)
                .add_filter(format.filter_name(), &[format.extension()])
                .save_file()
                .await;

            let Some(handle) = handle else {
                return Ok(None);
            };
            tokio::fs::write(handle.path(), file.contents)
                .await
                .map(|()| Some(handle.path().display().to_string()))
                .map_err(|e| format!("Failed to write file: {e}"))
        },
        move |result| Message::ExportResult(format, result),
    )
}

/// Handles export result; a cancelled dialog is silent
pub(crate) fn handle_export_result(
    state: &mut State,
    format: ExportFormat,
    result: Result<Option<String>, String>,
) {
    match result {
        Ok(Some(path)) => {
            tracing::info!("Exported configuration to {path}");
            state.push_banner(
                format!("Configuration exported as {format}"),
                BannerSeverity::Success,
                BANNER_SECS,
            );
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!("Export failed: {e}");
            let msg = netsketch::utils::truncate_string(&e, 60);
            state.push_banner(msg, BannerSeverity::Error, BANNER_SECS);
        }
    }
}
