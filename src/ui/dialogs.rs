use crate::types::notice::{Notice, NoticeLevel};

/// Shows `notice` in a native modal dialog and waits for it to be dismissed.
pub fn show_notice(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Error => rfd::MessageLevel::Error,
        NoticeLevel::Info => rfd::MessageLevel::Info,
    };
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(&notice.title)
        .set_description(&notice.message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
