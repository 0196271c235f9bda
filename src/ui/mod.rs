pub mod app;
pub mod dialogs;
pub mod sound_list;
