mod controls;
mod help;
mod status_bar;
mod track;

pub use controls::ControlsWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;
