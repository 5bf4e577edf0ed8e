pub mod calendar;
pub mod time_frame;
pub mod time_source;
