pub mod hook;
pub mod lesson_select;
pub mod mastery;
pub mod play;
pub mod predict;
pub mod quiz;
pub mod review;
pub mod transfer;
