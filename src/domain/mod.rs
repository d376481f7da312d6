pub mod api;
pub mod response;
pub mod state;
pub mod task;
pub mod todolist;
