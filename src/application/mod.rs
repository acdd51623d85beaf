pub mod relative_time;
pub mod todo_list;
pub mod view;
