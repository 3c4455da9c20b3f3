pub mod new_user;
pub mod showcase;
