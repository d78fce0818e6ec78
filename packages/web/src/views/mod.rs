mod tables;
pub use tables::Tables;

mod sign_up;
pub use sign_up::SignUp;
