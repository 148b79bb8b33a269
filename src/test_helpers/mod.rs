pub mod db;
pub mod factory;
pub mod state;

pub mod prelude {
    pub use super::{db::TestDb, factory, state::TestState, test_container::TestContainer};
}
