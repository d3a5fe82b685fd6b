pub mod launch;
pub mod search;
