//! Command implementations.

pub mod classify;
pub mod generate;
pub mod history;
pub mod kpis;
pub mod queue;
pub mod show;

pub use self::classify::execute_classify;
pub use self::generate::execute_generate;
pub use self::history::execute_history;
pub use self::kpis::execute_kpis;
pub use self::queue::execute_queue;
pub use self::show::execute_show;
