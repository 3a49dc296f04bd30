pub mod analysis;
pub mod scanner;
pub mod task;

pub use analysis::AnalysisRefresher;
pub use scanner::{ScanStatus, Scanner, SIMULATED_BARCODES};
pub use task::SimulatedTask;
