
/// Execute-stage semantics observed through the full pipeline.
pub mod execute;
