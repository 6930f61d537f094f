pub mod model_invoker;
pub mod transcript_fetcher;
