pub mod bedrock;
pub mod invoker;
