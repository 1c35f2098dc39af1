pub mod serverless;
pub mod status;
