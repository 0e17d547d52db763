pub mod intent;
pub mod lead;
pub mod quote;
pub mod vehicle;
