pub mod errors;
pub mod db;
pub mod user_report;

#[cfg(test)]
mod tests;
