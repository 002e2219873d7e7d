pub mod db;
pub mod parcel;

#[cfg(test)]
mod tests;
