
/// Entity mapping tests for the parcels table
pub mod parcel_tests;
