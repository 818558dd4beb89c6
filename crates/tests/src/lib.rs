#[cfg(test)]
mod common;

#[cfg(test)]
mod catalog_tests;

#[cfg(test)]
mod table_tests;

#[cfg(test)]
mod workflow_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod geocoding_client_tests;
